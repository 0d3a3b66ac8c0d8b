#![forbid(unsafe_code)]

//! Shared, version-tracked values with ordered change notification.
//!
//! # Design
//!
//! [`Observable<T>`] keeps its value, a write counter and the subscriber list
//! behind one `Rc<RefCell<..>>`. Each subscriber entry holds a `Weak` pointer
//! to its callback; the strong pointer lives in the [`Subscription`] returned
//! by [`subscribe()`](Observable::subscribe). Dropping the subscription kills
//! the callback and detaches its entry.
//!
//! A notification round works on a snapshot of strong callback handles taken
//! after the write, with every borrow released. Callbacks are therefore free
//! to read the cell, write it again, subscribe, or drop subscriptions.
//!
//! A write made while a round is running does not start a nested round. The
//! value is stored and its round is queued; the outermost writer drains the
//! queue in FIFO order. Every subscriber therefore sees writes in the order
//! they happened, and its last delivered value equals the cell's value.
//!
//! # Failure Modes
//!
//! - **Write from inside [`with()`](Observable::with)**: the closure holds a
//!   shared borrow, so `set()`/`update()` from it panics with a `RefCell`
//!   borrow error.
//! - **Subscription dropped while the cell is borrowed**: the entry cannot be
//!   detached right away. Its callback is already dead, so it is skipped and
//!   pruned at the next notification.

use std::any::Any;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = dyn Fn(&T);

struct Subscriber<T> {
    id: u64,
    callback: Weak<Callback<T>>,
}

struct ObservableInner<T> {
    /// Diagnostic name, reported in trace events.
    name: Option<&'static str>,
    value: T,
    /// Number of writes since construction.
    version: u64,
    next_id: u64,
    /// Registration order is notification order.
    subscribers: Vec<Subscriber<T>>,
    /// Set while a writer is draining `pending`.
    notifying: bool,
    /// Rounds still to deliver: `(value, version)` per write.
    pending: VecDeque<(T, u64)>,
}

/// Clears the round state when draining ends, including on unwind.
struct RoundGuard<'a, T>(&'a RefCell<ObservableInner<T>>);

impl<T> Drop for RoundGuard<'_, T> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.0.try_borrow_mut() {
            inner.notifying = false;
            inner.pending.clear();
        }
    }
}

/// A shared, mutable value that notifies subscribers on every write.
///
/// Cloning an `Observable` creates a new handle to the **same** cell.
///
/// # Invariants
///
/// 1. The value is always present; it is set at construction.
/// 2. `version` increments by exactly 1 per `set()` or `update()`.
/// 3. Every write notifies, even when the new value equals the old one.
/// 4. Subscribers are notified in registration order.
pub struct Observable<T> {
    inner: Rc<RefCell<ObservableInner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("name", &inner.name)
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Default + Clone + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + 'static> Observable<T> {
    /// Create an anonymous cell holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self::with_name(None, value)
    }

    /// Create a cell with a diagnostic name.
    #[must_use]
    pub fn named(name: &'static str, value: T) -> Self {
        Self::with_name(Some(name), value)
    }

    fn with_name(name: Option<&'static str>, value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObservableInner {
                name,
                value,
                version: 0,
                next_id: 0,
                subscribers: Vec::new(),
                notifying: false,
                pending: VecDeque::new(),
            })),
        }
    }

    /// The diagnostic name given at construction, if any.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        self.inner.borrow().name
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Access the current value by reference without cloning.
    ///
    /// # Panics
    ///
    /// Panics if the closure writes to the same cell.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let inner = self.inner.borrow();
        f(&inner.value)
    }

    /// Replace the value and notify every subscriber.
    ///
    /// Called from inside a callback, the round is queued behind the one in
    /// progress.
    pub fn set(&self, value: T) {
        self.write(|slot| *slot = value);
    }

    /// Mutate the value in place and notify every subscriber.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.write(f);
    }

    fn write(&self, f: impl FnOnce(&mut T)) {
        let drain = {
            let mut inner = self.inner.borrow_mut();
            f(&mut inner.value);
            inner.version += 1;
            let round = (inner.value.clone(), inner.version);
            inner.pending.push_back(round);
            !std::mem::replace(&mut inner.notifying, true)
        };
        if drain {
            self.drain();
        }
    }

    /// Register a callback.
    ///
    /// The callback runs once with the current value before this returns,
    /// then once per subsequent write until the returned [`Subscription`] is
    /// dropped.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let callback: Rc<Callback<T>> = Rc::new(callback);
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push(Subscriber {
                id,
                callback: Rc::downgrade(&callback),
            });
            id
        };

        let current = self.get();
        callback(&current);

        let weak_inner = Rc::downgrade(&self.inner);
        Subscription {
            callback: Some(Box::new(callback)),
            detach: Some(Box::new(move || {
                if let Some(cell) = weak_inner.upgrade()
                    && let Ok(mut inner) = cell.try_borrow_mut()
                {
                    inner.subscribers.retain(|s| s.id != id);
                }
            })),
        }
    }

    /// Number of writes since construction.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|s| s.callback.strong_count() > 0)
            .count()
    }

    fn drain(&self) {
        let _round = RoundGuard(&self.inner);
        loop {
            let (value, version, name, snapshot) = {
                let mut inner = self.inner.borrow_mut();
                let Some((value, version)) = inner.pending.pop_front() else {
                    break;
                };
                inner.subscribers.retain(|s| s.callback.strong_count() > 0);
                let snapshot: Vec<Rc<Callback<T>>> = inner
                    .subscribers
                    .iter()
                    .filter_map(|s| s.callback.upgrade())
                    .collect();
                (value, version, inner.name, snapshot)
            };

            tracing::trace!(
                cell = name.unwrap_or("<anonymous>"),
                version,
                subscribers = snapshot.len(),
                "observable.notify"
            );

            for callback in &snapshot {
                callback(&value);
            }
        }
    }
}

/// RAII handle for a registered callback.
///
/// Dropping it (or calling [`unsubscribe()`](Subscription::unsubscribe))
/// stops all future notifications to the callback. A round that is already
/// in progress still delivers to it.
#[must_use = "dropping a Subscription unsubscribes its callback"]
pub struct Subscription {
    callback: Option<Box<dyn Any>>,
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Deregister the callback now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.callback.take();
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.callback.is_some())
            .finish()
    }
}
