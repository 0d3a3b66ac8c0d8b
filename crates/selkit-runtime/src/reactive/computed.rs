#![forbid(unsafe_code)]

//! Lazy derived values that track [`Observable`] dependencies.
//!
//! # Design
//!
//! [`Computed<T>`] wraps a compute function and its cached result in shared,
//! reference-counted storage. Each source notification marks the cache dirty;
//! the next read recomputes. Sources never deduplicate writes, so writing an
//! equal value to a source still invalidates.
//!
//! The dirty flag lives in its own `Rc<Cell<bool>>`, shared with the source
//! callbacks. Marking dirty never touches the `RefCell` holding the cache, so
//! a source may be written while the cache is borrowed (e.g. from inside
//! [`with()`](Computed::with)).
//!
//! # Invariants
//!
//! 1. `get()` always reflects the current state of every dependency.
//! 2. The compute function runs at most once per invalidation.
//! 3. Reading a clean value is O(1) and does not call the compute function.
//! 4. Version increments by exactly 1 per recomputation.
//!
//! # Failure Modes
//!
//! - **Compute function panics**: the previous cached value is kept and the
//!   dirty flag stays set, so the next read retries.
//! - **Dependency dropped**: the subscription goes inert and the cached value
//!   is kept until [`invalidate()`](Computed::invalidate) is called.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::observable::{Observable, Subscription};

struct ComputedInner<T> {
    compute: Box<dyn Fn() -> T>,
    /// `None` until the first read.
    cached: Option<T>,
    dirty: Rc<Cell<bool>>,
    version: u64,
    /// Keeps the dependency callbacks alive; never read.
    _subscriptions: Vec<Subscription>,
}

impl<T> ComputedInner<T> {
    fn refresh(&mut self) -> &T {
        if self.dirty.get() || self.cached.is_none() {
            let value = (self.compute)();
            self.dirty.set(false);
            self.version += 1;
            return self.cached.insert(value);
        }
        self.cached.get_or_insert_with(|| (self.compute)())
    }
}

/// A lazily-evaluated, memoized value derived from one or more [`Observable`]
/// dependencies.
///
/// Cloning a `Computed` creates a new handle to the **same** inner state.
pub struct Computed<T> {
    inner: Rc<RefCell<ComputedInner<T>>>,
    dirty: Rc<Cell<bool>>,
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            dirty: Rc::clone(&self.dirty),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Computed")
            .field("cached", &inner.cached)
            .field("dirty", &self.dirty.get())
            .field("version", &inner.version)
            .finish()
    }
}

impl<T: Clone + 'static> Computed<T> {
    fn build(compute: Box<dyn Fn() -> T>) -> Self {
        let dirty = Rc::new(Cell::new(true));
        Self {
            inner: Rc::new(RefCell::new(ComputedInner {
                compute,
                cached: None,
                dirty: Rc::clone(&dirty),
                version: 0,
                _subscriptions: Vec::new(),
            })),
            dirty,
        }
    }

    /// Subscribe to `source` so every notification marks this value dirty.
    fn track<S: Clone + 'static>(self, source: &Observable<S>) -> Self {
        let dirty = Rc::clone(&self.dirty);
        let sub = source.subscribe(move |_| dirty.set(true));
        self.inner.borrow_mut()._subscriptions.push(sub);
        self
    }

    /// Derive a value from a single cell.
    pub fn from_observable<S: Clone + 'static>(
        source: &Observable<S>,
        map: impl Fn(&S) -> T + 'static,
    ) -> Self {
        let s = source.clone();
        Self::build(Box::new(move || s.with(|v| map(v)))).track(source)
    }

    /// Derive a value from two cells.
    pub fn from2<S1, S2>(
        s1: &Observable<S1>,
        s2: &Observable<S2>,
        map: impl Fn(&S1, &S2) -> T + 'static,
    ) -> Self
    where
        S1: Clone + 'static,
        S2: Clone + 'static,
    {
        let (a, b) = (s1.clone(), s2.clone());
        Self::build(Box::new(move || a.with(|v1| b.with(|v2| map(v1, v2)))))
            .track(s1)
            .track(s2)
    }

    /// Derive a value from three cells.
    pub fn from3<S1, S2, S3>(
        s1: &Observable<S1>,
        s2: &Observable<S2>,
        s3: &Observable<S3>,
        map: impl Fn(&S1, &S2, &S3) -> T + 'static,
    ) -> Self
    where
        S1: Clone + 'static,
        S2: Clone + 'static,
        S3: Clone + 'static,
    {
        let (a, b, c) = (s1.clone(), s2.clone(), s3.clone());
        Self::build(Box::new(move || {
            a.with(|v1| b.with(|v2| c.with(|v3| map(v1, v2, v3))))
        }))
        .track(s1)
        .track(s2)
        .track(s3)
    }

    /// Low-level constructor: the caller owns dependency wiring.
    ///
    /// The subscriptions are kept alive but cannot reach the dirty flag;
    /// call [`invalidate()`](Self::invalidate) when a dependency changes.
    pub fn from_fn(compute: impl Fn() -> T + 'static, subscriptions: Vec<Subscription>) -> Self {
        let computed = Self::build(Box::new(compute));
        computed.inner.borrow_mut()._subscriptions = subscriptions;
        computed
    }

    /// Current value, recomputed first if any dependency changed.
    #[must_use]
    pub fn get(&self) -> T {
        let mut inner = self.inner.borrow_mut();
        inner.refresh().clone()
    }

    /// Access the current value by reference without cloning.
    ///
    /// # Panics
    ///
    /// Panics if the closure reads the same `Computed` through `get()` or
    /// `with()` (re-entrant borrow). Writing to a source from the closure is
    /// fine; it marks the value dirty for the next read.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let mut inner = self.inner.borrow_mut();
        f(inner.refresh())
    }

    /// Whether the cached value is stale.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Drop the cached value's freshness; the next read recomputes.
    pub fn invalidate(&self) {
        self.dirty.set(true);
    }

    /// Number of recomputations so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }
}
