#![forbid(unsafe_code)]

//! Reactive cells for selkit.
//!
//! This module provides change-notification primitives for UI state:
//!
//! - [`Observable`]: A shared, version-tracked value wrapper with change
//!   notification via subscriber callbacks.
//! - [`Subscription`]: RAII guard that unsubscribes on drop.
//! - [`Computed`]: A lazily-evaluated, memoized value derived from one or
//!   more `Observable` dependencies.
//!
//! # Architecture
//!
//! `Observable<T>` uses `Rc<RefCell<..>>` for single-threaded shared ownership.
//! Subscribers are stored as `Weak` callbacks; the owning `Rc` lives in the
//! [`Subscription`] handle. Dead entries are pruned lazily during notification.
//!
//! `Computed<T>` subscribes to its sources via `Observable::subscribe()`,
//! marking itself dirty on every notification. Recomputation is deferred
//! until `get()`.
//!
//! # Invariants
//!
//! 1. Version increments exactly once per write (`set` or `update`).
//! 2. Subscribers are notified in registration order.
//! 3. Writes are never deduplicated: writing an equal value still notifies.
//! 4. `subscribe()` invokes the new callback once with the current value
//!    before returning.
//! 5. The subscriber list is snapshotted before a notification round. A
//!    callback unsubscribed mid-round still runs in that round; a callback
//!    subscribed mid-round does not.
//! 6. No `RefCell` borrow is held while a callback runs.
//! 7. A write made during a round is queued and delivered after that round,
//!    so each subscriber's last delivered value is the cell's value.
//! 8. `Computed::get()` never returns a stale value.

pub mod computed;
pub mod observable;

pub use computed::Computed;
pub use observable::{Observable, Subscription};
