#![forbid(unsafe_code)]

//! Runtime state for selkit: reactive cells and the selection store.

pub mod reactive;
pub mod selection;

pub use reactive::{Computed, Observable, Subscription};
pub use selection::{SelectionCell, SelectionSnapshot, SelectionState};
