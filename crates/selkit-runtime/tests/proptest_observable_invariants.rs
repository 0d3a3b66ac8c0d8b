//! Property-based invariant tests for reactive cells and the selection store.
//!
//! 1. `set(v)` then `get()` returns `v`.
//! 2. `subscribe()` calls the callback exactly once with the current value.
//! 3. Every write reaches every live subscriber exactly once, in order.
//! 4. A dropped subscription never hears a later write.
//! 5. `version()` equals the number of writes.
//! 6. A fresh store always starts from the documented initial values.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use selkit_runtime::{Observable, SelectionSnapshot, SelectionState, Subscription};

// ── Helpers ─────────────────────────────────────────────────────────────

fn entries_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{1,8}", 0..6)
}

type Log = Rc<RefCell<Vec<(usize, i64)>>>;

fn subscribe_logged(cell: &Observable<i64>, id: usize, log: &Log) -> Subscription {
    let log = Rc::clone(log);
    cell.subscribe(move |v| log.borrow_mut().push((id, *v)))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. set/get
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn set_get_string(v in ".{0,24}") {
        let state = SelectionState::new();
        state.input_value().set(v.clone());
        prop_assert_eq!(state.input_value().get(), v);
    }

    #[test]
    fn set_get_flags(a in any::<bool>(), b in any::<bool>()) {
        let state = SelectionState::new();
        state.is_setting_selection_active().set(a);
        state.is_option_selection_active().set(b);
        prop_assert_eq!(state.is_setting_selection_active().get(), a);
        prop_assert_eq!(state.is_option_selection_active().get(), b);
    }

    #[test]
    fn set_get_lists(settings in entries_strategy(), options in entries_strategy()) {
        let state = SelectionState::new();
        state.filtered_settings().set(settings.clone());
        state.filtered_options().set(options.clone());
        prop_assert_eq!(state.filtered_settings().get(), settings);
        prop_assert_eq!(state.filtered_options().get(), options);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. subscribe calls back once, immediately
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn subscribe_calls_back_once(initial in any::<i64>()) {
        let cell = Observable::new(initial);
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let _sub = subscribe_logged(&cell, 0, &log);
        prop_assert_eq!(log.borrow().clone(), vec![(0, initial)]);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-5. ordered delivery, unsubscribe, versioning
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn writes_reach_live_subscribers_in_order(
        subscribers in 1usize..6,
        writes in proptest::collection::vec(any::<i64>(), 0..12),
    ) {
        let cell = Observable::new(0i64);
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let _subs: Vec<_> = (0..subscribers).map(|id| subscribe_logged(&cell, id, &log)).collect();
        log.borrow_mut().clear();

        for &w in &writes {
            cell.set(w);
        }

        let expected: Vec<(usize, i64)> = writes
            .iter()
            .flat_map(|&w| (0..subscribers).map(move |id| (id, w)))
            .collect();
        prop_assert_eq!(log.borrow().clone(), expected);
        prop_assert_eq!(cell.version(), writes.len() as u64);
    }

    #[test]
    fn dropped_subscribers_stay_silent(
        subscribers in 1usize..6,
        drop_mask in proptest::collection::vec(any::<bool>(), 6),
        writes in proptest::collection::vec(any::<i64>(), 1..8),
    ) {
        let cell = Observable::new(0i64);
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut subs: Vec<Option<Subscription>> = (0..subscribers)
            .map(|id| Some(subscribe_logged(&cell, id, &log)))
            .collect();

        for (id, slot) in subs.iter_mut().enumerate() {
            if drop_mask[id] {
                slot.take();
            }
        }
        log.borrow_mut().clear();

        for &w in &writes {
            cell.set(w);
        }

        for &(id, _) in log.borrow().iter() {
            prop_assert!(!drop_mask[id], "dropped subscriber {} was notified", id);
        }
        let live = (0..subscribers).filter(|&id| !drop_mask[id]).count();
        prop_assert_eq!(cell.subscriber_count(), live);
        prop_assert_eq!(log.borrow().len(), live * writes.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. initial values
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn fresh_store_initial_values() {
    let state = SelectionState::default();
    assert_eq!(
        state.snapshot(),
        SelectionSnapshot {
            input_value: String::new(),
            is_setting_selection_active: false,
            is_option_selection_active: false,
            filtered_settings: Vec::new(),
            filtered_options: Vec::new(),
        }
    );
}
