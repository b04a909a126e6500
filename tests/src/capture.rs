#[cfg(test)]
use std::cell::{Cell, RefCell};

#[cfg(test)]
use defer_scope::prelude::*;

#[cfg(test)]
fn increment_after_return(value: &Cell<i32>) -> i32 {
    defer!(value.set(value.get() + 1));
    value.get()
}

#[test]
fn test_return_value_computed_before_deferred_mutation() {
    let value = Cell::new(1);
    assert_eq!(increment_after_return(&value), 1);
    assert_eq!(value.get(), 2);
}

#[cfg(test)]
fn increment_out_param(out: &mut i32) -> i32 {
    let value = guard(1, |v| *out = v + 1);
    *value
}

#[test]
fn test_out_parameter_sees_deferred_mutation() {
    let mut out = 0;
    assert_eq!(increment_out_param(&mut out), 1);
    assert_eq!(out, 2);
}

#[test]
fn test_action_sees_state_at_scope_end() {
    let seen = Cell::new(0);
    let state = Cell::new(0);
    {
        defer!(seen.set(state.get()));
        state.set(10);
        state.set(20);
    }
    assert_eq!(seen.get(), 20);
}

#[test]
fn test_move_capture_snapshots_at_registration() {
    let log = RefCell::new(Vec::new());
    {
        let mut counter = 1;
        let log = &log;
        let _guard = DEFER + move || log.borrow_mut().push(counter);
        counter += 1;
        log.borrow_mut().push(counter);
    }
    assert_eq!(*log.borrow(), [2, 1]);
}

#[test]
fn test_scope_body_mutates_value_guard() {
    let total;
    {
        let mut sum = guard(0, |_| {});
        for n in 1..=4 {
            *sum += n;
        }
        total = *sum;
    }
    assert_eq!(total, 10);
}
