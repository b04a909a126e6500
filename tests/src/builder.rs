#[cfg(test)]
use std::cell::{Cell, RefCell};

#[cfg(test)]
use defer_scope::prelude::*;

#[cfg(test)]
struct Session<'a> {
    name: &'static str,
    log: &'a RefCell<Vec<String>>,
}

#[cfg(test)]
fn open_session<'a>(
    name: &'static str,
    log: &'a RefCell<Vec<String>>,
) -> (Session<'a>, Defer<impl FnOnce() + 'a>) {
    log.borrow_mut().push(format!("open {name}"));
    let close = DEFER + move || log.borrow_mut().push(format!("close {name}"));
    (Session { name, log }, close)
}

#[test]
fn test_builder_guard_returned_from_helper() {
    let log = RefCell::new(Vec::new());
    {
        let (session, _close) = open_session("db", &log);
        session.log.borrow_mut().push(format!("use {}", session.name));
    }
    assert_eq!(*log.borrow(), ["open db", "use db", "close db"]);
}

#[test]
fn test_builder_matches_macro_semantics() {
    let count = Cell::new(0);
    {
        let _a = DEFER + || count.set(count.get() * 10);
        let _b = DeferBuilder::<DefaultPolicy>::new() + || count.set(count.get() + 1);
    }
    assert_eq!(count.get(), 10);
}

#[test]
fn test_builder_with_swallow_policy() {
    let ran = Cell::new(false);
    {
        let _guard = DeferBuilder::<Swallow>::new() + || {
            ran.set(true);
            panic!("ignored");
        };
    }
    assert!(ran.get());
}

#[test]
fn test_guard_stored_in_struct_field() {
    let count = Cell::new(0);

    struct Holder<F: FnOnce()> {
        _close: Defer<F>,
    }

    {
        let holder = Holder {
            _close: (|| count.set(count.get() + 1)).into(),
        };
        assert_eq!(count.get(), 0);
        drop(holder);
    }
    assert_eq!(count.get(), 1);
}
