use std::cell::RefCell;

use defer_scope::prelude::*;
use tracing::info;

struct Handle {
    name: &'static str,
}

fn open(name: &'static str) -> Handle {
    info!(name, "open");
    Handle { name }
}

fn close(handle: &Handle) {
    info!(name = handle.name, "close");
}

#[scope_exit(info!("copy finished"))]
fn copy(fail: bool) -> Result<usize, String> {
    let a = open("a");
    defer!(close(&a));
    let b = open("b");
    defer!(close(&b));

    if fail {
        return Err("copy interrupted".into());
    }

    Ok(a.name.len() + b.name.len())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match copy(false) {
        Ok(n) => info!(n, "copied"),
        Err(e) => info!(%e, "copy failed"),
    }
    match copy(true) {
        Ok(n) => info!(n, "copied"),
        Err(e) => info!(%e, "copy failed"),
    }

    let events = RefCell::new(Vec::new());
    {
        let mut batch = guard(Vec::new(), |batch: Vec<&str>| {
            info!(len = batch.len(), "flushing batch");
            events.borrow_mut().extend(batch);
        });
        batch.push("first");
        batch.push("second");
    }
    info!(events = ?events.borrow(), "done");

    {
        defer_with!(Swallow, panic!("cleanup failed"));
        info!("leaving scope with a failing cleanup");
    }
    info!("still running");
}
