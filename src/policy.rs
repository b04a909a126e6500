//! What happens when a deferred action panics.
//!
//! Every guard carries a zero-sized policy marker. The marker decides whether a
//! panic inside the action aborts the process ([`NoUnwind`]), propagates out of
//! the guard's `drop` ([`Unwind`]) or is logged and discarded ([`Swallow`]).
//!
//! [`DefaultPolicy`] is [`NoUnwind`] unless the `unwind` feature is enabled.
//!
//! A panic inside the action while the thread is already unwinding is a double
//! fault and aborts the process under every policy. [`Swallow`] only catches
//! panics when the thread is not unwinding.

use std::panic::{self, AssertUnwindSafe};

use crate::error::Error;

pub(crate) mod private {
    pub trait Sealed {}
}

pub trait Policy: private::Sealed {
    fn invoke<F: FnOnce()>(action: F);
}

/// Deferred actions must not panic. A panic is logged and the process aborts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUnwind;

/// A panic in the deferred action unwinds out of the guard.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unwind;

/// A panic in the deferred action is caught, logged and dropped.
///
/// While the thread is already unwinding, this behaves like [`NoUnwind`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Swallow;

#[cfg(not(feature = "unwind"))]
pub type DefaultPolicy = NoUnwind;

#[cfg(feature = "unwind")]
pub type DefaultPolicy = Unwind;

impl private::Sealed for NoUnwind {}
impl private::Sealed for Unwind {}
impl private::Sealed for Swallow {}

struct AbortOnUnwind;

impl Drop for AbortOnUnwind {
    fn drop(&mut self) {
        tracing::error!("deferred action panicked under the no-unwind contract, aborting");
        std::process::abort();
    }
}

impl Policy for NoUnwind {
    #[inline]
    fn invoke<F: FnOnce()>(action: F) {
        let sentinel = AbortOnUnwind;
        action();
        std::mem::forget(sentinel);
    }
}

impl Policy for Unwind {
    #[inline]
    fn invoke<F: FnOnce()>(action: F) {
        action();
    }
}

impl Policy for Swallow {
    #[inline]
    fn invoke<F: FnOnce()>(action: F) {
        if std::thread::panicking() {
            return NoUnwind::invoke(action);
        }
        if let Err(error) = catch(action) {
            tracing::error!(%error, "discarding failed deferred action");
        }
    }
}

/// Runs `action`, turning a panic into an [`Error`].
pub fn catch<F: FnOnce()>(action: F) -> Result<(), Error> {
    panic::catch_unwind(AssertUnwindSafe(action)).map_err(Error::from_panic)
}
