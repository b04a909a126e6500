use std::{marker::PhantomData, mem::ManuallyDrop};

use crate::policy::{DefaultPolicy, Policy};

/// Runs the stored action exactly once, when dropped.
///
/// Guards declared in the same scope are dropped in reverse order, so the last
/// registered action runs first. `Defer` is move-only: moving it hands the
/// pending action to the new owner, and there is no way to copy or dismiss it.
///
/// ```compile_fail,E0599
/// let guard = defer_scope::defer::Defer::<_, defer_scope::policy::NoUnwind>::with_policy(|| {});
/// let copy = guard.clone();
/// ```
#[must_use = "the action runs as soon as the guard is dropped"]
pub struct Defer<F: FnOnce(), P: Policy = DefaultPolicy> {
    action: ManuallyDrop<F>,
    marker: PhantomData<P>,
}

impl<F: FnOnce()> Defer<F> {
    #[inline]
    pub const fn new(action: F) -> Self {
        Self::with_policy(action)
    }
}

impl<F: FnOnce(), P: Policy> Defer<F, P> {
    #[inline]
    pub const fn with_policy(action: F) -> Self {
        Self {
            action: ManuallyDrop::new(action),
            marker: PhantomData,
        }
    }
}

impl<F: FnOnce()> From<F> for Defer<F> {
    fn from(action: F) -> Self {
        Self::new(action)
    }
}

impl<F: FnOnce(), P: Policy> Drop for Defer<F, P> {
    #[inline]
    fn drop(&mut self) {
        // SAFETY: `action` is never touched again after being taken here.
        let action = unsafe { ManuallyDrop::take(&mut self.action) };
        P::invoke(action);
    }
}

impl<F: FnOnce(), P: Policy> std::fmt::Debug for Defer<F, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Defer")
            .field("policy", &std::any::type_name::<P>())
            .finish_non_exhaustive()
    }
}

/// Registers the given statements to run when the enclosing scope exits.
///
/// Each expansion binds its guard to a hygienic local, so any number of
/// `defer!` can share a scope. The named form `defer!(name, ...)` binds the
/// guard to `name` instead.
///
/// ```
/// use std::cell::RefCell;
/// use defer_scope::defer;
///
/// let log = RefCell::new(Vec::new());
/// {
///     defer!(log.borrow_mut().push("second"));
///     defer! { log.borrow_mut().push("first"); }
/// }
/// assert_eq!(*log.borrow(), ["first", "second"]);
/// ```
#[macro_export]
macro_rules! defer {
    ($id:ident, $($body:tt)*) => {
        let $id = $crate::defer::Defer::new(|| { $($body)* });
        let _ = &$id;
    };
    ($($body:tt)*) => {
        let _guard = $crate::defer::Defer::new(|| { $($body)* });
    };
}

/// [`defer!`] with an explicit [`Policy`](crate::policy::Policy).
#[macro_export]
macro_rules! defer_with {
    ($policy:ty, $($body:tt)*) => {
        let _guard = $crate::defer::Defer::<_, $policy>::with_policy(|| { $($body)* });
    };
}
