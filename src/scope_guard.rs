use std::{
    marker::PhantomData,
    mem::ManuallyDrop,
    ops::{Deref, DerefMut},
};

use crate::policy::{DefaultPolicy, Policy};

/// A guard that owns a value and hands it to `action` when dropped.
///
/// The rest of the scope reaches the value through `Deref`/`DerefMut`, so the
/// body and the cleanup code can share mutable state without interior
/// mutability.
pub struct ScopeGuard<T, F: FnOnce(T), P: Policy = DefaultPolicy> {
    inner: ManuallyDrop<(T, F)>,
    marker: PhantomData<P>,
}

pub fn guard<T, F: FnOnce(T)>(value: T, action: F) -> ScopeGuard<T, F> {
    ScopeGuard::with_policy(value, action)
}

impl<T, F: FnOnce(T), P: Policy> ScopeGuard<T, F, P> {
    #[inline]
    pub const fn with_policy(value: T, action: F) -> Self {
        Self {
            inner: ManuallyDrop::new((value, action)),
            marker: PhantomData,
        }
    }
}

impl<T, F: FnOnce(T), P: Policy> Deref for ScopeGuard<T, F, P> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.inner.0
    }
}

impl<T, F: FnOnce(T), P: Policy> DerefMut for ScopeGuard<T, F, P> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner.0
    }
}

impl<T, F: FnOnce(T), P: Policy> Drop for ScopeGuard<T, F, P> {
    fn drop(&mut self) {
        // SAFETY: taken once, `inner` is dead afterwards.
        let (value, action) = unsafe { ManuallyDrop::take(&mut self.inner) };
        P::invoke(move || action(value));
    }
}

impl<T: std::fmt::Debug, F: FnOnce(T), P: Policy> std::fmt::Debug for ScopeGuard<T, F, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopeGuard")
            .field("value", &self.inner.0)
            .finish_non_exhaustive()
    }
}
