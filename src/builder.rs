//! Two-step guard construction: `DEFER + || { ... }`.
//!
//! Useful where a macro is unwelcome, e.g. when the guard has to be stored in
//! a struct field or returned from a helper.

use std::{marker::PhantomData, ops::Add};

use crate::{
    defer::Defer,
    policy::{DefaultPolicy, Policy},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct DeferBuilder<P: Policy = DefaultPolicy>(PhantomData<P>);

pub const DEFER: DeferBuilder = DeferBuilder::new();

impl<P: Policy> DeferBuilder<P> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<F: FnOnce(), P: Policy> Add<F> for DeferBuilder<P> {
    type Output = Defer<F, P>;

    #[inline]
    fn add(self, action: F) -> Defer<F, P> {
        Defer::with_policy(action)
    }
}
