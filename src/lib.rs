//! Run a block of code when the enclosing scope exits.
//!
//! ```
//! use std::cell::Cell;
//! use defer_scope::defer;
//!
//! fn bump(value: &Cell<i32>) -> i32 {
//!     defer!(value.set(value.get() + 1));
//!     value.get()
//! }
//!
//! let value = Cell::new(1);
//! assert_eq!(bump(&value), 1);
//! assert_eq!(value.get(), 2);
//! ```

pub mod builder;
pub mod defer;
pub mod error;
pub mod policy;
pub mod scope_guard;

pub use error::Error;
pub use macros::scope_exit;

pub mod prelude {
    pub use crate::builder::{DEFER, DeferBuilder};
    pub use crate::defer::Defer;
    pub use crate::error::Error;
    pub use crate::policy::{DefaultPolicy, NoUnwind, Policy, Swallow, Unwind};
    pub use crate::scope_guard::{ScopeGuard, guard};
    pub use crate::{defer, defer_with};
    pub use macros::scope_exit;
}
