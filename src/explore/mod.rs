//! The traversal engine and its two caller-facing contracts.
//!
//! - [`explore`] / [`explore_with_policy`]: drive a visitor over a
//!   declaration, depth-first, children before parents
//! - [`DeclVisitor`]: one operation per node kind, one result type
//! - [`ImplicitBounds`]: whether implicit top-type upper bounds surface to
//!   the visitor or are elided

mod engine;
mod policy;
mod visitor;

pub use engine::{explore, explore_with_policy};
pub use policy::ImplicitBounds;
pub use visitor::DeclVisitor;
