//! Core contracts of the exploration engine.
//!
//! - [`DeclSource`]: boundary to the host's type-introspection facility
//! - [`DeclKind`]: the closed set of node kinds a declaration classifies into
//! - [`ExploreError`]: the two ways a traversal can fail
//!
//! See the [`crate::explore`] module for the traversal itself.

mod error;
mod kind;
mod source;

pub use error::ExploreError;
pub use kind::DeclKind;
pub use source::DeclSource;
