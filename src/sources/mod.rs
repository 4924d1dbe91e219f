//! Ready-made declaration sources.
//!
//! Both sources synthesize declaration trees programmatically and present
//! them through [`DeclSource`](crate::DeclSource):
//!
//! - [`TreeSource`]: reference-counted nodes, no lifetime plumbing
//! - [`ArenaSource`]: bump-allocated nodes with `Copy` handles, for
//!   allocation-heavy callers
//!
//! They share a constructor vocabulary (`class`, `generic`, `type_var`,
//! `wildcard_extends`, ...) so the [`decl!`](crate::decl) macro works with
//! either.

mod arena_source;
mod tree_source;

pub use arena_source::{ArenaDecl, ArenaSource};
pub use tree_source::{TreeDecl, TreeSource};
