//! Recursive exploration of generic type declarations.
//!
//! This crate decomposes a generic type declaration (think
//! `Map<List<String>, Custom>` or `T extends Comparable<T>`) into its
//! structural nodes and drives a pluggable [`DeclVisitor`] over them,
//! bottom-up: the visitor operation for a node receives the already-computed
//! results of the node's children, and the value produced for the root is
//! handed back to the caller.
//!
//! Rust has no runtime generics reflection, so declarations are synthesized
//! trees presented through the [`DeclSource`] boundary. Two sources ship with
//! the crate:
//!
//! - [`TreeSource`]: reference-counted nodes, no setup required
//! - [`ArenaSource`]: bump-allocated nodes with `Copy` handles
//!
//! # Example
//!
//! Collect every concrete class mentioned in `Map<List<String>, Custom>`:
//!
//! ```
//! use generic_explorer::{decl, mentioned_classes, TreeSource};
//!
//! let s = TreeSource::new();
//! let ty = decl!(s, "Map"["List"["String"], "Custom"]);
//!
//! let classes = mentioned_classes(&s, &ty).unwrap();
//! assert_eq!(classes.len(), 4);
//! assert!(classes.contains(&s.class("List")));
//! ```
//!
//! # Recursive bounds
//!
//! Type-variable bounds may refer back to the variable itself. The engine
//! keeps a per-call set of resolved variable identities, so exploration
//! always terminates; repeat occurrences of a variable see an empty bound
//! list.
//!
//! ```
//! use generic_explorer::{decl, mentioned_classes, TreeSource};
//!
//! let s = TreeSource::new();
//! let t = s.type_var("T");
//! s.set_bounds(&t, [decl!(s, "Comparable"[t.clone()])]);
//!
//! let classes = mentioned_classes(&s, &t).unwrap();
//! assert_eq!(classes.len(), 1);
//! assert!(classes.contains(&s.class("Comparable")));
//! ```
//!
//! # Concurrency
//!
//! One [`explore`] call owns its cycle-guard state exclusively; independent
//! calls may run on separate threads without coordination as long as each
//! supplies its own visitor (the engine makes no thread-safety guarantee
//! about a visitor's own state).

#![no_std]
extern crate alloc;

pub mod algo;
pub mod core;
pub mod explore;
pub mod sources;

mod macros;

pub use crate::core::{DeclKind, DeclSource, ExploreError};
pub use algo::{MentionedClasses, mentioned_classes, mentioned_classes_with_policy};
pub use explore::{DeclVisitor, ImplicitBounds, explore, explore_with_policy};
pub use sources::{ArenaDecl, ArenaSource, TreeDecl, TreeSource};
