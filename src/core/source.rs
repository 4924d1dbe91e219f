use core::fmt::Debug;
use core::hash::Hash;

use super::error::ExploreError;
use super::kind::DeclKind;

/// Boundary to the host's type-introspection facility.
///
/// A source hands out opaque declaration handles and knows how to classify
/// each one into a [`DeclKind`], exposing ordered children along the way.
/// Implementations targeting a language without runtime generics reflection
/// synthesize the tree from whatever static type metadata is available (see
/// [`TreeSource`](crate::TreeSource) and [`ArenaSource`](crate::ArenaSource))
/// and present it through this same trait.
pub trait DeclSource: Sized {
    /// Opaque handle to a declaration node. Cheap to clone.
    ///
    /// Examples: `Rc<TreeDecl>`, `&'a ArenaDecl<'a>`.
    type Decl: Clone + Debug;

    /// Token for a concrete class, as handed to the visitor.
    type Class: Clone + Debug + Eq + Hash;

    /// Stable identity of a type variable, usable as a set key.
    ///
    /// Identity, not display name: two unrelated variables both named `T`
    /// must map to distinct keys. The engine's cycle guard relies on this.
    type VarKey: Clone + Debug + Eq + Hash;

    /// Classifies a declaration into exactly one node kind.
    ///
    /// Classification is total and mutually exclusive over the model. An
    /// absent declaration reports [`ExploreError::InvalidInput`]; a node kind
    /// the model does not cover reports [`ExploreError::UnsupportedKind`].
    ///
    /// Bound lists in the returned kind are never empty: a variable or
    /// wildcard with no explicit upper bound reports exactly one bound, the
    /// source's top type.
    fn classify(&self, decl: &Self::Decl) -> Result<DeclKind<Self>, ExploreError>;

    /// Whether `decl` is the universal top type (the implicit upper bound of
    /// unbounded variables and wildcards).
    fn is_top_type(&self, decl: &Self::Decl) -> bool;
}
