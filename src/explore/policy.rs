use alloc::vec::Vec;

use crate::core::DeclSource;

/// Policy for implicit top-type upper bounds.
///
/// A type variable or wildcard with no declared upper bound implicitly has
/// one: the universal top type. This policy decides whether that bound is
/// surfaced to the visitor or elided. Note that an explicit top-type bound
/// cannot be distinguished from an implicit one, so it is subject to the
/// policy as well.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImplicitBounds {
    /// Elide implicit top-type bounds: the visitor is never invoked for the
    /// lone top-type bound of an unbounded variable or wildcard, and the
    /// bound-result list it receives is empty in that case.
    #[default]
    Ignore,

    /// Surface implicit top-type bounds: the lone top-type bound is explored
    /// and reaches the visitor exactly as an explicit bound would.
    Process,
}

impl ImplicitBounds {
    /// Filters an upper-bound list just before it is explored.
    ///
    /// A pure function of the list: under [`Ignore`](ImplicitBounds::Ignore),
    /// a single bound that is the source's top type becomes an empty list;
    /// any other configuration passes through unchanged. Never applied to
    /// wildcard lower bounds, which are only ever explicit.
    pub fn filter<S: DeclSource>(self, source: &S, bounds: Vec<S::Decl>) -> Vec<S::Decl> {
        match self {
            ImplicitBounds::Process => bounds,
            ImplicitBounds::Ignore => match bounds.as_slice() {
                [only] if source.is_top_type(only) => Vec::new(),
                _ => bounds,
            },
        }
    }
}
