use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::core::{DeclSource, ExploreError};
use crate::explore::{DeclVisitor, ImplicitBounds, explore_with_policy};

/// Collects every concrete class a declaration mentions.
///
/// Each node's set is the union of its children's sets, plus the class itself
/// for class-bearing nodes. Type variables and wildcards contribute only what
/// their explored bounds contribute, so under
/// [`ImplicitBounds::Ignore`](crate::ImplicitBounds::Ignore) an unbounded
/// variable adds nothing and under `Process` it adds the top type.
#[derive(Copy, Clone, Debug, Default)]
pub struct MentionedClasses;

fn union<T: Eq + core::hash::Hash>(mut acc: HashSet<T>, parts: Vec<HashSet<T>>) -> HashSet<T> {
    for part in parts {
        acc.extend(part);
    }
    acc
}

impl<S: DeclSource> DeclVisitor<S> for MentionedClasses {
    type Output = HashSet<S::Class>;

    fn visit_void(&mut self, _source: &S) -> Self::Output {
        HashSet::new()
    }

    fn visit_simple_class(&mut self, _source: &S, class: &S::Class) -> Self::Output {
        let mut set = HashSet::new();
        set.insert(class.clone());
        set
    }

    fn visit_enum_class(&mut self, source: &S, class: &S::Class) -> Self::Output {
        self.visit_simple_class(source, class)
    }

    fn visit_array_class(
        &mut self,
        _source: &S,
        _class: &S::Class,
        element: Self::Output,
    ) -> Self::Output {
        // The array class itself is not counted, only its element type.
        element
    }

    fn visit_generic_array(
        &mut self,
        _source: &S,
        _decl: &S::Decl,
        element: Self::Output,
    ) -> Self::Output {
        element
    }

    fn visit_parameterized(
        &mut self,
        _source: &S,
        _decl: &S::Decl,
        raw: Self::Output,
        args: Vec<Self::Output>,
    ) -> Self::Output {
        union(raw, args)
    }

    fn visit_type_variable(
        &mut self,
        _source: &S,
        _decl: &S::Decl,
        bounds: Vec<Self::Output>,
    ) -> Self::Output {
        union(HashSet::new(), bounds)
    }

    fn visit_wildcard(
        &mut self,
        _source: &S,
        _decl: &S::Decl,
        upper: Vec<Self::Output>,
        lower: Vec<Self::Output>,
    ) -> Self::Output {
        union(union(HashSet::new(), upper), lower)
    }
}

/// The set of classes mentioned anywhere in `decl`, with implicit top-type
/// bounds elided.
pub fn mentioned_classes<S: DeclSource>(
    source: &S,
    decl: &S::Decl,
) -> Result<HashSet<S::Class>, ExploreError> {
    mentioned_classes_with_policy(source, decl, ImplicitBounds::default())
}

/// Like [`mentioned_classes`], with an explicit implicit-bounds policy.
pub fn mentioned_classes_with_policy<S: DeclSource>(
    source: &S,
    decl: &S::Decl,
    policy: ImplicitBounds,
) -> Result<HashSet<S::Class>, ExploreError> {
    explore_with_policy(source, decl, &mut MentionedClasses, policy)
}
