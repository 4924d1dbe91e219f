use alloc::vec::Vec;

use hashbrown::HashSet;
use tracing::trace;

use crate::core::{DeclKind, DeclSource, ExploreError};

use super::policy::ImplicitBounds;
use super::visitor::DeclVisitor;

/// Explores `decl` depth-first and returns the visitor's value for it.
///
/// Children are fully built before their parent's visit method runs, left to
/// right in declaration order. Implicit top-type bounds are elided
/// ([`ImplicitBounds::Ignore`]); use [`explore_with_policy`] to surface them.
pub fn explore<S, V>(source: &S, decl: &S::Decl, visitor: &mut V) -> Result<V::Output, ExploreError>
where
    S: DeclSource,
    V: DeclVisitor<S>,
{
    explore_with_policy(source, decl, visitor, ImplicitBounds::default())
}

/// Like [`explore`], with an explicit implicit-bounds policy.
pub fn explore_with_policy<S, V>(
    source: &S,
    decl: &S::Decl,
    visitor: &mut V,
    policy: ImplicitBounds,
) -> Result<V::Output, ExploreError>
where
    S: DeclSource,
    V: DeclVisitor<S>,
{
    trace!(?policy, "exploring type declaration");
    let mut explorer = Explorer { source, visitor, policy, resolved_vars: HashSet::new() };
    explorer.explore_decl(decl)
}

/// State for one `explore` call. Fresh per call, so repeated explorations of
/// the same declaration are independent.
struct Explorer<'a, S: DeclSource, V: DeclVisitor<S>> {
    source: &'a S,
    visitor: &'a mut V,
    policy: ImplicitBounds,
    /// Variables currently (or previously) resolved in this call. A variable
    /// found here again is a cycle through its own bounds and is cut short.
    resolved_vars: HashSet<S::VarKey>,
}

impl<S: DeclSource, V: DeclVisitor<S>> Explorer<'_, S, V> {
    fn explore_decl(&mut self, decl: &S::Decl) -> Result<V::Output, ExploreError> {
        let kind = self
            .source
            .classify(decl)
            .inspect_err(|error| trace!(%error, "classification failed"))?;
        match kind {
            DeclKind::Void => Ok(self.visitor.visit_void(self.source)),
            DeclKind::SimpleClass(class) => {
                Ok(self.visitor.visit_simple_class(self.source, &class))
            }
            DeclKind::EnumClass(class) => Ok(self.visitor.visit_enum_class(self.source, &class)),
            DeclKind::ArrayClass { class, element } => {
                let element = self.explore_decl(&element)?;
                Ok(self.visitor.visit_array_class(self.source, &class, element))
            }
            DeclKind::GenericArray { element } => {
                let element = self.explore_decl(&element)?;
                Ok(self.visitor.visit_generic_array(self.source, decl, element))
            }
            DeclKind::Parameterized { raw, args } => {
                let raw = self.explore_decl(&raw)?;
                let args = self.explore_all(&args)?;
                Ok(self.visitor.visit_parameterized(self.source, decl, raw, args))
            }
            DeclKind::TypeVariable { key, bounds } => {
                if !self.resolved_vars.insert(key) {
                    trace!("type variable already being resolved, cutting bound cycle");
                    return Ok(self.visitor.visit_type_variable(self.source, decl, Vec::new()));
                }
                let bounds = self.policy.filter(self.source, bounds);
                let bounds = self.explore_all(&bounds)?;
                Ok(self.visitor.visit_type_variable(self.source, decl, bounds))
            }
            DeclKind::Wildcard { upper, lower } => {
                let upper = self.policy.filter(self.source, upper);
                let upper = self.explore_all(&upper)?;
                let lower = self.explore_all(&lower)?;
                Ok(self.visitor.visit_wildcard(self.source, decl, upper, lower))
            }
        }
    }

    fn explore_all(&mut self, decls: &[S::Decl]) -> Result<Vec<V::Output>, ExploreError> {
        decls.iter().map(|d| self.explore_decl(d)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::TreeSource;
    use alloc::rc::Rc;
    use alloc::vec::Vec;

    /// Counts visit calls per node kind, ignoring all payloads.
    #[derive(Default)]
    struct Counter {
        classes: usize,
        variables: usize,
        parameterized: usize,
    }

    impl<S: DeclSource> DeclVisitor<S> for Counter {
        type Output = ();

        fn visit_void(&mut self, _: &S) {}
        fn visit_simple_class(&mut self, _: &S, _: &S::Class) {
            self.classes += 1;
        }
        fn visit_enum_class(&mut self, _: &S, _: &S::Class) {
            self.classes += 1;
        }
        fn visit_array_class(&mut self, _: &S, _: &S::Class, _: ()) {}
        fn visit_generic_array(&mut self, _: &S, _: &S::Decl, _: ()) {}
        fn visit_parameterized(&mut self, _: &S, _: &S::Decl, _: (), _: Vec<()>) {
            self.parameterized += 1;
        }
        fn visit_type_variable(&mut self, _: &S, _: &S::Decl, _: Vec<()>) {
            self.variables += 1;
        }
        fn visit_wildcard(&mut self, _: &S, _: &S::Decl, _: Vec<()>, _: Vec<()>) {}
    }

    #[test]
    fn every_node_is_visited_once() {
        let s = TreeSource::new();
        let decl = s.generic("Map", [s.class("String"), s.generic("List", [s.class("Integer")])]);

        let mut counter = Counter::default();
        explore(&s, &decl, &mut counter).unwrap();

        assert_eq!(counter.classes, 4); // Map, String, List, Integer
        assert_eq!(counter.parameterized, 2);
    }

    #[test]
    fn recursive_bound_is_cut_after_one_round() {
        let s = TreeSource::new();
        let t = s.type_var("T");
        s.set_bounds(&t, [s.generic("Comparable", [Rc::clone(&t)])]);

        let mut counter = Counter::default();
        explore(&s, &t, &mut counter).unwrap();

        // T, then Comparable<T>, then T again (cut), and no further.
        assert_eq!(counter.variables, 2);
        assert_eq!(counter.classes, 1);
        assert_eq!(counter.parameterized, 1);
    }

    #[test]
    fn guard_is_shared_across_sibling_branches() {
        let s = TreeSource::new();
        let t = s.bound_var("T", [s.class("Custom")]);
        let decl = s.generic("Map", [Rc::clone(&t), t]);

        let mut counter = Counter::default();
        explore(&s, &decl, &mut counter).unwrap();

        // Second occurrence of T is treated as already resolved, so Custom is
        // explored once.
        assert_eq!(counter.variables, 2);
        assert_eq!(counter.classes, 2); // Map, Custom
    }

    #[test]
    fn guard_resets_between_calls() {
        let s = TreeSource::new();
        let t = s.bound_var("T", [s.class("Custom")]);

        let mut counter = Counter::default();
        explore(&s, &t, &mut counter).unwrap();
        explore(&s, &t, &mut counter).unwrap();

        assert_eq!(counter.classes, 2);
    }

    #[test]
    fn error_surfaces_from_any_depth() {
        let s = TreeSource::new();
        let decl = s.generic("List", [s.missing()]);

        let mut counter = Counter::default();
        let err = explore(&s, &decl, &mut counter).unwrap_err();
        assert_eq!(err, ExploreError::InvalidInput);
    }

    #[test]
    fn top_bound_beside_others_is_kept() {
        let s = TreeSource::new();
        let t = s.bound_var("T", [s.top_class(), s.class("Cloneable")]);

        let mut counter = Counter::default();
        explore_with_policy(&s, &t, &mut counter, ImplicitBounds::Ignore).unwrap();

        // Both bounds kept: the top type only counts when it stands alone.
        assert_eq!(counter.classes, 2);
    }
}
