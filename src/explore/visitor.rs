use alloc::vec::Vec;

use crate::core::DeclSource;

/// What to build out of each node of a declaration.
///
/// The engine calls exactly one method per explored node, children first, and
/// hands each parent the already-built results of its children in declaration
/// order. The methods are infallible; everything that can go wrong is decided
/// before the visitor is reached.
///
/// Implementations hold whatever state they like behind `&mut self`, but note
/// that child results arrive as values: a stateless visitor that combines its
/// arguments is usually enough (see
/// [`MentionedClasses`](crate::MentionedClasses)).
pub trait DeclVisitor<S: DeclSource> {
    /// The value built for every node.
    type Output;

    /// Builds the value for the `void` pseudo-type.
    fn visit_void(&mut self, source: &S) -> Self::Output;

    /// Builds the value for a concrete non-enum class.
    fn visit_simple_class(&mut self, source: &S, class: &S::Class) -> Self::Output;

    /// Builds the value for an enumerated type.
    fn visit_enum_class(&mut self, source: &S, class: &S::Class) -> Self::Output;

    /// Builds the value for an array with a reified element type.
    ///
    /// `class` is the array type itself; `element` is the value already built
    /// for its component type.
    fn visit_array_class(
        &mut self,
        source: &S,
        class: &S::Class,
        element: Self::Output,
    ) -> Self::Output;

    /// Builds the value for an array whose element type is generic.
    fn visit_generic_array(
        &mut self,
        source: &S,
        decl: &S::Decl,
        element: Self::Output,
    ) -> Self::Output;

    /// Builds the value for a parameterized type such as `List<String>`.
    ///
    /// `raw` is the value built for the raw type, `args` the values for the
    /// type arguments in declaration order.
    fn visit_parameterized(
        &mut self,
        source: &S,
        decl: &S::Decl,
        raw: Self::Output,
        args: Vec<Self::Output>,
    ) -> Self::Output;

    /// Builds the value for a type variable.
    ///
    /// `bounds` holds the values built for the variable's upper bounds, after
    /// the implicit-bounds policy has been applied. It is also empty when this
    /// variable is already being resolved further up the current traversal
    /// (a self-referential bound such as `T extends Comparable<T>`), so the
    /// same variable may yield different values at different positions.
    fn visit_type_variable(
        &mut self,
        source: &S,
        decl: &S::Decl,
        bounds: Vec<Self::Output>,
    ) -> Self::Output;

    /// Builds the value for a wildcard.
    ///
    /// Upper bounds are subject to the implicit-bounds policy; lower bounds
    /// are only ever explicit. All upper-bound values are built before any
    /// lower-bound value.
    fn visit_wildcard(
        &mut self,
        source: &S,
        decl: &S::Decl,
        upper: Vec<Self::Output>,
        lower: Vec<Self::Output>,
    ) -> Self::Output;
}
