use alloc::vec::Vec;

use super::source::DeclSource;

/// The kinds of nodes a generic type declaration decomposes into.
///
/// A closed set: every declaration a source can classify belongs to exactly
/// one of these. Exhaustive matching means the engine itself has no unknown
/// case; the unsupported-kind error lives entirely at the classification
/// boundary, reserved for genuinely foreign introspection inputs.
#[derive(Debug)]
pub enum DeclKind<S: DeclSource> {
    /// The absence of a value (`void`).
    Void,

    /// A concrete, non-array, non-enum named type.
    SimpleClass(S::Class),

    /// A concrete enumerated type.
    EnumClass(S::Class),

    /// An array whose element type is itself concrete (reified).
    ///
    /// `class` is the array type itself; `element` its component type.
    ArrayClass { class: S::Class, element: S::Decl },

    /// An array whose element type is a parameterized type or a type
    /// variable, which reflection facilities model as a distinct node kind
    /// from reified arrays.
    GenericArray { element: S::Decl },

    /// A generic type applied to type arguments, e.g. `List<String>`.
    ///
    /// The raw type is a declaration in its own right (typically a simple
    /// class) and is explored like any other node.
    Parameterized { raw: S::Decl, args: Vec<S::Decl> },

    /// A named type parameter, e.g. `T`, with its declared upper bounds.
    ///
    /// `key` is the variable's identity (see [`DeclSource::VarKey`]). The
    /// bound list is never empty here; an unbounded variable carries the
    /// implicit top-type bound.
    TypeVariable { key: S::VarKey, bounds: Vec<S::Decl> },

    /// An unknown-but-constrained type, e.g. `? extends Number`.
    ///
    /// Upper bounds are never empty here (implicit top type, as for
    /// variables); lower bounds are only ever explicit.
    Wildcard { upper: Vec<S::Decl>, lower: Vec<S::Decl> },
}
