use core::cell::RefCell;
use core::fmt;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use bumpalo::Bump;

use crate::core::{DeclKind, DeclSource, ExploreError};

/// A synthesized declaration node, bump-allocated.
///
/// The arena twin of [`TreeDecl`](super::TreeDecl): same node shapes, but
/// every payload borrows from the arena, so handles are `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArenaDecl<'a> {
    /// An unresolvable slot; classifying it fails with
    /// [`ExploreError::InvalidInput`].
    Missing,
    /// The `void` pseudo-type.
    Void,
    /// A concrete named type.
    Class { name: &'a str, is_enum: bool },
    /// An array of `element`.
    Array { element: &'a ArenaDecl<'a> },
    /// A generic type applied to arguments.
    Parameterized { raw: &'a ArenaDecl<'a>, args: &'a [&'a ArenaDecl<'a>] },
    /// A type parameter. `id` is its identity within the source.
    Variable { id: u32, name: &'a str },
    /// A wildcard with optional explicit bounds.
    Wildcard { upper: &'a [&'a ArenaDecl<'a>], lower: &'a [&'a ArenaDecl<'a>] },
    /// A node kind outside the model; classifying it fails with
    /// [`ExploreError::UnsupportedKind`].
    Foreign { kind: &'a str },
}

impl ArenaDecl<'_> {
    /// The display name of a class or type variable.
    pub fn name(&self) -> Option<&str> {
        match self {
            ArenaDecl::Class { name, .. } | ArenaDecl::Variable { name, .. } => Some(name),
            _ => None,
        }
    }

    fn is_reifiable(&self) -> bool {
        match self {
            ArenaDecl::Void | ArenaDecl::Class { .. } => true,
            ArenaDecl::Array { element } => element.is_reifiable(),
            _ => false,
        }
    }
}

impl fmt::Display for ArenaDecl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArenaDecl::Missing => write!(f, "<missing>"),
            ArenaDecl::Void => write!(f, "void"),
            ArenaDecl::Class { name, .. } | ArenaDecl::Variable { name, .. } => f.write_str(name),
            ArenaDecl::Array { element } => write!(f, "{element}[]"),
            ArenaDecl::Parameterized { raw, args } => {
                write!(f, "{raw}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            ArenaDecl::Wildcard { upper, lower } => {
                let (keyword, bounds) = if !lower.is_empty() {
                    ("super", lower)
                } else if !upper.is_empty() {
                    ("extends", upper)
                } else {
                    return f.write_str("?");
                };
                write!(f, "? {keyword} ")?;
                for (i, bound) in bounds.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" & ")?;
                    }
                    write!(f, "{bound}")?;
                }
                Ok(())
            }
            ArenaDecl::Foreign { kind } => write!(f, "<{kind}>"),
        }
    }
}

type BoundsTable<'a> = RefCell<Vec<Vec<&'a ArenaDecl<'a>>>>;

/// A [`DeclSource`] over bump-allocated [`ArenaDecl`] nodes.
///
/// The source itself is `Copy`; the bounds table lives in the arena alongside
/// the nodes. The table's heap storage is reclaimed with the arena without
/// running its destructor, which is fine for the plain references it holds.
#[derive(Clone, Copy)]
pub struct ArenaSource<'a> {
    arena: &'a Bump,
    top_name: &'a str,
    top: &'a ArenaDecl<'a>,
    var_bounds: &'a BoundsTable<'a>,
}

impl fmt::Debug for ArenaSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaSource")
            .field("top_name", &self.top_name)
            .finish_non_exhaustive()
    }
}

impl<'a> ArenaSource<'a> {
    /// A source whose top type is named `Object`.
    pub fn new(arena: &'a Bump) -> Self {
        Self::with_top_class(arena, "Object")
    }

    /// A source with a custom top-type name.
    pub fn with_top_class(arena: &'a Bump, name: &str) -> Self {
        let top_name = &*arena.alloc_str(name);
        let top = &*arena.alloc(ArenaDecl::Class { name: top_name, is_enum: false });
        let var_bounds = &*arena.alloc(BoundsTable::new(Vec::new()));
        ArenaSource { arena, top_name, top, var_bounds }
    }

    /// The top-type declaration itself.
    pub fn top_class(&self) -> &'a ArenaDecl<'a> {
        self.top
    }

    pub fn missing(&self) -> &'a ArenaDecl<'a> {
        self.arena.alloc(ArenaDecl::Missing)
    }

    pub fn void(&self) -> &'a ArenaDecl<'a> {
        self.arena.alloc(ArenaDecl::Void)
    }

    pub fn class(&self, name: &str) -> &'a ArenaDecl<'a> {
        let name = &*self.arena.alloc_str(name);
        self.arena.alloc(ArenaDecl::Class { name, is_enum: false })
    }

    pub fn enum_class(&self, name: &str) -> &'a ArenaDecl<'a> {
        let name = &*self.arena.alloc_str(name);
        self.arena.alloc(ArenaDecl::Class { name, is_enum: true })
    }

    pub fn array(&self, element: &'a ArenaDecl<'a>) -> &'a ArenaDecl<'a> {
        self.arena.alloc(ArenaDecl::Array { element })
    }

    pub fn parameterized(
        &self,
        raw: &'a ArenaDecl<'a>,
        args: impl IntoIterator<Item = &'a ArenaDecl<'a>, IntoIter: ExactSizeIterator>,
    ) -> &'a ArenaDecl<'a> {
        let args = &*self.arena.alloc_slice_fill_iter(args);
        self.arena.alloc(ArenaDecl::Parameterized { raw, args })
    }

    /// Shorthand for a parameterized type over a simple raw class.
    pub fn generic(
        &self,
        name: &str,
        args: impl IntoIterator<Item = &'a ArenaDecl<'a>, IntoIter: ExactSizeIterator>,
    ) -> &'a ArenaDecl<'a> {
        self.parameterized(self.class(name), args)
    }

    /// Declares a fresh, unbounded type variable with a new identity.
    pub fn type_var(&self, name: &str) -> &'a ArenaDecl<'a> {
        let name = &*self.arena.alloc_str(name);
        let mut table = self.var_bounds.borrow_mut();
        let id = table.len() as u32;
        table.push(Vec::new());
        self.arena.alloc(ArenaDecl::Variable { id, name })
    }

    /// Declares a type variable with upper bounds.
    pub fn bound_var(
        &self,
        name: &str,
        bounds: impl IntoIterator<Item = &'a ArenaDecl<'a>>,
    ) -> &'a ArenaDecl<'a> {
        let var = self.type_var(name);
        self.set_bounds(var, bounds);
        var
    }

    /// Replaces the upper bounds of `var`. The bounds may mention `var`
    /// itself.
    ///
    /// # Panics
    ///
    /// If `var` is not a variable, or was declared by a different source.
    pub fn set_bounds(
        &self,
        var: &'a ArenaDecl<'a>,
        bounds: impl IntoIterator<Item = &'a ArenaDecl<'a>>,
    ) {
        let ArenaDecl::Variable { id, .. } = var else {
            panic!("set_bounds requires a type variable declaration");
        };
        let mut table = self.var_bounds.borrow_mut();
        let Some(slot) = table.get_mut(*id as usize) else {
            panic!("variable was not declared by this source");
        };
        *slot = bounds.into_iter().collect();
    }

    pub fn wildcard(&self) -> &'a ArenaDecl<'a> {
        self.arena.alloc(ArenaDecl::Wildcard { upper: &[], lower: &[] })
    }

    pub fn wildcard_extends(
        &self,
        upper: impl IntoIterator<Item = &'a ArenaDecl<'a>, IntoIter: ExactSizeIterator>,
    ) -> &'a ArenaDecl<'a> {
        let upper = &*self.arena.alloc_slice_fill_iter(upper);
        self.arena.alloc(ArenaDecl::Wildcard { upper, lower: &[] })
    }

    pub fn wildcard_super(
        &self,
        lower: impl IntoIterator<Item = &'a ArenaDecl<'a>, IntoIter: ExactSizeIterator>,
    ) -> &'a ArenaDecl<'a> {
        let lower = &*self.arena.alloc_slice_fill_iter(lower);
        self.arena.alloc(ArenaDecl::Wildcard { upper: &[], lower })
    }

    /// A node the model does not cover, for exercising the unsupported-kind
    /// error path.
    pub fn foreign(&self, kind: &str) -> &'a ArenaDecl<'a> {
        let kind = &*self.arena.alloc_str(kind);
        self.arena.alloc(ArenaDecl::Foreign { kind })
    }
}

impl<'a> DeclSource for ArenaSource<'a> {
    type Decl = &'a ArenaDecl<'a>;
    type Class = &'a ArenaDecl<'a>;
    type VarKey = u32;

    fn classify(&self, decl: &&'a ArenaDecl<'a>) -> Result<DeclKind<Self>, ExploreError> {
        match **decl {
            ArenaDecl::Missing => Err(ExploreError::InvalidInput),
            ArenaDecl::Void => Ok(DeclKind::Void),
            ArenaDecl::Class { is_enum, .. } => Ok(if is_enum {
                DeclKind::EnumClass(*decl)
            } else {
                DeclKind::SimpleClass(*decl)
            }),
            ArenaDecl::Array { element } => Ok(if element.is_reifiable() {
                DeclKind::ArrayClass { class: *decl, element }
            } else {
                DeclKind::GenericArray { element }
            }),
            ArenaDecl::Parameterized { raw, args } => {
                Ok(DeclKind::Parameterized { raw, args: args.to_vec() })
            }
            ArenaDecl::Variable { id, .. } => {
                let declared = self.var_bounds.borrow().get(id as usize).cloned();
                let declared = declared.unwrap_or_default();
                let bounds = if declared.is_empty() { vec![self.top] } else { declared };
                Ok(DeclKind::TypeVariable { key: id, bounds })
            }
            ArenaDecl::Wildcard { upper, lower } => {
                let upper = if upper.is_empty() { vec![self.top] } else { upper.to_vec() };
                Ok(DeclKind::Wildcard { upper, lower: lower.to_vec() })
            }
            ArenaDecl::Foreign { kind } => {
                Err(ExploreError::UnsupportedKind { kind: String::from(kind) })
            }
        }
    }

    fn is_top_type(&self, decl: &&'a ArenaDecl<'a>) -> bool {
        matches!(**decl, ArenaDecl::Class { name, is_enum: false } if name == self.top_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn handles_are_copy() {
        let arena = Bump::new();
        let s = ArenaSource::new(&arena);
        let t = s.type_var("T");
        let decl = s.generic("Map", [t, t]);
        assert_eq!(format!("{decl}"), "Map<T, T>");
    }

    #[test]
    fn bounds_can_refer_back_to_the_variable() {
        let arena = Bump::new();
        let s = ArenaSource::new(&arena);
        let t = s.type_var("T");
        s.set_bounds(t, [s.generic("Comparable", [t])]);

        let DeclKind::TypeVariable { bounds, .. } = s.classify(&t).unwrap() else {
            panic!("expected a type variable");
        };
        assert_eq!(format!("{}", bounds[0]), "Comparable<T>");
    }

    #[test]
    fn foreign_reports_its_kind() {
        let arena = Bump::new();
        let s = ArenaSource::new(&arena);
        let err = s.classify(&s.foreign("intersection")).unwrap_err();
        assert_eq!(err, ExploreError::UnsupportedKind { kind: String::from("intersection") });
    }
}
