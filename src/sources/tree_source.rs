use core::cell::RefCell;
use core::fmt;

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::core::{DeclKind, DeclSource, ExploreError};

/// A synthesized declaration node, reference-counted.
///
/// Nodes are plain data; everything stateful (the top type, type-variable
/// bounds) lives in the [`TreeSource`] that created them. In particular a
/// `Variable` node carries only its identity, so self-referential bounds
/// (`T extends Comparable<T>`) do not create ownership cycles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TreeDecl {
    /// An unresolvable slot; classifying it fails with
    /// [`ExploreError::InvalidInput`].
    Missing,
    /// The `void` pseudo-type.
    Void,
    /// A concrete named type.
    Class { name: String, is_enum: bool },
    /// An array of `element`.
    Array { element: Rc<TreeDecl> },
    /// A generic type applied to arguments.
    Parameterized { raw: Rc<TreeDecl>, args: Vec<Rc<TreeDecl>> },
    /// A type parameter. `id` is its identity within the source; the display
    /// name is not unique.
    Variable { id: u32, name: String },
    /// A wildcard with optional explicit bounds.
    Wildcard { upper: Vec<Rc<TreeDecl>>, lower: Vec<Rc<TreeDecl>> },
    /// A node kind outside the model; classifying it fails with
    /// [`ExploreError::UnsupportedKind`].
    Foreign { kind: String },
}

impl TreeDecl {
    /// The display name of a class or type variable.
    pub fn name(&self) -> Option<&str> {
        match self {
            TreeDecl::Class { name, .. } | TreeDecl::Variable { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Whether an array of this type has a concrete element type, as opposed
    /// to a generic one.
    fn is_reifiable(&self) -> bool {
        match self {
            TreeDecl::Void | TreeDecl::Class { .. } => true,
            TreeDecl::Array { element } => element.is_reifiable(),
            _ => false,
        }
    }
}

impl fmt::Display for TreeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeDecl::Missing => write!(f, "<missing>"),
            TreeDecl::Void => write!(f, "void"),
            TreeDecl::Class { name, .. } | TreeDecl::Variable { name, .. } => f.write_str(name),
            TreeDecl::Array { element } => write!(f, "{element}[]"),
            TreeDecl::Parameterized { raw, args } => {
                write!(f, "{raw}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            TreeDecl::Wildcard { upper, lower } => {
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
            TreeDecl::Foreign { kind } => write!(f, "<{kind}>"),
        }
    }
}

/// A [`DeclSource`] over [`TreeDecl`] nodes.
///
/// Construct declarations through the builder methods (or the
/// [`decl!`](crate::decl) macro), then hand them to
/// [`explore`](crate::explore). Type-variable bounds are recorded in the
/// source, keyed by variable identity, so they may be set after the variable
/// is created and may refer back to the variable itself.
#[derive(Debug)]
pub struct TreeSource {
    top_name: String,
    top: Rc<TreeDecl>,
    /// Upper bounds per variable id. An empty entry means unbounded.
    var_bounds: RefCell<Vec<Vec<Rc<TreeDecl>>>>,
}

impl Default for TreeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeSource {
    /// A source whose top type is named `Object`.
    pub fn new() -> Self {
        Self::with_top_class("Object")
    }

    /// A source with a custom top-type name.
    pub fn with_top_class(name: &str) -> Self {
        TreeSource {
            top_name: name.to_string(),
            top: Rc::new(TreeDecl::Class { name: name.to_string(), is_enum: false }),
            var_bounds: RefCell::new(Vec::new()),
        }
    }

    /// The top-type declaration itself. An ordinary class node; exploring it
    /// directly visits it as a simple class.
    pub fn top_class(&self) -> Rc<TreeDecl> {
        Rc::clone(&self.top)
    }

    pub fn missing(&self) -> Rc<TreeDecl> {
        Rc::new(TreeDecl::Missing)
    }

    pub fn void(&self) -> Rc<TreeDecl> {
        Rc::new(TreeDecl::Void)
    }

    pub fn class(&self, name: &str) -> Rc<TreeDecl> {
        Rc::new(TreeDecl::Class { name: name.to_string(), is_enum: false })
    }

    pub fn enum_class(&self, name: &str) -> Rc<TreeDecl> {
        Rc::new(TreeDecl::Class { name: name.to_string(), is_enum: true })
    }

    pub fn array(&self, element: Rc<TreeDecl>) -> Rc<TreeDecl> {
        Rc::new(TreeDecl::Array { element })
    }

    pub fn parameterized(
        &self,
        raw: Rc<TreeDecl>,
        args: impl IntoIterator<Item = Rc<TreeDecl>>,
    ) -> Rc<TreeDecl> {
        Rc::new(TreeDecl::Parameterized { raw, args: args.into_iter().collect() })
    }

    /// Shorthand for a parameterized type over a simple raw class.
    pub fn generic(
        &self,
        name: &str,
        args: impl IntoIterator<Item = Rc<TreeDecl>>,
    ) -> Rc<TreeDecl> {
        self.parameterized(self.class(name), args)
    }

    /// Declares a fresh, unbounded type variable.
    ///
    /// Each call mints a new identity: two variables named `T` from separate
    /// calls are unrelated.
    pub fn type_var(&self, name: &str) -> Rc<TreeDecl> {
        let mut table = self.var_bounds.borrow_mut();
        let id = table.len() as u32;
        table.push(Vec::new());
        Rc::new(TreeDecl::Variable { id, name: name.to_string() })
    }

    /// Declares a type variable with upper bounds.
    pub fn bound_var(
        &self,
        name: &str,
        bounds: impl IntoIterator<Item = Rc<TreeDecl>>,
    ) -> Rc<TreeDecl> {
        let var = self.type_var(name);
        self.set_bounds(&var, bounds);
        var
    }

    /// Replaces the upper bounds of `var`. The bounds may mention `var`
    /// itself.
    ///
    /// # Panics
    ///
    /// If `var` is not a variable, or was declared by a different source.
    pub fn set_bounds(&self, var: &Rc<TreeDecl>, bounds: impl IntoIterator<Item = Rc<TreeDecl>>) {
        let TreeDecl::Variable { id, .. } = &**var else {
            panic!("set_bounds requires a type variable declaration");
        };
        let mut table = self.var_bounds.borrow_mut();
        let Some(slot) = table.get_mut(*id as usize) else {
            panic!("variable was not declared by this source");
        };
        *slot = bounds.into_iter().collect();
    }

    pub fn wildcard(&self) -> Rc<TreeDecl> {
        Rc::new(TreeDecl::Wildcard { upper: Vec::new(), lower: Vec::new() })
    }

    pub fn wildcard_extends(
        &self,
        upper: impl IntoIterator<Item = Rc<TreeDecl>>,
    ) -> Rc<TreeDecl> {
        Rc::new(TreeDecl::Wildcard { upper: upper.into_iter().collect(), lower: Vec::new() })
    }

    pub fn wildcard_super(&self, lower: impl IntoIterator<Item = Rc<TreeDecl>>) -> Rc<TreeDecl> {
        Rc::new(TreeDecl::Wildcard { upper: Vec::new(), lower: lower.into_iter().collect() })
    }

    /// A node the model does not cover, for exercising the unsupported-kind
    /// error path.
    pub fn foreign(&self, kind: &str) -> Rc<TreeDecl> {
        Rc::new(TreeDecl::Foreign { kind: kind.to_string() })
    }
}

impl DeclSource for TreeSource {
    type Decl = Rc<TreeDecl>;
    type Class = Rc<TreeDecl>;
    type VarKey = u32;

    fn classify(&self, decl: &Rc<TreeDecl>) -> Result<DeclKind<Self>, ExploreError> {
        match &**decl {
            TreeDecl::Missing => Err(ExploreError::InvalidInput),
            TreeDecl::Void => Ok(DeclKind::Void),
            TreeDecl::Class { is_enum, .. } => Ok(if *is_enum {
                DeclKind::EnumClass(Rc::clone(decl))
            } else {
                DeclKind::SimpleClass(Rc::clone(decl))
            }),
            TreeDecl::Array { element } => Ok(if element.is_reifiable() {
                DeclKind::ArrayClass { class: Rc::clone(decl), element: Rc::clone(element) }
            } else {
                DeclKind::GenericArray { element: Rc::clone(element) }
            }),
            TreeDecl::Parameterized { raw, args } => Ok(DeclKind::Parameterized {
                raw: Rc::clone(raw),
                args: args.clone(),
            }),
            TreeDecl::Variable { id, .. } => {
                let declared = self.var_bounds.borrow().get(*id as usize).cloned();
                let declared = declared.unwrap_or_default();
                let bounds = if declared.is_empty() {
                    vec![Rc::clone(&self.top)]
                } else {
                    declared
                };
                Ok(DeclKind::TypeVariable { key: *id, bounds })
            }
            TreeDecl::Wildcard { upper, lower } => {
                let upper = if upper.is_empty() {
                    vec![Rc::clone(&self.top)]
                } else {
                    upper.clone()
                };
                Ok(DeclKind::Wildcard { upper, lower: lower.clone() })
            }
            TreeDecl::Foreign { kind } => {
                Err(ExploreError::UnsupportedKind { kind: kind.clone() })
            }
        }
    }

    fn is_top_type(&self, decl: &Rc<TreeDecl>) -> bool {
        matches!(&**decl, TreeDecl::Class { name, is_enum: false } if *name == self.top_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn display_renders_source_syntax() {
        let s = TreeSource::new();
        let decl = s.generic(
            "Map",
            [s.class("String"), s.array(s.generic("List", [s.wildcard_extends([s.class("Number")])]))],
        );
        assert_eq!(format!("{decl}"), "Map<String, List<? extends Number>[]>");
    }

    #[test]
    fn variables_with_the_same_name_are_distinct() {
        let s = TreeSource::new();
        let a = s.type_var("T");
        let b = s.type_var("T");

        let (DeclKind::TypeVariable { key: ka, .. }, DeclKind::TypeVariable { key: kb, .. }) =
            (s.classify(&a).unwrap(), s.classify(&b).unwrap())
        else {
            panic!("expected type variables");
        };
        assert_ne!(ka, kb);
    }

    #[test]
    fn unbounded_variable_reports_the_top_bound() {
        let s = TreeSource::new();
        let t = s.type_var("T");
        let DeclKind::TypeVariable { bounds, .. } = s.classify(&t).unwrap() else {
            panic!("expected a type variable");
        };
        assert_eq!(bounds.len(), 1);
        assert!(s.is_top_type(&bounds[0]));
    }

    #[test]
    fn lower_bounded_wildcard_keeps_implicit_upper() {
        let s = TreeSource::new();
        let w = s.wildcard_super([s.class("Integer")]);
        let DeclKind::Wildcard { upper, lower } = s.classify(&w).unwrap() else {
            panic!("expected a wildcard");
        };
        assert!(s.is_top_type(&upper[0]));
        assert_eq!(lower[0].name(), Some("Integer"));
    }

    #[test]
    fn enum_top_name_is_not_the_top_type() {
        let s = TreeSource::new();
        assert!(!s.is_top_type(&s.enum_class("Object")));
    }
}
