/// Builds a declaration through a source's constructor methods.
///
/// The grammar mirrors source-language type syntax: a string literal is a
/// class, a literal followed by a bracketed argument list is a parameterized
/// type, a bare bracketed type is an array, `?` is an unbounded wildcard and
/// `void` is the void pseudo-type. Any other expression is spliced in as an
/// already-built declaration, so type variables and wildcards with bounds
/// come from the source's methods:
///
/// ```
/// use generic_explorer::{TreeSource, decl};
///
/// let s = TreeSource::new();
/// let t = s.bound_var("T", [decl!(s, "Number")]);
/// let d = decl!(s, "Map"["List"[?], t]);
/// assert_eq!(format!("{d}"), "Map<List<?>, T>");
/// ```
///
/// Works with any source exposing the shared constructor vocabulary
/// ([`TreeSource`](crate::TreeSource) and [`ArenaSource`](crate::ArenaSource)).
#[macro_export]
macro_rules! decl {
    ($s:expr, $($rest:tt)+) => {{
        let __source = &$s;
        $crate::decl!(@decl __source ; $($rest)+)
    }};

    (@decl $s:ident ; void) => {
        $s.void()
    };
    (@decl $s:ident ; ?) => {
        $s.wildcard()
    };
    (@decl $s:ident ; [ $($elem:tt)+ ]) => {
        $s.array($crate::decl!(@decl $s ; $($elem)+))
    };
    (@decl $s:ident ; $name:literal [ $($args:tt)* ]) => {{
        let __raw = $s.class($name);
        $s.parameterized(__raw, $crate::decl!(@args $s ; [] [] $($args)*))
    }};
    (@decl $s:ident ; $name:literal) => {
        $s.class($name)
    };
    (@decl $s:ident ; $e:expr) => {
        $e
    };

    // Argument-list accumulator: splits on top-level commas, passing
    // bracketed groups through whole. The first bracket holds finished
    // items (as hygienically distinct `__item` bindings), the second the
    // tokens of the item in progress.
    (@args $s:ident ; [] []) => {
        ::core::iter::empty()
    };
    (@args $s:ident ; [$($collected:tt)*] [$($curr:tt)+]) => {{
        let __item = $crate::decl!(@decl $s ; $($curr)+);
        [$($collected)* __item]
    }};
    (@args $s:ident ; [$($collected:tt)*] [$($curr:tt)+] , $($rest:tt)*) => {{
        let __item = $crate::decl!(@decl $s ; $($curr)+);
        $crate::decl!(@args $s ; [$($collected)* __item,] [] $($rest)*)
    }};
    (@args $s:ident ; [$($collected:tt)*] [$($curr:tt)*] $tok:tt $($rest:tt)*) => {
        $crate::decl!(@args $s ; [$($collected)*] [$($curr)* $tok] $($rest)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::sources::TreeSource;
    use alloc::format;

    #[test]
    fn literal_is_a_class() {
        let s = TreeSource::new();
        assert_eq!(format!("{}", decl!(s, "String")), "String");
    }

    #[test]
    fn brackets_after_a_literal_parameterize() {
        let s = TreeSource::new();
        let d = decl!(s, "Map"["List"["String"], "Custom"]);
        assert_eq!(format!("{d}"), "Map<List<String>, Custom>");
    }

    #[test]
    fn bare_brackets_build_an_array() {
        let s = TreeSource::new();
        assert_eq!(format!("{}", decl!(s, ["Integer"])), "Integer[]");
        assert_eq!(format!("{}", decl!(s, [["Integer"]])), "Integer[][]");
    }

    #[test]
    fn question_mark_is_a_wildcard() {
        let s = TreeSource::new();
        assert_eq!(format!("{}", decl!(s, "List"[?])), "List<?>");
    }

    #[test]
    fn void_and_empty_argument_lists() {
        let s = TreeSource::new();
        assert_eq!(format!("{}", decl!(s, void)), "void");
        assert_eq!(format!("{}", decl!(s, "List"[])), "List<>");
    }

    #[test]
    fn expressions_splice_in_existing_declarations() {
        let s = TreeSource::new();
        let t = s.type_var("T");
        let d = decl!(s, "Comparable"[t.clone()]);
        assert_eq!(format!("{d}"), "Comparable<T>");
    }
}
