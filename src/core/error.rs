use alloc::string::String;

use thiserror::Error;

/// The ways classification and traversal can fail.
///
/// There is no partial-failure mode: an `explore` call either completes and
/// returns the root value, or fails with one of these and returns nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExploreError {
    /// The root declaration, or one of its children, is absent.
    ///
    /// A synthesized declaration tree may carry unresolvable slots (the
    /// analogue of a null from a reflection facility); hitting one anywhere
    /// abandons the traversal.
    #[error("type declaration is missing")]
    InvalidInput,

    /// A declaration could not be placed into any known node kind.
    ///
    /// This indicates the model does not yet cover a node kind the host's
    /// introspection facility can produce. The reported kind identifies the
    /// unhandled case.
    #[error("unknown declaration kind `{kind}`")]
    UnsupportedKind { kind: String },
}
