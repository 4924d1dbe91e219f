//! Visitors shipped with the crate.

mod mentioned;

pub use mentioned::{MentionedClasses, mentioned_classes, mentioned_classes_with_policy};
