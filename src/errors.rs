//! Error types with diagnostics using miette
//!
//! The geometry core is total and never fails; these errors only come from
//! the markup renderer refusing names it cannot serialize.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Markup Errors
// ============================================================================

/// Errors that occur while serializing elements to markup
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("invalid tag name: {name:?}")]
    #[diagnostic(
        code(hypersvg::markup::invalid_tag_name),
        help("tag names must start with a letter or `_` and contain only letters, digits, `-`, `_`, `.` or `:`")
    )]
    InvalidTagName { name: String },

    #[error("invalid attribute name {name:?} on <{tag}>")]
    #[diagnostic(
        code(hypersvg::markup::invalid_attribute_name),
        help("attribute names follow the same rules as tag names")
    )]
    InvalidAttributeName { tag: String, name: String },
}
