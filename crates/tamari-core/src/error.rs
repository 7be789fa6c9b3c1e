//! Error types for document building
//!
//! Both variants signal a broken contract between the parser (or the
//! traversal itself) and the document builder, never a recoverable input
//! problem. Formatting aborts for the whole document; callers should surface
//! the original source unchanged rather than emit partial output.

use thiserror::Error;

use crate::cst::TomlSyntaxKind;

/// Fatal errors raised while transforming a syntax tree into a layout
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A node advertised as "exactly one of several forms" exposed the wrong
    /// number of populated child slots, or a slot holding more than one
    /// element. Indicates a parser/grammar mismatch.
    #[error(
        "malformed syntax tree: {kind:?} must have exactly one populated child slot, found {slots} slot(s) holding {items} element(s)"
    )]
    Structural {
        kind: TomlSyntaxKind,
        slots: usize,
        items: usize,
    },

    /// A kind the grammar guarantees never stands alone reached the
    /// dispatcher. Indicates an invariant violation in grouping or dispatch.
    #[error("unexpected {kind:?} reached the document builder")]
    Unreachable { kind: TomlSyntaxKind },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_message_carries_context() {
        let error = FormatError::Structural {
            kind: TomlSyntaxKind::Val,
            slots: 2,
            items: 2,
        };
        let message = error.to_string();
        assert!(message.contains("Val"));
        assert!(message.contains("2 slot(s)"));
    }

    #[test]
    fn test_unreachable_message_names_kind() {
        let error = FormatError::Unreachable {
            kind: TomlSyntaxKind::Newline,
        };
        assert!(error.to_string().contains("Newline"));
    }
}
