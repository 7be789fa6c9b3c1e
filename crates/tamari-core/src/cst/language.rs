//! Rowan language implementation for TOML
//!
//! This module implements the `rowan::Language` trait for TOML, which
//! connects the [`TomlSyntaxKind`] enum to Rowan's generic CST
//! infrastructure.

use rowan::Language;

use super::syntax_kind::TomlSyntaxKind;

/// Language implementation for TOML
///
/// This is a zero-sized type that implements `rowan::Language` to provide
/// the connection between our syntax kinds and Rowan's generic tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TomlLanguage;

impl Language for TomlLanguage {
    type Kind = TomlSyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        match raw.0 {
            // Trivia
            0 => TomlSyntaxKind::Whitespace,
            1 => TomlSyntaxKind::Newline,
            2 => TomlSyntaxKind::Comment,

            // Punctuation (100-149)
            100 => TomlSyntaxKind::Equals,
            101 => TomlSyntaxKind::Dot,
            102 => TomlSyntaxKind::Comma,
            103 => TomlSyntaxKind::LBracket,
            104 => TomlSyntaxKind::RBracket,
            105 => TomlSyntaxKind::LBrace,
            106 => TomlSyntaxKind::RBrace,

            // Literals & key segments (150-199)
            150 => TomlSyntaxKind::BareKey,
            151 => TomlSyntaxKind::BasicString,
            152 => TomlSyntaxKind::LiteralString,
            153 => TomlSyntaxKind::MultilineBasicString,
            154 => TomlSyntaxKind::MultilineLiteralString,
            155 => TomlSyntaxKind::Integer,
            156 => TomlSyntaxKind::Float,
            157 => TomlSyntaxKind::Boolean,
            158 => TomlSyntaxKind::OffsetDateTime,
            159 => TomlSyntaxKind::LocalDateTime,
            160 => TomlSyntaxKind::LocalDate,
            161 => TomlSyntaxKind::LocalTime,

            // Structure nodes (200-399)
            200 => TomlSyntaxKind::Root,
            201 => TomlSyntaxKind::Expression,
            202 => TomlSyntaxKind::KeyVal,
            203 => TomlSyntaxKind::Key,
            204 => TomlSyntaxKind::Val,
            205 => TomlSyntaxKind::Array,
            206 => TomlSyntaxKind::ArrayValues,
            207 => TomlSyntaxKind::InlineTable,
            208 => TomlSyntaxKind::InlineTableKeyVals,
            209 => TomlSyntaxKind::Table,
            210 => TomlSyntaxKind::StdTable,
            211 => TomlSyntaxKind::ArrayTable,
            212 => TomlSyntaxKind::CommentNewline,

            // Unknown value - return Unknown for unrecognized kinds
            _ => {
                tracing::warn!("unknown syntax kind: {}", raw.0);
                TomlSyntaxKind::Unknown
            }
        }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        rowan::SyntaxKind(kind as u16)
    }
}

/// Syntax tree node specialized to TOML.
pub type TomlSyntaxNode = rowan::SyntaxNode<TomlLanguage>;

/// Syntax tree token specialized to TOML.
pub type TomlSyntaxToken = rowan::SyntaxToken<TomlLanguage>;

/// Either a node or a token.
pub type TomlSyntaxElement = rowan::SyntaxElement<TomlLanguage>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        // Test that we can convert back and forth without loss
        let kinds = [
            TomlSyntaxKind::Whitespace,
            TomlSyntaxKind::Comment,
            TomlSyntaxKind::Equals,
            TomlSyntaxKind::BareKey,
            TomlSyntaxKind::Root,
            TomlSyntaxKind::ArrayTable,
        ];

        for &kind in &kinds {
            let raw = TomlLanguage::kind_to_raw(kind);
            let back = TomlLanguage::kind_from_raw(raw);
            assert_eq!(kind, back, "Roundtrip failed for {kind:?}");
        }
    }

    #[test]
    fn test_kind_values() {
        // Verify specific kind values match our expectations
        assert_eq!(TomlLanguage::kind_to_raw(TomlSyntaxKind::Whitespace).0, 0);
        assert_eq!(TomlLanguage::kind_to_raw(TomlSyntaxKind::Equals).0, 100);
        assert_eq!(TomlLanguage::kind_to_raw(TomlSyntaxKind::BareKey).0, 150);
        assert_eq!(TomlLanguage::kind_to_raw(TomlSyntaxKind::Root).0, 200);
    }

    #[test]
    fn test_unknown_kind_is_absorbed() {
        let kind = TomlLanguage::kind_from_raw(rowan::SyntaxKind(9999));
        assert_eq!(kind, TomlSyntaxKind::Unknown);
    }
}
