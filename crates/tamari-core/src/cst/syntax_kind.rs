//! Syntax kinds for the TOML concrete syntax tree
//!
//! Every token and node kind an external parser may place in a tamari CST.
//! Token kinds are terminals carrying a raw source image; node kinds are the
//! composite grammar constructs the document builder dispatches on.

/// All token and node kinds of the TOML grammar.
///
/// The discriminant values are part of the contract with external parsers:
/// `rowan` stores them as raw `u16`s inside the green tree, so they must
/// stay stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum TomlSyntaxKind {
    // Trivia
    Whitespace = 0,
    Newline = 1,
    Comment = 2,

    // Punctuation (100-149)
    Equals = 100,
    Dot = 101,
    Comma = 102,
    LBracket = 103,
    RBracket = 104,
    LBrace = 105,
    RBrace = 106,

    // Literals & key segments (150-199)
    BareKey = 150,
    BasicString = 151,
    LiteralString = 152,
    MultilineBasicString = 153,
    MultilineLiteralString = 154,
    Integer = 155,
    Float = 156,
    Boolean = 157,
    OffsetDateTime = 158,
    LocalDateTime = 159,
    LocalDate = 160,
    LocalTime = 161,

    // Structure nodes (200-399)
    Root = 200,
    Expression = 201,
    KeyVal = 202,
    Key = 203,
    Val = 204,
    Array = 205,
    ArrayValues = 206,
    InlineTable = 207,
    InlineTableKeyVals = 208,
    Table = 209,
    StdTable = 210,
    ArrayTable = 211,
    CommentNewline = 212,

    // Special tokens (400+)
    Unknown = 402,
}

impl TomlSyntaxKind {
    /// Whitespace and newlines carry no layout meaning of their own; the
    /// document builder skips them everywhere. Comments are content, not
    /// trivia: a formatter must carry them into the output.
    pub fn is_trivia(self) -> bool {
        matches!(self, TomlSyntaxKind::Whitespace | TomlSyntaxKind::Newline)
    }

    /// Terminal kinds whose raw image is a complete TOML value.
    pub fn is_value_literal(self) -> bool {
        matches!(
            self,
            TomlSyntaxKind::BasicString
                | TomlSyntaxKind::LiteralString
                | TomlSyntaxKind::MultilineBasicString
                | TomlSyntaxKind::MultilineLiteralString
                | TomlSyntaxKind::Integer
                | TomlSyntaxKind::Float
                | TomlSyntaxKind::Boolean
                | TomlSyntaxKind::OffsetDateTime
                | TomlSyntaxKind::LocalDateTime
                | TomlSyntaxKind::LocalDate
                | TomlSyntaxKind::LocalTime
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivia_classification() {
        assert!(TomlSyntaxKind::Whitespace.is_trivia());
        assert!(TomlSyntaxKind::Newline.is_trivia());
        assert!(!TomlSyntaxKind::Comment.is_trivia());
        assert!(!TomlSyntaxKind::BareKey.is_trivia());
    }

    #[test]
    fn test_value_literals() {
        assert!(TomlSyntaxKind::Integer.is_value_literal());
        assert!(TomlSyntaxKind::LocalDate.is_value_literal());
        assert!(!TomlSyntaxKind::BareKey.is_value_literal());
        assert!(!TomlSyntaxKind::Array.is_value_literal());
    }
}
