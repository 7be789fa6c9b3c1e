//! Format elements for building formatted output
//!
//! This module provides the IR (Intermediate Representation) the document
//! builder produces and the printer consumes. It keeps the distinction
//! between:
//! - Static, ASCII-only text (punctuation the formatter emits itself)
//! - Dynamic text lifted verbatim out of the source (keys, literals, comments)
//!
//! Line breaks are *breakable*: how a [`FormatElement::Line`] or
//! [`FormatElement::SoftLine`] renders is decided per enclosing
//! [`FormatElement::Group`] by the printer, all at once.
//!
//! # Example
//!
//! ```rust,ignore
//! use tamari_core::cst::format_element::{group, indent, line, soft_line, token};
//!
//! // [1, 2] when it fits, one element per line when it does not
//! let array = group(vec![
//!     token("["),
//!     indent(vec![soft_line(), /* values joined by "," + line */]),
//!     soft_line(),
//!     token("]"),
//! ]);
//! ```

use rowan::TextSize;

/// Format element - building block for formatted output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatElement {
    /// Static compile-time text: punctuation and separators
    ///
    /// Requirements:
    /// - Must be ASCII only (no Unicode)
    /// - Cannot contain \n, \r, \t (use Line/Space instead)
    Token(&'static str),

    /// Dynamic text from source: keys, value literals, comments
    ///
    /// Can contain Unicode and, for multi-line string literals, line breaks.
    /// Tracks its source position for diagnostics.
    Text {
        text: Box<str>,
        source_position: TextSize,
    },

    /// Breakable line: a space when the enclosing group is flat, a newline
    /// when it breaks
    Line,

    /// Zero-width breakable line: nothing when flat, a newline when broken
    SoftLine,

    /// Unconditional newline; a group containing one can never render flat
    HardLine,

    /// Space - single ASCII space
    Space,

    /// Children rendered one indentation level deeper after each line break
    Indent(Vec<FormatElement>),

    /// Picks `broken` when the enclosing group breaks, `flat` otherwise
    IfBreak {
        broken: Box<FormatElement>,
        flat: Box<FormatElement>,
    },

    /// Unit of breaking: the printer decides once, for the whole group,
    /// whether its line breaks render as spaces/nothing or as newlines
    Group(Vec<FormatElement>),

    /// Sequence of elements
    Sequence(Vec<FormatElement>),
}

impl FormatElement {
    /// Check if this element is empty (contains no actual content)
    pub fn is_empty(&self) -> bool {
        match self {
            FormatElement::Token(s) => s.is_empty(),
            FormatElement::Text { text, .. } => text.is_empty(),
            FormatElement::Line
            | FormatElement::SoftLine
            | FormatElement::HardLine
            | FormatElement::Space => false,
            FormatElement::IfBreak { broken, flat } => broken.is_empty() && flat.is_empty(),
            FormatElement::Indent(elements)
            | FormatElement::Group(elements)
            | FormatElement::Sequence(elements) => elements.iter().all(|e| e.is_empty()),
        }
    }
}

/// Builder API: Create token for static, ASCII-only text
///
/// Use this for punctuation and separators the formatter emits itself.
///
/// # Panics
///
/// In debug builds, panics if `text` contains non-ASCII characters or
/// newlines/tabs.
pub fn token(text: &'static str) -> FormatElement {
    debug_assert!(text.is_ascii(), "Token must be ASCII only, got: {:?}", text);
    debug_assert!(
        !text.contains(['\n', '\r', '\t']),
        "Token cannot contain newlines/tabs, use Line/Space instead: {:?}",
        text
    );
    FormatElement::Token(text)
}

/// Builder API: Create text element from dynamic source content
///
/// Use this for keys, value literals, and comments lifted from the source.
pub fn text(text: &str, position: TextSize) -> FormatElement {
    FormatElement::Text {
        text: text.into(),
        source_position: position,
    }
}

/// Builder API: Create a breakable line
///
/// Renders as a space when the enclosing group is flat, a newline when it
/// breaks. Outside any group it always breaks.
pub fn line() -> FormatElement {
    FormatElement::Line
}

/// Builder API: Create a zero-width breakable line
pub fn soft_line() -> FormatElement {
    FormatElement::SoftLine
}

/// Builder API: Create an unconditional newline
///
/// A group containing one never fits flat.
pub fn hard_line() -> FormatElement {
    FormatElement::HardLine
}

/// Builder API: Create a space
pub fn space() -> FormatElement {
    FormatElement::Space
}

/// Builder API: Indent the given elements one level deeper
pub fn indent(elements: Vec<FormatElement>) -> FormatElement {
    FormatElement::Indent(elements)
}

/// Builder API: Conditional content, resolved by the enclosing group's mode
pub fn if_break(broken: FormatElement, flat: FormatElement) -> FormatElement {
    FormatElement::IfBreak {
        broken: Box::new(broken),
        flat: Box::new(flat),
    }
}

/// Builder API: Group elements together
///
/// Groups stay on one line when their flat rendering fits the width budget.
pub fn group(elements: Vec<FormatElement>) -> FormatElement {
    FormatElement::Group(elements)
}

/// Builder API: Create a sequence of elements
pub fn sequence(elements: Vec<FormatElement>) -> FormatElement {
    FormatElement::Sequence(elements)
}

/// Builder API: The empty element
///
/// Returned by the traversal for absent optional children.
pub fn nil() -> FormatElement {
    FormatElement::Sequence(Vec::new())
}

/// Builder API: Join elements with a separator
pub fn join(separator: FormatElement, elements: Vec<FormatElement>) -> FormatElement {
    let mut joined = Vec::with_capacity(elements.len().saturating_mul(2));
    for (index, element) in elements.into_iter().enumerate() {
        if index > 0 {
            joined.push(separator.clone());
        }
        joined.push(element);
    }
    FormatElement::Sequence(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let element = token("[");
        assert_eq!(element, FormatElement::Token("["));
    }

    #[test]
    fn test_text_creation() {
        let element = text("server", TextSize::from(10));
        match element {
            FormatElement::Text {
                text,
                source_position,
            } => {
                assert_eq!(&*text, "server");
                assert_eq!(source_position, TextSize::from(10));
            }
            _ => panic!("Expected Text variant"),
        }
    }

    #[test]
    #[should_panic(expected = "Token must be ASCII")]
    fn test_token_rejects_unicode() {
        token("dépôt");
    }

    #[test]
    #[should_panic(expected = "Token cannot contain newlines")]
    fn test_token_rejects_newlines() {
        token("[\n");
    }

    #[test]
    fn test_is_empty() {
        assert!(token("").is_empty());
        assert!(!token("[").is_empty());
        assert!(nil().is_empty());
        assert!(sequence(vec![nil(), nil()]).is_empty());
        assert!(!line().is_empty());
        assert!(!sequence(vec![nil(), space()]).is_empty());
    }

    #[test]
    fn test_join_intersperses_separator() {
        let joined = join(
            token("."),
            vec![
                text("a", TextSize::from(0)),
                text("b", TextSize::from(2)),
                text("c", TextSize::from(4)),
            ],
        );
        match joined {
            FormatElement::Sequence(elements) => {
                assert_eq!(elements.len(), 5);
                assert_eq!(elements[1], FormatElement::Token("."));
                assert_eq!(elements[3], FormatElement::Token("."));
            }
            _ => panic!("Expected Sequence variant"),
        }
    }

    #[test]
    fn test_join_of_one_has_no_separator() {
        let joined = join(token("."), vec![text("a", TextSize::from(0))]);
        match joined {
            FormatElement::Sequence(elements) => assert_eq!(elements.len(), 1),
            _ => panic!("Expected Sequence variant"),
        }
    }
}
