//! Comment text utilities
//!
//! Comments are the one piece of trivia a formatter must carry into its
//! output. The helpers here normalize raw comment images and collect the
//! comment tokens beneath a node in source order.

use super::language::{TomlSyntaxNode, TomlSyntaxToken};
use super::syntax_kind::TomlSyntaxKind;

/// Trim surrounding whitespace from a raw comment image.
///
/// The `#` marker and interior spacing stay verbatim; only layout whitespace
/// picked up by the lexer is dropped. Trimming twice is a no-op, which keeps
/// repeated formatting stable.
pub fn trim_comment(image: &str) -> &str {
    image.trim()
}

/// Collect the comment tokens beneath `node`, in source order.
pub fn collect_comments(node: &TomlSyntaxNode) -> Vec<TomlSyntaxToken> {
    node.descendants_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| token.kind() == TomlSyntaxKind::Comment)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::builder::CstBuilder;

    #[test]
    fn test_trim_comment() {
        assert_eq!(trim_comment("# note"), "# note");
        assert_eq!(trim_comment("  # note \t"), "# note");
        assert_eq!(trim_comment("#no space"), "#no space");
        assert_eq!(trim_comment("#"), "#");
        // Interior spacing is untouched
        assert_eq!(trim_comment("#  double  spaced  "), "#  double  spaced");
    }

    #[test]
    fn test_collect_comments_in_order() {
        let mut builder = CstBuilder::new();
        builder.start_node(TomlSyntaxKind::Root);
        builder.start_node(TomlSyntaxKind::Expression);
        builder.token(TomlSyntaxKind::Comment, "# first");
        builder.finish_node();
        builder.token(TomlSyntaxKind::Newline, "\n");
        builder.start_node(TomlSyntaxKind::Expression);
        builder.token(TomlSyntaxKind::Comment, "# second");
        builder.finish_node();
        builder.finish_node();
        let root = builder.finish();

        let comments = collect_comments(&root);
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text(), "# first");
        assert_eq!(comments[1].text(), "# second");
    }
}
