//! CST-to-document transformation for TOML
//!
//! This module is the document builder: it walks a lossless TOML syntax
//! tree and emits the layout-instruction tree the printer renders. It can:
//! - Normalize whitespace while preserving comments
//! - Keep section comments attached to the `[table]` they introduce
//! - Break arrays over multiple lines only when they do not fit
//! - Maintain idempotency (format(format(x)) == format(x))
//!
//! Dispatch is an exhaustive match on [`TomlSyntaxKind`]: adding a grammar
//! construct without a handler is a compile-time error. Handlers are pure
//! functions of their subtree; the only state is the output being built.
//!
//! # Example
//!
//! ```rust,ignore
//! use tamari_core::cst::formatter::format_document;
//! use tamari_core::config::FormatterConfiguration;
//!
//! let formatted = format_document(&root, &FormatterConfiguration::default())?;
//! assert_eq!(formatted, "title = \"TOML example\"\n");
//! ```

use rowan::NodeOrToken;
use tracing::{debug, trace};

use super::format_element::{
    FormatElement, group, hard_line, if_break, indent, join, line, nil, sequence, soft_line,
    space, text, token,
};
use super::language::{TomlSyntaxElement, TomlSyntaxNode, TomlSyntaxToken};
use super::printer::Printer;
use super::syntax_kind::TomlSyntaxKind;
use super::trivia::trim_comment;
use crate::config::FormatterConfiguration;
use crate::error::FormatError;
use crate::result::Result;

/// Format a TOML document given the root of its syntax tree.
///
/// Builds the layout document and renders it with the configured printer.
/// Any structural violation aborts the whole document; no partial output is
/// produced.
pub fn format_document(
    root: &TomlSyntaxNode,
    config: &FormatterConfiguration,
) -> Result<String> {
    let document = build_document(root)?;
    let printer = Printer::new(config.printer_options());
    Ok(printer.print(&document))
}

/// Transform a syntax tree into a layout document.
///
/// The returned tree is consumed by [`Printer::print`]. Callers that only
/// need text can use [`format_document`] instead.
pub fn build_document(root: &TomlSyntaxNode) -> Result<FormatElement> {
    visit(root)
}

/// Dispatch on the node kind.
///
/// Token kinds never appear as nodes; reaching one here means the tree (or
/// the grouping pass) broke an invariant, which is fatal.
fn visit(node: &TomlSyntaxNode) -> Result<FormatElement> {
    match node.kind() {
        TomlSyntaxKind::Root => visit_root(node),
        TomlSyntaxKind::Expression => visit_expression(node),
        TomlSyntaxKind::KeyVal => visit_keyval(node),
        TomlSyntaxKind::Key => visit_key(node),
        TomlSyntaxKind::Val => visit_single_child(node),
        TomlSyntaxKind::Array => visit_array(node),
        TomlSyntaxKind::ArrayValues => visit_array_values(node),
        TomlSyntaxKind::InlineTable => visit_inline_table(node),
        TomlSyntaxKind::InlineTableKeyVals => visit_inline_table_keyvals(node),
        TomlSyntaxKind::Table => visit_single_child(node),
        TomlSyntaxKind::StdTable => visit_std_table(node),
        TomlSyntaxKind::ArrayTable => visit_array_table(node),
        // Comment runs inside arrays are consumed by the array handler
        TomlSyntaxKind::CommentNewline => Ok(nil()),
        TomlSyntaxKind::Whitespace
        | TomlSyntaxKind::Newline
        | TomlSyntaxKind::Comment
        | TomlSyntaxKind::Equals
        | TomlSyntaxKind::Dot
        | TomlSyntaxKind::Comma
        | TomlSyntaxKind::LBracket
        | TomlSyntaxKind::RBracket
        | TomlSyntaxKind::LBrace
        | TomlSyntaxKind::RBrace
        | TomlSyntaxKind::BareKey
        | TomlSyntaxKind::BasicString
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
        | TomlSyntaxKind::Unknown => Err(FormatError::Unreachable { kind: node.kind() }),
    }
}

/// Visit an optional child; an absent node produces the empty fragment.
///
/// This is the single absence point of the traversal: handlers never
/// null-check on their own.
fn visit_opt(node: Option<&TomlSyntaxNode>) -> Result<FormatElement> {
    match node {
        Some(node) => visit(node),
        None => Ok(nil()),
    }
}

/// Visit an ordered sequence of nodes, preserving order.
fn visit_many<I>(nodes: I) -> Result<Vec<FormatElement>>
where
    I: IntoIterator<Item = TomlSyntaxNode>,
{
    nodes.into_iter().map(|node| visit(&node)).collect()
}

/// Enforce the alternation contract: exactly one populated (non-trivia)
/// child slot holding exactly one element.
///
/// Violations mean the parser handed over a tree the grammar forbids; they
/// abort the whole print operation.
fn require_single_child(node: &TomlSyntaxNode) -> Result<TomlSyntaxElement> {
    let mut children: Vec<TomlSyntaxElement> = node
        .children_with_tokens()
        .filter(|element| !element.kind().is_trivia())
        .collect();

    let mut slots: Vec<TomlSyntaxKind> = Vec::new();
    for child in &children {
        if !slots.contains(&child.kind()) {
            slots.push(child.kind());
        }
    }

    if slots.len() == 1 && children.len() == 1 {
        Ok(children.remove(0))
    } else {
        Err(FormatError::Structural {
            kind: node.kind(),
            slots: slots.len(),
            items: children.len(),
        })
    }
}

/// Visit the single child of an alternation node.
///
/// Terminal tokens keep their exact source spelling (no re-formatting of
/// string or number literals); composite children recurse through the
/// dispatcher.
fn visit_single_child(node: &TomlSyntaxNode) -> Result<FormatElement> {
    match require_single_child(node)? {
        NodeOrToken::Node(child) => visit(&child),
        NodeOrToken::Token(child) => Ok(text(child.text(), child.text_range().start())),
    }
}

/// Top level: partition expressions into blocks, join block members with
/// single lines and blocks with blank lines, terminate with one newline.
fn visit_root(node: &TomlSyntaxNode) -> Result<FormatElement> {
    let expressions: Vec<TomlSyntaxNode> = node
        .children()
        .filter(|child| child.kind() == TomlSyntaxKind::Expression)
        .collect();

    // Empty document renders as a single trailing newline
    if expressions.is_empty() {
        return Ok(sequence(vec![line()]));
    }

    debug!(
        "building layout document for {} top-level expressions",
        expressions.len()
    );

    let blocks = split_into_blocks(expressions);
    let mut rendered = Vec::with_capacity(blocks.len());
    for block in blocks {
        let members = visit_many(block)?;
        rendered.push(join(line(), members));
    }

    let body = join(sequence(vec![line(), line()]), rendered);
    Ok(sequence(vec![body, line()]))
}

/// Partition top-level expressions into blocks.
///
/// A table header starts a new block, and the run of comment-only
/// expressions immediately before it moves with it, so section comments
/// stay attached to the section they introduce. Everything before the first
/// header (or the whole document when there is none) forms one block.
/// Concatenating the blocks reproduces the input sequence exactly.
fn split_into_blocks(expressions: Vec<TomlSyntaxNode>) -> Vec<Vec<TomlSyntaxNode>> {
    let mut blocks: Vec<Vec<TomlSyntaxNode>> = Vec::new();
    let mut current: Vec<TomlSyntaxNode> = Vec::new();

    for expression in expressions {
        if is_table(&expression) {
            let mut leading: Vec<TomlSyntaxNode> = Vec::new();
            while current.last().is_some_and(is_comment) {
                if let Some(comment) = current.pop() {
                    leading.push(comment);
                }
            }
            leading.reverse();
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            current = leading;
            current.push(expression);
        } else {
            current.push(expression);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    trace!("partitioned top-level expressions into {} blocks", blocks.len());
    blocks
}

/// A top-level expression introducing a `[table]` or `[[array-of-tables]]`
/// section.
fn is_table(expression: &TomlSyntaxNode) -> bool {
    expression
        .children()
        .any(|child| child.kind() == TomlSyntaxKind::Table)
}

/// A comment-only expression: no key/value and no table header.
fn is_comment(expression: &TomlSyntaxNode) -> bool {
    let has_construct = expression.children().any(|child| {
        matches!(
            child.kind(),
            TomlSyntaxKind::KeyVal | TomlSyntaxKind::Table
        )
    });
    !has_construct
        && expression
            .children_with_tokens()
            .any(|element| element.kind() == TomlSyntaxKind::Comment)
}

/// One of: key/value pair, table header, or bare comment, each optionally
/// carrying a trailing same-line comment.
fn visit_expression(node: &TomlSyntaxNode) -> Result<FormatElement> {
    let construct = node.children().find(|child| {
        matches!(
            child.kind(),
            TomlSyntaxKind::KeyVal | TomlSyntaxKind::Table
        )
    });
    let comment = node
        .children_with_tokens()
        .filter_map(|element| element.into_token())
        .find(|token| token.kind() == TomlSyntaxKind::Comment);

    match (construct, comment) {
        (Some(construct), Some(comment)) => Ok(sequence(vec![
            visit(&construct)?,
            space(),
            comment_text(&comment),
        ])),
        (Some(construct), None) => visit(&construct),
        (None, Some(comment)) => Ok(comment_text(&comment)),
        (None, None) => Err(FormatError::Structural {
            kind: node.kind(),
            slots: 0,
            items: 0,
        }),
    }
}

fn comment_text(comment: &TomlSyntaxToken) -> FormatElement {
    text(trim_comment(comment.text()), comment.text_range().start())
}

/// `key = value`
fn visit_keyval(node: &TomlSyntaxNode) -> Result<FormatElement> {
    let key = node
        .children()
        .find(|child| child.kind() == TomlSyntaxKind::Key);
    let val = node
        .children()
        .find(|child| child.kind() == TomlSyntaxKind::Val);
    Ok(sequence(vec![
        visit_opt(key.as_ref())?,
        token(" = "),
        visit_opt(val.as_ref())?,
    ]))
}

/// Dotted key: segments joined with `.`, quoted segments passed through as
/// their literal source text.
fn visit_key(node: &TomlSyntaxNode) -> Result<FormatElement> {
    let segments: Vec<FormatElement> = node
        .children_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| !token.kind().is_trivia() && token.kind() != TomlSyntaxKind::Dot)
        .map(|token| text(token.text(), token.text_range().start()))
        .collect();
    Ok(join(token("."), segments))
}

/// `[a.b.c]`
fn visit_std_table(node: &TomlSyntaxNode) -> Result<FormatElement> {
    let key = node
        .children()
        .find(|child| child.kind() == TomlSyntaxKind::Key);
    Ok(sequence(vec![
        token("["),
        visit_opt(key.as_ref())?,
        token("]"),
    ]))
}

/// `[[a.b.c]]`
fn visit_array_table(node: &TomlSyntaxNode) -> Result<FormatElement> {
    let key = node
        .children()
        .find(|child| child.kind() == TomlSyntaxKind::Key);
    Ok(sequence(vec![
        token("[["),
        visit_opt(key.as_ref())?,
        token("]]"),
    ]))
}

/// Array as one breaking group: `[1, 2, 3]` flat, one element per indented
/// line with a trailing comma when broken.
fn visit_array(node: &TomlSyntaxNode) -> Result<FormatElement> {
    let values = node
        .children()
        .find(|child| child.kind() == TomlSyntaxKind::ArrayValues);
    match values {
        None => Ok(sequence(vec![token("["), token("]")])),
        Some(values) => Ok(group(vec![
            token("["),
            visit(&values)?,
            soft_line(),
            token("]"),
        ])),
    }
}

/// An element of an array body, in source order.
enum ArrayItem {
    Value(FormatElement),
    Comment(FormatElement),
}

/// Array body: values joined by `,` plus a breakable line, with a
/// conditional trailing comma after the last value.
///
/// Comments between values are kept in source order, each on its own line;
/// a hard line never fits flat, so their presence forces the array to
/// break.
fn visit_array_values(node: &TomlSyntaxNode) -> Result<FormatElement> {
    let mut items: Vec<ArrayItem> = Vec::new();
    for element in node.children_with_tokens() {
        match element {
            NodeOrToken::Node(child) => match child.kind() {
                TomlSyntaxKind::Val => items.push(ArrayItem::Value(visit(&child)?)),
                TomlSyntaxKind::CommentNewline => {
                    for comment in child
                        .children_with_tokens()
                        .filter_map(|element| element.into_token())
                        .filter(|token| token.kind() == TomlSyntaxKind::Comment)
                    {
                        items.push(ArrayItem::Comment(comment_text(&comment)));
                    }
                }
                _ => {}
            },
            NodeOrToken::Token(child) => {
                if child.kind() == TomlSyntaxKind::Comment {
                    items.push(ArrayItem::Comment(comment_text(&child)));
                }
            }
        }
    }

    let has_comments = items
        .iter()
        .any(|item| matches!(item, ArrayItem::Comment(_)));
    let last_value = items
        .iter()
        .rposition(|item| matches!(item, ArrayItem::Value(_)));

    let mut parts = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            ArrayItem::Value(value) => {
                let comma = if Some(index) == last_value {
                    if_break(token(","), nil())
                } else {
                    token(",")
                };
                parts.push(sequence(vec![value, comma]));
            }
            ArrayItem::Comment(comment) => parts.push(comment),
        }
    }

    // Comments must land on their own lines, so they pin the group broken
    let (bound, separator) = if has_comments {
        (hard_line(), hard_line())
    } else {
        (soft_line(), line())
    };
    Ok(indent(vec![bound, join(separator, parts)]))
}

/// Inline table: kept on one line with single-space brace padding,
/// `{ a = 1, b = 2 }`. An empty inline table collapses to `{}`.
fn visit_inline_table(node: &TomlSyntaxNode) -> Result<FormatElement> {
    let keyvals = node
        .children()
        .find(|child| child.kind() == TomlSyntaxKind::InlineTableKeyVals);
    let inner = visit_opt(keyvals.as_ref())?;
    if inner.is_empty() {
        return Ok(sequence(vec![token("{"), token("}")]));
    }
    Ok(sequence(vec![
        token("{"),
        space(),
        inner,
        space(),
        token("}"),
    ]))
}

/// Inline table body: key/value pairs joined by `, `.
fn visit_inline_table_keyvals(node: &TomlSyntaxNode) -> Result<FormatElement> {
    let pairs = visit_many(
        node.children()
            .filter(|child| child.kind() == TomlSyntaxKind::KeyVal),
    )?;
    Ok(join(token(", "), pairs))
}
