//! Concrete Syntax Tree (CST) support for TOML
//!
//! This module hosts the lossless syntax-tree types (built on the Rowan
//! library) and the formatting pipeline over them:
//!
//! - **Input**: a [`TomlSyntaxNode`] tree supplied by an external parser,
//!   constructed through [`CstBuilder`]. The tree preserves all source
//!   information including whitespace and comments.
//! - **Transformation**: [`formatter`] walks the tree and produces a
//!   [`FormatElement`] layout document.
//! - **Rendering**: [`printer`] turns the layout document into text,
//!   deciding per group whether it fits on one line.
//!
//! The grammar is the shape an external parser must produce: a `Root` of
//! `Expression` nodes, each holding a `KeyVal`, a `Table` (`StdTable` or
//! `ArrayTable`), or a bare `Comment` token. Alternation nodes (`Val`,
//! `Table`) expose exactly one populated child.

pub mod builder;
pub mod format_element;
pub mod formatter;
pub mod language;
pub mod printer;
pub mod syntax_kind;
pub mod trivia;

pub use builder::CstBuilder;
pub use format_element::FormatElement;
pub use formatter::{build_document, format_document};
pub use language::{TomlLanguage, TomlSyntaxElement, TomlSyntaxNode, TomlSyntaxToken};
pub use printer::{Printer, PrinterOptions};
pub use syntax_kind::TomlSyntaxKind;
pub use trivia::{collect_comments, trim_comment};
