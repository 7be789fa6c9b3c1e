//! Green-tree builder for TOML syntax trees
//!
//! External parsers construct conforming trees through this wrapper instead
//! of depending on rowan directly. Tests use it the same way to assemble
//! input trees by hand.
//!
//! # Example
//!
//! ```rust,ignore
//! use tamari_core::cst::{CstBuilder, TomlSyntaxKind};
//!
//! let mut builder = CstBuilder::new();
//! builder.start_node(TomlSyntaxKind::Root);
//! builder.start_node(TomlSyntaxKind::Expression);
//! builder.token(TomlSyntaxKind::Comment, "# hello");
//! builder.finish_node();
//! builder.finish_node();
//! let root = builder.finish();
//! assert_eq!(root.text().to_string(), "# hello");
//! ```

use rowan::{GreenNodeBuilder, Language};

use super::language::{TomlLanguage, TomlSyntaxNode};
use super::syntax_kind::TomlSyntaxKind;

/// Incremental builder for TOML syntax trees.
///
/// Nodes are opened with [`start_node`](CstBuilder::start_node), filled with
/// tokens and child nodes, and closed with
/// [`finish_node`](CstBuilder::finish_node). The resulting tree is lossless:
/// its text is exactly the concatenation of the token images fed in.
#[derive(Default)]
pub struct CstBuilder {
    inner: GreenNodeBuilder<'static>,
}

impl CstBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a composite node of the given kind.
    pub fn start_node(&mut self, kind: TomlSyntaxKind) {
        self.inner.start_node(TomlLanguage::kind_to_raw(kind));
    }

    /// Add a terminal token with its raw source image.
    pub fn token(&mut self, kind: TomlSyntaxKind, text: &str) {
        self.inner.token(TomlLanguage::kind_to_raw(kind), text);
    }

    /// Close the most recently opened node.
    pub fn finish_node(&mut self) {
        self.inner.finish_node();
    }

    /// Finish building and return the root node.
    pub fn finish(self) -> TomlSyntaxNode {
        TomlSyntaxNode::new_root(self.inner.finish())
    }
}
