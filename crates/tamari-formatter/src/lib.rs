//! Tamari Formatter
//!
//! Provides formatting capabilities for TOML files.
//! This crate wraps the formatter functionality from tamari-core
//! and provides a clean public API.

pub use tamari_core::{
    CstBuilder, FormatElement, FormatError, FormatterConfiguration, IndentStyle, Printer,
    PrinterOptions, Result, TomlLanguage, TomlSyntaxElement, TomlSyntaxKind, TomlSyntaxNode,
    TomlSyntaxToken, build_document, format_document,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use super::{
        CstBuilder, FormatError, FormatterConfiguration, PrinterOptions, TomlSyntaxKind,
        build_document, format_document,
    };
}
