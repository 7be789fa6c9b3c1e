//! Tamari Core
//!
//! Core TOML formatting engine. This crate transforms a lossless TOML
//! syntax tree into a layout document (text fragments, breakable lines,
//! groups, indentation, conditional breaks) and renders it deterministically
//! within a line-width budget.
//!
//! Parsing is out of scope: an external parser builds the input tree (see
//! [`cst::CstBuilder`]) and hands over its root. Formatting either succeeds
//! for the whole document or fails with a [`FormatError`]; there is no
//! partial output.
//!
//! # Example
//!
//! ```rust,ignore
//! use tamari_core::{FormatterConfiguration, format_document};
//!
//! let formatted = format_document(&root, &FormatterConfiguration::default())?;
//! ```

pub mod config;
pub mod cst;
pub mod error;
pub mod result;

// Re-export commonly used types
pub use config::{FormatterConfiguration, IndentStyle};
pub use cst::{
    CstBuilder, FormatElement, Printer, PrinterOptions, TomlLanguage, TomlSyntaxElement,
    TomlSyntaxKind, TomlSyntaxNode, TomlSyntaxToken, build_document, format_document,
};
pub use error::FormatError;
pub use result::Result;

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tamari=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}
