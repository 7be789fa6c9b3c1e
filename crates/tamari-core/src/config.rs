//! Configuration types for tamari
//!
//! Embedding tools load and deserialize these (from JSON or YAML config
//! files); this crate only defines the shape and the conversion to concrete
//! printer options. All fields are optional so partial configurations merge
//! cleanly with the defaults.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cst::printer::PrinterOptions;

/// Indent style for formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// Use spaces for indentation
    Spaces,
    /// Use tabs for indentation
    Tabs,
}

/// Formatter configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormatterConfiguration {
    /// Enable/disable formatter
    #[schemars(description = "Enable or disable the formatter")]
    pub enabled: Option<bool>,

    /// Indent style (spaces or tabs)
    #[schemars(description = "Indentation style: 'spaces' or 'tabs'")]
    pub indent_style: Option<IndentStyle>,

    /// Indentation size in spaces (when indent_style is 'spaces')
    #[schemars(description = "Number of spaces for indentation")]
    pub indent_size: Option<usize>,

    /// Maximum line width
    #[schemars(description = "Maximum line width before wrapping")]
    pub line_width: Option<usize>,
}

impl Default for FormatterConfiguration {
    fn default() -> Self {
        Self {
            enabled: Some(true),
            indent_style: Some(IndentStyle::Spaces),
            indent_size: Some(2),
            line_width: Some(80),
        }
    }
}

impl FormatterConfiguration {
    /// Whether formatting is enabled (defaults to true when unset).
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Resolve into concrete printer options, filling unset fields with the
    /// printer defaults.
    pub fn printer_options(&self) -> PrinterOptions {
        let defaults = PrinterOptions::default();
        PrinterOptions {
            line_width: self.line_width.unwrap_or(defaults.line_width),
            indent_size: self.indent_size.unwrap_or(defaults.indent_size),
            use_tabs: matches!(self.indent_style, Some(IndentStyle::Tabs)),
            tab_width: defaults.tab_width,
        }
    }
}
