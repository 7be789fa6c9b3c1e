//! Printer for converting format element trees to formatted text
//!
//! The printer resolves every [`FormatElement::Group`] once: it measures the
//! group's flat rendering (Unicode-aware) against the remaining line budget
//! and either keeps the whole group on one line or breaks every line inside
//! it. Rendering is deterministic: the same tree and options always produce
//! the same text.

use unicode_width::UnicodeWidthChar;

use super::format_element::FormatElement;

/// Printer configuration
#[derive(Debug, Clone)]
pub struct PrinterOptions {
    /// Maximum line width before wrapping
    pub line_width: usize,

    /// Number of spaces per indentation level
    pub indent_size: usize,

    /// Whether to use tabs for indentation
    pub use_tabs: bool,

    /// Tab width for width calculations
    pub tab_width: usize,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            line_width: 80,
            indent_size: 2,
            use_tabs: false,
            tab_width: 4,
        }
    }
}

/// How line breaks render inside the region currently being printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Flat,
    Break,
}

/// Renders a format element tree to text.
pub struct Printer {
    options: PrinterOptions,
}

impl Printer {
    /// Create a new printer with the given options
    pub fn new(options: PrinterOptions) -> Self {
        Self { options }
    }

    /// Print a document tree to a string.
    ///
    /// The root renders in broken mode: breakable lines outside any group
    /// are real newlines.
    pub fn print(&self, document: &FormatElement) -> String {
        let mut out = String::with_capacity(256);
        let mut column = 0usize;
        let mut work: Vec<(usize, Mode, &FormatElement)> = vec![(0, Mode::Break, document)];

        while let Some((level, mode, element)) = work.pop() {
            match element {
                FormatElement::Token(text) => {
                    // ASCII by construction, so bytes equal columns
                    out.push_str(text);
                    column += text.len();
                }

                FormatElement::Text { text, .. } => {
                    self.push_text(&mut out, &mut column, text);
                }

                FormatElement::Space => {
                    out.push(' ');
                    column += 1;
                }

                FormatElement::Line => match mode {
                    Mode::Flat => {
                        out.push(' ');
                        column += 1;
                    }
                    Mode::Break => self.break_line(&mut out, &mut column, level),
                },

                FormatElement::SoftLine => {
                    if mode == Mode::Break {
                        self.break_line(&mut out, &mut column, level);
                    }
                }

                FormatElement::HardLine => self.break_line(&mut out, &mut column, level),

                FormatElement::Indent(children) => {
                    for child in children.iter().rev() {
                        work.push((level + 1, mode, child));
                    }
                }

                FormatElement::IfBreak { broken, flat } => {
                    let chosen = match mode {
                        Mode::Break => broken,
                        Mode::Flat => flat,
                    };
                    work.push((level, mode, chosen));
                }

                FormatElement::Group(children) => {
                    let budget = self.options.line_width.saturating_sub(column);
                    let group_mode = if self.fits(budget as isize, children) {
                        Mode::Flat
                    } else {
                        Mode::Break
                    };
                    for child in children.iter().rev() {
                        work.push((level, group_mode, child));
                    }
                }

                FormatElement::Sequence(children) => {
                    for child in children.iter().rev() {
                        work.push((level, mode, child));
                    }
                }
            }
        }

        out
    }

    /// Whether the elements fit within `remaining` columns when rendered flat.
    ///
    /// A hard line never fits; text containing a newline is measured up to
    /// the break, since the rest starts a fresh line.
    fn fits(&self, mut remaining: isize, elements: &[FormatElement]) -> bool {
        let mut work: Vec<&FormatElement> = elements.iter().rev().collect();

        while let Some(element) = work.pop() {
            if remaining < 0 {
                return false;
            }
            match element {
                FormatElement::Token(text) => remaining -= text.len() as isize,
                FormatElement::Text { text, .. } => match text.find('\n') {
                    Some(break_at) => {
                        remaining -= self.text_width(&text[..break_at]) as isize;
                        return remaining >= 0;
                    }
                    None => remaining -= self.text_width(text) as isize,
                },
                FormatElement::Space | FormatElement::Line => remaining -= 1,
                FormatElement::SoftLine => {}
                FormatElement::HardLine => return false,
                FormatElement::IfBreak { flat, .. } => work.push(flat),
                FormatElement::Indent(children)
                | FormatElement::Group(children)
                | FormatElement::Sequence(children) => {
                    for child in children.iter().rev() {
                        work.push(child);
                    }
                }
            }
        }

        remaining >= 0
    }

    /// Append dynamic text, tracking the column Unicode-aware.
    fn push_text(&self, out: &mut String, column: &mut usize, text: &str) {
        for c in text.chars() {
            match c {
                '\n' => {
                    out.push('\n');
                    *column = 0;
                }
                '\r' => {}
                '\t' => {
                    out.push('\t');
                    *column += self.options.tab_width;
                }
                c => {
                    out.push(c);
                    *column += c.width().unwrap_or(0);
                }
            }
        }
    }

    /// Start a new line at the given indentation level.
    fn break_line(&self, out: &mut String, column: &mut usize, level: usize) {
        out.push('\n');
        if self.options.use_tabs {
            for _ in 0..level {
                out.push('\t');
            }
            *column = level * self.options.tab_width;
        } else {
            let width = level * self.options.indent_size;
            for _ in 0..width {
                out.push(' ');
            }
            *column = width;
        }
    }

    /// Display width of a single-line chunk of text.
    fn text_width(&self, text: &str) -> usize {
        text.chars()
            .map(|c| {
                if c == '\t' {
                    self.options.tab_width
                } else {
                    c.width().unwrap_or(0)
                }
            })
            .sum()
    }
}
