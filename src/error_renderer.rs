//! Diagnostic rendering using miette
//!
//! This module renders user-facing errors (anything implementing
//! [`miette::Diagnostic`]) with their code, cause chain and help text.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, ThemeCharacters, ThemeStyles};
use std::io::{self, Write};

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The character set to use for rendering.
    /// Defaults to Unicode for rich visual output.
    pub charset: CharSet,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: true,
            charset: CharSet::Unicode,
        }
    }
}

impl RenderConfig {
    fn theme(&self) -> GraphicalTheme {
        let characters = match self.charset {
            CharSet::Unicode => ThemeCharacters::unicode(),
            CharSet::Ascii => ThemeCharacters::ascii(),
        };
        let styles = if self.color {
            ThemeStyles::ansi()
        } else {
            ThemeStyles::none()
        };
        GraphicalTheme { characters, styles }
    }
}

/// Render a diagnostic to a writer with the given configuration.
///
/// # Example
/// ```
/// use monkey::{RenderConfig, render_error_to};
///
/// let error = miette::miette!("something broke");
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&*error, &mut buf, &config).unwrap();
/// assert!(String::from_utf8_lossy(&buf).contains("something broke"));
/// ```
pub fn render_error_to(
    error: &dyn Diagnostic,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> io::Result<()> {
    let handler = GraphicalReportHandler::new_themed(config.theme());

    let mut rendered = String::new();
    handler
        .render_report(&mut rendered, error)
        .map_err(|_| io::Error::other("failed to format diagnostic"))?;

    writer.write_all(rendered.as_bytes())?;
    writer.flush()
}
