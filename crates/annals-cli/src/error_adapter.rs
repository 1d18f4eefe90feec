//! Error adapter for converting AnnalsError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Dataset Errors
//!
//! [`AnnalsError::Input`] keeps the dataset source, so JSON errors are
//! rendered with a label pointing at the reported line and column.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use annals::AnnalsError;

/// Adapter for a dataset JSON error.
///
/// This adapter wraps a [`serde_json::Error`] together with the dataset
/// source and implements [`MietteDiagnostic`] to enable rich error formatting
/// in the CLI.
pub struct InputAdapter<'a> {
    /// The wrapped JSON error
    err: &'a serde_json::Error,
    /// Dataset source for displaying snippets
    src: &'a str,
}

impl<'a> InputAdapter<'a> {
    /// Create a new input adapter.
    pub fn new(err: &'a serde_json::Error, src: &'a str) -> Self {
        Self { err, src }
    }

    /// Returns the byte span the error points at.
    fn span(&self) -> SourceSpan {
        let offset = byte_offset(self.src, self.err.line(), self.err.column());
        let len = self.src[offset..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(0);
        SourceSpan::new(offset.into(), len)
    }
}

impl fmt::Debug for InputAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for InputAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid dataset: {}", self.err)
    }
}

impl std::error::Error for InputAdapter<'_> {}

impl MietteDiagnostic for InputAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err.classify() {
            serde_json::error::Category::Syntax => "annals::input::syntax",
            serde_json::error::Category::Eof => "annals::input::eof",
            serde_json::error::Category::Data => "annals::input::data",
            serde_json::error::Category::Io => "annals::input::io",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err.classify() {
            serde_json::error::Category::Data => {
                "a dataset holds either `nodes` and `edges`, or `agents` and `events`"
            }
            serde_json::error::Category::Eof => "the document ends before it is complete",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.err.line() == 0 {
            return None;
        }
        let label = LabeledSpan::new_primary_with_span(Some("here".to_string()), self.span());
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for non-input [`AnnalsError`] variants.
///
/// This adapter handles errors that don't have rich diagnostic information,
/// such as I/O errors, graph errors, layout errors, and configuration errors.
pub struct ErrorAdapter<'a>(pub &'a AnnalsError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            AnnalsError::Io(_) => "annals::io",
            AnnalsError::Input { .. } => return None,
            AnnalsError::Matrix(_) => "annals::matrix",
            AnnalsError::Graph(_) => "annals::graph",
            AnnalsError::Layout(_) => "annals::layout",
            AnnalsError::Config(_) => "annals::config",
            AnnalsError::Output(_) => "annals::output",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            AnnalsError::Layout(_) => Some(Box::new(
                "set a positive `width` and `height` in the [layout] section",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a dataset diagnostic or a non-diagnostic error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A dataset error with source location information.
    Input(InputAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Input(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Input(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Input(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Input(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Input(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Input(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a 1-based line and column reported by serde_json into a byte offset.
///
/// The column counts bytes within the line; offsets are clamped to the source
/// length and moved back onto a character boundary.
fn byte_offset(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let mut offset = (line_start + column.saturating_sub(1)).min(src.len());
    while !src.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Convert an [`AnnalsError`] into a list of reportable errors.
pub fn to_reportables(err: &AnnalsError) -> Vec<Reportable<'_>> {
    match err {
        AnnalsError::Input { err, src } => vec![Reportable::Input(InputAdapter::new(err, src))],
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
