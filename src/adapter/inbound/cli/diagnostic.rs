//! Miette-based error diagnostics for CLI error presentation.
//!
//! Renders configuration parse errors with the offending TOML highlighted.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, Error};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(evcalc::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Configuration file content.
    #[source_code]
    pub src: NamedSource<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Build a diagnostic for a TOML parse failure, if the error carries a span.
    #[must_use]
    pub fn from_error(name: &str, content: &str, error: &Error) -> Option<Self> {
        let Error::Config(ConfigError::Parse(parse)) = error else {
            return None;
        };
        let range = parse.span()?;

        Some(Self {
            message: parse.message().to_string(),
            src: NamedSource::new(name, content.to_string()),
            span: (range.start, range.end.saturating_sub(range.start)).into(),
            help: Some("sections are [logging], [kelly] and [telegram]".to_string()),
        })
    }
}
