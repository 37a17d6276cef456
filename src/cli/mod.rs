//! CLI support for sprig-lang
//!
//! Provides programmatic access to the run pipeline for embedding in
//! other tools and for the `sprig` binary.

mod run;

pub use run::{RunOptions, execute_run};

use std::io;

/// Errors that stop a run before any instruction executes.
///
/// Problems *inside* a script (undefined variables, failing instructions)
/// are diagnostics, not errors; see [`crate::diagnostics`].
#[derive(Debug)]
pub enum CliError {
    /// Script file could not be read
    Io(io::Error),
    /// Script text does not match the grammar
    Parse(crate::ParseError),
    /// Parse tree could not be translated (unknown aggregate operator)
    Translate(crate::TranslateError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::Parse(e) => write!(f, "Parse error: {}", e),
            CliError::Translate(e) => write!(f, "Translation error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Parse(e) => Some(e),
            CliError::Translate(e) => Some(e),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<crate::ParseError> for CliError {
    fn from(e: crate::ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<crate::TranslateError> for CliError {
    fn from(e: crate::TranslateError) -> Self {
        CliError::Translate(e)
    }
}
