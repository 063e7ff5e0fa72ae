//! Common types and utilities for mlt commands.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{MltError, Result};

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Where a command reads its source text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    /// A file on disk.
    File(PathBuf),
    /// Standard input.
    Stdin,
    /// Source text given on the command line.
    Inline(String),
}

impl SourceInput {
    /// Build a source input from an optional path and an optional inline
    /// expression. Exactly one of the two must be present.
    pub fn from_args(path: Option<PathBuf>, expr: Option<String>) -> Result<Self> {
        match (path, expr) {
            (Some(_), Some(_)) => Err(MltError::Validation(
                "Pass either a file or --expr, not both".to_string(),
            )),
            (None, None) => Err(MltError::Validation(
                "No input specified: pass a file, '-' for stdin, or --expr".to_string(),
            )),
            (None, Some(expr)) => Ok(Self::Inline(expr)),
            (Some(path), None) if path.as_os_str() == STDIN_PATH => Ok(Self::Stdin),
            (Some(path), None) => Ok(Self::File(path)),
        }
    }

    /// Returns the label used for this input in diagnostics.
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
            Self::Inline(_) => "<expr>".to_string(),
        }
    }

    /// Reads the complete source text.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::File(path) => read_source_file(path),
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
            Self::Inline(expr) => Ok(expr.clone()),
        }
    }
}

/// Reads a source file, reporting missing files as validation errors.
pub fn read_source_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(MltError::Validation(format!(
            "Input path does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(MltError::Validation(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }

    tracing::debug!(path = %path.display(), "reading source");
    Ok(std::fs::read_to_string(path)?)
}
