//! Check command implementation.
//!
//! Scans every given file to completion and reports, per file, either the
//! token count or the first lexical error.

use std::io::Write;
use std::path::{Path, PathBuf};

use mathlang_lex::Scanner;

use crate::commands::common::read_source_file;
use crate::error::{MltError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to check.
    pub files: Vec<PathBuf>,
}

/// Outcome of checking a set of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Number of files that scanned cleanly.
    pub passed: usize,
    /// Number of files with a lexical error.
    pub failed: usize,
}

/// Scans one file, returning its token count.
fn check_file(path: &Path) -> Result<usize> {
    let source = read_source_file(path)?;
    let mut count = 0;
    for token in Scanner::new(source) {
        token.map_err(|source| MltError::Lex {
            path: path.display().to_string(),
            source,
        })?;
        count += 1;
    }
    Ok(count)
}

/// Run the check command.
///
/// Lexical errors are reported and counted; I/O and validation errors abort
/// the whole run.
///
/// # Returns
/// * `Result<CheckSummary>` - The summary when every file scanned cleanly,
///   or `MltError::CheckFailed` otherwise
pub fn run_check(args: CheckArgs, out: &mut impl Write) -> Result<CheckSummary> {
    if args.files.is_empty() {
        return Err(MltError::Validation("No input files specified".to_string()));
    }

    let mut summary = CheckSummary::default();

    for path in &args.files {
        match check_file(path) {
            Ok(count) => {
                writeln!(out, "{}: ok ({} tokens)", path.display(), count)?;
                summary.passed += 1;
            }
            Err(err @ MltError::Lex { .. }) => {
                tracing::debug!(path = %path.display(), "check failed");
                writeln!(out, "{}", err)?;
                summary.failed += 1;
            }
            Err(err) => return Err(err),
        }
    }

    if summary.failed > 0 {
        return Err(MltError::CheckFailed {
            failed: summary.failed,
            total: args.files.len(),
        });
    }

    Ok(summary)
}
