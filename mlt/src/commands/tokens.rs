//! Tokens command implementation.
//!
//! Scans a single source and prints its tokens, either one per line or as a
//! JSON array.

use std::io::Write;
use std::time::Instant;

use mathlang_lex::{Location, Scanner, Token};
use serde::Serialize;

use crate::commands::common::SourceInput;
use crate::config::OutputFormat;
use crate::error::{MltError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source to scan.
    pub input: SourceInput,
    /// Output format.
    pub format: OutputFormat,
    /// Prefix each token with its line and column.
    pub positions: bool,
}

/// A token as written in JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord {
    /// Token kind: `string`, `name`, `symbol` or `number`.
    pub kind: &'static str,
    /// Token payload.
    pub value: TokenValue,
    /// Line where the token starts (1-based).
    pub line: u32,
    /// Column where the token starts (1-based).
    pub column: u32,
}

/// Payload of a [`TokenRecord`].
///
/// JSON has no representation for infinite numbers, so a number too large
/// for `f64` is written as its display text (`"inf"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Text of a string literal, name or symbol.
    Text(String),
    /// Value of a number.
    Number(f64),
}

impl TokenRecord {
    /// Builds a record from a token and the location it starts at.
    pub fn new(location: Location, token: Token) -> Self {
        let kind = token.kind().as_str();
        let value = match token {
            Token::StringLiteral(text) | Token::Name(text) => TokenValue::Text(text),
            Token::Symbol(c) => TokenValue::Text(c.to_string()),
            Token::Number(n) if n.is_finite() => TokenValue::Number(n),
            Token::Number(n) => TokenValue::Text(n.to_string()),
        };
        Self {
            kind,
            value,
            line: location.line,
            column: location.column,
        }
    }
}

/// Scans the whole input, returning each token with its start location.
fn scan(input: &SourceInput) -> Result<Vec<(Location, Token)>> {
    let source = input.read()?;
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    while let Some(located) = scanner
        .next_located()
        .map_err(|source| MltError::Lex {
            path: input.label(),
            source,
        })?
    {
        tokens.push(located);
    }

    Ok(tokens)
}

/// Writes one line per token.
fn write_text(out: &mut impl Write, tokens: &[(Location, Token)], positions: bool) -> Result<()> {
    for (location, token) in tokens {
        if positions {
            writeln!(out, "{}\t{}\t{}", location, token.kind(), token)?;
        } else {
            writeln!(out, "{}\t{}", token.kind(), token)?;
        }
    }
    Ok(())
}

/// Writes a pretty-printed JSON array of token records.
fn write_json(out: &mut impl Write, tokens: Vec<(Location, Token)>) -> Result<()> {
    let records: Vec<TokenRecord> = tokens
        .into_iter()
        .map(|(location, token)| TokenRecord::new(location, token))
        .collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}

/// Run the tokens command.
///
/// # Returns
/// * `Result<usize>` - The number of tokens written
pub fn run_tokens(args: TokensArgs, out: &mut impl Write) -> Result<usize> {
    let start_time = Instant::now();
    let tokens = scan(&args.input)?;
    let count = tokens.len();

    match args.format {
        OutputFormat::Text => write_text(out, &tokens, args.positions)?,
        OutputFormat::Json => write_json(out, tokens)?,
    }

    tracing::debug!(
        input = %args.input.label(),
        tokens = count,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "scanned source"
    );
    Ok(count)
}
