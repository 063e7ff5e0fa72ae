//! mlt - Command-line tool for the math language.
//!
//! This is the main entry point for the mlt CLI application.
//! It uses clap for argument parsing and dispatches to the scanner-backed
//! command handlers.

mod commands;
mod config;
mod error;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{common::SourceInput, run_check, run_tokens, CheckArgs, TokensArgs};
use config::{Config, OutputFormat};
use error::{MltError, Result};

/// mlt - scan math language sources
///
/// mlt runs the math language scanner over source files or inline
/// expressions and prints the resulting tokens or lexical errors.
#[derive(Parser, Debug)]
#[command(name = "mlt")]
#[command(author = "Mathlang Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan math language sources", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the mlt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a source
    ///
    /// Scans a file, standard input ('-') or an inline expression and prints
    /// one token per line, or a JSON array with --format json.
    Tokens(TokensCommand),

    /// Check that source files scan without errors
    ///
    /// Scans every file to the end and reports the first lexical error of
    /// each failing file.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file to scan ('-' reads standard input)
    file: Option<PathBuf>,

    /// Scan this source text instead of a file
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Prefix each token with line:column
    #[arg(long)]
    positions: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Main entry point for the mlt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration, sets up logging and runs the selected command.
fn run(cli: Cli) -> Result<()> {
    let (config, config_path) = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;
    if let Some(path) = &config_path {
        tracing::debug!(path = %path.display(), "loaded configuration");
    }

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to standard error so that token output on standard output stays
/// machine-readable.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MltError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Returns the file the configuration came from, if any, so it can be logged
/// once logging is up.
///
/// # Arguments
/// * `config_path` - Optional path to configuration file
fn load_config(config_path: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
    match config_path {
        Some(path) => Ok((Config::load_from_path(path)?, Some(path.to_path_buf()))),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Tokens(args) => execute_tokens(args, config, &mut out)?,
        Commands::Check(args) => execute_check(args, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, config: Config, out: &mut impl Write) -> Result<()> {
    let tokens_args = TokensArgs {
        input: SourceInput::from_args(args.file, args.expr)?,
        format: args.format.unwrap_or(config.output.format),
        positions: args.positions || config.output.positions,
    };
    run_tokens(tokens_args, out)?;
    Ok(())
}

/// Execute the check command.
fn execute_check(args: CheckCommand, out: &mut impl Write) -> Result<()> {
    let check_args = CheckArgs { files: args.files };
    let summary = run_check(check_args, out)?;
    tracing::debug!(passed = summary.passed, "all files scanned cleanly");
    Ok(())
}
