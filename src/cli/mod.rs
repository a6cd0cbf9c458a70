//! CLI module for the countpos harness
//!
//! Running `countpos` with no arguments resolves the `Main` target, runs it against the fixed vector, and prints
//! `Actual:` / `Expected:`. Everything else is opt-in.
//!
//! ## Flags and commands
//!
//! - `--target <NAME>` - Run another registered target
//! - `--fixture <NAME>` - Run another builtin fixture
//! - `--format <text|json>` - Output format
//! - `--list` - List registered targets
//! - `--suite` - Run every builtin fixture (pytest-style)
//! - `check [FILE]` - Grade captured harness output
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run_with()` function handles errors and exits.
//! A failed harness run is reported, not an error: single runs always exit 0.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::env;
use std::fmt;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use countpos_core::{TargetRegistry, fixtures};

use crate::harness::{DEFAULT_TARGET, HarnessConfig, OutputFormat};
use crate::version::COUNTPOS_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Write failures end `--suite`, `--list` and `check` with exit 1. Single runs log them and exit 0.
impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::failure(format!("Error writing output: {e}"))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Run a count_positive target against a fixed vector and report actual vs expected
#[derive(Parser, Debug)]
#[command(name = "countpos")]
#[command(version = COUNTPOS_VERSION)]
#[command(about = "Run a count_positive target and report actual vs expected", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Registered target to run
    #[arg(long, value_name = "NAME", default_value = DEFAULT_TARGET)]
    pub target: String,

    /// Builtin fixture to run (default: fixed_vector)
    #[arg(long, value_name = "NAME", conflicts_with = "suite")]
    pub fixture: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// List registered targets and exit
    #[arg(long, conflicts_with_all = ["suite", "fixture"])]
    pub list: bool,

    /// Run every builtin fixture against the target
    #[arg(long)]
    pub suite: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Grade captured harness output by its `Actual:` line
    Check {
        /// File holding the output (default: stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
        /// Expected value
        #[arg(long, default_value_t = fixtures::EXPECTED, allow_negative_numbers = true)]
        expected: i64,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point, using the builtin targets.
pub fn run() {
    run_with(TargetRegistry::with_builtins());
}

/// CLI entry point for a caller-built registry.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run_with(registry: TargetRegistry) {
    let cli = Cli::parse();

    match execute(cli, &registry) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli, registry: &TargetRegistry) -> CliResult<ExitCode> {
    if let Some(Command::Check { file, expected }) = cli.command {
        return commands::check_output(file.as_deref(), expected, cli.format);
    }

    if cli.list {
        return commands::list_targets(registry);
    }

    let config = build_config(&cli)?;
    if cli.suite {
        commands::run_suite(registry, &config)
    } else {
        commands::run_single(registry, &config)
    }
}

/// Turn parsed arguments into a [`HarnessConfig`].
fn build_config(cli: &Cli) -> CliResult<HarnessConfig> {
    let mut config = HarnessConfig::new()
        .with_target(cli.target.clone())
        .with_format(cli.format)
        .with_color(use_color());

    if let Some(name) = &cli.fixture {
        let fixture = fixtures::from_str(name).ok_or_else(|| {
            let known: Vec<&str> = fixtures::PROPERTY_FIXTURES.iter().map(|f| f.name).collect();
            CliError::failure(format!(
                "Error: unknown fixture '{}' (available: {})",
                name,
                known.join(", ")
            ))
        })?;
        config = config.with_fixture(*fixture);
    }

    Ok(config)
}

/// Colors only on a terminal, and never when `NO_COLOR` is set.
fn use_color() -> bool {
    io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none()
}

// ============================================================================
// Tests
// ============================================================================
