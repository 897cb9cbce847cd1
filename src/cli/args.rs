// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Where git keeps the message of the commit being written.
pub const DEFAULT_EDIT_PATH: &str = ".git/COMMIT_EDITMSG";

/// cclint - Conventional commit message linter
///
/// Checks commit messages against a commitlint-style rule configuration.
#[derive(Parser, Debug)]
#[command(name = "cclint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional commit message linter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to linting stdin)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CCLINT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint a commit message (default command)
    Lint(LintArgs),

    /// Check a single commit type against the allowed types
    CheckType(CheckTypeArgs),

    /// List the allowed commit types
    Types,

    /// Print the resolved rule configuration
    PrintConfig,

    /// Write the default configuration file
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the lint command.
#[derive(Parser, Debug, Default, Clone)]
pub struct LintArgs {
    /// Read the message from a file (defaults to .git/COMMIT_EDITMSG)
    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_EDIT_PATH,
        conflicts_with = "message"
    )]
    pub edit: Option<PathBuf>,

    /// Lint the given message instead of reading stdin
    #[arg(short, long)]
    pub message: Option<String>,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the check-type command.
#[derive(Parser, Debug, Clone)]
pub struct CheckTypeArgs {
    /// The type token, exactly as it appears in the header
    #[arg(value_name = "TYPE", allow_hyphen_values = true)]
    pub commit_type: String,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Write JSON instead of TOML
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Lint if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Lint(LintArgs::default()))
    }

    /// Whether output should be JSON.
    pub fn json_output(&self) -> bool {
        self.format == Some(OutputFormat::Json)
    }
}
