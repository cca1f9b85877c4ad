// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// clint - commit header linter
///
/// Checks that commit headers read `<component>: <description>` with an
/// imperative, lower-case description.
#[derive(Parser, Debug)]
#[command(name = "clint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit header linter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CLINT_CONFIG")]
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
    /// Lint commits from the current git repository
    Check(CheckArgs),

    /// Lint a single message from a file or stdin
    Lint(LintArgs),

    /// List rules with their effective settings
    Rules,

    /// Print the verb allowlist
    Verbs(VerbsArgs),

    /// Initialize clint configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Commit or range to check
    #[arg(default_value = "HEAD")]
    pub target: String,

    /// Check every commit after TARGET up to HEAD (same as `TARGET..HEAD`)
    #[arg(long)]
    pub range: bool,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the lint command.
#[derive(Parser, Debug, Clone, Default)]
pub struct LintArgs {
    /// Read the message from this file (e.g. .git/COMMIT_EDITMSG); comment
    /// lines are stripped
    #[arg(short, long, value_name = "FILE")]
    pub edit: Option<PathBuf>,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the verbs command.
#[derive(Parser, Debug, Clone, Default)]
pub struct VerbsArgs {
    /// Report whether WORD is allowed instead of listing all verbs
    #[arg(long, value_name = "WORD")]
    pub check: Option<String>,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Configuration preset
    #[arg(long)]
    pub preset: Option<ConfigPreset>,
}

/// Configuration presets for init.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// Minimal configuration
    Minimal,
    /// Every option with its default value (recommended)
    Standard,
    /// Strict configuration for CI
    Strict,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            target: "HEAD".to_string(),
            range: false,
            strict: false,
        }
    }
}
