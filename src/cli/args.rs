//! Command-line argument definitions for the CUP processor
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the CUP waypoint/task file processor
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cup-processor",
    version,
    about = "Check and normalize SeeYou CUP waypoint and task files",
    long_about = "Parses SeeYou CUP waypoint and task files, tolerating the quoting and \
                  placeholder quirks of legacy producers, and re-serializes them in a \
                  canonical, round-trip-stable form."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available subcommands for the CUP processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse CUP files and report what they contain
    Check(CheckArgs),
    /// Rewrite a CUP file in canonical form
    Normalize(NormalizeArgs),
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// A .cup file, or a directory to scan recursively for .cup files
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format for parse results
    #[arg(long = "format", value_enum, default_value = "summary")]
    pub format: OutputFormat,
}

/// Arguments for the normalize command
#[derive(Debug, Clone, Parser)]
pub struct NormalizeArgs {
    /// Input .cup file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the normalized file
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Emit CRLF line endings instead of LF
    #[arg(long = "crlf")]
    pub crlf: bool,
}

/// Output formats for the check command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary with counts and skip reasons
    Summary,
    /// The parsed document as JSON
    Json,
}
