//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Langstats - language statistics for speaker-annotated corpora
///
/// Streams a JSON corpus of aligned sentence records and reports how many
/// sentences each language has, plus the speakers whose language is unset.
///
/// Examples:
///   langstats
///   langstats 2176537
///   langstats --input ./out.json --output ./stats.json
///   langstats --format markdown --output ./stats.md
///   langstats --dry-run
///   langstats --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Expected total number of records
    ///
    /// Used only as the progress indicator's denominator. When omitted the
    /// indicator is disabled; aggregation is unaffected either way.
    #[arg(value_name = "TOTAL")]
    pub total: Option<u64>,

    /// Path to the corpus file (a single top-level JSON array)
    ///
    /// Defaults to ./out.json, or the [input] path from the config file.
    #[arg(short, long, value_name = "FILE", env = "LANGSTATS_INPUT")]
    pub input: Option<PathBuf>,

    /// Output file path for the report
    ///
    /// Defaults to ./stats.json, or the [report] path from the config file.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (json, markdown)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .langstats.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stream and count the corpus without writing a report
    ///
    /// Prints the record count; handy as the TOTAL argument of a later run.
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .langstats.toml configuration file
    #[arg(long)]
    pub init_config: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for the report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    #[default]
    Json,
    /// Markdown summary
    Markdown,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.total == Some(0) {
            return Err("Expected record total must be at least 1".to_string());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if self.dry_run && self.output.is_some() {
            return Err("--dry-run writes no report; --output has no effect".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
