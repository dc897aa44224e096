//! CLI command definitions and handlers

mod analyze;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Crosstalk - cross-community overlap analysis
///
/// Ingests normalized post/comment activity records and reports which
/// users bridge communities, how strongly community pairs are connected,
/// and how interconnected each community is.
#[derive(Parser, Debug)]
#[command(name = "crosstalk")]
#[command(
    version,
    about = "Cross-community overlap analysis for online discussion data",
    after_help = "\
Examples:
  crosstalk analyze activity.jsonl                 Write both CSV tables next to the input
  crosstalk analyze activity.jsonl --format json   Full report as JSON on stdout
  crosstalk analyze activity.jsonl --strict        Abort on the first bad record
  crosstalk summary activity.jsonl                 Terminal summary only"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an activity file and write the overlap report
    Analyze {
        /// JSONL file of normalized activity records
        input: PathBuf,

        /// Output format: csv, json, text (default: config, then csv)
        #[arg(long, short)]
        format: Option<String>,

        /// Output directory for csv, output file for json/text (default:
        /// next to the input for csv, stdout otherwise)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Abort on the first malformed or invalid record instead of
        /// logging and skipping it
        #[arg(long)]
        strict: bool,

        /// Explicit config file (default: crosstalk.toml next to the input)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print a terminal summary of an activity file
    Summary {
        /// JSONL file of normalized activity records
        input: PathBuf,

        /// Explicit config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Dispatch a parsed CLI invocation
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            input,
            format,
            output,
            strict,
            config,
        } => analyze::run(&input, format.as_deref(), output.as_deref(), strict, config.as_deref()),
        Commands::Summary { input, config } => summary::run(&input, config.as_deref()),
    }
}
