//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Faircat CLI - Integrate and FAIR-score research-software metadata.
#[derive(Debug, Parser)]
#[command(name = "faircat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output file path (stdout when omitted)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Integrate per-source records and score the result
    Score(ScoreArgs),

    /// Integrate per-source records without scoring
    Integrate(IntegrateArgs),
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// JSON files, each holding one source's array of raw records
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Print the batch report to stderr after the run
    #[arg(long)]
    pub report: bool,
}

/// Arguments for the integrate command.
#[derive(Debug, Parser)]
pub struct IntegrateArgs {
    /// JSON files, each holding one source's array of raw records
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Emit the pre-integration identity groups instead of merged instances
    #[arg(long)]
    pub groups: bool,

    /// Print the batch report to stderr after the run
    #[arg(long)]
    pub report: bool,
}
