//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vitae - harvest birth and death dates from encyclopedia articles.
#[derive(Debug, Parser)]
#[command(name = "vitae")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract dates for a list of articles and submit them
    Harvest(HarvestArgs),

    /// Extract dates from a local text file (or stdin), without network access
    Extract(ExtractArgs),

    /// List supported locales
    Locales,
}

/// Arguments for the harvest command.
#[derive(Debug, Parser)]
pub struct HarvestArgs {
    /// Two-letter locale code (sv, no, da, pl)
    pub locale: String,

    /// File with one article title per line
    pub list: PathBuf,

    /// Log the claims that would be written instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Shortest pause after a write (seconds)
    #[arg(long)]
    pub min_delay: Option<u64>,

    /// Longest pause after a write (seconds)
    #[arg(long)]
    pub max_delay: Option<u64>,

    /// Bot user name, overriding the configuration file
    #[arg(short, long)]
    pub username: Option<String>,

    /// Bot password
    #[arg(long, env = "VITAE_BOT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Two-letter locale code (sv, no, da, pl)
    pub locale: String,

    /// Text file to read; stdin when omitted
    pub file: Option<PathBuf>,
}
