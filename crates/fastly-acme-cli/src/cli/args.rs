//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// List the ACME challenge records of Fastly TLS subscriptions
///
/// Fetches every TLS subscription on the account once and prints the
/// `_acme-challenge` CNAME records that belong in each zone.
#[derive(Parser, Debug)]
#[command(name = "fastly-acme")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Fastly API token (or set FASTLY_API_TOKEN env var)
    #[arg(short = 't', long, env = "FASTLY_API_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long, env = "FASTLY_ACME_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Populate zones and print their challenge records
    Records(RecordsArgs),

    /// Inspect CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Records command
// ============================================================================

#[derive(Args, Debug)]
pub struct RecordsArgs {
    /// Zones to populate (defaults to every zone in the config file)
    pub zones: Vec<String>,

    /// Sub-zone delegated by the zones (repeatable). Applies to every zone
    /// given; replaces the config file's sub-zones for each of them
    #[arg(short, long = "sub-zone")]
    pub sub_zones: Vec<String>,

    /// TTL of emitted records
    #[arg(long)]
    pub ttl: Option<u32>,

    /// Relax record validation and ignore sub-zones
    #[arg(long)]
    pub lenient: bool,

    /// Fastly API base URL
    #[arg(long, env = "FASTLY_API_URL", hide = true)]
    pub base_url: Option<String>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration (token redacted)
    Show,

    /// Show config file path
    Path,
}
