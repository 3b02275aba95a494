//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    // Get API token from CLI/env, or config
    let token = cli.token.or_else(|| config.token.clone());

    let ctx = commands::Context {
        token,
        config_path: cli.config,
        config,
        output_format: cli.output.unwrap_or_default(),
    };

    match cli.command {
        Commands::Records(args) => commands::records::execute(ctx, args).await,
        Commands::Config(args) => commands::config::execute(&ctx, &args),
    }
}

/// Log to stderr, honouring `RUST_LOG` when set.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
