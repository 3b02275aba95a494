//! `fastly-acme config` - inspect CLI configuration.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: &ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Path => show_path(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = ctx.config.redacted();

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&config)?);
        }
        OutputFormat::Plain => {
            println!("{}", "Current Configuration:".bold());
            println!();

            let token = config
                .token
                .unwrap_or_else(|| "(not set)".dimmed().to_string());
            println!("  {} {}", "token:".bold(), token);

            let ttl = config
                .ttl
                .map_or_else(|| format!("{} (default)", fastly_acme::DEFAULT_TTL), |t| t.to_string());
            println!("  {} {}", "ttl:".bold(), ttl);

            println!("  {}", "zones:".bold());
            for (name, zone) in &config.zones {
                if zone.sub_zones.is_empty() {
                    println!("    {}", name.cyan());
                } else {
                    println!("    {} (sub-zones: {})", name.cyan(), zone.sub_zones.join(", "));
                }
            }
        }
    }

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    let path = Config::path(ctx.config_path.as_deref())?;
    println!("{}", path.display());
    Ok(())
}
