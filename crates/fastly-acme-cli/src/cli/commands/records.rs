//! `fastly-acme records` - populate zones and print their challenge records.

use anyhow::{Context as _, Result};
use fastly_acme::{FastlyAcmeSource, Source, Zone, DEFAULT_TTL};
use tracing::debug;

use super::Context;
use crate::cli::args::RecordsArgs;
use crate::output::{self, OutputFormat};

const SOURCE_ID: &str = "fastly";

pub async fn execute(ctx: Context, args: RecordsArgs) -> Result<()> {
    let names = zone_names(&ctx, &args)?;
    debug!(zones = ?names, "populating zones");

    let mut builder = FastlyAcmeSource::builder(SOURCE_ID, ctx.require_token()?)
        .ttl(args.ttl.or(ctx.config.ttl).unwrap_or(DEFAULT_TTL));
    if let Some(url) = args.base_url.as_deref() {
        builder = builder.base_url(url);
    }
    let source = builder.build()?;

    let mut zones = Vec::with_capacity(names.len());
    for name in names {
        let mut zone = Zone::new(name.as_str(), sub_zones_for(&ctx, &args, &name))?;
        source
            .populate(&mut zone, false, args.lenient)
            .await
            .with_context(|| format!("failed to populate {name}"))?;
        zones.push(zone);
    }

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output::by_zone(&zones)?)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&output::by_zone(&zones)?)?);
        }
        OutputFormat::Plain => print!("{}", output::plain(&zones)),
    }

    Ok(())
}

/// Zones to populate, fully qualified.
fn zone_names(ctx: &Context, args: &RecordsArgs) -> Result<Vec<String>> {
    let names: Vec<&String> = if args.zones.is_empty() {
        ctx.config.zones.keys().collect()
    } else {
        args.zones.iter().collect()
    };

    if names.is_empty() {
        anyhow::bail!(
            "No zones given.\n\n\
             Pass zone names as arguments or list them under [zones] in the config file."
        );
    }

    Ok(names.into_iter().map(|name| qualify(name)).collect())
}

/// Sub-zones of `zone`: the `--sub-zone` flags when given, which then apply
/// to every zone on the command line, otherwise the config file's entry.
fn sub_zones_for(ctx: &Context, args: &RecordsArgs, zone: &str) -> Vec<String> {
    if args.sub_zones.is_empty() {
        ctx.config.sub_zones(zone).to_vec()
    } else {
        args.sub_zones.clone()
    }
}

fn qualify(name: &str) -> String {
    format!("{}.", name.trim_end_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn ctx(config: Config) -> Context {
        Context {
            token: Some("token".into()),
            config_path: None,
            config,
            output_format: OutputFormat::Plain,
        }
    }

    fn args(zones: &[&str]) -> RecordsArgs {
        RecordsArgs {
            zones: zones.iter().map(ToString::to_string).collect(),
            sub_zones: Vec::new(),
            ttl: None,
            lenient: false,
            base_url: None,
        }
    }

    #[test]
    fn qualifies_names() {
        assert_eq!(qualify("example.com"), "example.com.");
        assert_eq!(qualify("example.com."), "example.com.");
    }

    #[test]
    fn arguments_take_precedence_over_config() {
        let config = Config::parse("[zones.\"example.org.\"]").unwrap();
        let names = zone_names(&ctx(config), &args(&["example.com", "example.net."])).unwrap();
        assert_eq!(names, ["example.com.", "example.net."]);
    }

    #[test]
    fn falls_back_to_config_zones() {
        let config = Config::parse("[zones.\"example.org\"]\n[zones.\"example.com.\"]").unwrap();
        let names = zone_names(&ctx(config), &args(&[])).unwrap();
        assert_eq!(names, ["example.com.", "example.org."]);
    }

    #[test]
    fn sub_zone_flags_apply_to_every_zone() {
        let config = Config::parse(
            "[zones.\"example.com.\"]\nsub_zones = [\"lab\"]\n[zones.\"example.net.\"]\n",
        )
        .unwrap();
        let ctx = ctx(config);

        let from_config = args(&["example.com", "example.net"]);
        assert_eq!(sub_zones_for(&ctx, &from_config, "example.com."), ["lab"]);
        assert!(sub_zones_for(&ctx, &from_config, "example.net.").is_empty());

        let mut flagged = args(&["example.com", "example.net"]);
        flagged.sub_zones = vec!["internal".into()];
        assert_eq!(sub_zones_for(&ctx, &flagged, "example.com."), ["internal"]);
        assert_eq!(sub_zones_for(&ctx, &flagged, "example.net."), ["internal"]);
    }

    #[test]
    fn no_zones_is_an_error() {
        assert!(zone_names(&ctx(Config::default()), &args(&[])).is_err());
    }
}
