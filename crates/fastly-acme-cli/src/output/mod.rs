//! Output formatting for different formats.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

use fastly_acme::Zone;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One record per line, zone-file style
    #[default]
    Plain,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: plain, json, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Render populated zones as a zone-file style listing.
pub fn plain(zones: &[Zone]) -> String {
    let mut out = String::new();
    for (i, zone) in zones.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "; {}", zone.name());
        for record in zone.records() {
            let _ = writeln!(out, "{record}");
        }
    }
    out
}

/// Records keyed by zone name.
pub fn by_zone(zones: &[Zone]) -> serde_json::Result<serde_json::Map<String, serde_json::Value>> {
    zones
        .iter()
        .map(|zone| Ok((zone.name().to_string(), serde_json::to_value(zone.records())?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastly_acme::Record;

    fn zones() -> Vec<Zone> {
        let mut a = Zone::new("example.com.", Vec::<String>::new()).unwrap();
        a.add_record(Record::cname("_acme-challenge", "a.fastly-validations.com.", 3600), false)
            .unwrap();
        let b = Zone::new("example.net.", Vec::<String>::new()).unwrap();
        vec![a, b]
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn plain_listing() {
        assert_eq!(
            plain(&zones()),
            "; example.com.\n_acme-challenge 3600 CNAME a.fastly-validations.com.\n\n; example.net.\n"
        );
    }

    #[test]
    fn json_by_zone() {
        let value = serde_json::Value::Object(by_zone(&zones()).unwrap());
        assert_eq!(
            value["example.com."][0],
            serde_json::json!({
                "name": "_acme-challenge",
                "type": "CNAME",
                "ttl": 3600,
                "value": "a.fastly-validations.com."
            })
        );
        assert_eq!(value["example.net."], serde_json::json!([]));
    }
}
