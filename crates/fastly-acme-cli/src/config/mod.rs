//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// CLI configuration.
///
/// ```toml
/// token = "..."
/// ttl = 300
///
/// [zones."example.com."]
/// sub_zones = ["internal"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Fastly API token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// TTL of emitted records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    /// Known zones, keyed by name.
    #[serde(default)]
    pub zones: BTreeMap<String, ZoneConfig>,
}

/// Per-zone settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// Names, relative to the zone, delegated to other zones.
    #[serde(default)]
    pub sub_zones: Vec<String>,
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "octodns", "fastly-acme")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolve the config file path, preferring an explicit one.
    pub fn path(explicit: Option<&Path>) -> Result<PathBuf> {
        explicit.map_or_else(Self::default_path, |p| Ok(p.to_path_buf()))
    }

    /// Load configuration.
    ///
    /// A missing file at the default location yields the default
    /// configuration; an explicitly given file must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = Self::path(explicit)?;

        if explicit.is_none() && !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config in {}", path.display()))
    }

    /// Parse configuration from TOML.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Sub-zones configured for `zone`, accepting the name with or without
    /// its trailing dot.
    pub fn sub_zones(&self, zone: &str) -> &[String] {
        let bare = zone.trim_end_matches('.');
        self.zones
            .iter()
            .find(|(name, _)| name.trim_end_matches('.') == bare)
            .map(|(_, z)| z.sub_zones.as_slice())
            .unwrap_or_default()
    }

    /// A copy safe to print.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            token: self.token.as_deref().map(mask),
            ..self.clone()
        }
    }
}

fn mask(token: &str) -> String {
    if token.len() > 8 && token.is_ascii() {
        format!("{}...{}", &token[..4], &token[token.len() - 4..])
    } else {
        "****".to_string()
    }
}
