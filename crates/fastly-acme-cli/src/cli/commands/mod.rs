//! Command implementations.

pub mod config;
pub mod records;

use std::path::PathBuf;

use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Fastly API token
    pub token: Option<String>,

    /// Explicit config file path
    pub config_path: Option<PathBuf>,

    /// Loaded configuration
    pub config: Config,

    /// Output format
    pub output_format: OutputFormat,
}

impl Context {
    /// Get the API token, returning an error if not set.
    pub fn require_token(&self) -> anyhow::Result<&str> {
        self.token.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "API token required.\n\n\
                 Set it with one of:\n  \
                 1. --token <TOKEN>\n  \
                 2. FASTLY_API_TOKEN environment variable\n  \
                 3. token = \"...\" in the config file"
            )
        })
    }
}
