//! The Fastly ACME source.

use std::time::Duration;

use async_trait::async_trait;
use fastly_acme_client::{FastlyClient, FastlyClientBuilder};
use fastly_acme_core::{RecordType, Result, Source, TlsAuthorization, Zone};
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument};

use crate::challenges::{challenges_for_zone, extract_challenges, ZoneChallenge};
use crate::populate::populate_zone;

/// TTL of emitted records unless configured otherwise
pub const DEFAULT_TTL: u32 = 3600;

const SUPPORTS: &[RecordType] = &[RecordType::Cname];

/// Creates the ACME CNAME records for domains in Fastly TLS subscriptions.
///
/// The subscriptions are fetched once, on the first population, and reused
/// for every zone populated through the same instance. Concurrent first
/// callers share a single fetch. Create a new source to pick up changes.
///
/// ```rust,ignore
/// let source = FastlyAcmeSource::builder("fastly", token).ttl(300).build()?;
/// let mut zone = Zone::new("example.com.", ["internal"])?;
/// source.populate(&mut zone, false, false).await?;
/// ```
#[derive(Debug)]
pub struct FastlyAcmeSource {
    id: String,
    ttl: u32,
    client: FastlyClient,
    authorizations: OnceCell<Vec<TlsAuthorization>>,
}

impl FastlyAcmeSource {
    /// Create a source with default settings
    pub fn new(id: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        FastlyAcmeSourceBuilder::new(id, token).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(id: impl Into<String>, token: impl Into<String>) -> FastlyAcmeSourceBuilder {
        FastlyAcmeSourceBuilder::new(id, token)
    }

    /// TTL given to emitted records
    #[must_use]
    pub const fn ttl(&self) -> u32 {
        self.ttl
    }

    /// All TLS authorizations on the account, fetched on first use
    pub async fn authorizations(&self) -> Result<&[TlsAuthorization]> {
        let authorizations = self
            .authorizations
            .get_or_try_init(|| async {
                debug!(source = %self.id, "fetching TLS subscriptions");
                self.client.tls_subscriptions().authorizations().await
            })
            .await?;

        Ok(authorizations.as_slice())
    }

    /// The distinct challenge records for `zone_name`
    pub async fn challenges(&self, zone_name: &str) -> Result<Vec<ZoneChallenge>> {
        let authorizations = self.authorizations().await?;
        Ok(challenges_for_zone(zone_name, extract_challenges(authorizations)).collect())
    }
}

#[async_trait]
impl Source for FastlyAcmeSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn supports(&self) -> &[RecordType] {
        SUPPORTS
    }

    #[instrument(skip(self, zone), fields(source = %self.id, zone = %zone.name()))]
    async fn populate(&self, zone: &mut Zone, target: bool, lenient: bool) -> Result<()> {
        debug!("populate");

        let before = zone.len();
        let challenges = self.challenges(zone.name()).await?;
        let added = populate_zone(zone, challenges, self.ttl, lenient)?;

        info!(before, after = zone.len(), "populate: found {added} records");
        Ok(())
    }
}

/// Builder for configuring a [`FastlyAcmeSource`]
pub struct FastlyAcmeSourceBuilder {
    id: String,
    ttl: u32,
    client: FastlyClientBuilder,
}

impl FastlyAcmeSourceBuilder {
    /// Create a new builder with the given source id and API token
    #[must_use]
    pub fn new(id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ttl: DEFAULT_TTL,
            client: FastlyClient::builder(token),
        }
    }

    /// Set the TTL of emitted records
    #[must_use]
    pub const fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the API base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.base_url(url);
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.timeout(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.client = self.client.user_agent(agent);
        self
    }

    /// Build the source
    pub fn build(self) -> Result<FastlyAcmeSource> {
        debug!(source = %self.id, ttl = self.ttl, "building Fastly ACME source");
        Ok(FastlyAcmeSource {
            id: self.id,
            ttl: self.ttl,
            client: self.client.build()?,
            authorizations: OnceCell::new(),
        })
    }
}
