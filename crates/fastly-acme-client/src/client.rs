//! Main Fastly API client implementation.

use crate::api::TlsSubscriptionsApi;
use fastly_acme_core::{AcmeError, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// The Fastly API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.fastly.com";

/// Header carrying the API token
const TOKEN_HEADER: &str = "Fastly-Key";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fastly API client
#[derive(Clone)]
pub struct FastlyClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    api_token: String,
    base_url: String,
}

impl std::fmt::Debug for FastlyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastlyClient")
            .field("base_url", &self.inner.base_url)
            .field("api_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl FastlyClient {
    /// Create a new client with the given API token using default settings
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        FastlyClientBuilder::new(api_token).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_token: impl Into<String>) -> FastlyClientBuilder {
        FastlyClientBuilder::new(api_token)
    }

    /// Access TLS subscription endpoints
    #[must_use]
    pub const fn tls_subscriptions(&self) -> TlsSubscriptionsApi<'_> {
        TlsSubscriptionsApi::new(self)
    }

    /// Perform a GET request with query parameters
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.build_url(path, params)?;
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(url)
            .header(TOKEN_HEADER, &self.inner.api_token)
            .send()
            .await
            .map_err(|e| AcmeError::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Build a URL with query parameters
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.inner.base_url, path))
            .map_err(|e| AcmeError::Config(format!("invalid base URL: {e}")))?;

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }

    /// Handle an API response that returns JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| AcmeError::Http(e.to_string()))?;
            serde_json::from_str(&body).map_err(AcmeError::Json)
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to an [`AcmeError`]
    async fn handle_error<T>(&self, status: u16, response: reqwest::Response) -> Result<T> {
        let message = response.text().await.unwrap_or_default();

        match status {
            401 | 403 => {
                warn!(status, "Fastly API rejected the token");
                Err(AcmeError::Unauthorized {
                    code: status,
                    message,
                })
            }
            _ => Err(AcmeError::Api {
                code: status,
                message,
            }),
        }
    }
}

/// Builder for configuring a [`FastlyClient`]
pub struct FastlyClientBuilder {
    api_token: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl FastlyClientBuilder {
    /// Create a new builder with the given API token
    #[must_use]
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("fastly-acme-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<FastlyClient> {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| AcmeError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(FastlyClient {
            inner: Arc::new(ClientInner {
                http,
                api_token: self.api_token,
                base_url: self.base_url,
            }),
        })
    }
}
