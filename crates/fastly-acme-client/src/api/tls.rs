//! TLS subscriptions API endpoints.

use crate::FastlyClient;
use fastly_acme_core::{AcmeError, Result, SubscriptionPage, TlsAuthorization};
use tracing::debug;

const SUBSCRIPTIONS_PATH: &str = "/tls/subscriptions";

/// Side-load directive for the authorizations of each subscription
const INCLUDE_AUTHORIZATIONS: &str = "tls_authorizations";

/// TLS subscriptions API endpoints
pub struct TlsSubscriptionsApi<'a> {
    client: &'a FastlyClient,
}

impl<'a> TlsSubscriptionsApi<'a> {
    pub(crate) const fn new(client: &'a FastlyClient) -> Self {
        Self { client }
    }

    /// List one page of subscriptions
    #[must_use]
    pub fn list(&self) -> ListSubscriptionsRequest<'a> {
        ListSubscriptionsRequest::new(self.client)
    }

    /// Fetch the TLS authorizations of every subscription on the account.
    ///
    /// Pages are requested one after another, starting at 1, until the
    /// response reports itself as the last page. Entities other than
    /// `tls_authorization` are discarded. Any failed page fails the whole
    /// call; nothing is retried. A response whose `current_page` differs
    /// from the requested page fails with [`AcmeError::UnexpectedPage`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let authorizations = client.tls_subscriptions().authorizations().await?;
    /// println!("{} authorizations", authorizations.len());
    /// ```
    pub async fn authorizations(&self) -> Result<Vec<TlsAuthorization>> {
        let mut authorizations = Vec::new();
        let mut page_number = 1;

        loop {
            let page = self.list().page(page_number).send().await?;
            let meta = page.meta;
            debug!(
                page = meta.current_page,
                total_pages = meta.total_pages,
                "fetched subscriptions page"
            );

            if meta.current_page != page_number {
                return Err(AcmeError::UnexpectedPage {
                    requested: page_number,
                    reported: meta.current_page,
                });
            }

            let last = page.is_last();
            authorizations.extend(page.into_authorizations());

            if last {
                break;
            }
            page_number += 1;
        }

        debug!(count = authorizations.len(), "fetched TLS authorizations");
        Ok(authorizations)
    }
}

/// Builder for a single subscriptions page request
pub struct ListSubscriptionsRequest<'a> {
    client: &'a FastlyClient,
    include: Option<String>,
    page: u32,
}

impl<'a> ListSubscriptionsRequest<'a> {
    fn new(client: &'a FastlyClient) -> Self {
        Self {
            client,
            include: Some(INCLUDE_AUTHORIZATIONS.to_string()),
            page: 1,
        }
    }

    /// Set the side-loaded relationships (comma separated)
    #[must_use]
    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    /// Do not side-load any relationship
    #[must_use]
    pub fn without_include(mut self) -> Self {
        self.include = None;
        self
    }

    /// Set the page number (1-indexed)
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Execute the request
    pub async fn send(self) -> Result<SubscriptionPage> {
        let page_str = self.page.to_string();
        let mut params = Vec::with_capacity(2);

        if let Some(ref include) = self.include {
            params.push(("include", include.as_str()));
        }
        params.push(("page[number]", page_str.as_str()));

        self.client
            .get_with_query(SUBSCRIPTIONS_PATH, &params)
            .await
    }
}
