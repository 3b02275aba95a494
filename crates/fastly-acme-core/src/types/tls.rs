use serde::{Deserialize, Serialize};

/// One page of `GET /tls/subscriptions?include=tls_authorizations`
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionPage {
    /// Pagination metadata
    pub meta: PageMeta,

    /// Side-loaded entities (authorizations, domains, certificates...)
    pub included: Vec<Included>,
}

impl SubscriptionPage {
    /// Returns true if no further page needs to be requested
    #[must_use]
    pub const fn is_last(&self) -> bool {
        // total_pages is 0 for an account without subscriptions
        self.meta.current_page >= self.meta.total_pages
    }

    /// Consume the page, keeping only the TLS authorizations
    pub fn into_authorizations(self) -> impl Iterator<Item = TlsAuthorization> {
        self.included.into_iter().filter_map(|entity| match entity {
            Included::TlsAuthorization(auth) => Some(auth),
            Included::Other => None,
        })
    }
}

/// Pagination metadata of a list response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// 1-indexed number of this page
    pub current_page: u32,

    /// Number of pages available
    pub total_pages: u32,

    /// Entries per page
    #[serde(default)]
    pub per_page: Option<u32>,

    /// Total entries across all pages
    #[serde(default)]
    pub record_count: Option<u32>,
}

/// A side-loaded entity, tagged by its JSON:API `type`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Included {
    /// Domain-validation requirements for a subscription
    #[serde(rename = "tls_authorization")]
    TlsAuthorization(TlsAuthorization),

    /// Any other entity type (`tls_domain`, `tls_certificate`, ...)
    #[serde(other)]
    Other,
}

/// A TLS authorization: the challenges for one certificate request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsAuthorization {
    /// Authorization identifier
    pub id: String,

    /// Authorization attributes
    pub attributes: AuthorizationAttributes,
}

impl TlsAuthorization {
    /// The challenges of this authorization, in API order
    #[must_use]
    pub fn challenges(&self) -> &[Challenge] {
        &self.attributes.challenges
    }
}

/// Attributes of a [`TlsAuthorization`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationAttributes {
    /// Ways the certificate authority accepts proof of control
    pub challenges: Vec<Challenge>,
}

/// How a challenge is satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChallengeKind {
    /// A CNAME delegating `_acme-challenge` to Fastly
    ManagedDns,
    /// A CNAME pointing the domain at Fastly
    ManagedHttpCname,
    /// A/AAAA records pointing the domain at Fastly
    ManagedHttpA,
    /// A kind this crate does not know about
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ChallengeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ManagedDns => write!(f, "managed-dns"),
            Self::ManagedHttpCname => write!(f, "managed-http-cname"),
            Self::ManagedHttpA => write!(f, "managed-http-a"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A single domain-validation challenge.
///
/// `values` is guaranteed non-empty: a challenge without values is rejected
/// when the response is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawChallenge")]
pub struct Challenge {
    #[serde(rename = "type")]
    kind: ChallengeKind,
    record_name: String,
    values: Vec<String>,
}

impl Challenge {
    /// Create a challenge, returning `None` if `values` is empty
    #[must_use]
    pub fn new(
        kind: ChallengeKind,
        record_name: impl Into<String>,
        values: Vec<String>,
    ) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            record_name: record_name.into(),
            values,
        })
    }

    /// Create a `managed-dns` challenge with a single value
    #[must_use]
    pub fn managed_dns(record_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: ChallengeKind::ManagedDns,
            record_name: record_name.into(),
            values: vec![value.into()],
        }
    }

    /// Challenge kind
    #[must_use]
    pub const fn kind(&self) -> ChallengeKind {
        self.kind
    }

    /// Fully-qualified record name, without trailing dot
    #[must_use]
    pub fn record_name(&self) -> &str {
        &self.record_name
    }

    /// All record values
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The value to publish
    #[must_use]
    pub fn first_value(&self) -> &str {
        &self.values[0]
    }
}

#[derive(Deserialize)]
struct RawChallenge {
    #[serde(rename = "type")]
    kind: ChallengeKind,
    record_name: String,
    values: Vec<String>,
}

impl TryFrom<RawChallenge> for Challenge {
    type Error = String;

    fn try_from(raw: RawChallenge) -> Result<Self, Self::Error> {
        let record_name = raw.record_name.clone();
        Self::new(raw.kind, raw.record_name, raw.values)
            .ok_or_else(|| format!("challenge for {record_name} has no values"))
    }
}
