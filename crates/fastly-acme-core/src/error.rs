use thiserror::Error;

/// Result type alias for Fastly ACME operations
pub type Result<T> = std::result::Result<T, AcmeError>;

/// Errors that can occur while fetching challenges or populating a zone
#[derive(Error, Debug)]
pub enum AcmeError {
    /// Authentication failed - invalid, expired or under-privileged token
    #[error("authentication failed ({code}): {message}")]
    Unauthorized {
        /// HTTP status code (401 or 403)
        code: u16,
        /// Response body
        message: String,
    },

    /// API returned a non-success response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message or raw body from the API
        message: String,
    },

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing error, including responses of an unexpected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A page response reported a different page than the one requested
    #[error("requested page {requested}, response reported page {reported}")]
    UnexpectedPage {
        /// Page number sent in the request
        requested: u32,
        /// `meta.current_page` of the response
        reported: u32,
    },

    /// Record insertion failed for a reason that is not skippable
    #[error("zone error: {0}")]
    Zone(#[from] ZoneError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl AcmeError {
    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Returns the HTTP status code if the API answered with an error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { code, .. } | Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Errors raised by [`Zone`](crate::Zone) when a record cannot be added
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    /// Zone names must be fully qualified
    #[error("invalid zone name {0:?}: missing trailing dot")]
    InvalidName(String),

    /// The record falls under a sub-zone the zone delegates
    #[error("record {fqdn} is under a managed subzone")]
    SubzoneConflict {
        /// Fully-qualified record name
        fqdn: String,
    },

    /// A record with the same name and type already exists
    #[error("duplicate {record_type} record for {fqdn}")]
    DuplicateRecord {
        /// Fully-qualified record name
        fqdn: String,
        /// Record type
        record_type: String,
    },

    /// The record failed zone validation
    #[error("invalid record {fqdn}: {reason}")]
    InvalidRecord {
        /// Fully-qualified record name
        fqdn: String,
        /// What was wrong with it
        reason: String,
    },
}

impl ZoneError {
    /// Returns true for conflicts a source is expected to skip over
    #[must_use]
    pub const fn is_skippable(&self) -> bool {
        matches!(
            self,
            Self::SubzoneConflict { .. } | Self::DuplicateRecord { .. }
        )
    }
}
