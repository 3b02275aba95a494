use serde::{Deserialize, Serialize};

/// DNS record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address
    A,
    /// IPv6 address
    Aaaa,
    /// Canonical name
    Cname,
    /// Name server delegation
    Ns,
    /// Free-form text
    Txt,
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::Aaaa => write!(f, "AAAA"),
            Self::Cname => write!(f, "CNAME"),
            Self::Ns => write!(f, "NS"),
            Self::Txt => write!(f, "TXT"),
        }
    }
}

/// A record descriptor handed to a [`Zone`](crate::Zone).
///
/// `name` is relative to the zone; an empty name is the apex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Name relative to the zone
    pub name: String,

    /// Record type
    #[serde(rename = "type")]
    pub record_type: RecordType,

    /// Time to live in seconds
    pub ttl: u32,

    /// Record data
    pub value: String,
}

impl Record {
    /// Create a record
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            value: value.into(),
        }
    }

    /// Create a CNAME record
    #[must_use]
    pub fn cname(name: impl Into<String>, value: impl Into<String>, ttl: u32) -> Self {
        Self::new(name, RecordType::Cname, ttl, value)
    }

    /// Returns true if this record sits at the zone apex
    #[must_use]
    pub fn is_apex(&self) -> bool {
        self.name.is_empty()
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = if self.is_apex() { "@" } else { &self.name };
        write!(f, "{name} {} {} {}", self.ttl, self.record_type, self.value)
    }
}
