//! The interface a zone manager drives to collect records.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::RecordType;
use crate::zone::Zone;

/// A provider of DNS records.
///
/// A zone manager creates an empty [`Zone`], asks each configured source to
/// populate it, then reconciles the result against its targets.
#[async_trait]
pub trait Source: Send + Sync {
    /// Identifier used in diagnostics
    fn id(&self) -> &str;

    /// Record types this source can emit
    fn supports(&self) -> &[RecordType];

    /// Whether geo-aware records are supported
    fn supports_geo(&self) -> bool {
        false
    }

    /// Whether dynamic (weighted/failover) records are supported
    fn supports_dynamic(&self) -> bool {
        false
    }

    /// Add this source's records for `zone`.
    ///
    /// `target` is set when the zone manager is loading existing state of a
    /// write target; `lenient` relaxes the zone's record validation.
    async fn populate(&self, zone: &mut Zone, target: bool, lenient: bool) -> Result<()>;
}
