//! Adding challenge records to a zone.

use fastly_acme_core::{Record, Result, Zone, ZoneError};
use tracing::debug;

use crate::challenges::ZoneChallenge;

/// Add a CNAME with `ttl` for every challenge, returning how many were added.
///
/// Records under a delegated sub-zone and records the zone already holds are
/// skipped; any other rejection aborts the pass.
pub fn populate_zone<I>(zone: &mut Zone, challenges: I, ttl: u32, lenient: bool) -> Result<usize>
where
    I: IntoIterator<Item = ZoneChallenge>,
{
    let mut added = 0;

    for ZoneChallenge { name, value } in challenges {
        match zone.add_record(Record::cname(name, value, ttl), lenient) {
            Ok(()) => added += 1,
            Err(err @ ZoneError::SubzoneConflict { .. }) => {
                debug!(zone = %zone.name(), error = %err, "skipping record owned by a subzone");
            }
            Err(err @ ZoneError::DuplicateRecord { .. }) => {
                debug!(zone = %zone.name(), error = %err, "skipping duplicate record");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(added)
}
