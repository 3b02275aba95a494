//! Turning TLS authorizations into per-zone CNAME data.
//!
//! The pipeline has three lazy stages: [`extract_challenges`] flattens the
//! authorizations, [`challenges_for_zone`] keeps the `managed-dns` challenges
//! under a zone and drops repeated `(name, value)` pairs. Both borrow the
//! authorization list, so running them again re-walks the same data.

use std::collections::HashSet;

use fastly_acme_core::{Challenge, ChallengeKind, TlsAuthorization};

/// A challenge record relative to one zone
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneChallenge {
    /// Record name relative to the zone (e.g. `_acme-challenge.www`)
    pub name: String,

    /// CNAME target, fully qualified with trailing dot
    pub value: String,
}

/// Every challenge of every authorization, in API order
pub fn extract_challenges(
    authorizations: &[TlsAuthorization],
) -> impl Iterator<Item = &Challenge> + Clone {
    authorizations.iter().flat_map(TlsAuthorization::challenges)
}

/// Strip `zone_name` from `record_name`.
///
/// Matches only on a label boundary and only strictly below the zone: the
/// apex itself, `notexample.com` for `example.com.`, and names with empty
/// labels all yield `None`.
///
/// ```
/// use fastly_acme::relative_name;
///
/// assert_eq!(relative_name("_acme-challenge.www.example.com", "example.com."), Some("_acme-challenge.www"));
/// assert_eq!(relative_name("_acme-challenge.notexample.com", "example.com."), None);
/// ```
pub fn relative_name<'a>(record_name: &'a str, zone_name: &str) -> Option<&'a str> {
    let zone = zone_name.trim_end_matches('.');
    let head = record_name.strip_suffix(zone)?.strip_suffix('.')?;

    if head.is_empty() || head.split('.').any(str::is_empty) {
        return None;
    }
    Some(head)
}

/// The distinct `managed-dns` challenges that belong to `zone_name`.
///
/// Challenges of other kinds and outside the zone are skipped silently.
/// A pair already yielded is not yielded again; this happens when a wildcard
/// and its apex are validated by the same record.
pub fn challenges_for_zone<'a, I>(
    zone_name: &'a str,
    challenges: I,
) -> impl Iterator<Item = ZoneChallenge> + 'a
where
    I: IntoIterator<Item = &'a Challenge>,
    I::IntoIter: 'a,
{
    let mut seen = HashSet::new();

    challenges
        .into_iter()
        .filter(|challenge| challenge.kind() == ChallengeKind::ManagedDns)
        .filter_map(move |challenge| {
            let name = relative_name(challenge.record_name(), zone_name)?;
            Some(ZoneChallenge {
                name: name.to_string(),
                value: format!("{}.", challenge.first_value().trim_end_matches('.')),
            })
        })
        .filter(move |challenge| seen.insert(challenge.clone()))
}
