//! The zone a source populates.

use std::collections::BTreeSet;

use crate::error::ZoneError;
use crate::types::{Record, RecordType};

/// A DNS zone: a fully-qualified name, the sub-zones it delegates, and the
/// records gathered for it so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    name: String,
    sub_zones: BTreeSet<String>,
    records: Vec<Record>,
}

impl Zone {
    /// Create an empty zone.
    ///
    /// `name` must end with a dot. `sub_zones` are names relative to this
    /// zone (e.g. `"internal"` for `internal.example.com.`) whose records
    /// belong to another zone.
    pub fn new<I, S>(name: impl Into<String>, sub_zones: I) -> Result<Self, ZoneError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if !name.ends_with('.') {
            return Err(ZoneError::InvalidName(name));
        }

        let sub_zones = sub_zones
            .into_iter()
            .map(Into::into)
            .map(|s: String| s.trim_end_matches('.').to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            name,
            sub_zones,
            records: Vec::new(),
        })
    }

    /// Fully-qualified zone name, with trailing dot
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Delegated sub-zone names, relative to this zone
    pub fn sub_zones(&self) -> impl Iterator<Item = &str> {
        self.sub_zones.iter().map(String::as_str)
    }

    /// Records in insertion order
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the zone holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fully-qualified form of a zone-relative name
    #[must_use]
    pub fn fqdn(&self, name: &str) -> String {
        if name.is_empty() {
            self.name.clone()
        } else {
            format!("{name}.{}", self.name)
        }
    }

    /// The delegated sub-zone `name` falls under, if any
    fn sub_zone_of(&self, name: &str) -> Option<&str> {
        self.sub_zones
            .iter()
            .find(|sub| {
                name == sub.as_str()
                    || name
                        .strip_suffix(sub.as_str())
                        .is_some_and(|head| head.ends_with('.'))
            })
            .map(String::as_str)
    }

    /// Add a record.
    ///
    /// Fails with [`ZoneError::DuplicateRecord`] when a record of the same
    /// name and type is already present. With `lenient` unset, the record is
    /// also checked against the delegated sub-zones and fails with
    /// [`ZoneError::SubzoneConflict`] when it falls under one (only NS
    /// records at the delegation point itself are accepted); CNAME records
    /// must then be off the apex, alone at their name, and point at a
    /// fully-qualified target.
    pub fn add_record(&mut self, record: Record, lenient: bool) -> Result<(), ZoneError> {
        let fqdn = self.fqdn(&record.name);

        if !lenient {
            if let Some(sub) = self.sub_zone_of(&record.name) {
                if record.name != sub || record.record_type != RecordType::Ns {
                    return Err(ZoneError::SubzoneConflict { fqdn });
                }
            }
        }

        if self
            .records
            .iter()
            .any(|r| r.name == record.name && r.record_type == record.record_type)
        {
            return Err(ZoneError::DuplicateRecord {
                fqdn,
                record_type: record.record_type.to_string(),
            });
        }

        if !lenient {
            self.validate(&record, &fqdn)?;
        }

        self.records.push(record);
        Ok(())
    }

    fn validate(&self, record: &Record, fqdn: &str) -> Result<(), ZoneError> {
        let invalid = |reason: &str| ZoneError::InvalidRecord {
            fqdn: fqdn.to_string(),
            reason: reason.to_string(),
        };

        let shares_node_with_cname = self.records.iter().any(|r| {
            r.name == record.name
                && (r.record_type == RecordType::Cname || record.record_type == RecordType::Cname)
        });
        if shares_node_with_cname {
            return Err(invalid("CNAME must be the only record at its name"));
        }

        if record.record_type == RecordType::Cname {
            if record.is_apex() {
                return Err(invalid("CNAME is not allowed at the zone apex"));
            }
            if !record.value.ends_with('.') {
                return Err(invalid("CNAME value must be fully qualified"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> Zone {
        Zone::new("example.com.", ["internal"]).unwrap()
    }

    fn cname(name: &str) -> Record {
        Record::cname(name, "target.example.net.", 3600)
    }

    #[test]
    fn requires_trailing_dot() {
        assert_eq!(
            Zone::new("example.com", Vec::<String>::new()),
            Err(ZoneError::InvalidName("example.com".into()))
        );
    }

    #[test]
    fn fqdn_of_relative_names() {
        let zone = zone();
        assert_eq!(zone.fqdn(""), "example.com.");
        assert_eq!(zone.fqdn("www"), "www.example.com.");
    }

    #[test]
    fn adds_records_in_order() {
        let mut zone = zone();
        zone.add_record(cname("b"), false).unwrap();
        zone.add_record(cname("a"), false).unwrap();

        let names: Vec<_> = zone.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(zone.len(), 2);
    }

    #[test]
    fn records_under_sub_zone_conflict() {
        let mut zone = zone();

        assert_eq!(
            zone.add_record(cname("www.internal"), false),
            Err(ZoneError::SubzoneConflict {
                fqdn: "www.internal.example.com.".into()
            })
        );
        assert!(matches!(
            zone.add_record(cname("internal"), false),
            Err(ZoneError::SubzoneConflict { .. })
        ));
        assert!(zone.is_empty());
    }

    #[test]
    fn lenient_ignores_sub_zones() {
        let mut zone = zone();
        zone.add_record(cname("www.internal"), true).unwrap();
        zone.add_record(cname("internal"), true).unwrap();
        assert_eq!(zone.len(), 2);

        assert!(matches!(
            zone.add_record(cname("www.internal"), true),
            Err(ZoneError::DuplicateRecord { .. })
        ));
    }

    #[test]
    fn ns_at_delegation_point_is_allowed() {
        let mut zone = zone();
        let ns = Record::new("internal", RecordType::Ns, 3600, "ns1.example.net.");
        zone.add_record(ns, false).unwrap();
        assert_eq!(zone.len(), 1);
    }

    #[test]
    fn label_boundary_for_sub_zones() {
        let mut zone = zone();
        zone.add_record(cname("notinternal"), false).unwrap();
        zone.add_record(cname("www.notinternal"), false).unwrap();
        assert_eq!(zone.len(), 2);
    }

    #[test]
    fn duplicate_name_and_type() {
        let mut zone = zone();
        zone.add_record(cname("www"), false).unwrap();

        let err = zone
            .add_record(Record::cname("www", "other.example.net.", 60), true)
            .unwrap_err();
        assert_eq!(
            err,
            ZoneError::DuplicateRecord {
                fqdn: "www.example.com.".into(),
                record_type: "CNAME".into()
            }
        );
        assert_eq!(zone.len(), 1);
    }

    #[test]
    fn cname_validation_is_relaxed_when_lenient() {
        let mut zone = zone();
        let apex = Record::cname("", "target.example.net.", 3600);
        let relative = Record::cname("www", "target", 3600);

        assert!(matches!(
            zone.add_record(apex.clone(), false),
            Err(ZoneError::InvalidRecord { .. })
        ));
        assert!(matches!(
            zone.add_record(relative.clone(), false),
            Err(ZoneError::InvalidRecord { .. })
        ));

        zone.add_record(apex, true).unwrap();
        zone.add_record(relative, true).unwrap();
        assert_eq!(zone.len(), 2);
    }

    #[test]
    fn cname_must_be_alone() {
        let mut zone = zone();
        zone.add_record(Record::new("www", RecordType::A, 300, "192.0.2.1"), false)
            .unwrap();

        assert!(matches!(
            zone.add_record(cname("www"), false),
            Err(ZoneError::InvalidRecord { .. })
        ));
        zone.add_record(cname("www"), true).unwrap();
    }

    #[test]
    fn sub_zone_names_are_normalized() {
        let zone = Zone::new("example.com.", ["internal.", "", "b.a"]).unwrap();
        let subs: Vec<_> = zone.sub_zones().collect();
        assert_eq!(subs, ["b.a", "internal"]);
    }
}
