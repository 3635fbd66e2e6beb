//! Reference zone loading
//!
//! Parses an RFC 1035 master file with hickory's text parser and flattens it
//! into one entry per record-set, in the order the record-sets are declared.

use super::order::declaration_order;
use crate::dns::forwarding::RecordTypeMapper;
use hickory_proto::rr::{Name, RecordSet};
use hickory_proto::serialize::txt::Parser;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};
use zonediff_domain::{DomainError, ZoneEntry};

pub struct ZoneFileLoader;

impl ZoneFileLoader {
    /// Reads and parses the zone at `path`.
    ///
    /// `origin` overrides any `$ORIGIN` in the file. Without either, the
    /// origin is unknown and loading fails with `MissingOrigin`.
    pub fn load(path: &Path, origin: Option<&str>) -> Result<Vec<ZoneEntry>, DomainError> {
        let contents = std::fs::read_to_string(path).map_err(|e| DomainError::ZoneParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let entries = Self::parse(&contents, Some(path), origin)?;

        info!(
            zonefile = %path.display(),
            record_sets = entries.len(),
            "Zonefile loaded"
        );

        Ok(entries)
    }

    pub fn parse(
        contents: &str,
        path: Option<&Path>,
        origin: Option<&str>,
    ) -> Result<Vec<ZoneEntry>, DomainError> {
        let label = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string());

        let origin = origin.map(Self::origin_name).transpose()?;
        if origin.is_none() && !Self::declares_origin(contents) {
            return Err(DomainError::MissingOrigin(label));
        }

        let order = declaration_order(contents, origin.clone());

        let parser = Parser::new(contents, path.map(Path::to_path_buf), origin);
        let (origin, mut record_sets) = parser.parse().map_err(|e| DomainError::ZoneParse {
            path: label.clone(),
            reason: e.to_string(),
        })?;

        debug!(origin = %origin, record_sets = record_sets.len(), "Zonefile parsed");

        // Sets only reachable through $INCLUDE are not in the scan; they follow.
        let declared: Vec<RecordSet> = order
            .iter()
            .filter_map(|key| record_sets.remove(key))
            .collect();

        let entries = declared
            .into_iter()
            .chain(record_sets.into_values())
            .filter_map(|record_set| {
                let records: Vec<String> = record_set
                    .records_without_rrsigs()
                    .map(|record| record.to_string())
                    .collect();

                if records.is_empty() {
                    return None;
                }

                Some(ZoneEntry::new(
                    record_set.name().to_string(),
                    RecordTypeMapper::from_hickory(record_set.record_type()),
                    records,
                ))
            })
            .collect();

        Ok(entries)
    }

    /// Absolute name for a user-supplied origin; a missing trailing dot is implied.
    fn origin_name(origin: &str) -> Result<Name, DomainError> {
        let absolute = if origin.ends_with('.') {
            origin.to_string()
        } else {
            format!("{}.", origin)
        };

        Name::from_str(&absolute).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid origin '{}': {}", origin, e))
        })
    }

    fn declares_origin(contents: &str) -> bool {
        contents.lines().any(|line| {
            line.trim_start()
                .get(..7)
                .is_some_and(|directive| directive.eq_ignore_ascii_case("$ORIGIN"))
        })
    }
}
