//! Pre-integration grouping of raw records by identity key
//!
//! Partitions all raw records from all sources into groups sharing an
//! identity key, as a two-level name → type → records mapping. The mapping
//! is a valid, inspectable intermediate artifact for debugging and audit,
//! but is not part of the committed output schema.

use crate::error::MalformedRecord;
use faircat_domain::{IdentityKey, RawRecord};
use std::collections::BTreeMap;
use tracing::warn;

/// Two-level grouping: name → type partition → records in encounter order
///
/// Encounter order is source processing order; repeated records for the
/// same tool from the same source (e.g. multiple versions) are all
/// appended, not deduplicated at this stage.
pub type PreIntegrationGroups = BTreeMap<String, BTreeMap<Option<String>, Vec<RawRecord>>>;

/// Result of grouping a batch of per-source record collections
#[derive(Debug, Clone, Default)]
pub struct GroupingOutcome {
    /// The identity-key grouping
    pub groups: PreIntegrationGroups,

    /// Records skipped because identity fields were missing
    pub skipped: Vec<MalformedRecord>,

    /// Total records seen across all sources, including skipped ones
    pub records_seen: usize,
}

impl GroupingOutcome {
    /// Number of distinct identity keys in the grouping
    pub fn group_count(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }

    /// Iterate over (key, records) pairs in deterministic key order
    pub fn iter_groups(&self) -> impl Iterator<Item = (IdentityKey, &[RawRecord])> {
        self.groups.iter().flat_map(|(name, by_type)| {
            by_type.iter().map(|(tool_type, records)| {
                (
                    IdentityKey::new(name.clone(), tool_type.clone()),
                    records.as_slice(),
                )
            })
        })
    }
}

/// Derive the identity key for a record, or describe why it has none
///
/// Exact field extraction, no normalization: name casing is canonicalized
/// upstream by the harvesters, and an absent type is a valid partition of
/// its own.
pub fn identity_key(record: &RawRecord) -> Result<IdentityKey, MalformedRecord> {
    if record.name.trim().is_empty() {
        return Err(MalformedRecord {
            source_tag: if record.source.trim().is_empty() {
                "unknown".to_string()
            } else {
                record.source.clone()
            },
            reason: "empty tool name".to_string(),
        });
    }
    if record.source.trim().is_empty() {
        return Err(MalformedRecord {
            source_tag: "unknown".to_string(),
            reason: format!("record '{}' carries no source tag", record.name),
        });
    }
    Ok(IdentityKey::new(
        record.name.clone(),
        record.tool_type.clone(),
    ))
}

/// Group all records from all sources by identity key
///
/// Malformed records are skipped and reported, never fatal to the batch.
pub fn group_records(sources: &[Vec<RawRecord>]) -> GroupingOutcome {
    let mut outcome = GroupingOutcome::default();

    for records in sources {
        for record in records {
            outcome.records_seen += 1;
            match identity_key(record) {
                Ok(key) => {
                    outcome
                        .groups
                        .entry(key.name)
                        .or_default()
                        .entry(key.tool_type)
                        .or_default()
                        .push(record.clone());
                }
                Err(malformed) => {
                    warn!("skipping record: {}", malformed);
                    outcome.skipped.push(malformed);
                }
            }
        }
    }

    outcome
}
