//! Error types for the integration layer
//!
//! Nothing here is fatal to a batch: malformed records are skipped and
//! counted, merge conflicts are resolved last-wins and reported. Both are
//! accumulated into the batch report rather than propagated.

use thiserror::Error;

/// A raw record that could not be grouped because identity fields were
/// missing. The record is skipped; the batch continues.
///
/// The field is `source_tag` rather than `source`: thiserror reserves a
/// field named `source` for the error-chain cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed record from '{source_tag}': {reason}")]
pub struct MalformedRecord {
    /// Source tag of the offending record, or "unknown" when the tag
    /// itself was missing
    pub source_tag: String,

    /// What was wrong with the record
    pub reason: String,
}

/// Two publication sub-records shared an identifier but disagreed on an
/// overlapping key. Resolution is last-processed-wins; both values are
/// carried here so the event stays auditable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "merge conflict on '{instance}' publications ({identifier}): \
     field '{field}' had '{existing}', overwritten by '{incoming}'"
)]
pub struct MergeConflict {
    /// Display form of the identity key being merged
    pub instance: String,

    /// Identifier value the conflicting sub-records shared
    pub identifier: String,

    /// Sub-record field that disagreed
    pub field: String,

    /// Value that was already merged
    pub existing: String,

    /// Value that replaced it
    pub incoming: String,
}
