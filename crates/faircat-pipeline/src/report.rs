//! Structured batch report
//!
//! Accumulates every recoverable event of a batch run: skipped malformed
//! records, publication merge conflicts, and indicator faults. Returned
//! alongside the successful outputs; nothing in the core is fatal.

use faircat_integration::{MalformedRecord, MergeConflict};
use faircat_scoring::IndicatorFault;

/// Everything that went sideways during one batch, plus basic counters
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Raw records seen across all sources, including skipped ones
    pub records_seen: usize,

    /// Identity groups formed
    pub groups: usize,

    /// Records skipped for missing identity fields
    pub skipped: Vec<MalformedRecord>,

    /// Publication merge conflicts, resolved last-wins
    pub conflicts: Vec<MergeConflict>,

    /// Evaluator faults recorded as indeterminate results
    pub faults: Vec<IndicatorFault>,
}

impl BatchReport {
    /// True when the batch completed without a single recoverable event
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.conflicts.is_empty() && self.faults.is_empty()
    }

    /// Human-readable multi-line summary
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("records seen:     {}", self.records_seen),
            format!("identity groups:  {}", self.groups),
            format!("records skipped:  {}", self.skipped.len()),
            format!("merge conflicts:  {}", self.conflicts.len()),
            format!("indicator faults: {}", self.faults.len()),
        ];
        for skipped in &self.skipped {
            lines.push(format!("  skipped: {}", skipped));
        }
        for conflict in &self.conflicts {
            lines.push(format!("  conflict: {}", conflict));
        }
        for fault in &self.faults {
            lines.push(format!("  fault: {}", fault));
        }
        lines.join("\n")
    }
}
