//! Batch-level derived metrics
//!
//! Facts needed by one or more indicators but not worth recomputing per
//! evaluation. Computed once per integration batch from all instances,
//! then shared read-only across every indicator evaluation, never
//! mutated after creation.

use faircat_domain::IntegratedInstance;
use std::collections::BTreeSet;

/// Free-text pseudo-format names that never count as standardized
const FREEFORM_FORMATS: &[&str] = &[
    "txt",
    "text",
    "csv",
    "tsv",
    "tabular",
    "xml",
    "json",
    "nucleotide",
    "pdf",
    "interval",
];

/// Read-only facts derived once per batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchMetrics {
    /// Standardized format vocabulary: every declared input format term
    /// across the batch that is not free-text
    standard_formats: BTreeSet<String>,
}

impl BatchMetrics {
    /// Derive metrics from all integrated instances of a batch
    pub fn compute(instances: &[IntegratedInstance]) -> Self {
        let mut standard_formats = BTreeSet::new();
        for instance in instances {
            for format in &instance.input {
                let term = format.term.trim_start();
                if Self::is_freeform(term) {
                    continue;
                }
                standard_formats.insert(term.to_string());
            }
        }
        Self { standard_formats }
    }

    /// True when the term names a standardized format observed in this batch
    pub fn is_standard(&self, term: &str) -> bool {
        self.standard_formats.contains(term.trim_start())
    }

    /// Number of standardized format terms observed
    pub fn standard_format_count(&self) -> usize {
        self.standard_formats.len()
    }

    fn is_freeform(term: &str) -> bool {
        term.contains(" format")
            || term.contains("(text)")
            || FREEFORM_FORMATS.contains(&term)
    }
}
