//! Provenance tracking for integrated instances

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The set of source tags that contributed to a merged record
///
/// Stored as an ordered set: contribution is a fact, not a sequence, so
/// permuting source-processing order never changes provenance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    sources: BTreeSet<String>,
}

impl Provenance {
    /// Create empty provenance
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a contributing source tag
    pub fn record(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    /// True when the given source contributed
    pub fn contains(&self, source: &str) -> bool {
        self.sources.contains(source)
    }

    /// Number of distinct contributing sources
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// True when no source has been recorded
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Iterate over the contributing source tags in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(String::as_str)
    }
}

impl FromIterator<String> for Provenance {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            sources: iter.into_iter().collect(),
        }
    }
}
