//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the core pipeline and the
//! harvesting / persistence infrastructure. Implementations live outside
//! this workspace's core crates.

use crate::instance::IntegratedInstance;
use crate::record::RawRecord;
use crate::score::{IndicatorResult, ScoreSheet};

/// Trait for a per-source harvester
///
/// Each implementation turns one registry's native format into the common
/// raw-record shape and is identified by its source tag.
pub trait RecordSource {
    /// Error type for harvest operations
    type Error;

    /// Tag recorded in the provenance of every record this source yields
    fn source_tag(&self) -> &str;

    /// Fetch all raw records currently observable from this source
    fn harvest(&mut self) -> Result<Vec<RawRecord>, Self::Error>;
}

/// Trait for the persistence collaborator
///
/// Receives the terminal output of the pipeline: integrated instances with
/// their indicator results and score sheets, keyed by (name, type).
pub trait InstanceSink {
    /// Error type for store operations
    type Error;

    /// Store one scored instance
    fn store(
        &mut self,
        instance: &IntegratedInstance,
        indicators: &[IndicatorResult],
        scores: &ScoreSheet,
    ) -> Result<(), Self::Error>;
}
