//! Batch orchestration
//!
//! Runs grouping, integration, metrics derivation, indicator evaluation,
//! and aggregation over a finite sequence of per-source record
//! collections. Integration and scoring parallelize across identity
//! groups; the batch always runs to completion and reports recoverable
//! events in the batch report.

use crate::config::PipelineConfig;
use crate::report::BatchReport;
use faircat_domain::{IntegratedInstance, IndicatorResult, RawRecord, ScoreSheet};
use faircat_integration::{group_records, Integrator, MergeConflict};
use faircat_scoring::{aggregate, BatchMetrics, IndicatorRegistry};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

/// One terminal pipeline output: instance, indicator results, scores
#[derive(Debug, Clone, Serialize)]
pub struct ScoredInstance {
    /// The canonical merged record
    pub instance: IntegratedInstance,

    /// One result per registered indicator
    pub indicators: Vec<IndicatorResult>,

    /// Principle-level and overall scores
    pub scores: ScoreSheet,
}

/// Everything a batch run produces
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Scored instances in deterministic identity-key order
    pub scored: Vec<ScoredInstance>,

    /// Recoverable events and counters
    pub report: BatchReport,
}

/// Run the full pipeline over per-source raw record collections
pub fn run_batch(sources: &[Vec<RawRecord>], config: &PipelineConfig) -> BatchOutcome {
    let grouping = group_records(sources);
    let mut report = BatchReport {
        records_seen: grouping.records_seen,
        groups: grouping.group_count(),
        skipped: grouping.skipped.clone(),
        ..BatchReport::default()
    };

    // Integration: identity groups are independent units of work
    let integrator = Integrator::new(config.integration.clone());
    let groups: Vec<_> = grouping.iter_groups().collect();
    let integrated: Vec<(IntegratedInstance, Vec<MergeConflict>)> = groups
        .into_par_iter()
        .map(|(key, records)| integrator.integrate_group(key, records))
        .collect();

    let mut instances = Vec::with_capacity(integrated.len());
    for (instance, conflicts) in integrated {
        report.conflicts.extend(conflicts);
        instances.push(instance);
    }

    // Batch metrics are derived once, then shared read-only
    let metrics = BatchMetrics::compute(&instances);
    let registry = IndicatorRegistry::standard();

    let scored_with_faults: Vec<_> = instances
        .into_par_iter()
        .map(|instance| {
            let (indicators, faults) = registry.evaluate_all(&instance, &metrics, &config.scoring);
            let scores = aggregate(&indicators, &config.scoring.principle_weights);
            (
                ScoredInstance {
                    instance,
                    indicators,
                    scores,
                },
                faults,
            )
        })
        .collect();

    let mut scored = Vec::with_capacity(scored_with_faults.len());
    for (instance, faults) in scored_with_faults {
        report.faults.extend(faults);
        scored.push(instance);
    }

    info!(
        "batch complete: {} instance(s) from {} record(s), {} skipped",
        scored.len(),
        report.records_seen,
        report.skipped.len()
    );

    BatchOutcome { scored, report }
}
