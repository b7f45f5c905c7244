//! Findable indicators

use crate::config::ScoringConfig;
use crate::error::IndicatorFault;
use crate::indicator::Evaluation;
use crate::metrics::BatchMetrics;
use faircat_domain::IntegratedInstance;

/// F1_1: the tool has a canonical name
pub fn f1_1_name(
    instance: &IntegratedInstance,
    _metrics: &BatchMetrics,
    _config: &ScoringConfig,
) -> Result<Evaluation, IndicatorFault> {
    if instance.key.name.trim().is_empty() {
        Ok(Evaluation::fail("no canonical name recorded"))
    } else {
        Ok(Evaluation::pass(format!(
            "canonical name '{}' recorded",
            instance.key.name
        )))
    }
}

/// F1_2: version information is recorded
pub fn f1_2_version(
    instance: &IntegratedInstance,
    _metrics: &BatchMetrics,
    _config: &ScoringConfig,
) -> Result<Evaluation, IndicatorFault> {
    if instance.versions.is_empty() {
        Ok(Evaluation::fail("no version information in any source"))
    } else {
        Ok(Evaluation::pass(format!(
            "{} version(s) recorded: {}",
            instance.versions.len(),
            instance.versions.join(", ")
        )))
    }
}

/// F2_1: the tool carries structured topic annotations
pub fn f2_1_topics(
    instance: &IntegratedInstance,
    _metrics: &BatchMetrics,
    _config: &ScoringConfig,
) -> Result<Evaluation, IndicatorFault> {
    if instance.edam_topics.is_empty() {
        Ok(Evaluation::fail("no EDAM topic annotations"))
    } else {
        Ok(Evaluation::pass(format!(
            "{} EDAM topic annotation(s)",
            instance.edam_topics.len()
        )))
    }
}

/// F2_2: the tool carries structured operation annotations
pub fn f2_2_operations(
    instance: &IntegratedInstance,
    _metrics: &BatchMetrics,
    _config: &ScoringConfig,
) -> Result<Evaluation, IndicatorFault> {
    if instance.edam_operations.is_empty() {
        Ok(Evaluation::fail("no EDAM operation annotations"))
    } else {
        Ok(Evaluation::pass(format!(
            "{} EDAM operation annotation(s)",
            instance.edam_operations.len()
        )))
    }
}

/// F3_1: the tool is discoverable through more than one registry
pub fn f3_1_registries(
    instance: &IntegratedInstance,
    _metrics: &BatchMetrics,
    _config: &ScoringConfig,
) -> Result<Evaluation, IndicatorFault> {
    let count = instance.provenance.len();
    if count > 1 {
        Ok(Evaluation::pass(format!(
            "found in {} registries: {}",
            count,
            instance.provenance.iter().collect::<Vec<_>>().join(", ")
        )))
    } else {
        Ok(Evaluation::fail("found in a single registry only"))
    }
}
