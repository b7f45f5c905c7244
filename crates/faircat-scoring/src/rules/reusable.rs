//! Reusable indicators

use crate::config::ScoringConfig;
use crate::error::IndicatorFault;
use crate::indicator::Evaluation;
use crate::metrics::BatchMetrics;
use faircat_domain::IntegratedInstance;

/// License-name prefixes recognized as open licenses
const OPEN_LICENSE_PREFIXES: &[&str] = &[
    "MIT", "Apache", "GPL", "LGPL", "AGPL", "BSD", "MPL", "EPL", "CC", "Artistic", "CECILL",
    "Unlicense", "zlib",
];

/// R1_1: a license is declared
pub fn r1_1_license(
    instance: &IntegratedInstance,
    _metrics: &BatchMetrics,
    _config: &ScoringConfig,
) -> Result<Evaluation, IndicatorFault> {
    if instance.licenses.is_empty() {
        Ok(Evaluation::fail("no license declared"))
    } else {
        let names: Vec<&str> = instance.licenses.iter().map(|l| l.name.as_str()).collect();
        Ok(Evaluation::pass(format!(
            "license(s) declared: {}",
            names.join(", ")
        )))
    }
}

/// R1_2: at least one declared license is a recognized open license
pub fn r1_2_open_license(
    instance: &IntegratedInstance,
    _metrics: &BatchMetrics,
    _config: &ScoringConfig,
) -> Result<Evaluation, IndicatorFault> {
    if instance.licenses.is_empty() {
        return Ok(Evaluation::fail("no license declared"));
    }

    for license in &instance.licenses {
        let name = license.name.trim();
        if OPEN_LICENSE_PREFIXES
            .iter()
            .any(|prefix| name.to_lowercase().starts_with(&prefix.to_lowercase()))
        {
            return Ok(Evaluation::pass(format!(
                "'{}' is a recognized open license",
                license.name
            )));
        }
    }

    let names: Vec<&str> = instance.licenses.iter().map(|l| l.name.as_str()).collect();
    Ok(Evaluation::fail(format!(
        "no recognized open license among: {}",
        names.join(", ")
    )))
}

/// R2_1: credit is declared (authors or organizations)
pub fn r2_1_authors(
    instance: &IntegratedInstance,
    _metrics: &BatchMetrics,
    _config: &ScoringConfig,
) -> Result<Evaluation, IndicatorFault> {
    if instance.authors.is_empty() {
        Ok(Evaluation::fail("no author information"))
    } else {
        Ok(Evaluation::pass(format!(
            "{} author entr(y/ies)",
            instance.authors.len()
        )))
    }
}

/// R4_1: a publication is linked
pub fn r4_1_publication(
    instance: &IntegratedInstance,
    _metrics: &BatchMetrics,
    _config: &ScoringConfig,
) -> Result<Evaluation, IndicatorFault> {
    if instance.publications.is_empty() {
        Ok(Evaluation::fail("no linked publication"))
    } else {
        Ok(Evaluation::pass(format!(
            "{} linked publication(s)",
            instance.publications.len()
        )))
    }
}
