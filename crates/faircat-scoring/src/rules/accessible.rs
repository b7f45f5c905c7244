//! Accessible indicators

use crate::config::ScoringConfig;
use crate::error::IndicatorFault;
use crate::indicator::Evaluation;
use crate::metrics::BatchMetrics;
use faircat_domain::IntegratedInstance;

/// Source labels that point at a downloadable artifact or source tree
const DOWNLOAD_LABELS: &[&str] = &["bioconda", "bioconductor", "sourceforge", "github", "bitbucket"];

/// A1_1: a downloadable artifact or source location is available
pub fn a1_1_downloadable(
    instance: &IntegratedInstance,
    _metrics: &BatchMetrics,
    _config: &ScoringConfig,
) -> Result<Evaluation, IndicatorFault> {
    if !instance.repository.is_empty() {
        return Ok(Evaluation::pass(format!(
            "source repository available: {}",
            instance.repository[0]
        )));
    }

    for label in DOWNLOAD_LABELS {
        if let Some(url) = instance.source_labels.get(*label) {
            if !url.is_empty() {
                return Ok(
                    Evaluation::pass(format!("downloadable via {}: {}", label, url))
                );
            }
        }
    }

    Ok(Evaluation::fail(
        "no repository or download location in any source",
    ))
}

/// A1_2: documentation is available
pub fn a1_2_documentation(
    instance: &IntegratedInstance,
    _metrics: &BatchMetrics,
    _config: &ScoringConfig,
) -> Result<Evaluation, IndicatorFault> {
    if instance.documentation.is_empty() {
        Ok(Evaluation::fail("no documentation links"))
    } else {
        Ok(Evaluation::pass(format!(
            "{} documentation link(s)",
            instance.documentation.len()
        )))
    }
}

/// A3_2: non-web tools must be distributable on at least one free OS
///
/// True when the declared type is not web (an absent type counts as
/// non-web) and the OS list, compared case-insensitively against the
/// free-OS allow-list, contains at least one match. An empty OS list
/// fails; it never faults.
pub fn a3_2_free_os(
    instance: &IntegratedInstance,
    _metrics: &BatchMetrics,
    config: &ScoringConfig,
) -> Result<Evaluation, IndicatorFault> {
    if instance.is_web() {
        return Ok(Evaluation::fail(
            "web tool: OS distributability does not apply",
        ));
    }

    if instance.os.is_empty() {
        return Ok(Evaluation::fail("no operating system declared"));
    }

    let free: Vec<&str> = instance
        .os
        .iter()
        .filter(|os| config.is_free_os(os))
        .map(String::as_str)
        .collect();

    if free.is_empty() {
        Ok(Evaluation::fail(format!(
            "no free OS among: {}",
            instance.os.join(", ")
        )))
    } else {
        Ok(Evaluation::pass(format!(
            "distributable on free OS: {}",
            free.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faircat_domain::{Grade, IdentityKey};

    fn instance(tool_type: Option<&str>, os: &[&str]) -> IntegratedInstance {
        let mut instance =
            IntegratedInstance::new(IdentityKey::new("t", tool_type.map(String::from)));
        instance.os = os.iter().map(|s| s.to_string()).collect();
        instance
    }

    fn a3_2(instance: &IntegratedInstance) -> Grade {
        a3_2_free_os(instance, &BatchMetrics::default(), &ScoringConfig::default())
            .unwrap()
            .grade
    }

    #[test]
    fn test_no_web_and_free_os() {
        assert_eq!(a3_2(&instance(Some("no_web"), &["Linux"])), Grade::Bool(true));
    }

    #[test]
    fn test_no_web_and_non_free_os() {
        assert_eq!(
            a3_2(&instance(Some("no_web"), &["Windows"])),
            Grade::Bool(false)
        );
    }

    #[test]
    fn test_no_web_and_mixed_os() {
        assert_eq!(
            a3_2(&instance(Some("no_web"), &["Linux", "Windows"])),
            Grade::Bool(true)
        );
    }

    #[test]
    fn test_os_comparison_is_case_insensitive() {
        assert_eq!(
            a3_2(&instance(Some("no_web"), &["linux", "Windows"])),
            Grade::Bool(true)
        );
    }

    #[test]
    fn test_empty_os_fails() {
        assert_eq!(a3_2(&instance(Some("no_web"), &[])), Grade::Bool(false));
    }

    #[test]
    fn test_web_tool_fails_regardless_of_os() {
        assert_eq!(a3_2(&instance(Some("web"), &["Linux"])), Grade::Bool(false));
    }

    #[test]
    fn test_absent_type_counts_as_non_web() {
        assert_eq!(a3_2(&instance(None, &["Linux"])), Grade::Bool(true));
    }

    #[test]
    fn test_a1_1_repository_wins() {
        let mut with_repo = instance(Some("cmd"), &[]);
        with_repo.repository = vec!["https://github.com/x/y".to_string()];
        let grade = a1_1_downloadable(
            &with_repo,
            &BatchMetrics::default(),
            &ScoringConfig::default(),
        )
        .unwrap()
        .grade;
        assert_eq!(grade, Grade::Bool(true));
    }

    #[test]
    fn test_a1_1_empty_label_does_not_count() {
        let mut unresolved = instance(Some("cmd"), &[]);
        unresolved
            .source_labels
            .insert("github".to_string(), String::new());
        let grade = a1_1_downloadable(
            &unresolved,
            &BatchMetrics::default(),
            &ScoringConfig::default(),
        )
        .unwrap()
        .grade;
        assert_eq!(grade, Grade::Bool(false));
    }
}
