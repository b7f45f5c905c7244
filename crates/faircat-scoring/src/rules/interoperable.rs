//! Interoperable indicators

use crate::config::ScoringConfig;
use crate::error::IndicatorFault;
use crate::indicator::Evaluation;
use crate::metrics::BatchMetrics;
use faircat_domain::IntegratedInstance;

/// Tool types that compose into pipelines and other software
const COMPOSABLE_TYPES: &[&str] = &["cmd", "lib", "api", "rest", "soap", "sparql", "workflow"];

/// I1_1: input/output data formats are declared
///
/// Graded: full marks when both directions are annotated, half when only
/// one is.
pub fn i1_1_formats_declared(
    instance: &IntegratedInstance,
    _metrics: &BatchMetrics,
    _config: &ScoringConfig,
) -> Result<Evaluation, IndicatorFault> {
    match (!instance.input.is_empty(), !instance.output.is_empty()) {
        (true, true) => Ok(Evaluation::graded(
            1.0,
            "input and output formats declared",
        )),
        (true, false) => Ok(Evaluation::graded(0.5, "only input formats declared")),
        (false, true) => Ok(Evaluation::graded(0.5, "only output formats declared")),
        (false, false) => Ok(Evaluation::graded(0.0, "no data format annotations")),
    }
}

/// I1_2: declared formats are drawn from the standardized vocabulary
pub fn i1_2_formats_standard(
    instance: &IntegratedInstance,
    metrics: &BatchMetrics,
    _config: &ScoringConfig,
) -> Result<Evaluation, IndicatorFault> {
    let declared: Vec<&str> = instance
        .input
        .iter()
        .chain(instance.output.iter())
        .map(|format| format.term.as_str())
        .collect();

    if declared.is_empty() {
        return Ok(Evaluation::fail("no data format annotations"));
    }

    let non_standard: Vec<&str> = declared
        .iter()
        .copied()
        .filter(|term| !metrics.is_standard(term))
        .collect();

    if non_standard.len() == declared.len() {
        Ok(Evaluation::fail(format!(
            "no standardized format among: {}",
            non_standard.join(", ")
        )))
    } else {
        let mut evaluation = Evaluation::pass("at least one standardized format declared");
        if !non_standard.is_empty() {
            evaluation = evaluation.note(format!(
                "non-standard terms present: {}",
                non_standard.join(", ")
            ));
        }
        Ok(evaluation)
    }
}

/// I3_1: the declared type composes with other software
pub fn i3_1_composable_type(
    instance: &IntegratedInstance,
    _metrics: &BatchMetrics,
    _config: &ScoringConfig,
) -> Result<Evaluation, IndicatorFault> {
    match instance.key.tool_type.as_deref() {
        Some(tool_type) if COMPOSABLE_TYPES.contains(&tool_type) => Ok(Evaluation::pass(
            format!("type '{}' composes with other software", tool_type),
        )),
        Some(tool_type) => Ok(Evaluation::fail(format!(
            "type '{}' is not composable",
            tool_type
        ))),
        None => Ok(Evaluation::fail("no type declared")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faircat_domain::{FormatTerm, Grade, IdentityKey};

    fn instance() -> IntegratedInstance {
        IntegratedInstance::new(IdentityKey::new("t", Some("cmd".to_string())))
    }

    #[test]
    fn test_i1_1_grading() {
        let mut both = instance();
        both.input = vec![FormatTerm::named("FASTA")];
        both.output = vec![FormatTerm::named("BAM")];
        let grade = i1_1_formats_declared(&both, &BatchMetrics::default(), &ScoringConfig::default())
            .unwrap()
            .grade;
        assert_eq!(grade.value(), 1.0);

        let mut input_only = instance();
        input_only.input = vec![FormatTerm::named("FASTA")];
        let grade = i1_1_formats_declared(
            &input_only,
            &BatchMetrics::default(),
            &ScoringConfig::default(),
        )
        .unwrap()
        .grade;
        assert_eq!(grade.value(), 0.5);
    }

    #[test]
    fn test_i1_2_against_batch_vocabulary() {
        let mut standard = instance();
        standard.input = vec![FormatTerm::named("FASTA")];
        let mut freeform = instance();
        freeform.input = vec![FormatTerm::named("txt")];

        let metrics = BatchMetrics::compute(&[standard.clone(), freeform.clone()]);

        let grade = i1_2_formats_standard(&standard, &metrics, &ScoringConfig::default())
            .unwrap()
            .grade;
        assert_eq!(grade, Grade::Bool(true));

        let grade = i1_2_formats_standard(&freeform, &metrics, &ScoringConfig::default())
            .unwrap()
            .grade;
        assert_eq!(grade, Grade::Bool(false));
    }

    #[test]
    fn test_i3_1_types() {
        let composable = instance();
        let grade =
            i3_1_composable_type(&composable, &BatchMetrics::default(), &ScoringConfig::default())
                .unwrap()
                .grade;
        assert_eq!(grade, Grade::Bool(true));

        let gui = IntegratedInstance::new(IdentityKey::new("t", Some("desktop".to_string())));
        let grade = i3_1_composable_type(&gui, &BatchMetrics::default(), &ScoringConfig::default())
            .unwrap()
            .grade;
        assert_eq!(grade, Grade::Bool(false));
    }
}
