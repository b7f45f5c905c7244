//! The indicator rule engine
//!
//! A registry mapping indicator identifier → evaluator function. Every
//! evaluator is a pure function of the instance, the batch metrics, and
//! the scoring configuration, so results are reproducible and
//! independently testable.

use crate::config::ScoringConfig;
use crate::error::IndicatorFault;
use crate::metrics::BatchMetrics;
use crate::rules;
use faircat_domain::{Grade, IndicatorResult, IntegratedInstance, Principle};
use tracing::warn;

/// A successful evaluation: a graded result plus its justification trail
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The graded judgment
    pub grade: Grade,

    /// Ordered human-readable justification strings
    pub log: Vec<String>,
}

impl Evaluation {
    /// A passing boolean judgment
    pub fn pass(reason: impl Into<String>) -> Self {
        Self {
            grade: Grade::Bool(true),
            log: vec![reason.into()],
        }
    }

    /// A failing boolean judgment
    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            grade: Grade::Bool(false),
            log: vec![reason.into()],
        }
    }

    /// A fractional judgment
    pub fn graded(value: f64, reason: impl Into<String>) -> Self {
        Self {
            grade: Grade::Fraction(value),
            log: vec![reason.into()],
        }
    }

    /// Append a justification line
    pub fn note(mut self, line: impl Into<String>) -> Self {
        self.log.push(line.into());
        self
    }
}

/// Evaluator signature: pure function of instance, metrics, and config
pub type EvalFn =
    fn(&IntegratedInstance, &BatchMetrics, &ScoringConfig) -> Result<Evaluation, IndicatorFault>;

/// One registered indicator
#[derive(Debug, Clone)]
pub struct IndicatorDef {
    /// Indicator identifier (e.g. "A3_2")
    pub id: &'static str,

    /// Principle this indicator contributes to
    pub principle: Principle,

    /// The evaluator function
    pub eval: EvalFn,
}

/// The indicator registry
///
/// Load-once, immutable for the process lifetime: built at initialization
/// and only read afterwards, so evaluations can run on a worker pool with
/// no locking.
#[derive(Debug, Clone)]
pub struct IndicatorRegistry {
    defs: Vec<IndicatorDef>,
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl IndicatorRegistry {
    /// An empty registry
    pub fn empty() -> Self {
        Self { defs: Vec::new() }
    }

    /// The standard FAIR indicator set
    pub fn standard() -> Self {
        let mut registry = Self::empty();

        registry.register(IndicatorDef {
            id: "F1_1",
            principle: Principle::Findable,
            eval: rules::findable::f1_1_name,
        });
        registry.register(IndicatorDef {
            id: "F1_2",
            principle: Principle::Findable,
            eval: rules::findable::f1_2_version,
        });
        registry.register(IndicatorDef {
            id: "F2_1",
            principle: Principle::Findable,
            eval: rules::findable::f2_1_topics,
        });
        registry.register(IndicatorDef {
            id: "F2_2",
            principle: Principle::Findable,
            eval: rules::findable::f2_2_operations,
        });
        registry.register(IndicatorDef {
            id: "F3_1",
            principle: Principle::Findable,
            eval: rules::findable::f3_1_registries,
        });

        registry.register(IndicatorDef {
            id: "A1_1",
            principle: Principle::Accessible,
            eval: rules::accessible::a1_1_downloadable,
        });
        registry.register(IndicatorDef {
            id: "A1_2",
            principle: Principle::Accessible,
            eval: rules::accessible::a1_2_documentation,
        });
        registry.register(IndicatorDef {
            id: "A3_2",
            principle: Principle::Accessible,
            eval: rules::accessible::a3_2_free_os,
        });

        registry.register(IndicatorDef {
            id: "I1_1",
            principle: Principle::Interoperable,
            eval: rules::interoperable::i1_1_formats_declared,
        });
        registry.register(IndicatorDef {
            id: "I1_2",
            principle: Principle::Interoperable,
            eval: rules::interoperable::i1_2_formats_standard,
        });
        registry.register(IndicatorDef {
            id: "I3_1",
            principle: Principle::Interoperable,
            eval: rules::interoperable::i3_1_composable_type,
        });

        registry.register(IndicatorDef {
            id: "R1_1",
            principle: Principle::Reusable,
            eval: rules::reusable::r1_1_license,
        });
        registry.register(IndicatorDef {
            id: "R1_2",
            principle: Principle::Reusable,
            eval: rules::reusable::r1_2_open_license,
        });
        registry.register(IndicatorDef {
            id: "R2_1",
            principle: Principle::Reusable,
            eval: rules::reusable::r2_1_authors,
        });
        registry.register(IndicatorDef {
            id: "R4_1",
            principle: Principle::Reusable,
            eval: rules::reusable::r4_1_publication,
        });

        registry
    }

    /// Register an indicator
    ///
    /// # Panics
    /// Panics on a duplicate identifier; the registry is built once at
    /// startup, so a duplicate is a programming error.
    pub fn register(&mut self, def: IndicatorDef) {
        assert!(
            !self.contains(def.id),
            "indicator '{}' registered twice",
            def.id
        );
        self.defs.push(def);
    }

    /// True when an indicator with this identifier is registered
    pub fn contains(&self, id: &str) -> bool {
        self.defs.iter().any(|def| def.id == id)
    }

    /// Number of registered indicators
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// True when no indicator is registered
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Evaluate every registered indicator on one instance
    ///
    /// A faulting evaluator yields an indeterminate result and a fault
    /// entry; it never aborts the remaining evaluations.
    pub fn evaluate_all(
        &self,
        instance: &IntegratedInstance,
        metrics: &BatchMetrics,
        config: &ScoringConfig,
    ) -> (Vec<IndicatorResult>, Vec<IndicatorFault>) {
        let mut results = Vec::with_capacity(self.defs.len());
        let mut faults = Vec::new();

        for def in &self.defs {
            match (def.eval)(instance, metrics, config) {
                Ok(evaluation) => results.push(IndicatorResult {
                    id: def.id.to_string(),
                    principle: def.principle,
                    grade: Some(evaluation.grade),
                    justifications: evaluation.log,
                }),
                Err(fault) => {
                    warn!("'{}': {}", instance.key, fault);
                    results.push(IndicatorResult {
                        id: def.id.to_string(),
                        principle: def.principle,
                        grade: None,
                        justifications: vec![fault.to_string()],
                    });
                    faults.push(fault);
                }
            }
        }

        (results, faults)
    }
}
