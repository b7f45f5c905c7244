//! Faircat Scoring Layer
//!
//! The rule-based FAIR indicator engine: a registry of named, pure
//! evaluator functions, each consuming an integrated instance (plus
//! batch-level derived metrics) and producing a graded result with a
//! human-readable justification trail, and the aggregator that folds
//! those results into principle-level and overall scores.
//!
//! Evaluators never raise on missing optional fields: absence is itself a
//! valid, scoreable state. An evaluator fault is recorded as an
//! indeterminate result and excluded from aggregation, never propagated.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod indicator;
pub mod metrics;
pub mod rules;

pub use aggregate::aggregate;
pub use config::{PrincipleWeights, ScoringConfig};
pub use error::IndicatorFault;
pub use indicator::{Evaluation, IndicatorDef, IndicatorRegistry};
pub use metrics::BatchMetrics;
