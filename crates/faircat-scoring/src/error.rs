//! Error types for the scoring layer

use thiserror::Error;

/// An evaluator failed on unexpected input shape
///
/// The indicator's result is recorded as indeterminate and excluded from
/// principle aggregation; the fault is surfaced in the batch report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("indicator '{indicator}' faulted: {message}")]
pub struct IndicatorFault {
    /// Identifier of the faulting indicator
    pub indicator: String,

    /// What went wrong
    pub message: String,
}

impl IndicatorFault {
    /// Create a fault for the given indicator
    pub fn new(indicator: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            indicator: indicator.into(),
            message: message.into(),
        }
    }
}
