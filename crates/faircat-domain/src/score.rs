//! FAIR scoring value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four FAIR principles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    /// Findable
    Findable,
    /// Accessible
    Accessible,
    /// Interoperable
    Interoperable,
    /// Reusable
    Reusable,
}

impl Principle {
    /// All four principles, in canonical order
    pub const ALL: [Principle; 4] = [
        Principle::Findable,
        Principle::Accessible,
        Principle::Interoperable,
        Principle::Reusable,
    ];

    /// Single-letter abbreviation used in indicator identifiers
    pub fn letter(&self) -> char {
        match self {
            Principle::Findable => 'F',
            Principle::Accessible => 'A',
            Principle::Interoperable => 'I',
            Principle::Reusable => 'R',
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Principle::Findable => "findable",
            Principle::Accessible => "accessible",
            Principle::Interoperable => "interoperable",
            Principle::Reusable => "reusable",
        };
        write!(f, "{}", name)
    }
}

/// A graded judgment produced by one indicator evaluation
///
/// Indicators are either boolean or fractional; both map onto [0.0, 1.0]
/// for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Grade {
    /// Hard pass/fail judgment
    Bool(bool),
    /// Fractional judgment in [0.0, 1.0]
    Fraction(f64),
}

impl Grade {
    /// Numeric value of the grade, clamped to [0.0, 1.0]
    pub fn value(&self) -> f64 {
        match self {
            Grade::Bool(true) => 1.0,
            Grade::Bool(false) => 0.0,
            Grade::Fraction(v) => v.clamp(0.0, 1.0),
        }
    }
}

/// The outcome of evaluating one registered indicator on one instance
///
/// `grade` is `None` when the evaluator faulted; such results are recorded
/// as indeterminate and excluded from principle aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    /// Registered indicator identifier (e.g. "F1_1", "A3_2")
    pub id: String,

    /// Principle this indicator contributes to
    pub principle: Principle,

    /// Graded result, or `None` for indeterminate
    pub grade: Option<Grade>,

    /// Ordered human-readable justification trail
    pub justifications: Vec<String>,
}

impl IndicatorResult {
    /// True when the evaluation produced no usable grade
    pub fn is_indeterminate(&self) -> bool {
        self.grade.is_none()
    }
}

/// Aggregate score for one principle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrincipleScore {
    /// Mean of the contributing indicators' grades, clamped to [0.0, 1.0]
    pub score: f64,

    /// Identifiers of the indicators that entered the mean
    pub contributing: Vec<String>,
}

impl PrincipleScore {
    /// A zero score with no contributing indicators
    pub fn empty() -> Self {
        Self {
            score: 0.0,
            contributing: Vec::new(),
        }
    }
}

/// Per-principle and overall FAIR scores for one instance
///
/// A pure deterministic function of its indicator inputs; immutable once
/// produced and handed to the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSheet {
    /// Findable aggregate
    pub findable: PrincipleScore,
    /// Accessible aggregate
    pub accessible: PrincipleScore,
    /// Interoperable aggregate
    pub interoperable: PrincipleScore,
    /// Reusable aggregate
    pub reusable: PrincipleScore,
    /// Weighted mean of the four principle scores
    pub overall: f64,
}

impl ScoreSheet {
    /// The aggregate for a given principle
    pub fn principle(&self, principle: Principle) -> &PrincipleScore {
        match principle {
            Principle::Findable => &self.findable,
            Principle::Accessible => &self.accessible,
            Principle::Interoperable => &self.interoperable,
            Principle::Reusable => &self.reusable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_grade_values() {
        assert_eq!(Grade::Bool(true).value(), 1.0);
        assert_eq!(Grade::Bool(false).value(), 0.0);
    }

    #[test]
    fn test_fraction_grade_is_clamped() {
        assert_eq!(Grade::Fraction(0.5).value(), 0.5);
        assert_eq!(Grade::Fraction(1.7).value(), 1.0);
        assert_eq!(Grade::Fraction(-0.2).value(), 0.0);
    }

    #[test]
    fn test_indeterminate_result() {
        let result = IndicatorResult {
            id: "F1_1".to_string(),
            principle: Principle::Findable,
            grade: None,
            justifications: vec!["evaluator faulted".to_string()],
        };
        assert!(result.is_indeterminate());
    }

    #[test]
    fn test_principle_letters() {
        let letters: Vec<char> = Principle::ALL.iter().map(|p| p.letter()).collect();
        assert_eq!(letters, vec!['F', 'A', 'I', 'R']);
    }
}
