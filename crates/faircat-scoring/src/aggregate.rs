//! The FAIR aggregator
//!
//! Folds indicator results into per-principle and overall scores. A pure
//! deterministic function of its inputs: permuting indicator evaluation
//! order never changes the resulting score sheet.

use crate::config::PrincipleWeights;
use faircat_domain::{IndicatorResult, Principle, PrincipleScore, ScoreSheet};

/// Aggregate indicator results into a score sheet
///
/// Principle score = arithmetic mean of the principle's determinate
/// grades, clamped to [0.0, 1.0]; indeterminate results are excluded from
/// the mean. Overall = weighted mean of the four principle scores.
pub fn aggregate(results: &[IndicatorResult], weights: &PrincipleWeights) -> ScoreSheet {
    let findable = principle_score(results, Principle::Findable);
    let accessible = principle_score(results, Principle::Accessible);
    let interoperable = principle_score(results, Principle::Interoperable);
    let reusable = principle_score(results, Principle::Reusable);

    let total = weights.total();
    let overall = if total == 0.0 {
        0.0
    } else {
        (findable.score * weights.findable
            + accessible.score * weights.accessible
            + interoperable.score * weights.interoperable
            + reusable.score * weights.reusable)
            / total
    };

    ScoreSheet {
        findable,
        accessible,
        interoperable,
        reusable,
        overall,
    }
}

fn principle_score(results: &[IndicatorResult], principle: Principle) -> PrincipleScore {
    let mut sum = 0.0;
    let mut contributing = Vec::new();

    for result in results {
        if result.principle != principle {
            continue;
        }
        let Some(grade) = result.grade else {
            continue;
        };
        sum += grade.value();
        contributing.push(result.id.clone());
    }

    if contributing.is_empty() {
        return PrincipleScore::empty();
    }

    // Sorted contributor list keeps the sheet independent of evaluation order
    let score = (sum / contributing.len() as f64).clamp(0.0, 1.0);
    contributing.sort();
    PrincipleScore {
        score,
        contributing,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use faircat_domain::Grade;
    use proptest::prelude::*;

    fn arbitrary_results() -> impl Strategy<Value = Vec<IndicatorResult>> {
        prop::collection::vec(
            (0usize..4, prop::option::of(0.0f64..=1.0)).prop_map(|(p, grade)| IndicatorResult {
                id: format!("X{}_1", p),
                principle: Principle::ALL[p],
                grade: grade.map(Grade::Fraction),
                justifications: Vec::new(),
            }),
            0..16,
        )
    }

    proptest! {
        /// Property: every aggregate lands in [0, 1]
        #[test]
        fn test_scores_are_bounded(results in arbitrary_results()) {
            let sheet = aggregate(&results, &PrincipleWeights::default());
            for principle in Principle::ALL {
                let score = sheet.principle(principle).score;
                prop_assert!((0.0..=1.0).contains(&score));
            }
            prop_assert!((0.0..=1.0).contains(&sheet.overall));
        }

        /// Property: aggregation is order-independent
        #[test]
        fn test_order_independence(results in arbitrary_results(), seed in any::<u64>()) {
            let mut shuffled = results.clone();
            // Cheap deterministic shuffle
            let len = shuffled.len();
            if len > 1 {
                for i in 0..len {
                    let j = (seed as usize).wrapping_mul(i + 1) % len;
                    shuffled.swap(i, j);
                }
            }
            let a = aggregate(&results, &PrincipleWeights::default());
            let b = aggregate(&shuffled, &PrincipleWeights::default());
            prop_assert_eq!(a.findable.contributing, b.findable.contributing);
            prop_assert!((a.overall - b.overall).abs() < 1e-9);
        }
    }
}
