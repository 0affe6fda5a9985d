use serde::{Deserialize, Serialize};

use crate::shared::constants::{SCORE_MAX, SCORE_MIN};

pub const CONTENT_WEIGHT: f64 = 0.4;
pub const FLUENCY_WEIGHT: f64 = 0.25;
pub const CONFIDENCE_WEIGHT: f64 = 0.2;
pub const CLARITY_WEIGHT: f64 = 0.15;

/// The four quality axes, full precision. Rounding to one decimal happens
/// only at the result boundary via [`DimensionScores::rounded`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub content: f64,
    pub fluency: f64,
    pub confidence: f64,
    pub clarity: f64,
}

impl DimensionScores {
    /// Fixed-weight combination. Not re-clamped: a convex combination of
    /// clamped scores already lies within the score range.
    pub fn overall(&self) -> f64 {
        self.content * CONTENT_WEIGHT
            + self.fluency * FLUENCY_WEIGHT
            + self.confidence * CONFIDENCE_WEIGHT
            + self.clarity * CLARITY_WEIGHT
    }

    pub fn rounded(&self) -> DimensionScores {
        DimensionScores {
            content: round_to_tenth(self.content),
            fluency: round_to_tenth(self.fluency),
            confidence: round_to_tenth(self.confidence),
            clarity: round_to_tenth(self.clarity),
        }
    }
}

/// Clamps a raw scorer result into the score range. Applied once at the
/// end of each scorer, never between adjustments.
pub fn clamp_score(score: f64) -> f64 {
    score.max(SCORE_MIN).min(SCORE_MAX)
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_weights_sum_to_one() {
        assert_relative_eq!(
            CONTENT_WEIGHT + FLUENCY_WEIGHT + CONFIDENCE_WEIGHT + CLARITY_WEIGHT,
            1.0
        );
    }

    #[test]
    fn test_overall_is_the_weighted_sum() {
        let scores = DimensionScores {
            content: 5.5,
            fluency: 6.5,
            confidence: 7.0,
            clarity: 8.0,
        };
        assert_relative_eq!(
            scores.overall(),
            5.5 * 0.4 + 6.5 * 0.25 + 7.0 * 0.2 + 8.0 * 0.15
        );
    }

    #[test]
    fn test_overall_of_uniform_scores_is_that_score() {
        let scores = DimensionScores {
            content: 7.0,
            fluency: 7.0,
            confidence: 7.0,
            clarity: 7.0,
        };
        assert_relative_eq!(scores.overall(), 7.0);
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(-3.5, 1.0)]
    #[case(1.0, 1.0)]
    #[case(5.5, 5.5)]
    #[case(10.0, 10.0)]
    #[case(12.3, 10.0)]
    fn test_clamp_score(#[case] raw: f64, #[case] expected: f64) {
        assert_relative_eq!(clamp_score(raw), expected);
    }

    #[rstest]
    #[case(6.425, 6.4)]
    #[case(6.45, 6.5)]
    #[case(7.0, 7.0)]
    #[case(9.99, 10.0)]
    fn test_round_to_tenth(#[case] raw: f64, #[case] expected: f64) {
        assert_relative_eq!(round_to_tenth(raw), expected);
    }

    #[test]
    fn test_rounding_is_idempotent() {
        for raw in [1.0, 3.3, 6.425, 8.75, 10.0] {
            let once = round_to_tenth(raw);
            assert_relative_eq!(round_to_tenth(once), once);
        }
    }
}
