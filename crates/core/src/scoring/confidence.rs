use super::keyword_rule::{apply_all, KeywordRule};
use super::scores::clamp_score;

pub const BASE_SCORE: f64 = 7.0;

pub const HEAVY_FILLER_COUNT: usize = 10;
pub const MODERATE_FILLER_COUNT: usize = 5;

/// Assertive and hedging phrases, weighed against each other.
pub const PHRASE_RULES: &[KeywordRule] = &[
    KeywordRule {
        name: "assertive",
        needles: &["i believe", "i'm confident"],
        delta: 0.5,
        case_sensitive: false,
    },
    KeywordRule {
        name: "emphatic",
        needles: &["definitely", "certainly"],
        delta: 0.3,
        case_sensitive: false,
    },
    KeywordRule {
        name: "uncertain",
        needles: &["i think maybe", "i'm not sure"],
        delta: -1.0,
        case_sensitive: false,
    },
    KeywordRule {
        name: "hedging",
        needles: &["probably", "might"],
        delta: -0.3,
        case_sensitive: false,
    },
];

pub fn score(transcript: &str, filler_count: usize) -> f64 {
    let mut score = BASE_SCORE + apply_all(PHRASE_RULES, transcript);

    if filler_count > HEAVY_FILLER_COUNT {
        score -= 1.5;
    } else if filler_count > MODERATE_FILLER_COUNT {
        score -= 0.8;
    }

    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_assertive_language_raises_score() {
        assert_relative_eq!(score("I believe this approach works", 0), 7.5);
        assert_relative_eq!(score("I'm confident in the design", 0), 7.5);
    }

    #[test]
    fn test_emphatic_language_raises_score() {
        assert_relative_eq!(score("that is definitely the cause", 0), 7.3);
    }

    #[test]
    fn test_uncertain_phrases_lower_score() {
        assert_relative_eq!(score("I think maybe it could work", 0), 6.0);
        assert_relative_eq!(score("I'm not sure about this", 0), 6.0);
    }

    #[test]
    fn test_hedging_words_lower_score() {
        assert_relative_eq!(score("it might be the network", 0), 6.7, epsilon = 1e-9);
    }

    #[test]
    fn test_phrase_checks_ignore_case() {
        assert_relative_eq!(score("i BELIEVE we can do it", 0), 7.5);
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(5, 0.0)] // boundary: 5 fillers still tolerated
    #[case(6, -0.8)]
    #[case(10, -0.8)] // boundary: highest bracket that still matches
    #[case(11, -1.5)]
    #[case(12, -1.5)]
    fn test_filler_count_ladder(#[case] fillers: usize, #[case] penalty: f64) {
        assert_relative_eq!(
            score("a neutral statement", fillers),
            BASE_SCORE + penalty,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_combined_penalties_stay_clamped_above_floor() {
        // uncertainty, hedging, and heavy fillers together
        let result = score("I think maybe it might probably fail, I'm not sure", 12);
        assert_relative_eq!(result, 7.0 - 1.0 - 0.3 - 1.5, epsilon = 1e-9);
        assert!(result >= 1.0);
    }

    #[test]
    fn test_empty_transcript_is_the_base_score() {
        assert_relative_eq!(score("", 0), BASE_SCORE);
    }
}
