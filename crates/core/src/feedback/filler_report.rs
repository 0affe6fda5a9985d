use serde::{Deserialize, Serialize};

use crate::lexical::filler_lexicon::FillerHit;

/// Ratio buckets for how much filler usage hurts the impression left on
/// an interviewer. Ordered; the first matching bucket wins.
pub const IMPACT_MINIMAL_RATIO: f64 = 0.02;
pub const IMPACT_LOW_RATIO: f64 = 0.05;
pub const IMPACT_MODERATE_RATIO: f64 = 0.10;

/// Per-answer filler summary shown alongside the scores.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillerWordReport {
    pub count: usize,
    /// One entry per matched token, formatted as `"word (N)"`.
    pub words: Vec<String>,
    pub impact: String,
}

pub fn build(hits: &[FillerHit], word_count: usize) -> FillerWordReport {
    let count = hits.iter().map(|hit| hit.count).sum();
    let words = hits
        .iter()
        .map(|hit| format!("{} ({})", hit.token, hit.count))
        .collect();
    FillerWordReport {
        count,
        words,
        impact: classify_impact(count, word_count).to_string(),
    }
}

pub fn classify_impact(filler_count: usize, word_count: usize) -> &'static str {
    let ratio = if word_count == 0 {
        0.0
    } else {
        filler_count as f64 / word_count as f64
    };

    if ratio < IMPACT_MINIMAL_RATIO {
        "Minimal impact - excellent control of speech patterns"
    } else if ratio < IMPACT_LOW_RATIO {
        "Low impact - minor distraction from your message"
    } else if ratio < IMPACT_MODERATE_RATIO {
        "Moderate impact - noticeable but manageable"
    } else {
        "High impact - significantly affects professional impression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hit(token: &'static str, count: usize) -> FillerHit {
        FillerHit {
            token,
            count,
            occurrences: vec![token.to_string(); count],
        }
    }

    #[test]
    fn test_words_formatted_with_counts() {
        let report = build(&[hit("um", 2), hit("like", 1)], 200);
        assert_eq!(report.count, 3);
        assert_eq!(report.words, vec!["um (2)", "like (1)"]);
    }

    #[test]
    fn test_no_hits_is_minimal_impact() {
        let report = build(&[], 100);
        assert_eq!(report.count, 0);
        assert!(report.words.is_empty());
        assert!(report.impact.starts_with("Minimal impact"));
    }

    #[rstest]
    #[case(1, 100, "Minimal")]  // 0.01
    #[case(2, 100, "Low")]      // 0.02: boundary goes to the next bucket
    #[case(4, 100, "Low")]      // 0.04
    #[case(5, 100, "Moderate")] // 0.05
    #[case(9, 100, "Moderate")] // 0.09
    #[case(10, 100, "High")]    // 0.10
    #[case(25, 100, "High")]
    fn test_impact_buckets(
        #[case] fillers: usize,
        #[case] words: usize,
        #[case] expected_prefix: &str,
    ) {
        assert!(classify_impact(fillers, words).starts_with(expected_prefix));
    }

    #[test]
    fn test_zero_words_does_not_divide() {
        assert!(classify_impact(0, 0).starts_with("Minimal impact"));
    }
}
