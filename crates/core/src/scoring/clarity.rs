use super::keyword_rule::{apply_all, KeywordRule};
use super::scores::clamp_score;

pub const BASE_SCORE: f64 = 7.5;

pub const RAMBLING_SENTENCE_WORDS: f64 = 25.0;
pub const CHOPPY_SENTENCE_WORDS: f64 = 8.0;

pub const TRANSITION_RULES: &[KeywordRule] = &[
    KeywordRule {
        name: "sequencing",
        needles: &["first", "then", "finally"],
        delta: 0.5,
        case_sensitive: false,
    },
    KeywordRule {
        name: "logical-connectives",
        needles: &["however", "therefore", "as a result"],
        delta: 0.3,
        case_sensitive: false,
    },
];

/// Clarity reads sentence shape and signposting: mid-length sentences and
/// explicit transitions score best.
pub fn score(transcript: &str, word_count: usize, sentence_count: usize) -> f64 {
    let mut score = BASE_SCORE;

    let avg_words_per_sentence = word_count as f64 / sentence_count.max(1) as f64;
    if avg_words_per_sentence > RAMBLING_SENTENCE_WORDS {
        score -= 1.0;
    } else if avg_words_per_sentence < CHOPPY_SENTENCE_WORDS {
        score -= 0.5;
    }

    score += apply_all(TRANSITION_RULES, transcript);

    clamp_score(score)
}
