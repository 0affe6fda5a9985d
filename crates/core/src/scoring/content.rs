use super::keyword_rule::{apply_all, KeywordRule};
use super::scores::clamp_score;
use crate::shared::question::QuestionType;

pub const BASE_SCORE: f64 = 5.0;

pub const LONG_ANSWER_WORDS: usize = 200;
pub const SOLID_ANSWER_WORDS: usize = 100;
pub const THIN_ANSWER_WORDS: usize = 50;

/// Signals that a behavioral answer walks through a concrete scenario,
/// lands on an outcome, and reflects on it.
pub const BEHAVIORAL_RULES: &[KeywordRule] = &[
    KeywordRule {
        name: "scenario",
        needles: &["situation", "example"],
        delta: 0.5,
        case_sensitive: false,
    },
    KeywordRule {
        name: "outcome",
        needles: &["result", "outcome"],
        delta: 0.5,
        case_sensitive: false,
    },
    KeywordRule {
        name: "reflection",
        needles: &["learned", "improved"],
        delta: 0.3,
        case_sensitive: false,
    },
];

/// Technical answers earn credit for naming real technology and walking
/// through how it was used. Matched as written by the candidate.
pub const TECHNICAL_RULES: &[KeywordRule] = &[
    KeywordRule {
        name: "technology",
        needles: &["API", "database", "framework"],
        delta: 0.5,
        case_sensitive: true,
    },
    KeywordRule {
        name: "walkthrough",
        needles: &["example", "implementation"],
        delta: 0.3,
        case_sensitive: true,
    },
];

/// Concreteness bonus applied to every question type.
pub const SPECIFICITY_RULE: KeywordRule = KeywordRule {
    name: "specificity",
    needles: &["specifically", "for example", "such as"],
    delta: 0.5,
    case_sensitive: false,
};

pub fn score(transcript: &str, question_type: QuestionType, word_count: usize) -> f64 {
    let mut score = BASE_SCORE;

    if word_count > LONG_ANSWER_WORDS {
        score += 1.0;
    } else if word_count > SOLID_ANSWER_WORDS {
        score += 0.5;
    } else if word_count < THIN_ANSWER_WORDS {
        score -= 1.5;
    }

    match question_type {
        QuestionType::Behavioral => score += apply_all(BEHAVIORAL_RULES, transcript),
        QuestionType::Technical => score += apply_all(TECHNICAL_RULES, transcript),
        QuestionType::Situational | QuestionType::CompanySpecific => {}
    }

    score += SPECIFICITY_RULE.apply(transcript);

    clamp_score(score)
}
