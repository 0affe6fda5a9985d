use serde::{Deserialize, Serialize};

use crate::audio::feedback::{OPTIMAL_RATE_MAX_WPM, OPTIMAL_RATE_MIN_WPM};
use crate::shared::question::QuestionType;

pub const COMPREHENSIVE_ANSWER_WORDS: usize = 150;
pub const SUBSTANTIAL_ANSWER_WORDS: usize = 100;

pub const FEW_FILLERS: usize = 3;
pub const SOME_FILLERS: usize = 8;

/// The three free-text analysis paragraphs of a result.
///
/// Each paragraph is assembled from literal fragments selected by word
/// count, keyword presence, and question type. Keyword checks mirror how
/// candidates actually phrase these markers: behavioral conclusions match
/// any casing, technical and structural markers match as written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysis {
    pub content_analysis: String,
    pub delivery_analysis: String,
    pub structure_analysis: String,
}

pub fn content_analysis(
    transcript: &str,
    question_type: QuestionType,
    word_count: usize,
) -> String {
    match question_type {
        QuestionType::Behavioral => {
            let coverage = if word_count > COMPREHENSIVE_ANSWER_WORDS {
                "comprehensive"
            } else {
                "adequate"
            };
            let lower = transcript.to_lowercase();
            let conclusion = if lower.contains("result") || lower.contains("outcome") {
                "You effectively concluded with results, which strengthens your answer."
            } else {
                "Consider adding more details about the outcome and what you learned from the experience."
            };
            format!(
                "Your response demonstrates {coverage} coverage of the behavioral scenario. {conclusion}"
            )
        }
        QuestionType::Technical => {
            let examples = if transcript.contains("example") {
                "good use of examples"
            } else {
                "room for more concrete examples"
            };
            let depth = if word_count > SUBSTANTIAL_ANSWER_WORDS {
                "The depth of your response demonstrates solid understanding."
            } else {
                "Consider expanding with more technical details and use cases."
            };
            format!("Your technical explanation shows {examples}. {depth}")
        }
        QuestionType::Situational | QuestionType::CompanySpecific => {
            let coverage = if word_count > SUBSTANTIAL_ANSWER_WORDS {
                "substantial"
            } else {
                "basic"
            };
            format!(
                "Your response provides {coverage} coverage of the topic. Focus on adding more specific examples and details to strengthen your answer."
            )
        }
    }
}

pub fn delivery_analysis(filler_count: usize, speech_rate: f64) -> String {
    let fillers = if filler_count <= FEW_FILLERS {
        "Excellent control of filler words, maintaining professional delivery. "
    } else if filler_count <= SOME_FILLERS {
        "Moderate use of filler words - focus on pausing instead of using fillers. "
    } else {
        "High frequency of filler words detected - practice eliminating these for more polished delivery. "
    };

    let pace = if (OPTIMAL_RATE_MIN_WPM..=OPTIMAL_RATE_MAX_WPM).contains(&speech_rate) {
        "Your speaking pace is well-balanced and easy to follow."
    } else if speech_rate < OPTIMAL_RATE_MIN_WPM {
        "Consider speaking slightly faster to maintain engagement."
    } else {
        "Try slowing down slightly to ensure clarity and comprehension."
    };

    format!("{fillers}{pace}")
}

pub fn structure_analysis(transcript: &str, question_type: QuestionType) -> String {
    let has_transitions = transcript.contains("first")
        || transcript.contains("then")
        || transcript.contains("finally");
    let has_conclusion = transcript.contains("result")
        || transcript.contains("conclusion")
        || transcript.contains("learned");

    if question_type == QuestionType::Behavioral {
        let transitions = if has_transitions {
            "Good use of structural elements to organize your response. "
        } else {
            "Consider using clearer transitions (first, then, finally) to improve structure. "
        };
        let conclusion = if has_conclusion {
            "Strong conclusion with results and learnings."
        } else {
            "Add a clear conclusion highlighting the outcome and what you learned."
        };
        format!("{transitions}{conclusion}")
    } else {
        let transitions = if has_transitions {
            "Well-organized response with clear progression of ideas. "
        } else {
            "Improve structure by using transitional phrases to connect your points. "
        };
        format!(
            "{transitions}Consider organizing technical responses with: definition, explanation, example, and application."
        )
    }
}
