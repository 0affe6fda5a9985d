use serde::{Deserialize, Serialize};

use crate::scoring::scores::DimensionScores;
use crate::shared::question::QuestionType;

/// A dimension scoring at or above this reads as a strength.
pub const STRENGTH_THRESHOLD: f64 = 8.0;
/// Below this, the dimension gets an improvement and a matching suggestion.
pub const IMPROVEMENT_THRESHOLD: f64 = 6.0;

/// Categorized coaching sentences. Lists may be empty; generation is
/// deterministic given scores and question type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackBundle {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Fixed sentences for one dimension's three feedback slots.
struct DimensionTemplate {
    strength: &'static str,
    improvement: &'static str,
    suggestion: &'static str,
}

const CONTENT: DimensionTemplate = DimensionTemplate {
    strength: "Strong content with relevant details and examples",
    improvement: "Add more specific examples and details to support your points",
    suggestion: "Use the STAR method (Situation, Task, Action, Result) for behavioral questions",
};

const FLUENCY: DimensionTemplate = DimensionTemplate {
    strength: "Smooth delivery with minimal hesitation",
    improvement: "Reduce filler words and practice smoother transitions",
    suggestion: "Practice your answers out loud to improve flow and reduce hesitation",
};

const CONFIDENCE: DimensionTemplate = DimensionTemplate {
    strength: "Confident and assertive communication style",
    improvement: "Use more definitive language and avoid uncertain phrases",
    suggestion: "Practice power poses before interviews to boost confidence",
};

const CLARITY: DimensionTemplate = DimensionTemplate {
    strength: "Clear and well-structured response",
    improvement: "Organize your thoughts with clearer structure and transitions",
    suggestion: "Outline your key points before speaking to improve organization",
};

/// Maps dimension scores to feedback sentences, then appends one
/// suggestion keyed by question type regardless of score.
pub fn generate(scores: &DimensionScores, question_type: QuestionType) -> FeedbackBundle {
    let mut bundle = FeedbackBundle::default();

    let dimensions = [
        (scores.content, &CONTENT),
        (scores.fluency, &FLUENCY),
        (scores.confidence, &CONFIDENCE),
        (scores.clarity, &CLARITY),
    ];

    for (score, template) in dimensions {
        if score >= STRENGTH_THRESHOLD {
            bundle.strengths.push(template.strength.to_string());
        } else if score < IMPROVEMENT_THRESHOLD {
            bundle.improvements.push(template.improvement.to_string());
            bundle.suggestions.push(template.suggestion.to_string());
        }
    }

    match question_type {
        QuestionType::Behavioral => bundle
            .suggestions
            .push("Focus on quantifiable results and lessons learned".to_string()),
        QuestionType::Technical => bundle
            .suggestions
            .push("Include specific technologies and explain your reasoning".to_string()),
        QuestionType::Situational | QuestionType::CompanySpecific => {}
    }

    bundle
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(content: f64, fluency: f64, confidence: f64, clarity: f64) -> DimensionScores {
        DimensionScores {
            content,
            fluency,
            confidence,
            clarity,
        }
    }

    #[test]
    fn test_high_scores_become_strengths() {
        let bundle = generate(&scores(8.0, 8.5, 9.0, 8.2), QuestionType::Situational);
        assert_eq!(bundle.strengths.len(), 4);
        assert!(bundle.improvements.is_empty());
        assert!(bundle.suggestions.is_empty());
    }

    #[test]
    fn test_low_scores_pair_improvements_with_suggestions() {
        let bundle = generate(&scores(5.9, 5.0, 4.0, 3.0), QuestionType::Situational);
        assert!(bundle.strengths.is_empty());
        assert_eq!(bundle.improvements.len(), 4);
        assert_eq!(bundle.suggestions.len(), 4);
    }

    #[test]
    fn test_middle_scores_produce_nothing() {
        let bundle = generate(&scores(6.0, 7.0, 7.9, 6.5), QuestionType::Situational);
        assert!(bundle.strengths.is_empty());
        assert!(bundle.improvements.is_empty());
        assert!(bundle.suggestions.is_empty());
    }

    #[test]
    fn test_threshold_boundaries() {
        // exactly 8 is a strength; exactly 6 is neither
        let bundle = generate(&scores(8.0, 6.0, 7.0, 7.0), QuestionType::Situational);
        assert_eq!(
            bundle.strengths,
            vec!["Strong content with relevant details and examples"]
        );
        assert!(bundle.improvements.is_empty());
    }

    #[test]
    fn test_dimensions_evaluated_independently() {
        let bundle = generate(&scores(8.5, 5.0, 7.0, 7.0), QuestionType::Situational);
        assert_eq!(
            bundle.strengths,
            vec!["Strong content with relevant details and examples"]
        );
        assert_eq!(
            bundle.improvements,
            vec!["Reduce filler words and practice smoother transitions"]
        );
    }

    #[test]
    fn test_behavioral_suggestion_always_appended() {
        let bundle = generate(&scores(8.0, 8.0, 8.0, 8.0), QuestionType::Behavioral);
        assert_eq!(
            bundle.suggestions,
            vec!["Focus on quantifiable results and lessons learned"]
        );
    }

    #[test]
    fn test_technical_suggestion_always_appended() {
        let bundle = generate(&scores(7.0, 7.0, 7.0, 7.0), QuestionType::Technical);
        assert_eq!(
            bundle.suggestions,
            vec!["Include specific technologies and explain your reasoning"]
        );
    }

    #[test]
    fn test_type_suggestion_comes_after_dimension_suggestions() {
        let bundle = generate(&scores(5.0, 7.0, 7.0, 7.0), QuestionType::Behavioral);
        assert_eq!(bundle.suggestions.len(), 2);
        assert!(bundle.suggestions[0].contains("STAR method"));
        assert!(bundle.suggestions[1].contains("quantifiable results"));
    }
}
