use serde::{Deserialize, Serialize};

use crate::feedback::filler_report::FillerWordReport;
use crate::feedback::narrative::DetailedAnalysis;
use crate::feedback::synthesizer::FeedbackBundle;
use crate::scoring::scores::{round_to_tenth, DimensionScores};

/// Presentation form of the scores: the four dimensions plus the weighted
/// overall, each rounded to one decimal. Rounding happens here and only
/// here; everything upstream keeps full precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub content: f64,
    pub fluency: f64,
    pub confidence: f64,
    pub clarity: f64,
    pub overall: f64,
}

impl ScoreReport {
    pub fn from_scores(scores: &DimensionScores) -> Self {
        let rounded = scores.rounded();
        Self {
            content: rounded.content,
            fluency: rounded.fluency,
            confidence: rounded.confidence,
            clarity: rounded.clarity,
            // weighted sum of the unrounded scores, rounded last
            overall: round_to_tenth(scores.overall()),
        }
    }
}

/// Everything a caller gets back for one answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub scores: ScoreReport,
    pub feedback: FeedbackBundle,
    pub detailed_analysis: DetailedAnalysis,
    pub improved_answer: String,
    pub filler_word_analysis: FillerWordReport,
}
