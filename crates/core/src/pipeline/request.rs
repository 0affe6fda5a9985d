use serde::{Deserialize, Serialize};

use crate::shared::question::Question;

/// Aggregate delivery metrics supplied by the caller when the recording
/// stack has already summarized timing. Only `duration` feeds the rate
/// calculations; the remaining fields ride along for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvidedAudioMetrics {
    pub duration: f64,
    pub pause_count: usize,
    pub filler_words: Vec<String>,
    pub speech_rate: f64,
}

/// One answer to analyze. Immutable; each request produces exactly one
/// result and no state is shared across requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub transcript: String,
    pub question: Question,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_metrics: Option<ProvidedAudioMetrics>,
}

impl AnalysisRequest {
    pub fn new(transcript: impl Into<String>, question: Question) -> Self {
        Self {
            transcript: transcript.into(),
            question,
            audio_metrics: None,
        }
    }

    pub fn with_audio_metrics(mut self, metrics: ProvidedAudioMetrics) -> Self {
        self.audio_metrics = Some(metrics);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::question::QuestionType;

    #[test]
    fn test_request_deserializes_without_audio_metrics() {
        let json = r#"{
            "transcript": "I led the migration.",
            "question": {
                "text": "Tell me about a project you led.",
                "type": "Behavioral",
                "category": "Leadership"
            }
        }"#;
        let request: AnalysisRequest = serde_json::from_str(json).unwrap();
        assert!(request.audio_metrics.is_none());
        assert_eq!(request.question.question_type, QuestionType::Behavioral);
    }

    #[test]
    fn test_request_deserializes_with_audio_metrics() {
        let json = r#"{
            "transcript": "Short answer.",
            "question": {"text": "Why us?", "type": "Company-Specific", "category": "Motivation"},
            "audioMetrics": {
                "duration": 45.0,
                "pauseCount": 3,
                "fillerWords": ["um"],
                "speechRate": 130.0
            }
        }"#;
        let request: AnalysisRequest = serde_json::from_str(json).unwrap();
        let metrics = request.audio_metrics.unwrap();
        assert_eq!(metrics.duration, 45.0);
        assert_eq!(metrics.pause_count, 3);
    }
}
