use serde::{Deserialize, Serialize};

/// One recognized word with its timing window, as delivered by the
/// upstream transcription service. Words arrive ordered by `start_time`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptWord {
    pub word: String,
    #[serde(rename = "start")]
    pub start_time: f64,
    #[serde(rename = "end")]
    pub end_time: f64,
    pub confidence: f32,
}

impl TranscriptWord {
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Silence between this word and the one after it.
    pub fn gap_to(&self, next: &TranscriptWord) -> f64 {
        next.start_time - self.end_time
    }
}
