use serde::{Deserialize, Serialize};

use super::transcript::TranscriptWord;
use crate::lexical::{features, filler_lexicon};
use crate::shared::constants::PAUSE_GAP_SECS;

/// Delivery metrics derived from a transcript and per-word timing.
///
/// Volume and pitch are deliberately absent: this aggregator only reports
/// what the timing data supports, and signal-level measurements belong to
/// the upstream audio stack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioMetrics {
    pub duration: f64,
    /// Words per minute.
    pub speech_rate: f64,
    pub pause_count: usize,
    pub average_pause_length: f64,
    /// Filler occurrences as spoken, original casing preserved.
    pub filler_words: Vec<String>,
}

/// Derives speech rate, pause statistics, and filler occurrences.
///
/// Pauses are gaps between consecutive words longer than
/// [`PAUSE_GAP_SECS`]. A non-positive or non-finite duration yields a
/// speech rate of 0 rather than a division blow-up.
pub fn analyze_audio_metrics(
    transcript: &str,
    timestamps: &[TranscriptWord],
    duration: f64,
) -> AudioMetrics {
    let word_count = features::word_count(transcript);
    let pauses = detect_pauses(timestamps);

    let filler_words: Vec<String> = filler_lexicon::scan(transcript)
        .into_iter()
        .flat_map(|hit| hit.occurrences)
        .collect();

    AudioMetrics {
        duration,
        speech_rate: speech_rate(word_count, duration),
        pause_count: pauses.len(),
        average_pause_length: mean(&pauses),
        filler_words,
    }
}

pub fn speech_rate(word_count: usize, duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        word_count as f64 / duration * 60.0
    } else {
        0.0
    }
}

fn detect_pauses(timestamps: &[TranscriptWord]) -> Vec<f64> {
    timestamps
        .windows(2)
        .map(|pair| pair[0].gap_to(&pair[1]))
        .filter(|gap| *gap > PAUSE_GAP_SECS)
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
