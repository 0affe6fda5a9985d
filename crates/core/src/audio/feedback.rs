use serde::{Deserialize, Serialize};

use super::metrics::AudioMetrics;

/// Pace band considered comfortable to follow.
pub const OPTIMAL_RATE_MIN_WPM: f64 = 140.0;
pub const OPTIMAL_RATE_MAX_WPM: f64 = 180.0;
pub const SLOW_RATE_WPM: f64 = 120.0;
pub const RUSHED_RATE_WPM: f64 = 200.0;

pub const SHORT_PAUSE_SECS: f64 = 2.0;
pub const LONG_PAUSE_SECS: f64 = 3.0;

pub const FILLER_RATIO_EXCELLENT: f64 = 0.02;
pub const FILLER_RATIO_HIGH: f64 = 0.1;

/// Delivery-only coaching derived from timing metrics alone, independent
/// of the dimension scores.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioFeedback {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub suggestions: Vec<String>,
}

pub fn generate_audio_feedback(metrics: &AudioMetrics) -> AudioFeedback {
    let mut feedback = AudioFeedback::default();

    if (OPTIMAL_RATE_MIN_WPM..=OPTIMAL_RATE_MAX_WPM).contains(&metrics.speech_rate) {
        feedback
            .strengths
            .push("Optimal speaking pace that's easy to follow".to_string());
    } else if metrics.speech_rate < SLOW_RATE_WPM {
        feedback
            .improvements
            .push("Speaking pace is quite slow - consider increasing tempo".to_string());
        feedback
            .suggestions
            .push("Practice with a metronome or timer to maintain consistent pace".to_string());
    } else if metrics.speech_rate > RUSHED_RATE_WPM {
        feedback
            .improvements
            .push("Speaking pace is very fast - slow down for better comprehension".to_string());
        feedback
            .suggestions
            .push("Take deliberate pauses between key points to improve clarity".to_string());
    }

    if metrics.pause_count > 0 && metrics.average_pause_length < SHORT_PAUSE_SECS {
        feedback
            .strengths
            .push("Good use of strategic pauses for emphasis".to_string());
    } else if metrics.pause_count == 0 {
        feedback
            .suggestions
            .push("Use strategic pauses to emphasize key points and improve delivery".to_string());
    } else if metrics.average_pause_length > LONG_PAUSE_SECS {
        feedback
            .improvements
            .push("Some pauses are quite long - practice smoother transitions".to_string());
    }

    let filler_ratio = filler_ratio(metrics);
    if filler_ratio < FILLER_RATIO_EXCELLENT {
        feedback
            .strengths
            .push("Excellent control of filler words".to_string());
    } else if filler_ratio > FILLER_RATIO_HIGH {
        feedback
            .improvements
            .push("High frequency of filler words affects professional delivery".to_string());
        feedback
            .suggestions
            .push("Practice replacing filler words with brief pauses".to_string());
    }

    feedback
}

/// Fillers per estimated spoken word, where the estimate is
/// `duration * rate / 60`. Zero estimate means zero ratio.
fn filler_ratio(metrics: &AudioMetrics) -> f64 {
    let estimated_words = metrics.duration * metrics.speech_rate / 60.0;
    if estimated_words > 0.0 {
        metrics.filler_words.len() as f64 / estimated_words
    } else {
        0.0
    }
}
