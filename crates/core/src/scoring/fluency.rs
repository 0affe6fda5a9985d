use super::scores::clamp_score;

pub const BASE_SCORE: f64 = 8.0;

pub const FILLER_RATIO_HEAVY: f64 = 0.10;
pub const FILLER_RATIO_FREQUENT: f64 = 0.05;
pub const FILLER_RATIO_NOTICEABLE: f64 = 0.02;

pub const RATE_HARD_MIN_WPM: f64 = 100.0;
pub const RATE_HARD_MAX_WPM: f64 = 200.0;
pub const RATE_SOFT_MIN_WPM: f64 = 120.0;
pub const RATE_SOFT_MAX_WPM: f64 = 180.0;

/// Fluency starts high and loses points for disfluency and pacing.
///
/// Both penalty ladders are prioritized if/else chains: only the highest
/// matching bracket applies, penalties within a ladder never stack.
pub fn score(filler_ratio: f64, speech_rate: f64) -> f64 {
    let mut score = BASE_SCORE;

    if filler_ratio > FILLER_RATIO_HEAVY {
        score -= 2.0;
    } else if filler_ratio > FILLER_RATIO_FREQUENT {
        score -= 1.0;
    } else if filler_ratio > FILLER_RATIO_NOTICEABLE {
        score -= 0.5;
    }

    if speech_rate < RATE_HARD_MIN_WPM || speech_rate > RATE_HARD_MAX_WPM {
        score -= 1.0;
    } else if speech_rate < RATE_SOFT_MIN_WPM || speech_rate > RATE_SOFT_MAX_WPM {
        score -= 0.5;
    }

    clamp_score(score)
}
