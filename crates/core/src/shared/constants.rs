/// Assumed answer duration when the caller supplies no audio metadata.
pub const DEFAULT_DURATION_SECS: f64 = 120.0;

/// Gap between consecutive words that counts as a pause.
pub const PAUSE_GAP_SECS: f64 = 0.5;

pub const SCORE_MIN: f64 = 1.0;
pub const SCORE_MAX: f64 = 10.0;
