use thiserror::Error;

/// Rejection reasons for malformed required input. Raised at the use-case
/// boundary before any scoring runs; past validation the pipeline cannot
/// fail.
#[derive(Error, Debug)]
pub enum InvalidInputError {
    #[error("unknown question type: {0:?}")]
    UnknownQuestionType(String),
    #[error("question text is empty")]
    EmptyQuestionText,
    #[error("audio duration must be a finite, non-negative number of seconds, got {0}")]
    InvalidDuration(f64),
    #[error("speech rate must be a finite, non-negative number, got {0}")]
    InvalidSpeechRate(f64),
    #[error("word {index} starts at {start}s, before the word preceding it")]
    UnorderedTimestamps { index: usize, start: f64 },
    #[error("word {index} ends at {end}s, before its own start at {start}s")]
    NegativeWordDuration { index: usize, start: f64, end: f64 },
}
