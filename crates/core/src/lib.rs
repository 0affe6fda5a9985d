//! Scoring engine for spoken interview answers.
//!
//! Pure and synchronous: callers hand in a transcript plus coarse timing
//! metadata and get back dimension scores, feedback text, and an improved
//! answer. Transcription, audio capture, and persistence live outside this
//! crate.

pub mod audio;
pub mod feedback;
pub mod lexical;
pub mod pipeline;
pub mod scoring;
pub mod shared;
