use super::invalid_input::InvalidInputError;
use super::request::{AnalysisRequest, ProvidedAudioMetrics};
use super::result::{AnalysisResult, ScoreReport};
use crate::audio::metrics::{self, AudioMetrics};
use crate::audio::transcript::TranscriptWord;
use crate::feedback::narrative::DetailedAnalysis;
use crate::feedback::{filler_report, improved_answer, narrative, synthesizer};
use crate::lexical::features;
use crate::scoring::scores::DimensionScores;
use crate::scoring::{clarity, confidence, content, fluency};
use crate::shared::constants::DEFAULT_DURATION_SECS;
use crate::shared::question::Question;

/// Runs the full analysis pipeline for one answer: lexical extraction,
/// metric derivation, the four dimension scorers, and feedback synthesis.
///
/// Stateless and request-scoped. Invocations are independent and may run
/// in parallel without coordination.
#[derive(Debug, Default)]
pub struct AnalyzeAnswerUseCase;

impl AnalyzeAnswerUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, request: &AnalysisRequest) -> Result<AnalysisResult, InvalidInputError> {
        validate(request)?;

        let question_type = request.question.question_type;
        let features = features::extract(&request.transcript);
        let duration = request
            .audio_metrics
            .as_ref()
            .map(|m| m.duration)
            .unwrap_or(DEFAULT_DURATION_SECS);
        let speech_rate = metrics::speech_rate(features.word_count, duration);

        log::debug!(
            "scoring answer: {} words, {} sentences, {} fillers, {speech_rate:.1} wpm",
            features.word_count,
            features.sentence_count,
            features.filler_count,
        );

        let scores = DimensionScores {
            content: content::score(&request.transcript, question_type, features.word_count),
            fluency: fluency::score(features.filler_ratio(), speech_rate),
            confidence: confidence::score(&request.transcript, features.filler_count),
            clarity: clarity::score(
                &request.transcript,
                features.word_count,
                features.sentence_count,
            ),
        };

        log::info!(
            "{} answer scored {:.1} overall",
            question_type,
            scores.overall()
        );

        Ok(AnalysisResult {
            scores: ScoreReport::from_scores(&scores),
            feedback: synthesizer::generate(&scores, question_type),
            detailed_analysis: DetailedAnalysis {
                content_analysis: narrative::content_analysis(
                    &request.transcript,
                    question_type,
                    features.word_count,
                ),
                delivery_analysis: narrative::delivery_analysis(
                    features.filler_count,
                    speech_rate,
                ),
                structure_analysis: narrative::structure_analysis(
                    &request.transcript,
                    question_type,
                ),
            },
            improved_answer: improved_answer::generate(question_type),
            filler_word_analysis: filler_report::build(&features.filler_hits, features.word_count),
        })
    }

    /// Timestamp-level entry point: derives [`AudioMetrics`] from per-word
    /// timing, then scores the answer with those metrics. Returns both so
    /// callers can show delivery metrics next to the scores.
    pub fn analyze_with_timestamps(
        &self,
        transcript: &str,
        question: &Question,
        words: &[TranscriptWord],
        duration: f64,
    ) -> Result<(AudioMetrics, AnalysisResult), InvalidInputError> {
        validate_duration(duration)?;
        validate_timestamps(words)?;

        let audio = metrics::analyze_audio_metrics(transcript, words, duration);
        let request = AnalysisRequest::new(transcript, question.clone()).with_audio_metrics(
            ProvidedAudioMetrics {
                duration: audio.duration,
                pause_count: audio.pause_count,
                filler_words: audio.filler_words.clone(),
                speech_rate: audio.speech_rate,
            },
        );
        let result = self.execute(&request)?;
        Ok((audio, result))
    }
}

fn validate(request: &AnalysisRequest) -> Result<(), InvalidInputError> {
    if request.question.text.trim().is_empty() {
        return Err(InvalidInputError::EmptyQuestionText);
    }
    if let Some(metrics) = &request.audio_metrics {
        validate_duration(metrics.duration)?;
        if !metrics.speech_rate.is_finite() || metrics.speech_rate < 0.0 {
            return Err(InvalidInputError::InvalidSpeechRate(metrics.speech_rate));
        }
    }
    Ok(())
}

fn validate_duration(duration: f64) -> Result<(), InvalidInputError> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(InvalidInputError::InvalidDuration(duration));
    }
    Ok(())
}

fn validate_timestamps(words: &[TranscriptWord]) -> Result<(), InvalidInputError> {
    for (index, word) in words.iter().enumerate() {
        if word.end_time < word.start_time {
            return Err(InvalidInputError::NegativeWordDuration {
                index,
                start: word.start_time,
                end: word.end_time,
            });
        }
        if index > 0 && word.start_time < words[index - 1].start_time {
            return Err(InvalidInputError::UnorderedTimestamps {
                index,
                start: word.start_time,
            });
        }
    }
    Ok(())
}
