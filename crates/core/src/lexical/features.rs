use super::filler_lexicon::{self, FillerHit};

/// Text-only features of a transcript: counts the scorers and the filler
/// report both build on.
#[derive(Clone, Debug, PartialEq)]
pub struct LexicalFeatures {
    pub word_count: usize,
    pub sentence_count: usize,
    pub filler_count: usize,
    pub filler_hits: Vec<FillerHit>,
}

impl LexicalFeatures {
    /// Filler occurrences per transcript word; 0 for an empty transcript.
    pub fn filler_ratio(&self) -> f64 {
        if self.word_count == 0 {
            0.0
        } else {
            self.filler_count as f64 / self.word_count as f64
        }
    }

    /// Mean sentence length in words. `sentence_count` is never 0.
    pub fn avg_words_per_sentence(&self) -> f64 {
        self.word_count as f64 / self.sentence_count as f64
    }
}

pub fn extract(transcript: &str) -> LexicalFeatures {
    let filler_hits = filler_lexicon::scan(transcript);
    let filler_count = filler_hits.iter().map(|hit| hit.count).sum();
    LexicalFeatures {
        word_count: word_count(transcript),
        sentence_count: sentence_count(transcript),
        filler_count,
        filler_hits,
    }
}

/// Whitespace-delimited word count. An empty or all-whitespace transcript
/// counts 0 words, not 1.
pub fn word_count(transcript: &str) -> usize {
    transcript.split_whitespace().count()
}

/// Number of non-empty segments between `.`/`!`/`?` runs, minimum 1 so
/// per-sentence averages never divide by zero.
pub fn sentence_count(transcript: &str) -> usize {
    transcript
        .split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count()
        .max(1)
}
