use once_cell::sync::Lazy;
use regex::Regex;

/// Disfluency tokens scored as delivery defects. Order is stable: reports
/// list fillers in this order.
pub const FILLER_TOKENS: &[&str] = &[
    "um",
    "uh",
    "like",
    "you know",
    "so",
    "actually",
    "basically",
    "literally",
];

/// One compiled pattern per token, case-insensitive and word-boundary
/// anchored so "like" never matches inside "unlike". Multi-word tokens
/// match as a literal phrase.
static FILLER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    FILLER_TOKENS
        .iter()
        .map(|token| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(token)))
                .expect("filler token compiles to a valid pattern")
        })
        .collect()
});

/// All matches for one filler token within a transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillerHit {
    pub token: &'static str,
    pub count: usize,
    /// Matched text as spoken, original casing preserved.
    pub occurrences: Vec<String>,
}

/// Scans a transcript for every token in the lexicon. Tokens with no
/// matches are omitted; hit order follows `FILLER_TOKENS`.
pub fn scan(transcript: &str) -> Vec<FillerHit> {
    FILLER_TOKENS
        .iter()
        .copied()
        .zip(FILLER_PATTERNS.iter())
        .filter_map(|(token, pattern)| {
            let occurrences: Vec<String> = pattern
                .find_iter(transcript)
                .map(|m| m.as_str().to_string())
                .collect();
            if occurrences.is_empty() {
                None
            } else {
                Some(FillerHit {
                    token,
                    count: occurrences.len(),
                    occurrences,
                })
            }
        })
        .collect()
}

/// Total filler occurrences across the whole lexicon.
pub fn count(transcript: &str) -> usize {
    scan(transcript).iter().map(|hit| hit.count).sum()
}
