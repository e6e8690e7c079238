use crate::transcript::domain::transcript::{Transcript, WordTimestamp};

use super::timed_word::TimedWord;

/// Derives start/end boundaries for every recognized word.
///
/// Recognizers report only an end-of-word time per token, so the previous
/// word's end is taken as the next word's start. The very first word has
/// no predecessor and falls back to the first segment's alternate start
/// hint, then to zero.
pub struct WordAligner;

impl WordAligner {
    /// Flattens all segments' words in segment order and resolves each
    /// word's boundaries. Output length always equals the input word count.
    pub fn align(transcript: &Transcript) -> Vec<TimedWord> {
        let words: Vec<&WordTimestamp> = transcript.words().collect();
        words
            .iter()
            .enumerate()
            .map(|(index, w)| TimedWord {
                word: w.word.clone(),
                start: Self::start_boundary(&words, index, transcript),
                end: w.timestamp,
            })
            .collect()
    }

    /// Start boundary for the word at `index` in the flattened stream.
    ///
    /// Candidates are evaluated in priority order and the first defined
    /// one wins: the previous word's end, the first segment's alternate
    /// start hint, zero.
    fn start_boundary(words: &[&WordTimestamp], index: usize, transcript: &Transcript) -> f64 {
        let candidates = [
            index.checked_sub(1).map(|prev| words[prev].timestamp),
            transcript.first_alt_start(),
        ];
        candidates.into_iter().flatten().next().unwrap_or(0.0)
    }
}
