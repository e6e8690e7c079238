use crate::transcript::domain::transcript::Transcript;

use super::sentence::Sentence;
use super::timed_word::TimedWord;
use super::word_aligner::WordAligner;

/// A word closes the current sentence when its text ends with this.
pub const SENTENCE_TERMINATOR: char = '.';

/// Groups the boundary-resolved word stream into sentences.
///
/// Runs the same boundary resolution as [`WordAligner`] over the whole
/// transcript, then accumulates words into an open buffer that is flushed
/// into a [`Sentence`] whenever a word's text ends with a terminal period.
///
/// The terminator check is a literal suffix test. Abbreviations ("Mr.")
/// and a sole "." token close a sentence; the downstream renderer expects
/// exactly this behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct SentenceSegmenter {
    emit_trailing: bool,
}

impl SentenceSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also emit a trailing run of words that never saw a terminal period.
    ///
    /// Off by default: historically such words are dropped, and emitting
    /// them changes the output cardinality for downstream consumers.
    pub fn emit_trailing(mut self, emit: bool) -> Self {
        self.emit_trailing = emit;
        self
    }

    pub fn segment(&self, transcript: &Transcript) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut buffer: Vec<TimedWord> = Vec::new();

        for word in WordAligner::align(transcript) {
            let closes = word.word.ends_with(SENTENCE_TERMINATOR);
            buffer.push(word);
            if closes {
                Self::flush(&mut buffer, &mut sentences);
            }
        }

        // Terminal state: an unterminated buffer is dropped unless the
        // caller opted in to keeping it.
        if self.emit_trailing {
            Self::flush(&mut buffer, &mut sentences);
        }

        sentences
    }

    fn flush(buffer: &mut Vec<TimedWord>, sentences: &mut Vec<Sentence>) {
        if let Some(last) = buffer.last() {
            let end = last.end;
            sentences.push(Sentence {
                words: std::mem::take(buffer),
                end,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::domain::transcript::{TranscriptSegment, WordTimestamp};
    use approx::assert_relative_eq;

    fn word(w: &str, timestamp: f64) -> WordTimestamp {
        WordTimestamp {
            word: w.to_string(),
            timestamp,
        }
    }

    fn single_segment(words: Vec<WordTimestamp>, alts: Option<Vec<f64>>) -> Transcript {
        Transcript {
            segments: vec![TranscriptSegment {
                whole_word_timestamps: words,
                alt_start_timestamps: alts,
            }],
        }
    }

    #[test]
    fn test_sentence_closes_on_terminal_period() {
        let transcript = single_segment(
            vec![word("Hello", 1.0), word("world.", 1.5), word("Bye", 2.0)],
            None,
        );
        let sentences = SentenceSegmenter::new().segment(&transcript);

        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].words.len(), 2);
        assert_eq!(sentences[0].words[0].word, "Hello");
        assert_relative_eq!(sentences[0].words[0].start, 0.0);
        assert_eq!(sentences[0].words[1].word, "world.");
        assert_relative_eq!(sentences[0].end, 1.5);
    }

    #[test]
    fn test_trailing_words_without_period_are_dropped() {
        let transcript = single_segment(
            vec![word("Done.", 1.0), word("trailing", 1.5), word("words", 2.0)],
            None,
        );
        let sentences = SentenceSegmenter::new().segment(&transcript);
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].words.len(), 1);
    }

    #[test]
    fn test_emit_trailing_keeps_final_partial_sentence() {
        let transcript = single_segment(
            vec![word("Done.", 1.0), word("trailing", 1.5), word("words", 2.0)],
            None,
        );
        let sentences = SentenceSegmenter::new()
            .emit_trailing(true)
            .segment(&transcript);

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].words.len(), 2);
        assert_relative_eq!(sentences[1].end, 2.0);
    }

    #[test]
    fn test_first_word_uses_alt_start_hint() {
        let transcript = single_segment(vec![word("Hi.", 0.4)], Some(vec![0.2]));
        let sentences = SentenceSegmenter::new().segment(&transcript);

        assert_eq!(sentences.len(), 1);
        assert_relative_eq!(sentences[0].words[0].start, 0.2);
        assert_relative_eq!(sentences[0].words[0].end, 0.4);
        assert_relative_eq!(sentences[0].end, 0.4);
    }

    #[test]
    fn test_fallback_is_global_not_per_sentence() {
        // The second sentence's first word starts at the previous word's
        // end, never back at the alt-start hint.
        let transcript = single_segment(
            vec![word("One.", 1.0), word("Two.", 2.0)],
            Some(vec![0.5]),
        );
        let sentences = SentenceSegmenter::new().segment(&transcript);

        assert_eq!(sentences.len(), 2);
        assert_relative_eq!(sentences[0].words[0].start, 0.5);
        assert_relative_eq!(sentences[1].words[0].start, 1.0);
    }

    #[test]
    fn test_abbreviation_closes_sentence() {
        // Literal suffix check: "Mr." terminates, by contract.
        let transcript = single_segment(vec![word("Mr.", 0.5), word("Smith.", 1.0)], None);
        let sentences = SentenceSegmenter::new().segment(&transcript);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].words[0].word, "Mr.");
    }

    #[test]
    fn test_sole_period_token_forms_sentence() {
        let transcript = single_segment(vec![word(".", 0.3)], None);
        let sentences = SentenceSegmenter::new().segment(&transcript);
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].words.len(), 1);
        assert_eq!(sentences[0].words[0].word, ".");
    }

    #[test]
    fn test_empty_transcript_yields_no_sentences() {
        assert!(SentenceSegmenter::new()
            .segment(&Transcript::default())
            .is_empty());
        assert!(SentenceSegmenter::new()
            .emit_trailing(true)
            .segment(&Transcript::default())
            .is_empty());
    }

    #[test]
    fn test_sentences_partition_the_aligned_prefix() {
        let transcript = single_segment(
            vec![
                word("A", 0.2),
                word("b.", 0.5),
                word("C", 0.9),
                word("d.", 1.4),
                word("tail", 1.8),
            ],
            None,
        );
        let aligned = WordAligner::align(&transcript);
        let sentences = SentenceSegmenter::new().segment(&transcript);

        let regrouped: Vec<TimedWord> = sentences.into_iter().flat_map(|s| s.words).collect();
        assert_eq!(regrouped, aligned[..4].to_vec());
    }

    #[test]
    fn test_every_sentence_ends_at_its_last_word() {
        let transcript = single_segment(
            vec![word("a.", 0.5), word("b", 0.9), word("c.", 1.2)],
            None,
        );
        for sentence in SentenceSegmenter::new().segment(&transcript) {
            let last = sentence.words.last().unwrap();
            assert!(last.word.ends_with(SENTENCE_TERMINATOR));
            assert_relative_eq!(sentence.end, last.end);
        }
    }
}
