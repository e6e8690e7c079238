use serde::Deserialize;

/// A parsed word-level transcript as emitted by the recognizer.
///
/// Field names mirror the stable-ts JSON output exactly, so this
/// deserializes straight from the file the recognizer writes.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Transcript {
    pub segments: Vec<TranscriptSegment>,
}

/// A contiguous unit of the transcript with its own recognized words
/// and optional start-of-speech hints.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TranscriptSegment {
    pub whole_word_timestamps: Vec<WordTimestamp>,
    #[serde(default)]
    pub alt_start_timestamps: Option<Vec<f64>>,
}

/// A single recognized word with its end-of-word time.
///
/// The time unit is whatever the recognizer used (seconds for stable-ts)
/// and is passed through unchanged.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WordTimestamp {
    pub word: String,
    pub timestamp: f64,
}

impl Transcript {
    /// All words across segments, in segment order.
    pub fn words(&self) -> impl Iterator<Item = &WordTimestamp> {
        self.segments.iter().flat_map(|s| &s.whole_word_timestamps)
    }

    pub fn word_count(&self) -> usize {
        self.segments.iter().map(|s| s.whole_word_timestamps.len()).sum()
    }

    /// The first segment's first alternate start timestamp, if any.
    /// Seeds the start boundary of the very first word.
    pub fn first_alt_start(&self) -> Option<f64> {
        self.segments
            .first()
            .and_then(|s| s.alt_start_timestamps.as_ref())
            .and_then(|alts| alts.first())
            .copied()
    }
}
