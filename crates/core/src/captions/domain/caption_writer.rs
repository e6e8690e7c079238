use std::path::Path;

use crate::alignment::sentence::Sentence;
use crate::alignment::timed_word::TimedWord;

/// Domain interface for persisting derived caption records.
///
/// The serialized shapes are a compatibility contract with the caption
/// renderer: field names and array-of-objects nesting must survive as-is.
pub trait CaptionWriter: Send {
    fn write_words(&self, path: &Path, words: &[TimedWord])
        -> Result<(), Box<dyn std::error::Error>>;

    fn write_sentences(
        &self,
        path: &Path,
        sentences: &[Sentence],
    ) -> Result<(), Box<dyn std::error::Error>>;
}
