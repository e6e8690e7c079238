use std::path::Path;

use super::transcript::Transcript;

/// Domain interface for obtaining a word-level transcript of an audio file.
///
/// Implementations invoke an external recognizer process; nothing in the
/// core performs speech recognition itself.
pub trait TranscriptSource: Send {
    fn transcribe(&self, audio: &Path) -> Result<Transcript, Box<dyn std::error::Error>>;
}
