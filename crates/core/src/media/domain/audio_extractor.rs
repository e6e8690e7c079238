use std::path::Path;

/// Domain interface for normalizing a media file's audio track.
pub trait AudioExtractor: Send {
    /// Write a mono 16 kHz PCM WAV copy of `input`'s audio to `output`.
    fn extract(&self, input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>>;
}
