/// Sample rate the recognizer expects; audio extraction resamples to this.
pub const TARGET_SAMPLE_RATE: u32 = 16000;

pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "aac", "flac", "ogg"];
