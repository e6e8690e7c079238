pub mod transcript;
pub mod transcript_source;
