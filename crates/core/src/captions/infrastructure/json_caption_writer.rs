use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::alignment::sentence::Sentence;
use crate::alignment::timed_word::TimedWord;
use crate::captions::domain::caption_writer::CaptionWriter;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to serialize captions for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes caption records as pretty-printed JSON files, the format the
/// renderer embeds via `include_str!`.
#[derive(Debug, Default)]
pub struct JsonCaptionWriter;

impl JsonCaptionWriter {
    pub fn new() -> Self {
        Self
    }

    fn write<T: Serialize>(path: &Path, records: &[T]) -> Result<(), WriteError> {
        let json =
            serde_json::to_string_pretty(records).map_err(|source| WriteError::Serialize {
                path: path.to_path_buf(),
                source,
            })?;
        fs::write(path, json).map_err(|source| WriteError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl CaptionWriter for JsonCaptionWriter {
    fn write_words(
        &self,
        path: &Path,
        words: &[TimedWord],
    ) -> Result<(), Box<dyn std::error::Error>> {
        Ok(Self::write(path, words)?)
    }

    fn write_sentences(
        &self,
        path: &Path,
        sentences: &[Sentence],
    ) -> Result<(), Box<dyn std::error::Error>> {
        Ok(Self::write(path, sentences)?)
    }
}
