use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::transcript::domain::transcript::Transcript;
use crate::transcript::domain::transcript_source::TranscriptSource;

#[derive(Error, Debug)]
pub enum TranscribeError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{command} exited with {status}: {stderr}")]
    Recognizer {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("failed to read transcript {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse transcript {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Transcript source backed by the stable-ts CLI.
///
/// Runs `stable-ts <audio> -o <json> -y` and deserializes the word-level
/// JSON it writes into `work_dir`.
pub struct StableTsSource {
    binary: PathBuf,
    work_dir: PathBuf,
}

impl StableTsSource {
    pub fn new(binary: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            work_dir: work_dir.into(),
        }
    }

    fn transcript_path(&self, audio: &Path) -> PathBuf {
        let stem = audio
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("audio");
        self.work_dir.join(format!("{stem}.json"))
    }

    fn read_transcript(path: &Path) -> Result<Transcript, TranscribeError> {
        let json = fs::read_to_string(path).map_err(|source| TranscribeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| TranscribeError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl TranscriptSource for StableTsSource {
    fn transcribe(&self, audio: &Path) -> Result<Transcript, Box<dyn std::error::Error>> {
        let transcript_path = self.transcript_path(audio);
        let command = self.binary.display().to_string();

        log::debug!("Transcribing {} with {command}", audio.display());
        let output = Command::new(&self.binary)
            .arg(audio)
            .arg("-o")
            .arg(&transcript_path)
            .arg("-y")
            .output()
            .map_err(|source| TranscribeError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(TranscribeError::Recognizer {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(Self::read_transcript(&transcript_path)?)
    }
}
