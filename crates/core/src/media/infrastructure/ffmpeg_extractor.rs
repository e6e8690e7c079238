use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::media::domain::audio_extractor::AudioExtractor;
use crate::shared::constants::TARGET_SAMPLE_RATE;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{command} exited with {status}: {stderr}")]
    Ffmpeg {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Audio extractor backed by the ffmpeg CLI.
///
/// Decoding stays in the external process; this adapter only shells out:
/// `ffmpeg -y -i <input> -acodec pcm_s16le -ac 1 -ar 16000 <output>`.
pub struct FfmpegExtractor {
    binary: PathBuf,
}

impl FfmpegExtractor {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl AudioExtractor for FfmpegExtractor {
    fn extract(&self, input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let command = self.binary.display().to_string();

        log::debug!("Extracting {} -> {}", input.display(), output.display());
        let result = Command::new(&self.binary)
            .arg("-y")
            .arg("-i")
            .arg(input)
            .args(["-acodec", "pcm_s16le", "-ac", "1"])
            .args(["-ar", &TARGET_SAMPLE_RATE.to_string()])
            .arg(output)
            .output()
            .map_err(|source| ExtractError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(ExtractError::Ffmpeg {
                command,
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(())
    }
}
