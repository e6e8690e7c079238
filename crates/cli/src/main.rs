use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use capalign_core::alignment::sentence_segmenter::SentenceSegmenter;
use capalign_core::captions::infrastructure::json_caption_writer::JsonCaptionWriter;
use capalign_core::media::infrastructure::ffmpeg_extractor::FfmpegExtractor;
use capalign_core::pipeline::infrastructure::batch_executor::{BatchExecutor, BatchItem};
use capalign_core::pipeline::pipeline_logger::{PipelineLogger, StdoutPipelineLogger};
use capalign_core::pipeline::process_media_use_case::ProcessMediaUseCase;
use capalign_core::shared::constants::AUDIO_EXTENSIONS;
use capalign_core::transcript::infrastructure::stable_ts_source::StableTsSource;

/// Word-level caption preparation for narrated videos.
#[derive(Parser)]
#[command(name = "capalign")]
struct Cli {
    /// Media directory to scan for narration audio.
    media_dir: PathBuf,

    /// Only process files named `<version>-*` (e.g. `4-002.mp3`).
    #[arg(long)]
    version: Option<String>,

    /// Directory for the words-N.json / sentences-N.json artifacts.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Emit a trailing sentence even without terminal punctuation.
    #[arg(long)]
    keep_trailing: bool,

    /// Worker threads for batch processing.
    #[arg(long, default_value = "1")]
    jobs: usize,

    /// stable-ts binary to invoke.
    #[arg(long, default_value = "stable-ts")]
    stable_ts: PathBuf,

    /// ffmpeg binary to invoke.
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg: PathBuf,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let items = collect_items(&cli.media_dir, cli.version.as_deref())?;
    if items.is_empty() {
        log::warn!("No matching audio files in {}", cli.media_dir.display());
        return Ok(());
    }

    fs::create_dir_all(&cli.output_dir)?;

    let use_cases: Vec<ProcessMediaUseCase> =
        (0..cli.jobs).map(|_| build_use_case(&cli)).collect();
    let mut logger = StdoutPipelineLogger::new();
    let outcomes =
        BatchExecutor::new().execute(use_cases, items, &cli.output_dir, &mut logger);
    logger.summary();

    let failed: Vec<_> = outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().err().map(|e| (o.input.as_path(), e)))
        .collect();
    for (input, error) in &failed {
        log::error!("{}: {error}", input.display());
    }
    if !failed.is_empty() {
        return Err(format!("{} of {} files failed", failed.len(), outcomes.len()).into());
    }

    Ok(())
}

fn build_use_case(cli: &Cli) -> ProcessMediaUseCase {
    ProcessMediaUseCase::new(
        Box::new(FfmpegExtractor::new(&cli.ffmpeg)),
        Box::new(StableTsSource::new(&cli.stable_ts, &cli.output_dir)),
        Box::new(JsonCaptionWriter::new()),
        SentenceSegmenter::new().emit_trailing(cli.keep_trailing),
    )
}

fn collect_items(
    media_dir: &Path,
    version: Option<&str>,
) -> Result<Vec<BatchItem>, Box<dyn std::error::Error>> {
    let prefix = version.map(|v| format!("{v}-"));

    let mut inputs: Vec<PathBuf> = fs::read_dir(media_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_audio(path))
        .filter(|path| match (&prefix, file_name(path)) {
            (Some(prefix), Some(name)) => name.starts_with(prefix.as_str()),
            (Some(_), None) => false,
            (None, _) => true,
        })
        .collect();
    inputs.sort();

    Ok(inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| BatchItem { input, index })
        .collect())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.media_dir.is_dir() {
        return Err(format!("Media directory not found: {}", cli.media_dir.display()).into());
    }
    if cli.jobs == 0 {
        return Err("--jobs must be at least 1".into());
    }
    Ok(())
}

fn is_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}
