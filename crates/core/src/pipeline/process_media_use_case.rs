use std::path::Path;
use std::time::Instant;

use crate::alignment::sentence_segmenter::SentenceSegmenter;
use crate::alignment::word_aligner::WordAligner;
use crate::captions::domain::caption_writer::CaptionWriter;
use crate::media::domain::audio_extractor::AudioExtractor;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::transcript::domain::transcript_source::TranscriptSource;

/// Turns one narration file into its caption artifacts.
///
/// Orchestration only; every external effect goes through a trait seam.
pub struct ProcessMediaUseCase {
    extractor: Box<dyn AudioExtractor>,
    source: Box<dyn TranscriptSource>,
    writer: Box<dyn CaptionWriter>,
    segmenter: SentenceSegmenter,
}

impl ProcessMediaUseCase {
    pub fn new(
        extractor: Box<dyn AudioExtractor>,
        source: Box<dyn TranscriptSource>,
        writer: Box<dyn CaptionWriter>,
        segmenter: SentenceSegmenter,
    ) -> Self {
        Self {
            extractor,
            source,
            writer,
            segmenter,
        }
    }

    /// Process `input`, writing `words-<index>.json` and
    /// `sentences-<index>.json` into `output_dir`.
    pub fn run(
        &self,
        input: &Path,
        index: usize,
        output_dir: &Path,
        logger: &mut dyn PipelineLogger,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("audio");

        // 1. Normalize the audio track for the recognizer
        let wav_path = output_dir.join(format!("{stem}.wav"));
        let started = Instant::now();
        self.extractor.extract(input, &wav_path)?;
        logger.timing("extract", started.elapsed().as_secs_f64() * 1000.0);

        // 2. Obtain the word-level transcript
        let started = Instant::now();
        let transcript = self.source.transcribe(&wav_path)?;
        logger.timing("transcribe", started.elapsed().as_secs_f64() * 1000.0);

        // 3. Derive the caption records
        let started = Instant::now();
        let words = WordAligner::align(&transcript);
        let sentences = self.segmenter.segment(&transcript);
        logger.timing("align", started.elapsed().as_secs_f64() * 1000.0);

        // 4. Write the artifacts the renderer consumes
        let started = Instant::now();
        let words_path = output_dir.join(format!("words-{index}.json"));
        let sentences_path = output_dir.join(format!("sentences-{index}.json"));
        self.writer.write_words(&words_path, &words)?;
        self.writer.write_sentences(&sentences_path, &sentences)?;
        logger.timing("write", started.elapsed().as_secs_f64() * 1000.0);

        logger.info(&format!(
            "{}: {} words, {} sentences",
            input.display(),
            words.len(),
            sentences.len()
        ));

        Ok(())
    }
}
