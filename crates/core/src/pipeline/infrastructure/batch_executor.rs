use std::path::{Path, PathBuf};

use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::pipeline::process_media_use_case::ProcessMediaUseCase;

const DEFAULT_CHANNEL_CAPACITY: usize = 8;

pub type BatchError = Box<dyn std::error::Error + Send + Sync>;

/// One narration file queued for processing.
#[derive(Clone, Debug)]
pub struct BatchItem {
    pub input: PathBuf,
    pub index: usize,
}

/// Per-file result. A failed file carries its error; the batch continues.
#[derive(Debug)]
pub struct BatchOutcome {
    pub input: PathBuf,
    pub index: usize,
    pub result: Result<(), BatchError>,
}

/// Worker events are funneled to the caller's logger on the main thread,
/// so `PipelineLogger` implementations never need to be thread-safe.
enum WorkerEvent {
    Timing { stage: String, duration_ms: f64 },
    Info(String),
    Done(BatchOutcome),
}

struct ChannelLogger {
    events: crossbeam_channel::Sender<WorkerEvent>,
}

impl PipelineLogger for ChannelLogger {
    fn progress(&mut self, _done: usize, _total: usize) {
        // File-level progress is driven by the collecting loop.
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        let _ = self.events.send(WorkerEvent::Timing {
            stage: stage.to_string(),
            duration_ms,
        });
    }

    fn info(&mut self, message: &str) {
        let _ = self.events.send(WorkerEvent::Info(message.to_string()));
    }
}

/// Fans per-file caption runs out to a fixed pool of worker threads.
///
/// Each run owns its own use case and accumulator state, so files are
/// processed independently and in parallel without shared mutable state.
pub struct BatchExecutor {
    channel_capacity: usize,
}

impl Default for BatchExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchExecutor {
    pub fn new() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// Process `items` using one worker thread per use case.
    ///
    /// Outcomes are returned sorted by item index. A failure in one file
    /// is recorded in its outcome and does not abort the others.
    pub fn execute(
        &self,
        use_cases: Vec<ProcessMediaUseCase>,
        items: Vec<BatchItem>,
        output_dir: &Path,
        logger: &mut dyn PipelineLogger,
    ) -> Vec<BatchOutcome> {
        let total = items.len();
        if total == 0 || use_cases.is_empty() {
            return Vec::new();
        }

        let (item_tx, item_rx) = crossbeam_channel::bounded::<BatchItem>(self.channel_capacity);
        let (event_tx, event_rx) = crossbeam_channel::unbounded::<WorkerEvent>();

        let handles: Vec<_> = use_cases
            .into_iter()
            .map(|use_case| {
                let item_rx = item_rx.clone();
                let event_tx = event_tx.clone();
                let output_dir = output_dir.to_path_buf();
                std::thread::spawn(move || {
                    let mut worker_logger = ChannelLogger {
                        events: event_tx.clone(),
                    };
                    for item in item_rx.iter() {
                        let result = use_case
                            .run(&item.input, item.index, &output_dir, &mut worker_logger)
                            .map_err(|e| -> BatchError { e.to_string().into() });
                        let _ = event_tx.send(WorkerEvent::Done(BatchOutcome {
                            input: item.input,
                            index: item.index,
                            result,
                        }));
                    }
                })
            })
            .collect();
        drop(item_rx);
        drop(event_tx);

        for item in items {
            if item_tx.send(item).is_err() {
                break;
            }
        }
        drop(item_tx);

        // Drain until every worker has dropped its event sender.
        let mut outcomes = Vec::with_capacity(total);
        let mut done = 0;
        for event in event_rx.iter() {
            match event {
                WorkerEvent::Timing { stage, duration_ms } => logger.timing(&stage, duration_ms),
                WorkerEvent::Info(message) => logger.info(&message),
                WorkerEvent::Done(outcome) => {
                    done += 1;
                    logger.progress(done, total);
                    outcomes.push(outcome);
                }
            }
        }

        for handle in handles {
            let _ = handle.join();
        }

        outcomes.sort_by_key(|o| o.index);
        outcomes
    }
}
