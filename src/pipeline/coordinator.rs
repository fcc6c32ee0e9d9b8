//! Completion coordinator: gates the lifetime of the item channel and the error slot.

use crossbeam_channel::Sender;
use log::debug;
use std::thread::{self, JoinHandle};

use super::error_handler::FirstError;
use super::workers::WorkerTally;
use crate::ParsedRecord;

/// What the coordinator saw once every worker had exited.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompletionReport {
    pub tally: WorkerTally,
    pub panicked_workers: usize,
}

/// Spawn the coordinator. It owns the last `item_tx` held outside the workers: it joins every
/// worker, then drops `item_tx` (the collector's drain loop ends once the buffer is empty)
/// and seals `first_error`.
/// Hand it the original sender only after the workers have taken their clones.
pub fn spawn_coordinator(
    worker_handles: Vec<JoinHandle<WorkerTally>>,
    item_tx: Sender<ParsedRecord>,
    first_error: FirstError,
) -> JoinHandle<CompletionReport> {
    thread::spawn(move || {
        let mut report = CompletionReport::default();
        for handle in worker_handles {
            match handle.join() {
                Ok(tally) => report.tally += tally,
                Err(_) => report.panicked_workers += 1,
            }
        }
        drop(item_tx);
        first_error.seal();
        debug!(
            "coordinator: workers done ({} parsed, {} rejected), item channel closed",
            report.tally.parsed, report.tally.rejected
        );
        report
    })
}
