use crossbeam_channel::Receiver;
use log::debug;
use std::io::Read;
use std::path::Path;
use std::thread::JoinHandle;
use std::time::Instant;

use super::coordinator::CompletionReport;
use super::error_handler::FirstError;
use super::feeder::SourceReader;
use crate::error::LoadError;
use crate::store::InventoryStore;
use crate::{LoadOpts, LoadSummary, ParsedRecord, pipeline};

/// Handles returned by [`run_pipeline`]: receive items from `item_rx`, then join
/// `feeder_handle` and `coordinator_handle` once the channel closes.
pub struct PipelineHandles {
    pub item_rx: Receiver<ParsedRecord>,
    pub feeder_handle: JoinHandle<u64>,
    pub coordinator_handle: JoinHandle<CompletionReport>,
    pub first_error: FirstError,
    pub tuning: pipeline::PipelineTuning,
}

/// Start feeder, workers and coordinator over an opened source.
pub fn run_pipeline<R>(source: SourceReader<R>, opts: &LoadOpts) -> PipelineHandles
where
    R: Read + Send + 'static,
{
    let tuning = pipeline::PipelineTuning::from(opts);
    let channels = pipeline::create_pipeline_channels(&tuning);
    debug!(
        "pipeline: {} workers, channel cap {}{}",
        tuning.num_workers,
        tuning.channel_cap,
        if tuning.preserve_order {
            ", source order"
        } else {
            ""
        }
    );

    let feeder_handle = pipeline::spawn_feeder_thread(
        channels.record_tx,
        source,
        channels.first_error.clone(),
    );

    let worker_handles =
        pipeline::spawn_parse_workers(channels.record_rx, &channels.item_tx, tuning.num_workers);

    // The coordinator holds the last item sender; the channel closes when it drops it.
    let coordinator_handle = pipeline::spawn_coordinator(
        worker_handles,
        channels.item_tx,
        channels.first_error.clone(),
    );

    PipelineHandles {
        item_rx: channels.item_rx,
        feeder_handle,
        coordinator_handle,
        first_error: channels.first_error,
        tuning,
    }
}

/// Load every record of an opened source into `store`.
///
/// Runs `Feeding+Working` (feeder, workers, coordinator on their own threads, this thread
/// collecting), then `Draining` until the item channel closes, then the terminal check: a
/// recorded read error is returned as `Err` and whatever was committed before it stays in
/// `store`.
pub fn load_from_source<R>(
    source: SourceReader<R>,
    opts: &LoadOpts,
    store: &InventoryStore,
) -> Result<LoadSummary, LoadError>
where
    R: Read + Send + 'static,
{
    let start = Instant::now();
    let PipelineHandles {
        item_rx,
        feeder_handle,
        coordinator_handle,
        first_error,
        tuning,
    } = run_pipeline(source, opts);

    let committed = pipeline::drain_into_store(&item_rx, store, tuning.preserve_order);
    debug!("collector: channel closed, {} items committed", committed);

    let records = feeder_handle
        .join()
        .map_err(|_| LoadError::ThreadPanicked("feeder"))?;
    let report = coordinator_handle
        .join()
        .map_err(|_| LoadError::ThreadPanicked("coordinator"))?;

    pipeline::check_for_read_error_or_rejects(&first_error, report.tally.rejected)?;
    if report.panicked_workers > 0 {
        return Err(LoadError::ThreadPanicked("worker"));
    }

    Ok(LoadSummary {
        records,
        committed,
        rejected: report.tally.rejected,
        workers: tuning.num_workers,
        elapsed: start.elapsed(),
    })
}

/// Main orchestrator: open `path`, read its header, and load every data row into `store`
/// through the feeder → workers → collector pipeline.
///
/// Open and header failures return before any thread starts and leave `store` untouched.
pub fn load_inventory(
    path: &Path,
    opts: &LoadOpts,
    store: &InventoryStore,
) -> Result<LoadSummary, LoadError> {
    let source = pipeline::open_source(path)?;
    load_from_source(source, opts, store)
}
