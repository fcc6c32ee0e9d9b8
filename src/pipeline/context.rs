//! Pipeline channels and tuning: shared plumbing handed to the feeder, workers and coordinator.

use crossbeam_channel::{Receiver, Sender, bounded};

use super::error_handler::FirstError;
use crate::{LoadOpts, ParsedRecord, RawRecord};

/// Tuning resolved from [`LoadOpts`]: worker count and channel cap.
#[derive(Clone, Debug)]
pub struct PipelineTuning {
    pub num_workers: usize,
    /// Capacity for record and item channels.
    pub channel_cap: usize,
    pub preserve_order: bool,
}

impl From<&LoadOpts> for PipelineTuning {
    fn from(o: &LoadOpts) -> Self {
        PipelineTuning {
            num_workers: o.num_workers.max(1),
            channel_cap: o.channel_cap,
            preserve_order: o.preserve_order,
        }
    }
}

/// Channels and shared state for one load. Feeder gets record_tx; workers get record_rx and
/// a clone of item_tx; coordinator keeps the original item_tx; the collector reads item_rx.
pub struct PipelineChannels {
    pub record_tx: Sender<RawRecord>,
    pub record_rx: Receiver<RawRecord>,
    pub item_tx: Sender<ParsedRecord>,
    pub item_rx: Receiver<ParsedRecord>,
    pub first_error: FirstError,
}

pub fn create_pipeline_channels(tuning: &PipelineTuning) -> PipelineChannels {
    let (record_tx, record_rx) = bounded::<RawRecord>(tuning.channel_cap);
    let (item_tx, item_rx) = bounded::<ParsedRecord>(tuning.channel_cap);

    PipelineChannels {
        record_tx,
        record_rx,
        item_tx,
        item_rx,
        first_error: FirstError::new(),
    }
}
