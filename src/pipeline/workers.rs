use crossbeam_channel::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::parser::parse_record;
use crate::{ParsedRecord, RawRecord};

/// Per-worker counts, summed by the coordinator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkerTally {
    pub parsed: u64,
    pub rejected: u64,
}

impl std::ops::AddAssign for WorkerTally {
    fn add_assign(&mut self, rhs: Self) {
        self.parsed += rhs.parsed;
        self.rejected += rhs.rejected;
    }
}

/// Single parse worker: read records from record_rx, parse, send items on item_tx.
/// Bad rows are logged and counted, never fatal.
fn parse_worker_loop(
    worker_id: usize,
    record_rx: Receiver<RawRecord>,
    item_tx: Sender<ParsedRecord>,
) -> WorkerTally {
    let mut tally = WorkerTally::default();
    while let Ok(record) = record_rx.recv() {
        match parse_record(&record.fields) {
            Ok(item) => {
                let parsed = ParsedRecord {
                    seq: record.seq,
                    item,
                };
                if item_tx.send(parsed).is_err() {
                    log::debug!("worker {}: item channel closed", worker_id);
                    break;
                }
                tally.parsed += 1;
            }
            Err(e) => {
                tally.rejected += 1;
                log::warn!("Skipping line {}: {}", record.line, e);
            }
        }
    }
    drop(item_tx);
    tally
}

/// Spawn parse workers: read records from record_rx, send items on item_tx. Caller must drop
/// its record sender (the feeder does on exit) so workers see the channel close.
pub fn spawn_parse_workers(
    record_rx: Receiver<RawRecord>,
    item_tx: &Sender<ParsedRecord>,
    num_workers: usize,
) -> Vec<JoinHandle<WorkerTally>> {
    (0..num_workers)
        .map(|worker_id| {
            let record_rx = record_rx.clone();
            let item_tx = item_tx.clone();
            thread::spawn(move || parse_worker_loop(worker_id, record_rx, item_tx))
        })
        .collect()
}
