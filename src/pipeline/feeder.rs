//! Feeder: reads the source row by row and pushes raw records onto the record channel.

use crossbeam_channel::Sender;
use csv::{ReaderBuilder, StringRecord};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::thread::{self, JoinHandle};

use super::error_handler::FirstError;
use crate::RawRecord;
use crate::error::LoadError;

/// CSV reader positioned after the header row.
pub struct SourceReader<R: Read> {
    pub reader: csv::Reader<R>,
    pub header: StringRecord,
}

/// Wrap `rdr` in a CSV reader and consume the header row.
/// Rows may have any field count; short rows are left for the parser to reject.
pub fn open_reader<R: Read>(rdr: R) -> Result<SourceReader<R>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr);
    let mut header = StringRecord::new();
    match reader.read_record(&mut header) {
        Ok(true) => Ok(SourceReader { reader, header }),
        Ok(false) => Err(LoadError::EmptySource),
        Err(e) => Err(LoadError::HeaderRead(e)),
    }
}

/// Open the file at `path` and consume its header row.
pub fn open_source(path: &Path) -> Result<SourceReader<File>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::SourceOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let source = open_reader(file)?;
    debug!(
        "{}: header [{}]",
        path.display(),
        source.header.iter().collect::<Vec<_>>().join(", ")
    );
    Ok(source)
}

pub fn spawn_feeder_thread<R>(
    record_tx: Sender<RawRecord>,
    source: SourceReader<R>,
    first_error: FirstError,
) -> JoinHandle<u64>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let SourceReader { reader, .. } = source;
        run_feed_loop(record_tx, reader.into_records(), &first_error)
    })
}

/// Run the feed loop: send each record to `record_tx` in source order, blocking while the
/// channel is full. On a read error, record it in `first_error` and stop without reading
/// further; on end of input just stop. Drops `record_tx` on return so workers drain and exit.
/// Returns the number of records sent.
pub fn run_feed_loop<I>(record_tx: Sender<RawRecord>, records: I, first_error: &FirstError) -> u64
where
    I: Iterator<Item = Result<StringRecord, csv::Error>>,
{
    let mut seq = 0_u64;
    // Header occupies line 1.
    let mut last_line = 1_u64;
    for result in records {
        match result {
            Ok(record) => {
                let line = record.position().map_or(last_line + 1, |p| p.line());
                last_line = line;
                let raw = RawRecord {
                    seq,
                    line,
                    fields: record.iter().map(str::to_owned).collect(),
                };
                if record_tx.send(raw).is_err() {
                    debug!("feeder: record channel closed, stopping at line {}", line);
                    break;
                }
                seq += 1;
            }
            Err(source) => {
                let line = source.position().map_or(last_line + 1, |p| p.line());
                first_error.record(LoadError::RecordRead { line, source });
                break;
            }
        }
    }
    drop(record_tx);
    debug!("feeder: done, {} records sent", seq);
    seq
}
