//! Load pipeline: feeder → record channel → parse workers → item channel → collector → store.

pub mod collector;
pub mod context;
pub mod coordinator;
pub mod error_handler;
pub mod feeder;
pub mod orchestrator;
pub mod workers;

pub use collector::drain_into_store;
pub use context::{PipelineChannels, PipelineTuning, create_pipeline_channels};
pub use coordinator::{CompletionReport, spawn_coordinator};
pub use error_handler::{FirstError, check_for_read_error_or_rejects};
pub use feeder::{SourceReader, open_reader, open_source, run_feed_loop, spawn_feeder_thread};
pub use orchestrator::{PipelineHandles, load_from_source, load_inventory, run_pipeline};
pub use workers::{WorkerTally, spawn_parse_workers};
