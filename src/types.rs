//! Public and internal types for the stockroom API and pipeline.

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use std::path::PathBuf;
use std::time::Duration;

use crate::utils::config::{DefaultOpts, PipelineConsts};

/// One validated inventory row. Built only by [`parse_record`](crate::parser::parse_record).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub sku: String,
    pub product_name: String,
    pub category: String,
    pub stock: i64,
    /// Any parsed float is kept; non-finite values fail at encode time.
    #[serde(serialize_with = "serialize_finite")]
    pub price: f64,
    /// Opaque timestamp string, never parsed.
    pub last_updated: String,
}

/// JSON has no representation for NaN or infinity, so encoding such a price is an error
/// rather than a silent `null`.
fn serialize_finite<S>(price: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if price.is_finite() {
        serializer.serialize_f64(*price)
    } else {
        Err(S::Error::custom(format!("unsupported price value: {price}")))
    }
}

/// Raw row handed from the feeder to the workers.
#[derive(Clone, Debug)]
pub struct RawRecord {
    /// Zero-based position among data rows (header excluded).
    pub seq: u64,
    /// Line in the source file where the row starts (1-based).
    pub line: u64,
    pub fields: Vec<String>,
}

/// Parsed row handed from the workers to the collector.
#[derive(Clone, Debug)]
pub struct ParsedRecord {
    pub seq: u64,
    pub item: InventoryItem,
}

/// Options for a single load. Use [`Default`] for the stock 4-worker / 100-slot pipeline.
#[derive(Clone, Debug)]
pub struct LoadOpts {
    /// Parser worker count. Values below 1 are treated as 1.
    pub num_workers: usize,
    /// Capacity of both the record and item channels.
    pub channel_cap: usize,
    /// Keep the store in source-file order instead of worker-completion order.
    pub preserve_order: bool,
}

impl Default for LoadOpts {
    fn default() -> Self {
        Self {
            num_workers: PipelineConsts::DEFAULT_WORKERS,
            channel_cap: PipelineConsts::DEFAULT_CHANNEL_CAP,
            preserve_order: false,
        }
    }
}

/// Outcome of a completed load.
#[derive(Clone, Debug)]
pub struct LoadSummary {
    /// Data rows read from the source (header excluded).
    pub records: u64,
    /// Items appended to the store.
    pub committed: usize,
    /// Rows dropped by the parser.
    pub rejected: u64,
    /// Worker count actually used.
    pub workers: usize,
    pub elapsed: Duration,
}

/// Full options (CLI, config file and defaults merged).
#[derive(Clone, Debug)]
pub struct Opts {
    /// Inventory CSV to load at startup.
    pub source: PathBuf,
    /// Address to bind the HTTP listener on.
    pub host: String,
    pub port: u16,
    /// Origin allowed to call the API cross-origin.
    pub allow_origin: String,
    pub verbose: bool,
    pub load: LoadOpts,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DefaultOpts::SOURCE),
            host: DefaultOpts::HOST.to_string(),
            port: DefaultOpts::PORT,
            allow_origin: DefaultOpts::ALLOW_ORIGIN.to_string(),
            verbose: false,
            load: LoadOpts::default(),
        }
    }
}
