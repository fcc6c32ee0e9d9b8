//! Stockroom: parallel CSV inventory loader with a read-only JSON endpoint.
//!
//! Loading runs a feeder thread, a fixed pool of parser workers and a completion
//! coordinator, with the calling thread collecting parsed items into an
//! [`InventoryStore`](store::InventoryStore). The store is then shared with the HTTP
//! handlers in [`server`].

pub mod engine;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod server;
pub mod store;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

pub use error::{LoadError, ParseError};
pub use parser::parse_record;
pub use pipeline::load_inventory;
pub use store::InventoryStore;
