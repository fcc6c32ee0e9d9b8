pub mod config;
pub mod logger;
pub mod stockroom_toml;

pub use config::*;
pub use logger::setup_logging;
pub use stockroom_toml::{
    StockroomToml, apply_file_to_opts, load_stockroom_toml, parse_stockroom_toml,
};
