use clap::Parser;
use std::path::PathBuf;

use crate::utils::config::PackagePaths;

/// Load a CSV inventory with a parallel parser pool and serve it as JSON.
///
/// Options not given here fall back to `.stockroom.toml` in the working directory (or the
/// file passed with `--config`), then to built-in defaults.
#[derive(Clone, Parser)]
#[command(name = "stockroom")]
#[command(about = "Load an inventory CSV and serve it read-only at /api/inventory.")]
pub struct Cli {
    /// Inventory CSV to load. Default: inventory.csv.
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,

    /// Config file. Default: `.stockroom.toml` in the working directory, if present.
    #[arg(long, short = 'C')]
    pub config: Option<PathBuf>,

    /// Address to bind. Default: 0.0.0.0.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on. Default: 8080.
    #[arg(long, short = 'p', value_parser = clap::value_parser!(u16))]
    pub port: Option<u16>,

    /// Origin allowed to call the API cross-origin. Default: http://localhost:5173.
    #[arg(long, short = 'o')]
    pub allow_origin: Option<String>,

    /// Number of parser worker threads. Default: 4.
    #[arg(long, short = 'w', value_parser = clap::value_parser!(usize))]
    pub workers: Option<usize>,

    /// Capacity of the record and item channels. Default: 100.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub channel_cap: Option<usize>,

    /// Keep items in source-file order instead of parse-completion order.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub ordered: Option<bool>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}

impl Cli {
    /// Config path and whether it was asked for explicitly.
    pub fn config_path(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(p) => (p.clone(), true),
            None => (PathBuf::from(PackagePaths::get().config_filename()), false),
        }
    }
}
