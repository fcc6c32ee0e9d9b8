//! Stockroom CLI: load the inventory CSV, then serve it at /api/inventory.

use anyhow::Result;
use clap::Parser;
use stockroom::engine::{Cli, handle_run};

fn main() -> Result<()> {
    let cli = Cli::parse();
    handle_run(&cli)
}
