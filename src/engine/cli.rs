//! CLI command handler: load the inventory, then serve it until Ctrl+C.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::sync::Arc;

use crate::Opts;
use crate::engine::arg_parser::Cli;
use crate::pipeline::load_inventory;
use crate::server::{CorsPolicy, build_app, serve};
use crate::store::InventoryStore;
use crate::utils::{apply_file_to_opts, load_stockroom_toml, setup_logging};

/// Overwrite opts field from CLI when given.
macro_rules! apply_cli_opt {
    ($cli:expr, $opts:expr, $field:ident => $($opts_field:ident).+) => {
        if let Some(v) = $cli.$field.clone() {
            $opts.$($opts_field).+ = v;
        }
    };
}

/// Merge defaults, config file and CLI (CLI wins).
pub fn resolve_opts(cli: &Cli) -> Result<Opts> {
    let mut opts = Opts::default();
    let (config_path, required) = cli.config_path();
    if let Some(file) = load_stockroom_toml(&config_path, required)? {
        apply_file_to_opts(&file, &mut opts);
    }
    apply_cli_opt!(cli, opts, source => source);
    apply_cli_opt!(cli, opts, host => host);
    apply_cli_opt!(cli, opts, port => port);
    apply_cli_opt!(cli, opts, allow_origin => allow_origin);
    apply_cli_opt!(cli, opts, workers => load.num_workers);
    apply_cli_opt!(cli, opts, channel_cap => load.channel_cap);
    apply_cli_opt!(cli, opts, ordered => load.preserve_order);
    apply_cli_opt!(cli, opts, verbose => verbose);
    Ok(opts)
}

/// Load `opts.source` into a fresh store, then serve it. Returns only on a load or bind
/// failure, or after a graceful shutdown.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = resolve_opts(cli)?;
    setup_logging(opts.verbose);
    debug!("{} CONFIG:{:#?}", env!("CARGO_PKG_NAME").to_uppercase(), opts);

    let cors = CorsPolicy::new(&opts.allow_origin)
        .with_context(|| format!("invalid allow_origin {:?}", opts.allow_origin))?;

    let store = Arc::new(InventoryStore::new());
    let summary = match load_inventory(&opts.source, &opts.load, &store) {
        Ok(summary) => summary,
        Err(e) => {
            if !e.is_startup() && !store.is_empty() {
                warn!(
                    "{} items were committed before the load failed; not serving them",
                    store.len()
                );
            }
            return Err(e).context("Failed to load inventory");
        }
    };
    info!(
        "Loaded {} items in {:?} ({} rows, {} skipped, {} workers)",
        summary.committed, summary.elapsed, summary.records, summary.rejected, summary.workers
    );

    let app = build_app(store, cors);
    let addr = format!("{}:{}", opts.host, opts.port);
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start tokio runtime")?
        .block_on(serve(&addr, app))
}
