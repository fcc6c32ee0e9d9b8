//! Application configuration constants.
//! Defaults and pipeline tuning in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    config_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                config_filename: format!(".{pkg}.toml"),
            }
        })
    }

    /// Config file looked up in the working directory when `--config` is not given.
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }
}

// ---- Startup defaults ----

/// Values used when neither the config file nor the CLI sets an option.
pub struct DefaultOpts;

impl DefaultOpts {
    pub const SOURCE: &'static str = "inventory.csv";
    pub const HOST: &'static str = "0.0.0.0";
    pub const PORT: u16 = 8080;
    /// Dev server of the dashboard frontend.
    pub const ALLOW_ORIGIN: &'static str = "http://localhost:5173";
}

// ---- Pipeline ----

/// Worker pool and channel sizing for the load pipeline.
pub struct PipelineConsts;

impl PipelineConsts {
    pub const DEFAULT_WORKERS: usize = 4;
    /// Record and item channel capacity. Bounds memory during load (feeder blocks when full).
    pub const DEFAULT_CHANNEL_CAP: usize = 100;
    /// Minimum fields per data row: id, sku, product name, category, stock, price, last updated.
    pub const MIN_FIELDS: usize = 7;
}

// ---- HTTP ----

/// Route of the single read-only endpoint.
pub const INVENTORY_ROUTE: &str = "/api/inventory";
