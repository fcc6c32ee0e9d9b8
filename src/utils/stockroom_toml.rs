//! Load `.stockroom.toml` (or the file given with `--config`). CLI only; lib callers build
//! [`Opts`]/[`LoadOpts`](crate::LoadOpts) directly.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::Opts;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StockroomToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsSection {
    source: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    allow_origin: Option<String>,
    workers: Option<usize>,
    channel_cap: Option<usize>,
    ordered: Option<bool>,
    verbose: Option<bool>,
}

/// Parse config text.
pub fn parse_stockroom_toml(s: &str) -> Result<StockroomToml> {
    Ok(toml::from_str(s)?)
}

/// Load the config file at `path`. A missing file is `Ok(None)` unless `required`
/// (explicit `--config`); a file that exists but does not parse is always an error.
pub fn load_stockroom_toml(path: &Path, required: bool) -> Result<Option<StockroomToml>> {
    let s = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("read config {}", path.display())),
    };
    let file =
        parse_stockroom_toml(&s).with_context(|| format!("parse config {}", path.display()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(Some(file))
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($section:expr, $opts:expr, $field:ident => $($opts_field:ident).+) => {
        if let Some(v) = $section.$field.clone() {
            $opts.$($opts_field).+ = v;
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI.
pub fn apply_file_to_opts(file: &StockroomToml, opts: &mut Opts) {
    let settings = &file.settings;
    if let Some(ref p) = settings.source {
        opts.source = PathBuf::from(p);
    }
    apply_file_opt!(settings, opts, host => host);
    apply_file_opt!(settings, opts, port => port);
    apply_file_opt!(settings, opts, allow_origin => allow_origin);
    apply_file_opt!(settings, opts, workers => load.num_workers);
    apply_file_opt!(settings, opts, channel_cap => load.channel_cap);
    apply_file_opt!(settings, opts, ordered => load.preserve_order);
    apply_file_opt!(settings, opts, verbose => verbose);
}
