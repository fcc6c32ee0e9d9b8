use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use stockroom::engine::{Cli, resolve_opts};
use stockroom::utils::{apply_file_to_opts, load_stockroom_toml, parse_stockroom_toml};
use stockroom::{LoadOpts, Opts};
use tempfile::NamedTempFile;

fn config_file(text: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(text.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

// --- defaults ---

#[test]
fn test_defaults_match_fixed_startup() {
    let opts = Opts::default();
    assert_eq!(opts.source, PathBuf::from("inventory.csv"));
    assert_eq!(opts.port, 8080);
    assert_eq!(opts.allow_origin, "http://localhost:5173");
    assert_eq!(opts.load.num_workers, 4);
    assert_eq!(opts.load.channel_cap, 100);
    assert!(!opts.load.preserve_order);
}

// --- config file ---

#[test]
fn test_file_overrides_only_present_fields() {
    let file = parse_stockroom_toml(
        r#"
        [settings]
        source = "data/stock.csv"
        workers = 8
        ordered = true
        "#,
    )
    .unwrap();
    let mut opts = Opts::default();
    apply_file_to_opts(&file, &mut opts);

    assert_eq!(opts.source, PathBuf::from("data/stock.csv"));
    assert_eq!(opts.load.num_workers, 8);
    assert!(opts.load.preserve_order);
    assert_eq!(opts.port, 8080);
    assert_eq!(opts.load.channel_cap, LoadOpts::default().channel_cap);
}

#[test]
fn test_file_empty_is_valid() {
    let file = parse_stockroom_toml("").unwrap();
    let mut opts = Opts::default();
    apply_file_to_opts(&file, &mut opts);
    assert_eq!(opts.port, 8080);
}

#[test]
fn test_file_unknown_key_is_error() {
    assert!(parse_stockroom_toml("[settings]\nthreads = 3\n").is_err());
    assert!(parse_stockroom_toml("[settings]\nport = \"eighty\"\n").is_err());
}

#[test]
fn test_missing_default_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".stockroom.toml");
    assert!(load_stockroom_toml(&path, false).unwrap().is_none());
    assert!(load_stockroom_toml(&path, true).is_err());
}

// --- CLI over file ---

#[test]
fn test_cli_wins_over_file() {
    let f = config_file("[settings]\nport = 9000\nworkers = 2\nallow_origin = \"http://a.test\"\n");
    let path = f.path().to_str().unwrap();
    let cli = Cli::parse_from(["stockroom", "--config", path, "-w", "6", "stock.csv"]);
    let opts = resolve_opts(&cli).unwrap();

    assert_eq!(opts.source, PathBuf::from("stock.csv"));
    assert_eq!(opts.port, 9000);
    assert_eq!(opts.load.num_workers, 6);
    assert_eq!(opts.allow_origin, "http://a.test");
}

#[test]
fn test_cli_bool_flags() {
    let f = config_file("[settings]\nordered = true\n");
    let path = f.path().to_str().unwrap();

    let cli = Cli::parse_from(["stockroom", "--config", path]);
    assert!(resolve_opts(&cli).unwrap().load.preserve_order);

    let cli = Cli::parse_from(["stockroom", "--config", path, "--ordered", "false"]);
    assert!(!resolve_opts(&cli).unwrap().load.preserve_order);

    let cli = Cli::parse_from(["stockroom", "--config", path, "-v"]);
    assert!(resolve_opts(&cli).unwrap().verbose);
}

#[test]
fn test_cli_explicit_missing_config_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let cli = Cli::parse_from(["stockroom", "--config", missing.to_str().unwrap()]);
    assert!(resolve_opts(&cli).is_err());
}
