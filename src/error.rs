//! Error types for record parsing and inventory loading.

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// Why a single row was rejected. Never fatal to a load.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("insufficient fields: expected at least 7, found {found}")]
    InsufficientFields { found: usize },
    #[error("invalid {field} {value:?}: {source}")]
    InvalidInteger {
        field: &'static str,
        value: String,
        source: ParseIntError,
    },
    #[error("invalid {field} {value:?}: {source}")]
    InvalidFloat {
        field: &'static str,
        value: String,
        source: ParseFloatError,
    },
}

/// Fatal load failures.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open inventory source {}: {source}", .path.display())]
    SourceOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read header row: {0}")]
    HeaderRead(#[source] csv::Error),
    #[error("inventory source is empty (no header row)")]
    EmptySource,
    #[error("read error at line {line}: {source}")]
    RecordRead { line: u64, source: csv::Error },
    #[error("{0} thread panicked")]
    ThreadPanicked(&'static str),
}

impl LoadError {
    /// True for failures that happen before any record is fed (nothing committed).
    pub fn is_startup(&self) -> bool {
        matches!(
            self,
            LoadError::SourceOpen { .. } | LoadError::HeaderRead(_) | LoadError::EmptySource
        )
    }
}
