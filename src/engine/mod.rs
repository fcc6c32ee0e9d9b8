//! Engine module: CLI parsing and the load-then-serve run.

pub mod arg_parser;
pub mod cli;

pub use arg_parser::Cli;
pub use cli::{handle_run, resolve_opts};
