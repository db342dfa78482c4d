//! Core types shared by the runtime and the CLI
//!
//! Everything in here is free of I/O: configuration, error taxonomy, the
//! pure functions that order and normalize command files, and the records a
//! run produces.

pub mod command_file;
pub mod config;
pub mod error;
pub mod types;

pub use command_file::{
    classify, has_numeric_prefix, normalize_command, numeric_prefix, sort_command_files, sort_key,
    Classification, CommandFile, UNNUMBERED_SORT_KEY,
};
pub use config::{
    ExecutionMode, RunnerConfig, RunnerConfigBuilder, DEFAULT_COMMAND_TOKEN, DEFAULT_DIRECTORIES,
    DEFAULT_SHELL,
};
pub use error::{Error, Result};
pub use types::{DirectoryReport, ExecutionResult, FileOutcome, PlannedFile, RunSummary};
