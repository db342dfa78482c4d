//! Filesystem discovery, subprocess execution and the sequential runner

pub mod discovery;
pub mod process;
pub mod runner;

pub use discovery::{directory_exists, discover_command_files};
pub use process::{execute_command, split_command};
pub use runner::{NullReporter, Reporter, Runner};
