//! # seqrun
//!
//! Runs pre-recorded HTTP requests stored as numbered files.
//!
//! Each target directory holds files such as `1 - Create entity.txt` or
//! `20 - Query devices`, each containing one `curl` invocation that may be
//! spread over several lines with trailing backslashes. seqrun lists the
//! files whose name starts with digits, orders them by that number, joins
//! the continuation lines and executes the commands one after another,
//! printing what every command wrote to stdout and stderr.
//!
//! A failing command never stops the run; neither does a missing directory
//! or a file that does not contain a command.
//!
//! ```rust,no_run
//! use seqrun::{NullReporter, Runner, RunnerConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> seqrun::Result<()> {
//! let config = RunnerConfig::builder()
//!     .directory("./100 - CB - Create Entity")
//!     .directory("./200 - IOT - Create Service Group")
//!     .timeout_secs(60)
//!     .build()?;
//!
//! let summary = Runner::new(config).run(&mut NullReporter).await;
//! println!("{} succeeded, {} failed", summary.succeeded(), summary.failed());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod runtime;

#[cfg(feature = "cli")]
pub mod cli;

pub use crate::core::{
    CommandFile, DirectoryReport, Error, ExecutionMode, ExecutionResult, FileOutcome, PlannedFile,
    Result, RunSummary, RunnerConfig, RunnerConfigBuilder,
};
pub use crate::runtime::{NullReporter, Reporter, Runner};
