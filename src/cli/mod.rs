//! Command-line interface for running numbered request directories.
//! ## Usage
//!
//! ```bash
//! # Run the configured directories in order
//! seqrun run
//!
//! # Run specific directories with a per-command timeout
//! seqrun run "./100 - CB - Create Entity" "./200 - IOT - Create Service Group" --timeout 30
//!
//! # Show the processing order without executing anything
//! seqrun list "./100 - CB - Create Entity"
//!
//! # Write a starter config file
//! seqrun config init
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

// Re-export commonly used types
pub use error::{CliError, Result};

/// Version information for the CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default directory holding the config file
pub fn default_config_dir() -> std::path::PathBuf {
    directories::ProjectDirs::from("", "", "seqrun")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| {
            // Fallback to home directory if project dirs not available
            dirs::home_dir()
                .unwrap_or_else(|| std::path::PathBuf::from("."))
                .join(".seqrun")
        })
}
