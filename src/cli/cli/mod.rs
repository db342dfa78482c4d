//! Argument parsing and subcommand dispatch

pub mod app;
pub mod commands;

pub use app::{Cli, Commands};
