//! Output formatting and display utilities
//!
//! This module handles:
//! - The console report printed while a run is in progress
//! - Table and JSON rendering for `seqrun list`

pub mod formatter;

// Re-export key types for convenience
pub use formatter::{render_plan_json, render_plan_table, DirectoryPlan};

use crate::core::{CommandFile, Error, ExecutionResult, RunSummary};
use crate::runtime::Reporter;
use colored::{Color, Colorize};
use std::io::Write;
use std::path::Path;

/// Human-readable progress report written to a terminal or any other sink
///
/// Write failures (a closed pipe, typically) are ignored so that a broken
/// console never interrupts the run itself.
pub struct ConsoleReporter<W: Write> {
    out: W,
    token: String,
    color: bool,
}

impl ConsoleReporter<std::io::Stdout> {
    /// Report to standard output
    pub fn stdout(token: impl Into<String>, color: bool) -> Self {
        Self::new(std::io::stdout(), token, color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, token: impl Into<String>, color: bool) -> Self {
        Self {
            out,
            token: token.into(),
            color,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }

    fn block(&mut self, heading: &str, body: &str) {
        let _ = writeln!(self.out, "{}\n{}", heading, body);
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn directory_started(&mut self, dir: &Path) {
        let banner = self.paint(
            &format!("🔄 Start processing for: {}", dir.display()),
            Color::Cyan,
        );
        self.line(&format!("\n{}", banner));
    }

    fn directory_missing(&mut self, dir: &Path) {
        let warning = self.paint(
            &format!("⚠️  Folder not found: {}", dir.display()),
            Color::Yellow,
        );
        self.line(&warning);
    }

    fn directory_unreadable(&mut self, dir: &Path, error: &Error) {
        let banner = self.paint(
            &format!("❌ Could not list {}: {}", dir.display(), error),
            Color::Red,
        );
        self.line(&banner);
    }

    fn file_started(&mut self, file: &CommandFile) {
        self.line(&format!("\n📂 File processing: {}", file.name));
    }

    fn command_started(&mut self, file: &CommandFile, _command: &str) {
        let text = format!("➡️  Executing {} command from: {}", self.token, file.name);
        self.line(&text);
    }

    fn command_skipped(&mut self, file: &CommandFile) {
        let warning = self.paint(
            &format!("⚠️  No {} command found in {}", self.token, file.name),
            Color::Yellow,
        );
        self.line(&warning);
    }

    fn command_succeeded(&mut self, _file: &CommandFile, result: &ExecutionResult) {
        let heading = self.paint("✅ STDOUT:", Color::Green);
        self.block(&heading, &result.stdout);
        if !result.stderr.is_empty() {
            let heading = self.paint("⚠️ STDERR:", Color::Yellow);
            self.block(&heading, &result.stderr);
        }
    }

    fn command_failed(&mut self, file: &CommandFile, result: &ExecutionResult) {
        let banner = self.paint(&format!("❌ Error executing {}", file.name), Color::Red);
        self.line(&banner);
        match result.exit_code {
            Some(code) => self.line(&format!("➡️ Exit code: {}", code)),
            None => self.line("➡️ Exit code: none (terminated by signal)"),
        }
        self.block("➡️ STDOUT:", &result.stdout);
        self.block("➡️ STDERR:", &result.stderr);
    }

    fn command_errored(&mut self, file: &CommandFile, error: &Error) {
        let banner = self.paint(
            &format!("❌ Error executing {}: {}", file.name, error),
            Color::Red,
        );
        self.line(&banner);
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        let mut text = format!(
            "🏁 Finished: {} succeeded, {} failed, {} errored, {} skipped",
            summary.succeeded(),
            summary.failed(),
            summary.errored(),
            summary.skipped()
        );
        let missing = summary.missing_directories();
        if missing > 0 {
            text.push_str(&format!(", {} folder(s) not found", missing));
        }
        let color = if summary.failed() + summary.errored() > 0 {
            Color::Red
        } else {
            Color::Green
        };
        let banner = self.paint(&text, color);
        self.line(&format!("\n{}", banner));
    }
}
