use serde::Serialize;
use std::path::PathBuf;

/// Captured result of one finished subprocess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    /// Exit code, `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Terminal state of a single command file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content did not start with the command token
    Skipped,
    /// Command exited with status zero
    Succeeded(ExecutionResult),
    /// Command exited with a non-zero status or was killed by a signal
    Failed(ExecutionResult),
    /// File could not be read, the command could not be launched or it timed out
    Errored(String),
}

impl FileOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
            Self::Errored(_) => "errored",
        }
    }
}

/// What happened to one target directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryReport {
    pub path: PathBuf,
    /// `false` when the directory did not exist and was skipped
    pub found: bool,
    /// File names with their outcome, in processing order
    pub outcomes: Vec<(String, FileOutcome)>,
}

impl DirectoryReport {
    pub fn missing(path: PathBuf) -> Self {
        Self {
            path,
            found: false,
            outcomes: Vec::new(),
        }
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.outcomes.iter().map(|(name, _)| name.as_str()).collect()
    }
}

/// In-memory record of a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub directories: Vec<DirectoryReport>,
}

impl RunSummary {
    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.directories
            .iter()
            .flat_map(|dir| dir.outcomes.iter())
            .filter(|(_, outcome)| pred(outcome))
            .count()
    }

    pub fn succeeded(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Succeeded(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped))
    }

    pub fn errored(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Errored(_)))
    }

    pub fn missing_directories(&self) -> usize {
        self.directories.iter().filter(|d| !d.found).count()
    }

    /// Total number of files that reached a terminal state
    pub fn processed(&self) -> usize {
        self.directories.iter().map(|d| d.outcomes.len()).sum()
    }
}

/// A discovered file together with what a run would do with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub name: String,
    pub path: PathBuf,
    pub prefix: Option<u64>,
    /// Normalized command, `None` when the file would be skipped
    pub command: Option<String>,
    /// Set when the file could not be read
    pub error: Option<String>,
}
