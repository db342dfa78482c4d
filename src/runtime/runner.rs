use crate::core::{
    classify, Classification, CommandFile, DirectoryReport, Error, ExecutionResult, FileOutcome,
    PlannedFile, Result, RunSummary, RunnerConfig,
};
use crate::runtime::discovery::{directory_exists, discover_command_files};
use crate::runtime::process::execute_command;
use std::path::Path;
use tracing::{debug, info, warn};

/// Receives progress events while a [`Runner`] works through its directories
///
/// Every method has an empty default so implementations only handle what
/// they care about.
pub trait Reporter {
    fn directory_started(&mut self, _dir: &Path) {}
    fn directory_missing(&mut self, _dir: &Path) {}
    fn directory_unreadable(&mut self, _dir: &Path, _error: &Error) {}
    fn file_started(&mut self, _file: &CommandFile) {}
    fn command_started(&mut self, _file: &CommandFile, _command: &str) {}
    fn command_skipped(&mut self, _file: &CommandFile) {}
    fn command_succeeded(&mut self, _file: &CommandFile, _result: &ExecutionResult) {}
    fn command_failed(&mut self, _file: &CommandFile, _result: &ExecutionResult) {}
    fn command_errored(&mut self, _file: &CommandFile, _error: &Error) {}
    fn run_finished(&mut self, _summary: &RunSummary) {}
}

/// A reporter that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Runs numbered command files directory by directory, one at a time
///
/// ```rust,no_run
/// use seqrun::{NullReporter, Runner, RunnerConfig};
///
/// # async fn demo() -> seqrun::Result<()> {
/// let config = RunnerConfig::builder().directory("./requests").build()?;
/// let summary = Runner::new(config).run(&mut NullReporter).await;
/// println!("{} failed", summary.failed());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Process every configured directory in order
    ///
    /// Nothing that happens to an individual directory or file stops the
    /// run; the returned summary records what happened to each of them.
    pub async fn run(&self, reporter: &mut dyn Reporter) -> RunSummary {
        let mut summary = RunSummary::default();

        for dir in &self.config.directories {
            let report = self.process_directory(dir, reporter).await;
            summary.directories.push(report);
        }

        info!(
            succeeded = summary.succeeded(),
            failed = summary.failed(),
            skipped = summary.skipped(),
            errored = summary.errored(),
            missing_directories = summary.missing_directories(),
            "run finished"
        );
        reporter.run_finished(&summary);
        summary
    }

    /// Process the numbered files of a single directory
    pub async fn process_directory(
        &self,
        dir: &Path,
        reporter: &mut dyn Reporter,
    ) -> DirectoryReport {
        if !directory_exists(dir).await {
            warn!(dir = %dir.display(), "directory not found, skipping");
            reporter.directory_missing(dir);
            return DirectoryReport::missing(dir.to_path_buf());
        }

        reporter.directory_started(dir);
        let mut report = DirectoryReport {
            path: dir.to_path_buf(),
            found: true,
            outcomes: Vec::new(),
        };

        let files = match discover_command_files(dir).await {
            Ok(files) => files,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "failed to list directory");
                reporter.directory_unreadable(dir, &e);
                return report;
            }
        };

        for file in files {
            let outcome = self.process_file(&file, reporter).await;
            debug!(file = %file.name, outcome = outcome.label(), "file done");
            report.outcomes.push((file.name, outcome));
        }
        report
    }

    /// Read, classify and possibly execute one file
    pub async fn process_file(
        &self,
        file: &CommandFile,
        reporter: &mut dyn Reporter,
    ) -> FileOutcome {
        reporter.file_started(file);

        let command = match self.load(file).await {
            Ok(Classification::Executable(command)) => command,
            Ok(Classification::NotACommand) => {
                debug!(file = %file.name, token = %self.config.command_token, "no command found");
                reporter.command_skipped(file);
                return FileOutcome::Skipped;
            }
            Err(e) => {
                warn!(file = %file.name, error = %e, "failed to read command file");
                reporter.command_errored(file, &e);
                return FileOutcome::Errored(e.to_string());
            }
        };

        reporter.command_started(file, &command);
        match execute_command(&self.config, &command).await {
            Ok(result) if result.success() => {
                reporter.command_succeeded(file, &result);
                FileOutcome::Succeeded(result)
            }
            Ok(result) => {
                warn!(file = %file.name, exit_code = ?result.exit_code, "command failed");
                reporter.command_failed(file, &result);
                FileOutcome::Failed(result)
            }
            Err(e) => {
                let stage = if e.is_launch_failure() {
                    "launched"
                } else {
                    "completed"
                };
                warn!(file = %file.name, error = %e, "command could not be {}", stage);
                reporter.command_errored(file, &e);
                FileOutcome::Errored(e.to_string())
            }
        }
    }

    /// Discover the files of `dir` and classify them without executing anything
    pub async fn plan(&self, dir: &Path) -> Result<Vec<PlannedFile>> {
        let files = discover_command_files(dir).await?;
        let mut planned = Vec::with_capacity(files.len());

        for file in files {
            let (command, error) = match self.load(&file).await {
                Ok(Classification::Executable(command)) => (Some(command), None),
                Ok(Classification::NotACommand) => (None, None),
                Err(e) => (None, Some(e.to_string())),
            };
            planned.push(PlannedFile {
                name: file.name,
                path: file.path,
                prefix: file.prefix,
                command,
                error,
            });
        }
        Ok(planned)
    }

    async fn load(&self, file: &CommandFile) -> Result<Classification> {
        let raw = tokio::fs::read_to_string(&file.path)
            .await
            .map_err(|source| Error::FileRead {
                path: file.path.clone(),
                source,
            })?;
        Ok(classify(&raw, &self.config.command_token))
    }
}
