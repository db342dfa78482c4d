use crate::cli::config::Config;
use crate::cli::error::{CliError, Result};
use crate::cli::output::{render_plan_json, render_plan_table, ConsoleReporter, DirectoryPlan};
use crate::core::{ExecutionMode, RunSummary, RunnerConfig};
use crate::runtime::{directory_exists, Runner};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Options for `seqrun run`
#[derive(Args, Debug, Clone, Default)]
pub struct RunCommand {
    /// Directories to process, in order (overrides the config file)
    #[arg(value_name = "DIR")]
    pub directories: Vec<PathBuf>,

    /// Kill any command still running after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Token a file's command must start with
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Spawn commands directly instead of through a shell
    #[arg(long)]
    pub direct: bool,

    /// Shell used to interpret commands
    #[arg(long, conflicts_with = "direct")]
    pub shell: Option<String>,
}

impl RunCommand {
    /// Combine the file configuration with the command-line overrides
    pub fn runner_config(&self, config: &Config) -> Result<RunnerConfig> {
        let mut runner_config = config.runner_config();

        if !self.directories.is_empty() {
            runner_config.directories = self.directories.clone();
        }
        if let Some(timeout) = self.timeout {
            runner_config.timeout_secs = Some(timeout);
        }
        if let Some(ref token) = self.token {
            runner_config.command_token = token.clone();
        }
        if self.direct {
            runner_config.mode = ExecutionMode::Direct;
        }
        if let Some(ref shell) = self.shell {
            runner_config.shell = shell.clone();
        }

        runner_config.validate()?;
        if runner_config.directories.is_empty() {
            return Err(CliError::invalid_input(
                "no directories to process; pass them as arguments or set 'directories' in the config file",
            ));
        }
        Ok(runner_config)
    }

    /// Run every configured directory, reporting to standard output
    ///
    /// Failing commands are part of the report, not an error: the call
    /// succeeds once all directories have been processed.
    pub async fn execute(&self, config: &Config) -> Result<RunSummary> {
        let runner_config = self.runner_config(config)?;
        info!(
            directories = runner_config.directories.len(),
            mode = %runner_config.mode,
            timeout_secs = ?runner_config.timeout_secs,
            "starting run"
        );

        let mut reporter =
            ConsoleReporter::stdout(runner_config.command_token.clone(), config.output.color);
        let summary = Runner::new(runner_config).run(&mut reporter).await;
        Ok(summary)
    }
}

/// Options for `seqrun list`
#[derive(Args, Debug, Clone, Default)]
pub struct ListCommand {
    /// Directories to inspect (overrides the config file)
    #[arg(value_name = "DIR")]
    pub directories: Vec<PathBuf>,

    /// Token a file's command must start with
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Print machine-readable JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    fn runner_config(&self, config: &Config) -> Result<RunnerConfig> {
        let run = RunCommand {
            directories: self.directories.clone(),
            token: self.token.clone(),
            ..RunCommand::default()
        };
        run.runner_config(config)
    }

    /// Discover and classify the files of every directory
    ///
    /// A directory that cannot be listed is recorded on its plan and the
    /// remaining directories are still inspected.
    pub async fn plans(&self, config: &Config) -> Result<Vec<DirectoryPlan>> {
        let runner = Runner::new(self.runner_config(config)?);
        let mut plans = Vec::new();

        for dir in &runner.config().directories {
            plans.push(plan_directory(&runner, dir).await);
        }
        Ok(plans)
    }

    /// Render the plans in the requested format
    pub fn render(&self, plans: &[DirectoryPlan]) -> Result<String> {
        if self.json {
            return render_plan_json(plans);
        }
        Ok(plans
            .iter()
            .map(render_plan_table)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    pub async fn execute(&self, config: &Config) -> Result<()> {
        let plans = self.plans(config).await?;
        println!("{}", self.render(&plans)?);
        Ok(())
    }
}

async fn plan_directory(runner: &Runner, dir: &Path) -> DirectoryPlan {
    let mut plan = DirectoryPlan {
        directory: dir.to_path_buf(),
        found: directory_exists(dir).await,
        files: Vec::new(),
        error: None,
    };
    if !plan.found {
        return plan;
    }

    match runner.plan(dir).await {
        Ok(files) => plan.files = files,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "failed to list directory");
            plan.error = Some(e.to_string());
        }
    }
    plan
}

/// Configuration management actions
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Print the location of the config file
    Path,

    /// Write a config file populated with the defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl ConfigAction {
    /// Run the action; `load` is only called by actions that read the file
    pub fn execute(
        &self,
        explicit_path: Option<&Path>,
        load: impl FnOnce() -> Result<Config>,
    ) -> Result<()> {
        let path = explicit_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Config::default_path);

        match self {
            Self::Show => {
                print!("{}", toml::to_string_pretty(&load()?)?);
            }
            Self::Path => {
                println!("{}", path.display());
            }
            Self::Init { force } => {
                let written = init_config_file(&path, *force)?;
                println!("Wrote {}", written.display());
            }
        }
        Ok(())
    }
}

/// Write the default configuration to `path`
pub fn init_config_file(path: &Path, force: bool) -> Result<PathBuf> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists(path.to_path_buf()));
    }
    Config::default().save_to_file(path)?;
    Ok(path.to_path_buf())
}
