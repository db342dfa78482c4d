use crate::{cli::cli::commands::*, cli::config::Config, cli::error::Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::path::PathBuf;

/// Run numbered, pre-recorded curl request files in order
#[derive(Parser, Debug)]
#[command(name = "seqrun", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose diagnostic logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to the config file (defaults to the platform config directory)
    #[arg(short, long, global = true, env = "SEQRUN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute the command files of each directory in order
    Run(RunCommand),

    /// Show the processing order without executing anything
    List(ListCommand),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Cli {
    /// Log filter derived from the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// Execute the CLI command
    ///
    /// The config file is only read by the subcommands that need its
    /// values, so `config path`, `config init --force` and `completion`
    /// keep working when the file is broken.
    pub async fn execute(self) -> Result<()> {
        match &self.command {
            Commands::Run(cmd) => cmd.execute(&self.load_config()?).await.map(|_| ()),
            Commands::List(cmd) => cmd.execute(&self.load_config()?).await,
            Commands::Completion { shell } => {
                generate_completion(*shell);
                Ok(())
            }
            Commands::Config { action } => {
                action.execute(self.config.as_deref(), || self.load_config())
            }
        }
    }

    /// Load the config file and apply the global flags on top of it
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.config.as_deref())?.merge_with_cli_args(self))
    }
}

/// Generate shell completion script
fn generate_completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
