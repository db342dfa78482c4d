use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Directories processed when nothing else is configured
pub const DEFAULT_DIRECTORIES: [&str; 3] = [
    "./100 - CB - Create Entity",
    "./200 - IOT - Create Service Group",
    "./300 - IOT - Create Provisioned Device",
];

/// Token a normalized command must start with to be executed
pub const DEFAULT_COMMAND_TOKEN: &str = "curl";

/// Shell used by [`ExecutionMode::Shell`]
pub const DEFAULT_SHELL: &str = "sh";

/// How a normalized command is handed to the operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Run the command through `<shell> -c`.
    ///
    /// File contents are executed verbatim, shell operators included. Only
    /// point the runner at directories whose contents you trust.
    #[default]
    Shell,
    /// Split the command into an argument vector and spawn the program
    /// directly, without a shell in between.
    Direct,
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shell => write!(f, "shell"),
            Self::Direct => write!(f, "direct"),
        }
    }
}

impl std::str::FromStr for ExecutionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "shell" => Ok(Self::Shell),
            "direct" => Ok(Self::Direct),
            other => Err(Error::invalid_config(format!(
                "unknown execution mode '{}', expected 'shell' or 'direct'",
                other
            ))),
        }
    }
}

/// Runtime configuration for a [`Runner`](crate::runtime::Runner)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Directories to process, in order
    pub directories: Vec<PathBuf>,

    /// Leading token that marks file content as executable
    pub command_token: String,

    /// Optional bound on how long a single command may run
    pub timeout_secs: Option<u64>,

    /// Shell or direct invocation
    pub mode: ExecutionMode,

    /// Shell program for [`ExecutionMode::Shell`]
    pub shell: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            directories: DEFAULT_DIRECTORIES.iter().map(PathBuf::from).collect(),
            command_token: DEFAULT_COMMAND_TOKEN.to_string(),
            timeout_secs: None,
            mode: ExecutionMode::default(),
            shell: DEFAULT_SHELL.to_string(),
        }
    }
}

impl RunnerConfig {
    /// Create a new config builder
    pub fn builder() -> RunnerConfigBuilder {
        RunnerConfigBuilder::new()
    }

    /// The configured timeout as a [`Duration`]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Check the configuration for values the runner cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.command_token.trim().is_empty() {
            return Err(Error::invalid_config("command token must not be empty"));
        }
        if self.command_token.chars().any(char::is_whitespace) {
            return Err(Error::invalid_config(format!(
                "command token '{}' must be a single word",
                self.command_token
            )));
        }
        if self.mode == ExecutionMode::Shell && self.shell.trim().is_empty() {
            return Err(Error::invalid_config("shell must not be empty"));
        }
        if self.timeout_secs == Some(0) {
            return Err(Error::invalid_config(
                "timeout must be at least one second",
            ));
        }
        Ok(())
    }
}

/// Fluent builder for [`RunnerConfig`]
///
/// ```rust
/// use seqrun::{ExecutionMode, RunnerConfig};
///
/// let config = RunnerConfig::builder()
///     .directory("./requests")
///     .timeout_secs(30)
///     .mode(ExecutionMode::Direct)
///     .build()
///     .unwrap();
/// assert_eq!(config.directories.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RunnerConfigBuilder {
    directories: Option<Vec<PathBuf>>,
    config: RunnerConfig,
}

impl RunnerConfigBuilder {
    /// Create a builder seeded with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directory. The first call replaces the default list.
    pub fn directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directories.get_or_insert_with(Vec::new).push(dir.into());
        self
    }

    /// Replace the directory list
    pub fn directories<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.directories = Some(dirs.into_iter().map(Into::into).collect());
        self
    }

    pub fn command_token(mut self, token: impl Into<String>) -> Self {
        self.config.command_token = token.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = Some(secs);
        self
    }

    pub fn mode(mut self, mode: ExecutionMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn shell(mut self, shell: impl Into<String>) -> Self {
        self.config.shell = shell.into();
        self
    }

    /// Build and validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn build(self) -> Result<RunnerConfig> {
        let mut config = self.config;
        if let Some(dirs) = self.directories {
            config.directories = dirs;
        }
        config.validate()?;
        Ok(config)
    }
}
