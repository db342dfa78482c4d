use crate::cli::error::Result;
use crate::core::{ExecutionMode, RunnerConfig, DEFAULT_COMMAND_TOKEN, DEFAULT_DIRECTORIES, DEFAULT_SHELL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file settings for the seqrun CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directories to process, in order
    #[serde(default = "default_directories")]
    pub directories: Vec<PathBuf>,

    /// Leading token that marks a file as executable
    #[serde(default = "default_command_token")]
    pub command_token: String,

    /// Per-command timeout in seconds (unbounded when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// How commands are launched
    #[serde(default)]
    pub mode: ExecutionMode,

    /// Shell used in shell mode
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Output formatting preferences
    #[serde(default)]
    pub output: OutputDefaults,
}

/// Output formatting defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDefaults {
    /// Enable colored output by default
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directories: default_directories(),
            command_token: default_command_token(),
            timeout_secs: None,
            mode: ExecutionMode::default(),
            shell: default_shell(),
            output: OutputDefaults::default(),
        }
    }
}

impl Default for OutputDefaults {
    fn default() -> Self {
        Self {
            color: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults when it does not exist
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        crate::cli::default_config_dir().join("config.toml")
    }

    /// Load configuration from the default location
    pub fn load_default() -> Result<Self> {
        Self::load_from_file(Self::default_path())
    }

    /// Load from an explicit path when given, otherwise from the default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load_default(),
        }
    }

    /// Merge with command-line arguments, giving priority to CLI args
    pub fn merge_with_cli_args(mut self, cli_args: &crate::cli::cli::Cli) -> Self {
        if cli_args.no_color {
            self.output.color = false;
        }
        self
    }

    /// Build the runner configuration described by this file
    pub fn runner_config(&self) -> RunnerConfig {
        RunnerConfig {
            directories: self.directories.clone(),
            command_token: self.command_token.clone(),
            timeout_secs: self.timeout_secs,
            mode: self.mode,
            shell: self.shell.clone(),
        }
    }
}

// Helper functions for default values
fn default_directories() -> Vec<PathBuf> {
    DEFAULT_DIRECTORIES.iter().map(PathBuf::from).collect()
}

fn default_command_token() -> String {
    DEFAULT_COMMAND_TOKEN.to_string()
}

fn default_shell() -> String {
    DEFAULT_SHELL.to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.directories.len(), 3);
        assert_eq!(config.command_token, "curl");
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.mode, ExecutionMode::Shell);
        assert!(config.output.color);
        assert_eq!(config.runner_config(), RunnerConfig::default());
    }

    #[test]
    fn test_config_save_load() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.directories = vec![PathBuf::from("./requests")];
        config.timeout_secs = Some(45);
        config.mode = ExecutionMode::Direct;
        config.output.color = false;

        config.save_to_file(&config_path).unwrap();
        let loaded_config = Config::load_from_file(&config_path).unwrap();

        assert_eq!(loaded_config, config);
    }

    #[test]
    fn test_missing_file_yields_defaults_without_creating_it() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = Config::load_from_file(&config_path).unwrap();

        assert_eq!(config, Config::default());
        assert!(!config_path.exists());
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "directories = [\"a\", \"b\"]\nmode = \"direct\"\n",
        )
        .unwrap();

        let config = Config::load_from_file(&config_path).unwrap();

        assert_eq!(config.directories, vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(config.mode, ExecutionMode::Direct);
        assert_eq!(config.command_token, "curl");
        assert_eq!(config.shell, "sh");
        assert!(config.output.color);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "mode = \"telepathy\"\n").unwrap();

        assert!(matches!(
            Config::load_from_file(&config_path),
            Err(crate::cli::error::CliError::TomlParse(_))
        ));
    }
}
