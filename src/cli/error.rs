use thiserror::Error;

/// Error type for the seqrun command-line interface
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config file already exists: {0}")]
    ConfigExists(std::path::PathBuf),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Runner error: {0}")]
    Runner(#[from] crate::core::error::Error),

    #[error("Failed to parse config file: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl CliError {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigExists(path) => {
                format!(
                    "Config file '{}' already exists. Use 'seqrun config init --force' to overwrite it.",
                    path.display()
                )
            }
            Self::TomlParse(err) => {
                format!(
                    "Could not parse the config file: {}. Run 'seqrun config path' to locate it.",
                    err
                )
            }
            Self::Runner(crate::core::error::Error::InvalidConfig(msg)) => {
                format!(
                    "Invalid configuration: {}. Check the config file and command-line flags.",
                    msg
                )
            }
            Self::Runner(crate::core::error::Error::DirectoryRead { path, .. }) => {
                format!(
                    "Could not list '{}'. Check that the directory exists and is readable.",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Convenient result type for the CLI
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_error_creation_helpers() {
        match CliError::invalid_input("no directories") {
            CliError::InvalidInput(msg) => assert_eq!(msg, "no directories"),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_user_messages() {
        let exists = CliError::ConfigExists(PathBuf::from("/tmp/config.toml"));
        assert!(exists.user_message().contains("--force"));

        let invalid = CliError::from(Error::invalid_config("timeout must be at least one second"));
        let msg = invalid.user_message();
        assert!(msg.starts_with("Invalid configuration: timeout"));

        let listing = CliError::from(Error::DirectoryRead {
            path: PathBuf::from("100 - CB"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        });
        assert!(listing.user_message().contains("'100 - CB'"));
    }

    #[test]
    fn test_fallback_message_is_display() {
        let err = CliError::from(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(err.user_message(), "IO error: disk full");
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: CliError = parse_err.into();
        assert!(matches!(err, CliError::TomlParse(_)));
        assert!(err.user_message().contains("seqrun config path"));
    }
}
