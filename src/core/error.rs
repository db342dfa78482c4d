use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while discovering, reading or executing command files
///
/// None of these abort a run: the [`Runner`](crate::runtime::Runner) turns
/// them into an errored outcome for the affected file and moves on.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to list directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read command file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Program not found: {0}")]
    ProgramNotFound(String),

    #[error("Command timed out after {0} seconds")]
    Timeout(u64),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid command error
    pub fn invalid_command<S: Into<String>>(msg: S) -> Self {
        Self::InvalidCommand(msg.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether the error happened before the child process produced a result
    pub fn is_launch_failure(&self) -> bool {
        matches!(
            self,
            Self::Spawn { .. } | Self::ProgramNotFound(_) | Self::InvalidCommand(_)
        )
    }
}

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_includes_path() {
        let err = Error::FileRead {
            path: PathBuf::from("100 - CB/1-create.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("100 - CB/1-create.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_timeout_display() {
        assert_eq!(
            Error::Timeout(30).to_string(),
            "Command timed out after 30 seconds"
        );
    }

    #[test]
    fn test_launch_failure_classification() {
        assert!(Error::ProgramNotFound("curl".into()).is_launch_failure());
        assert!(Error::invalid_command("unbalanced quote").is_launch_failure());
        assert!(Error::Spawn {
            program: "sh".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        }
        .is_launch_failure());
        assert!(!Error::Timeout(5).is_launch_failure());
        assert!(!Error::invalid_config("empty token").is_launch_failure());
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::Other, "boom");
        let err: Error = io_err.into();
        match err {
            Error::Io(inner) => assert_eq!(inner.to_string(), "boom"),
            _ => panic!("Expected Io error"),
        }
    }
}
