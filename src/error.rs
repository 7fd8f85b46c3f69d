use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::behavioral::interpreter::InterpretError;

#[derive(Error, Debug)]
pub enum PlaygroundError {
    #[error("I/O error while writing pattern output: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown pattern: '{name}'")]
    UnknownPattern {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Invalid config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("Interpreter failed: {0}")]
    Interpret(#[from] InterpretError),
}

impl PlaygroundError {
    pub fn unknown_pattern(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::UnknownPattern {
            name: name.into(),
            suggestion,
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// One-line hint shown under the error, if there is one.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::UnknownPattern {
                suggestion: Some(s),
                ..
            } => Some(format!("Did you mean '{}'?", s)),
            Self::UnknownPattern { .. } => {
                Some("Run `playground list` to see every pattern".to_string())
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_pattern_display() {
        let error = PlaygroundError::unknown_pattern("vistor", Some("visitor".to_string()));
        assert_eq!(error.to_string(), "Unknown pattern: 'vistor'");
        assert_eq!(error.hint().as_deref(), Some("Did you mean 'visitor'?"));
    }

    #[test]
    fn test_unknown_pattern_without_suggestion_points_to_list() {
        let error = PlaygroundError::unknown_pattern("zzz", None);
        assert!(error.hint().unwrap().contains("playground list"));
    }

    #[test]
    fn test_config_error_display() {
        let error = PlaygroundError::config("playground.toml", "expected a boolean");
        let display = error.to_string();
        assert!(display.contains("playground.toml"));
        assert!(display.contains("expected a boolean"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<PlaygroundError>();
        assert_sync::<PlaygroundError>();
    }
}
