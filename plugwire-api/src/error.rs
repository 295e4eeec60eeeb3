//! Error types for plugin authors

use thiserror::Error;

/// Errors that plugins can return
#[derive(Error, Debug)]
pub enum PluginError {
    /// Custom error with message
    #[error("{0}")]
    Custom(String),

    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Registry name not known to hosts
    #[error("Unknown registry: {0}")]
    UnknownRegistry(String),

    /// Two config sources registered under the same name
    #[error("Duplicate source: {0}")]
    DuplicateSource(String),

    /// A single config source failed to produce its payload
    #[error("source '{source_name}': {message}")]
    Source {
        source_name: String,
        message: String,
    },

    /// The call was cancelled by the host
    #[error("operation cancelled")]
    Cancelled,

    /// The call ran past its deadline
    #[error("deadline exceeded")]
    DeadlineExceeded,
}

impl PluginError {
    /// Create a custom error with a message
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Create an error attributed to one config source
    pub fn source(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let custom_err = PluginError::Custom("something happened".to_string());
        assert_eq!(custom_err.to_string(), "something happened");

        assert_eq!(PluginError::Cancelled.to_string(), "operation cancelled");
        assert_eq!(PluginError::DeadlineExceeded.to_string(), "deadline exceeded");
    }

    #[test]
    fn test_helper_constructors() {
        let err = PluginError::custom("test");
        assert!(matches!(err, PluginError::Custom(_)));

        let err = PluginError::source("packs", "unreadable");
        assert_eq!(err.to_string(), "source 'packs': unreadable");
    }

    #[test]
    fn test_duplicate_source_error() {
        let err = PluginError::DuplicateSource("base".into());
        assert!(err.to_string().contains("base"));
    }

    #[test]
    fn test_unknown_registry_error() {
        let err = PluginError::UnknownRegistry("widget".into());
        assert_eq!(err.to_string(), "Unknown registry: widget");
    }
}
