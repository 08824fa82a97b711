//! Error types for configuration resolution.

use crate::config::ValidationError;
use thiserror::Error;

/// Configuration resolution errors. All variants are fatal to startup; no
/// partial configuration is ever returned alongside one.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file missing, unreadable, or malformed
    #[error("Failed to load configuration: {0}")]
    Load(String),

    /// A source value failed to coerce to the target field's type
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Semantic rule violation on the merged result
    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        match &err {
            config::ConfigError::NotFound(_)
            | config::ConfigError::FileParse { .. }
            | config::ConfigError::Foreign(_) => ConfigError::Load(err.to_string()),
            _ => ConfigError::Parse(err.to_string()),
        }
    }
}
