//! Configuration System
//!
//! Layered configuration resolution for the Perses server. Merges caller-supplied
//! database defaults, an optional configuration file, and `PERSES_`-prefixed
//! environment variable overrides into a single validated configuration object,
//! each source overriding fields set by the previous one. Tests included.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigResolver;

/// Environment variable prefix recognized during resolution.
pub const ENV_PREFIX: &str = "PERSES";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database backend descriptor
    pub database: DatabaseConfig,
}

/// Database backend descriptor
///
/// Identifies which storage mechanism the server uses and carries its
/// parameters. Only the file-backed variant is supported.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// File-backed database parameters, present when one is configured
    pub file: Option<FileConfig>,
}

/// File-backed database parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Directory holding the database files
    pub folder: PathBuf,

    /// File suffix used to locate database files on disk
    pub extension: FileExtension,
}

/// Allowed file suffixes for the file-backed database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileExtension {
    #[default]
    Yaml,
    Json,
}

impl std::fmt::Display for FileExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileExtension::Yaml => write!(f, "yaml"),
            FileExtension::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for FileExtension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" => Ok(FileExtension::Yaml),
            "json" => Ok(FileExtension::Json),
            _ => Err(format!(
                "Unknown file extension: {}. Valid values: yaml, json",
                s
            )),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Database(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Database(msg) => {
                write!(f, "Database: {}", msg)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl DatabaseConfig {
    /// Validate database configuration
    pub fn validate(&self) -> Result<(), String> {
        // A configured file database must point somewhere
        if let Some(file) = &self.file {
            if file.folder.as_os_str().is_empty() {
                return Err("Database folder cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

impl Config {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.database.validate() {
            errors.push(ValidationError::Database(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
