//! Error types for json2sql
//!
//! Every fallible public API returns `Result<T, Error>` where Error is defined here.
//! Type inference never fails; unsupported values fall back to a long-text column.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for json2sql
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("JSON input is empty")]
    EmptyInput,

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Record {index} is not a JSON object")]
    InvalidRecord { index: usize },

    // ============================================================================
    // Selector Errors
    // ============================================================================
    #[error("Unknown dialect '{0}' (expected one of: mysql, postgresql, sqlite, oracle, sqlserver)")]
    UnknownDialect(String),

    #[error("Unknown case style '{0}' (expected one of: camelCase, PascalCase, snake_case, kebab-case, UPPER_SNAKE_CASE)")]
    UnknownCaseStyle(String),

    // ============================================================================
    // Mapping Errors
    // ============================================================================
    #[error("Field name collision: '{first}' and '{second}' both map to '{name}'")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },

    #[error("No conversion has been run in this session")]
    NoActiveConversion,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read input file '{}': {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a name collision error
    pub fn collision(
        name: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::NameCollision {
            name: name.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create an input file read error
    pub fn read_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadInput {
            path: path.into(),
            source,
        }
    }

    /// Check if this error was caused by the caller's input rather than the environment
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Error::Io(_) | Error::ReadInput { .. })
    }
}

/// Result type alias for json2sql
pub type Result<T> = std::result::Result<T, Error>;
