//! Conversion options
//!
//! Options can be built in code, loaded from a YAML file, or overridden by CLI
//! flags. Every entry point validates them before a conversion runs.

use crate::case::CaseStyle;
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::schema::{CollisionPolicy, SamplingMode};
use crate::types::{DEFAULT_BATCH_SIZE, DEFAULT_TABLE_NAME};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Maximum identifier length (conservative limit across databases).
/// - PostgreSQL: 63 bytes
/// - SQL Server: 128 characters
/// - MySQL: 64 characters
pub const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Options controlling one conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Target SQL dialect
    #[serde(default)]
    pub dialect: Dialect,

    /// Case style applied to field names after inference
    #[serde(default)]
    pub case_style: CaseStyle,

    /// Table name used in CREATE TABLE and INSERT statements
    #[serde(default = "default_table_name")]
    pub table_name: String,

    /// Records per INSERT statement
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Which records are inspected for column types
    #[serde(default)]
    pub sampling: SamplingMode,

    /// What to do when two keys convert to the same column name
    #[serde(default)]
    pub collision: CollisionPolicy,
}

fn default_table_name() -> String {
    DEFAULT_TABLE_NAME.to_string()
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            case_style: CaseStyle::default(),
            table_name: default_table_name(),
            batch_size: default_batch_size(),
            sampling: SamplingMode::default(),
            collision: CollisionPolicy::default(),
        }
    }
}

impl ConvertOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dialect
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set the case style
    #[must_use]
    pub fn with_case_style(mut self, case_style: CaseStyle) -> Self {
        self.case_style = case_style;
        self
    }

    /// Set the table name
    #[must_use]
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Set the batch size
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the sampling mode
    #[must_use]
    pub fn with_sampling(mut self, sampling: SamplingMode) -> Self {
        self.sampling = sampling;
        self
    }

    /// Set the collision policy
    #[must_use]
    pub fn with_collision_policy(mut self, collision: CollisionPolicy) -> Self {
        self.collision = collision;
        self
    }

    /// Load options from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let options: ConvertOptions = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read options file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        validate_table_name(&self.table_name)?;

        if self.batch_size == 0 {
            return Err(Error::config("batch_size must be greater than 0"));
        }

        Ok(())
    }
}

/// Optional per-invocation overrides (CLI flags, HTTP request fields)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionOverrides {
    #[serde(default)]
    pub dialect: Option<Dialect>,
    #[serde(default)]
    pub case_style: Option<CaseStyle>,
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default)]
    pub batch_size: Option<usize>,
    #[serde(default)]
    pub sampling: Option<SamplingMode>,
    #[serde(default)]
    pub collision: Option<CollisionPolicy>,
}

impl ConvertOptions {
    /// Apply every override that is set
    #[must_use]
    pub fn with_overrides(mut self, overrides: OptionOverrides) -> Self {
        if let Some(dialect) = overrides.dialect {
            self.dialect = dialect;
        }
        if let Some(case_style) = overrides.case_style {
            self.case_style = case_style;
        }
        if let Some(table_name) = overrides.table_name {
            self.table_name = table_name;
        }
        if let Some(batch_size) = overrides.batch_size {
            self.batch_size = batch_size;
        }
        if let Some(sampling) = overrides.sampling {
            self.sampling = sampling;
        }
        if let Some(collision) = overrides.collision {
            self.collision = collision;
        }
        self
    }
}

/// Validate a table name for use as a quoted identifier
fn validate_table_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::config("table_name cannot be empty"));
    }

    if name.contains('\0') {
        return Err(Error::config(format!(
            "table_name contains a null byte: {name:?}"
        )));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(Error::config(format!(
            "table_name exceeds maximum length of {} bytes (got {} bytes)",
            MAX_IDENTIFIER_LENGTH,
            name.len()
        )));
    }

    Ok(())
}
