//! Schema types

use crate::dialect::SqlKind;
use serde::{Deserialize, Serialize};

/// JSON value type as seen in the source record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    Null,
    Array,
    Object,
    Boolean,
    Number,
    String,
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonType::Null => write!(f, "null"),
            JsonType::Array => write!(f, "array"),
            JsonType::Object => write!(f, "object"),
            JsonType::Boolean => write!(f, "boolean"),
            JsonType::Number => write!(f, "number"),
            JsonType::String => write!(f, "string"),
        }
    }
}

/// One output column inferred from the sample record(s)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    /// Current column name (after case conversion)
    pub field: String,
    /// Key as it appears in the source JSON
    pub original_name: String,
    pub json_type: JsonType,
    /// Semantic kind the column type was resolved from
    pub sql_kind: SqlKind,
    /// Dialect-specific column type
    pub sql_type: String,
    /// Short human-readable preview of the sampled value
    pub sample: String,
    /// Primary key guess
    pub is_primary: bool,
}

/// How many records are inspected to build the mapping
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMode {
    /// Only the first record defines the columns and their types
    #[default]
    FirstRecord,
    /// Every record contributes keys, and column kinds are widened across all values
    AllRecords,
}

/// What to do when two source keys convert to the same column name
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Fail the operation and leave the previous mapping untouched
    #[default]
    Error,
    /// Append `2`, `3`, ... using the case style's separator
    Suffix,
}
