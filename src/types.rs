//! Common types used throughout json2sql

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type, one source record
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Default table name for generated statements
pub const DEFAULT_TABLE_NAME: &str = "DATA";

/// Default number of records per INSERT statement
pub const DEFAULT_BATCH_SIZE: usize = 100;
