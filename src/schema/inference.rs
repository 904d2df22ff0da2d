//! Type inference and field mapping from JSON records

use super::naming::assign_names;
use super::types::{CollisionPolicy, FieldMapping, JsonType, SamplingMode};
use crate::case::CaseStyle;
use crate::dialect::{Dialect, DialectConfig, SqlKind};
use crate::error::Result;
use crate::types::JsonObject;
use regex::Regex;
use serde_json::{Number, Value};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Strings longer than this (in characters) become long-text columns
pub const MAX_VARCHAR_LENGTH: usize = 4000;

/// Maximum preview length, in characters
pub const SAMPLE_LENGTH: usize = 40;

/// ISO date prefix: 2026-01-28
static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").unwrap());

/// ISO date prefix followed by a time component: 2026-01-28T20:46:00Z, 2026-01-28 20:46
static DATETIME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}[Tt ][0-9]").unwrap());

/// JSON type of a sampled value; absent values count as null
pub fn json_type_of(value: Option<&Value>) -> JsonType {
    match value {
        None | Some(Value::Null) => JsonType::Null,
        Some(Value::Array(_)) => JsonType::Array,
        Some(Value::Object(_)) => JsonType::Object,
        Some(Value::Bool(_)) => JsonType::Boolean,
        Some(Value::Number(_)) => JsonType::Number,
        Some(Value::String(_)) => JsonType::String,
    }
}

/// Semantic SQL kind of a sampled value
///
/// Never fails: null, absent and unrecognized values fall back to long text.
pub fn infer_kind(value: Option<&Value>) -> SqlKind {
    match value {
        None | Some(Value::Null) => SqlKind::Text,
        Some(Value::Array(_) | Value::Object(_)) => SqlKind::Json,
        Some(Value::Bool(_)) => SqlKind::Boolean,
        Some(Value::Number(n)) => {
            if is_integral(n) {
                SqlKind::Integer
            } else {
                SqlKind::Decimal
            }
        }
        Some(Value::String(s)) => infer_string_kind(s),
    }
}

/// Infer `(json type, column type)` for one sampled value
pub fn infer_type(value: Option<&Value>, config: &DialectConfig) -> (JsonType, &'static str) {
    (json_type_of(value), config.column_type(infer_kind(value)))
}

fn infer_string_kind(s: &str) -> SqlKind {
    if DATE_PREFIX.is_match(s) {
        if DATETIME_PREFIX.is_match(s) {
            SqlKind::Timestamp
        } else {
            SqlKind::Date
        }
    } else if s.chars().count() > MAX_VARCHAR_LENGTH {
        SqlKind::Text
    } else {
        SqlKind::Varchar
    }
}

/// A number has no fractional part (`42`, `42.0`)
fn is_integral(n: &Number) -> bool {
    n.is_i64()
        || n.is_u64()
        || n
            .as_f64()
            .is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

/// Short preview of a value for display next to the mapping
pub fn format_sample(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "NULL".to_string(),
        Some(v @ (Value::Array(_) | Value::Object(_))) => {
            let mut preview = truncate_chars(&v.to_string(), SAMPLE_LENGTH);
            preview.push_str("...");
            preview
        }
        Some(Value::String(s)) => truncate_chars(s, SAMPLE_LENGTH),
        Some(v) => truncate_chars(&v.to_string(), SAMPLE_LENGTH),
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// Primary key guess: the name ends with `id`, or starts with `id` as a whole word
///
/// Case is ignored for the suffix. A leading `id` only counts when the next
/// character starts a new word (`idNumber`, `ID2`, `id_type`), so `identifier`
/// is not a key.
pub fn is_primary_key(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.len() < 2 {
        return false;
    }

    let suffix = &bytes[bytes.len() - 2..];
    if suffix.eq_ignore_ascii_case(b"id") {
        return true;
    }

    bytes[..2].eq_ignore_ascii_case(b"id")
        && matches!(bytes[2], b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'-')
}

/// Builds the ordered field mapping for a set of records
#[derive(Debug, Clone)]
pub struct FieldMapper {
    config: &'static DialectConfig,
    sampling: SamplingMode,
    collision: CollisionPolicy,
}

impl FieldMapper {
    /// Create a mapper for a dialect with default settings
    pub fn new(dialect: Dialect) -> Self {
        Self {
            config: dialect.config(),
            sampling: SamplingMode::default(),
            collision: CollisionPolicy::default(),
        }
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

    /// Map a single representative record
    pub fn map_record(&self, record: &JsonObject) -> Result<Vec<FieldMapping>> {
        let columns: Vec<SampledColumn<'_>> = record
            .iter()
            .map(|(key, value)| SampledColumn {
                key,
                first: Some(value),
                kind: infer_kind(Some(value)),
            })
            .collect();
        self.build(columns)
    }

    /// Map a record set according to the sampling mode
    pub fn map_records(&self, records: &[JsonObject]) -> Result<Vec<FieldMapping>> {
        match (self.sampling, records.first()) {
            (_, None) => Ok(Vec::new()),
            (SamplingMode::FirstRecord, Some(first)) => self.map_record(first),
            (SamplingMode::AllRecords, Some(_)) => self.build(sample_all(records)),
        }
    }

    fn build(&self, columns: Vec<SampledColumn<'_>>) -> Result<Vec<FieldMapping>> {
        let originals: Vec<&str> = columns.iter().map(|c| c.key).collect();
        let names = assign_names(&originals, CaseStyle::Camel, self.collision)?;

        let mut mapping: Vec<FieldMapping> = columns
            .into_iter()
            .zip(names)
            .map(|(column, field)| {
                let is_primary = is_primary_key(&field);
                FieldMapping {
                    original_name: column.key.to_string(),
                    json_type: json_type_of(column.first),
                    sql_kind: column.kind,
                    sql_type: self.config.column_type(column.kind).to_string(),
                    sample: format_sample(column.first),
                    is_primary,
                    field,
                }
            })
            .collect();

        mapping.sort_by(|a, b| {
            b.is_primary
                .cmp(&a.is_primary)
                .then_with(|| a.field.cmp(&b.field))
        });

        tracing::debug!(
            dialect = %self.config.dialect,
            fields = mapping.len(),
            "Built field mapping"
        );
        Ok(mapping)
    }
}

/// One column as observed across the sampled records
struct SampledColumn<'a> {
    key: &'a str,
    /// First non-null value seen, if any
    first: Option<&'a Value>,
    kind: SqlKind,
}

/// Union of keys over all records with kinds widened across every non-null value
fn sample_all(records: &[JsonObject]) -> Vec<SampledColumn<'_>> {
    let mut order: Vec<&str> = Vec::new();
    let mut seen: HashMap<&str, (Option<&Value>, Option<SqlKind>)> = HashMap::new();

    for record in records {
        for (key, value) in record {
            let entry = seen.entry(key.as_str()).or_insert_with(|| {
                order.push(key.as_str());
                (None, None)
            });
            if value.is_null() {
                continue;
            }
            let kind = infer_kind(Some(value));
            entry.1 = Some(entry.1.map_or(kind, |existing| existing.merge_with(kind)));
            if entry.0.is_none() {
                entry.0 = Some(value);
            }
        }
    }

    order
        .into_iter()
        .map(|key| {
            let (first, kind) = seen.remove(key).unwrap_or_default();
            if kind.is_none() {
                tracing::warn!(field = key, "Column has only null values, using long text");
            }
            SampledColumn {
                key,
                first,
                kind: kind.unwrap_or(SqlKind::Text),
            }
        })
        .collect()
}

/// Infer the mapping for a single record (convenience function)
pub fn infer_mapping(record: &JsonObject, dialect: Dialect) -> Result<Vec<FieldMapping>> {
    FieldMapper::new(dialect).map_record(record)
}
