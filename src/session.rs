//! Conversion session
//!
//! A [`ConversionSession`] owns everything one conversion needs to be replayed:
//! the options, the parsed records and the current field mapping. Case style
//! and dialect changes operate on that state and regenerate the SQL without
//! touching any other session.
//!
//! A failed operation never modifies the session; the previous result stays
//! available.

use crate::case::CaseStyle;
use crate::config::ConvertOptions;
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::schema::{assign_names, json_type_of, CollisionPolicy, FieldMapper, FieldMapping};
use crate::sql::SqlGenerator;
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

/// Output of one conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// Generated SQL: CREATE TABLE followed by the INSERT batches
    pub sql: String,
    /// Columns in output order
    pub mapping: Vec<FieldMapping>,
    /// Number of INSERT statements
    pub insert_batches: usize,
    /// Number of source records
    pub record_count: usize,
}

/// Parse raw JSON text into records
///
/// Accepts an array of objects, or a single object treated as one record.
pub fn parse_records(input: &str) -> Result<Vec<JsonObject>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }

    match serde_json::from_str::<JsonValue>(trimmed)? {
        JsonValue::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                JsonValue::Object(record) => Ok(record),
                _ => Err(Error::InvalidRecord { index }),
            })
            .collect(),
        JsonValue::Object(record) => Ok(vec![record]),
        other => Err(Error::invalid_input(format!(
            "expected a JSON array of objects, got {}",
            json_type_of(Some(&other))
        ))),
    }
}

/// Convert JSON text to SQL in one step
pub fn convert(input: &str, options: &ConvertOptions) -> Result<ConversionResult> {
    let mut session = ConversionSession::new(options.clone());
    session.convert(input)?;
    session.into_result().ok_or(Error::NoActiveConversion)
}

/// Rename every field from its original key into `style`
fn rename_fields(
    mapping: &mut [FieldMapping],
    style: CaseStyle,
    policy: CollisionPolicy,
) -> Result<()> {
    let originals: Vec<&str> = mapping.iter().map(|m| m.original_name.as_str()).collect();
    let names = assign_names(&originals, style, policy)?;
    for (field, name) in mapping.iter_mut().zip(names) {
        field.field = name;
    }
    Ok(())
}

/// Stateful conversion context
#[derive(Debug, Clone, Default)]
pub struct ConversionSession {
    options: ConvertOptions,
    records: Vec<JsonObject>,
    result: Option<ConversionResult>,
}

impl ConversionSession {
    /// Create an empty session
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            records: Vec::new(),
            result: None,
        }
    }

    /// Current options (dialect and case style track the last successful operation)
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Last successful result
    pub fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }

    /// Current field mapping, empty before the first conversion
    pub fn mapping(&self) -> &[FieldMapping] {
        self.result.as_ref().map_or(&[], |r| r.mapping.as_slice())
    }

    /// Records parsed by the last successful conversion
    pub fn records(&self) -> &[JsonObject] {
        &self.records
    }

    /// Consume the session, returning the last result
    pub fn into_result(self) -> Option<ConversionResult> {
        self.result
    }

    /// Parse `input`, infer the mapping and generate SQL
    pub fn convert(&mut self, input: &str) -> Result<&ConversionResult> {
        self.options.validate()?;
        let records = parse_records(input)?;
        let mapping = self.infer(&records, self.options.dialect, self.options.case_style)?;
        let result = self.generate(mapping, &records, self.options.dialect);

        tracing::debug!(
            dialect = %self.options.dialect,
            records = result.record_count,
            fields = result.mapping.len(),
            batches = result.insert_batches,
            "Converted JSON to SQL"
        );

        self.records = records;
        Ok(self.result.insert(result))
    }

    /// Rename fields into `style` and regenerate; column types are not re-inferred
    pub fn apply_case_style(&mut self, style: CaseStyle) -> Result<&ConversionResult> {
        let current = self.result.as_ref().ok_or(Error::NoActiveConversion)?;
        let mut mapping = current.mapping.clone();
        rename_fields(&mut mapping, style, self.options.collision)?;

        let result = self.generate(mapping, &self.records, self.options.dialect);
        tracing::debug!(style = %style, "Applied case style");

        self.options.case_style = style;
        Ok(self.result.insert(result))
    }

    /// Re-infer the stored records for another dialect, keeping the case style
    pub fn switch_dialect(&mut self, dialect: Dialect) -> Result<&ConversionResult> {
        if self.result.is_none() {
            return Err(Error::NoActiveConversion);
        }
        let mapping = self.infer(&self.records, dialect, self.options.case_style)?;
        let result = self.generate(mapping, &self.records, dialect);
        tracing::debug!(dialect = %dialect, "Switched dialect");

        self.options.dialect = dialect;
        Ok(self.result.insert(result))
    }

    /// Regenerate SQL from the current mapping and records
    pub fn regenerate(&self) -> Result<String> {
        let current = self.result.as_ref().ok_or(Error::NoActiveConversion)?;
        let (sql, _) = self
            .generator(self.options.dialect)
            .generate(&current.mapping, &self.records);
        Ok(sql)
    }

    fn infer(
        &self,
        records: &[JsonObject],
        dialect: Dialect,
        style: CaseStyle,
    ) -> Result<Vec<FieldMapping>> {
        let mut mapping = FieldMapper::new(dialect)
            .with_sampling(self.options.sampling)
            .with_collision_policy(self.options.collision)
            .map_records(records)?;
        if style != CaseStyle::Camel {
            rename_fields(&mut mapping, style, self.options.collision)?;
        }
        Ok(mapping)
    }

    fn generate(
        &self,
        mapping: Vec<FieldMapping>,
        records: &[JsonObject],
        dialect: Dialect,
    ) -> ConversionResult {
        let (sql, insert_batches) = self.generator(dialect).generate(&mapping, records);
        ConversionResult {
            sql,
            mapping,
            insert_batches,
            record_count: records.len(),
        }
    }

    fn generator(&self, dialect: Dialect) -> SqlGenerator {
        SqlGenerator::new(dialect)
            .with_table_name(self.options.table_name.clone())
            .with_batch_size(self.options.batch_size)
    }
}
