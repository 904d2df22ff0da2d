//! CREATE TABLE and batched INSERT generation

use crate::dialect::{Dialect, DialectConfig};
use crate::schema::FieldMapping;
use crate::types::{JsonObject, JsonValue, DEFAULT_BATCH_SIZE, DEFAULT_TABLE_NAME};

/// Number of INSERT statements produced for `records` rows
pub fn batch_count(records: usize, batch_size: usize) -> usize {
    records.div_ceil(batch_size.max(1))
}

/// SQL text generator for one table in one dialect
#[derive(Debug, Clone)]
pub struct SqlGenerator {
    config: &'static DialectConfig,
    table_name: String,
    batch_size: usize,
}

impl SqlGenerator {
    /// Create a generator with the default table name and batch size
    pub fn new(dialect: Dialect) -> Self {
        Self {
            config: dialect.config(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Set the table name
    #[must_use]
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Set the number of records per INSERT statement (minimum 1)
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Dialect configuration in use
    pub fn config(&self) -> &'static DialectConfig {
        self.config
    }

    /// Generate the full script: DDL then one INSERT per batch
    ///
    /// Returns the SQL text and the number of INSERT batches.
    pub fn generate(&self, mapping: &[FieldMapping], records: &[JsonObject]) -> (String, usize) {
        let mut statements = Vec::with_capacity(1 + batch_count(records.len(), self.batch_size));
        statements.push(self.create_table(mapping));

        for chunk in records.chunks(self.batch_size) {
            statements.push(self.insert_batch(mapping, chunk));
        }

        let batches = statements.len() - 1;
        tracing::debug!(
            dialect = %self.config.dialect,
            table = %self.table_name,
            records = records.len(),
            batches,
            "Generated SQL"
        );

        let mut sql = statements.join("\n\n");
        sql.push('\n');
        (sql, batches)
    }

    /// CREATE TABLE statement with one column per field, in mapping order
    pub fn create_table(&self, mapping: &[FieldMapping]) -> String {
        let primary = primary_key_index(mapping);
        let columns: Vec<String> = mapping
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let mut column = format!(
                    "  {} {}",
                    self.config.quote_identifier(&field.field),
                    field.sql_type
                );
                if primary == Some(i) {
                    column.push_str(" PRIMARY KEY");
                }
                column
            })
            .collect();

        let body = if columns.is_empty() {
            format!(
                "{} {} (\n)",
                self.config.create_prefix,
                self.config.quote_identifier(&self.table_name)
            )
        } else {
            format!(
                "{} {} (\n{}\n)",
                self.config.create_prefix,
                self.config.quote_identifier(&self.table_name),
                columns.join(",\n")
            )
        };
        self.config.terminate(&body)
    }

    /// One multi-row INSERT statement for a batch of records
    ///
    /// Values are looked up by each field's original key so renamed columns
    /// keep their data.
    pub fn insert_batch(&self, mapping: &[FieldMapping], records: &[JsonObject]) -> String {
        let table = self.config.quote_identifier(&self.table_name);
        let columns = mapping
            .iter()
            .map(|field| self.config.quote_identifier(&field.field))
            .collect::<Vec<_>>()
            .join(", ");
        let rows = records.iter().map(|record| self.row(mapping, record));

        let body = if self.config.insert_all {
            // Oracle before 23c has no multi-row VALUES
            let targets: Vec<String> = rows
                .map(|row| format!("  INTO {table} ({columns}) VALUES {row}"))
                .collect();
            format!("INSERT ALL\n{}\nSELECT 1 FROM DUAL", targets.join("\n"))
        } else {
            format!(
                "{} {table} ({columns}) VALUES\n{}",
                self.config.insert_prefix,
                rows.collect::<Vec<_>>().join(",\n")
            )
        };
        self.config.terminate(&body)
    }

    /// Value tuple for one record, in mapping order
    fn row(&self, mapping: &[FieldMapping], record: &JsonObject) -> String {
        let values: Vec<String> = mapping
            .iter()
            .map(|field| self.literal(record.get(&field.original_name)))
            .collect();
        format!("({})", values.join(", "))
    }

    /// Render one value as a SQL literal
    pub fn literal(&self, value: Option<&JsonValue>) -> String {
        match value {
            None | Some(JsonValue::Null) => "NULL".to_string(),
            Some(JsonValue::Bool(b)) => self.config.boolean_literal(*b).to_string(),
            Some(JsonValue::Number(n)) => n.to_string(),
            Some(JsonValue::String(s)) => self.config.string_literal(s),
            Some(v @ (JsonValue::Array(_) | JsonValue::Object(_))) => {
                self.config.string_literal(&v.to_string())
            }
        }
    }
}

/// Column that carries the PRIMARY KEY constraint: an exact `id` if present,
/// otherwise the only primary-flagged field
fn primary_key_index(mapping: &[FieldMapping]) -> Option<usize> {
    if let Some(exact) = mapping
        .iter()
        .position(|f| f.is_primary && f.field.eq_ignore_ascii_case("id"))
    {
        return Some(exact);
    }
    let mut flagged = mapping.iter().enumerate().filter(|(_, f)| f.is_primary);
    match (flagged.next(), flagged.next()) {
        (Some((index, _)), None) => Some(index),
        _ => None,
    }
}
