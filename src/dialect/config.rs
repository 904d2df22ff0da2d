//! Static dialect configuration table

use super::types::{Dialect, SqlKind};
use serde::Serialize;

/// Column types and statement syntax for one dialect
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialectConfig {
    /// Dialect this entry describes
    pub dialect: Dialect,
    pub integer: &'static str,
    pub decimal: &'static str,
    pub boolean: &'static str,
    pub date: &'static str,
    pub timestamp: &'static str,
    pub varchar: &'static str,
    pub text: &'static str,
    pub json: &'static str,
    /// `CREATE TABLE` or `CREATE TABLE IF NOT EXISTS`
    pub create_prefix: &'static str,
    pub insert_prefix: &'static str,
    /// Statement terminator, or the batch separator keyword
    pub insert_suffix: &'static str,
    /// Identifier quote character
    pub quote: char,
    /// `insert_suffix` is a batch separator on its own line (`GO`)
    pub uses_batch_separator: bool,
    /// Literals for `true` and `false`
    pub boolean_literals: (&'static str, &'static str),
    /// Backslash is an escape character inside string literals
    pub backslash_escapes: bool,
    /// Prefix for string literals (`N` for national character strings)
    pub string_prefix: &'static str,
    /// Batches use `INSERT ALL ... SELECT 1 FROM DUAL` instead of a multi-row `VALUES` list
    pub insert_all: bool,
}

static DIALECTS: [DialectConfig; 5] = [
    DialectConfig {
        dialect: Dialect::Mysql,
        integer: "INT",
        decimal: "DECIMAL(15,4)",
        boolean: "TINYINT(1)",
        date: "DATE",
        timestamp: "DATETIME(6)",
        varchar: "VARCHAR(4000)",
        text: "TEXT",
        json: "JSON",
        create_prefix: "CREATE TABLE IF NOT EXISTS",
        insert_prefix: "INSERT INTO",
        insert_suffix: ";",
        quote: '`',
        uses_batch_separator: false,
        boolean_literals: ("1", "0"),
        backslash_escapes: true,
        string_prefix: "",
        insert_all: false,
    },
    DialectConfig {
        dialect: Dialect::Postgresql,
        integer: "INTEGER",
        decimal: "NUMERIC(15,4)",
        boolean: "BOOLEAN",
        date: "DATE",
        timestamp: "TIMESTAMP(6)",
        varchar: "VARCHAR(4000)",
        text: "TEXT",
        json: "JSONB",
        create_prefix: "CREATE TABLE IF NOT EXISTS",
        insert_prefix: "INSERT INTO",
        insert_suffix: ";",
        quote: '"',
        uses_batch_separator: false,
        boolean_literals: ("TRUE", "FALSE"),
        backslash_escapes: false,
        string_prefix: "",
        insert_all: false,
    },
    DialectConfig {
        dialect: Dialect::Sqlite,
        integer: "INTEGER",
        decimal: "REAL",
        boolean: "INTEGER",
        date: "DATE",
        timestamp: "TEXT",
        varchar: "TEXT",
        text: "TEXT",
        json: "TEXT",
        create_prefix: "CREATE TABLE IF NOT EXISTS",
        insert_prefix: "INSERT INTO",
        insert_suffix: ";",
        quote: '"',
        uses_batch_separator: false,
        boolean_literals: ("1", "0"),
        backslash_escapes: false,
        string_prefix: "",
        insert_all: false,
    },
    DialectConfig {
        dialect: Dialect::Oracle,
        integer: "NUMBER(10)",
        decimal: "NUMBER(15,4)",
        boolean: "NUMBER(1)",
        date: "DATE",
        timestamp: "TIMESTAMP(6)",
        varchar: "VARCHAR2(4000)",
        text: "CLOB",
        json: "JSON",
        create_prefix: "CREATE TABLE",
        insert_prefix: "INSERT INTO",
        insert_suffix: ";",
        quote: '"',
        uses_batch_separator: false,
        boolean_literals: ("1", "0"),
        backslash_escapes: false,
        string_prefix: "",
        insert_all: true,
    },
    DialectConfig {
        dialect: Dialect::Sqlserver,
        integer: "INT",
        decimal: "DECIMAL(15,4)",
        boolean: "BIT",
        date: "DATE",
        timestamp: "DATETIME2(6)",
        varchar: "NVARCHAR(4000)",
        text: "NVARCHAR(MAX)",
        json: "NVARCHAR(MAX)",
        create_prefix: "CREATE TABLE",
        insert_prefix: "INSERT INTO",
        insert_suffix: "GO",
        quote: '"',
        uses_batch_separator: true,
        boolean_literals: ("1", "0"),
        backslash_escapes: false,
        string_prefix: "N",
        insert_all: false,
    },
];

impl DialectConfig {
    /// Look up the configuration for a dialect
    pub fn get(dialect: Dialect) -> &'static DialectConfig {
        match dialect {
            Dialect::Mysql => &DIALECTS[0],
            Dialect::Postgresql => &DIALECTS[1],
            Dialect::Sqlite => &DIALECTS[2],
            Dialect::Oracle => &DIALECTS[3],
            Dialect::Sqlserver => &DIALECTS[4],
        }
    }

    /// All dialect configurations
    pub fn all() -> &'static [DialectConfig] {
        &DIALECTS
    }

    /// Concrete column type for a semantic kind
    pub fn column_type(&self, kind: SqlKind) -> &'static str {
        match kind {
            SqlKind::Integer => self.integer,
            SqlKind::Decimal => self.decimal,
            SqlKind::Boolean => self.boolean,
            SqlKind::Date => self.date,
            SqlKind::Timestamp => self.timestamp,
            SqlKind::Varchar => self.varchar,
            SqlKind::Text => self.text,
            SqlKind::Json => self.json,
        }
    }

    /// Quote an identifier, doubling any embedded quote characters
    pub fn quote_identifier(&self, name: &str) -> String {
        let q = self.quote;
        let mut out = String::with_capacity(name.len() + 2);
        out.push(q);
        for c in name.chars() {
            if c == q {
                out.push(q);
            }
            out.push(c);
        }
        out.push(q);
        out
    }

    /// Render a string literal with this dialect's escaping rules
    pub fn string_literal(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 3);
        out.push_str(self.string_prefix);
        out.push('\'');
        for c in value.chars() {
            match c {
                '\'' => out.push_str("''"),
                '\\' if self.backslash_escapes => out.push_str("\\\\"),
                _ => out.push(c),
            }
        }
        out.push('\'');
        out
    }

    /// Render a boolean literal
    pub fn boolean_literal(&self, value: bool) -> &'static str {
        if value {
            self.boolean_literals.0
        } else {
            self.boolean_literals.1
        }
    }

    /// Append the statement terminator (or batch separator) to a statement body
    pub fn terminate(&self, statement: &str) -> String {
        if self.uses_batch_separator {
            format!("{statement}\n{}", self.insert_suffix)
        } else {
            format!("{statement}{}", self.insert_suffix)
        }
    }
}
