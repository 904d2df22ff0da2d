//! Dialect and semantic column kind enums

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported SQL dialect
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Mysql,
    #[serde(alias = "postgres")]
    #[value(alias = "postgres")]
    Postgresql,
    Sqlite,
    Oracle,
    #[serde(alias = "mssql")]
    #[value(alias = "mssql")]
    Sqlserver,
}

impl Dialect {
    /// All dialects in display order
    pub const ALL: [Dialect; 5] = [
        Dialect::Mysql,
        Dialect::Postgresql,
        Dialect::Sqlite,
        Dialect::Oracle,
        Dialect::Sqlserver,
    ];

    /// Dialect identifier
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Mysql => "mysql",
            Dialect::Postgresql => "postgresql",
            Dialect::Sqlite => "sqlite",
            Dialect::Oracle => "oracle",
            Dialect::Sqlserver => "sqlserver",
        }
    }

    /// Static configuration for this dialect
    pub fn config(self) -> &'static super::DialectConfig {
        super::DialectConfig::get(self)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Dialect::Mysql),
            "postgresql" | "postgres" => Ok(Dialect::Postgresql),
            "sqlite" => Ok(Dialect::Sqlite),
            "oracle" => Ok(Dialect::Oracle),
            "sqlserver" | "mssql" => Ok(Dialect::Sqlserver),
            _ => Err(Error::UnknownDialect(s.to_string())),
        }
    }
}

/// Semantic column kind, resolved to a concrete type string per dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlKind {
    Integer,
    Decimal,
    Boolean,
    Date,
    Timestamp,
    /// Bounded variable-length string
    Varchar,
    /// Unbounded long text, also the fallback for values with no better type
    Text,
    Json,
}

impl SqlKind {
    /// All kinds in reference-table order
    pub const ALL: [SqlKind; 8] = [
        SqlKind::Integer,
        SqlKind::Decimal,
        SqlKind::Boolean,
        SqlKind::Date,
        SqlKind::Timestamp,
        SqlKind::Varchar,
        SqlKind::Text,
        SqlKind::Json,
    ];

    /// Merge two kinds, returning the more general one
    pub fn merge_with(self, other: SqlKind) -> SqlKind {
        match (self, other) {
            (a, b) if a == b => a,
            (SqlKind::Integer, SqlKind::Decimal) | (SqlKind::Decimal, SqlKind::Integer) => {
                SqlKind::Decimal
            }
            (SqlKind::Date, SqlKind::Timestamp) | (SqlKind::Timestamp, SqlKind::Date) => {
                SqlKind::Timestamp
            }
            // Incompatible kinds - fall back to long text
            _ => SqlKind::Text,
        }
    }
}

impl fmt::Display for SqlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SqlKind::Integer => "integer",
            SqlKind::Decimal => "decimal",
            SqlKind::Boolean => "boolean",
            SqlKind::Date => "date",
            SqlKind::Timestamp => "timestamp",
            SqlKind::Varchar => "varchar",
            SqlKind::Text => "text",
            SqlKind::Json => "json",
        };
        f.write_str(name)
    }
}
