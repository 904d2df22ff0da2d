// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # json2sql
//!
//! Infer a relational schema from JSON records and generate the DDL and
//! batched multi-row INSERT statements for five SQL dialects.
//!
//! ## Features
//!
//! - **Type Inference**: integers, decimals, booleans, dates, timestamps, strings and JSON columns
//! - **Five Dialects**: MySQL, PostgreSQL, SQLite, Oracle and SQL Server
//! - **Case Styles**: camelCase, PascalCase, snake_case, kebab-case and UPPER_SNAKE_CASE column names
//! - **Batched Inserts**: configurable records per INSERT statement
//! - **Sessions**: rename columns or switch dialect without re-parsing the input
//!
//! ## Quick Start
//!
//! ```rust
//! use json2sql::{convert, ConvertOptions, Dialect};
//!
//! let options = ConvertOptions::new().with_dialect(Dialect::Postgresql);
//! let result = convert(r#"[{"id": 1, "name": "Ann"}]"#, &options)?;
//!
//! assert!(result.sql.starts_with("CREATE TABLE IF NOT EXISTS \"DATA\""));
//! assert_eq!(result.insert_batches, 1);
//! # Ok::<(), json2sql::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                      ConversionSession                        │
//! │  convert(json)   apply_case_style(style)   switch_dialect(d)  │
//! └───────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴──────┬──────────────┬──────────┐
//! │    Schema    │       Dialect       │     Case     │   SQL    │
//! ├──────────────┼─────────────────────┼──────────────┼──────────┤
//! │ Type infer   │ Column types        │ camelCase    │ CREATE   │
//! │ Widening     │ Quoting             │ snake_case   │ INSERT   │
//! │ Primary key  │ Literals            │ kebab-case   │ Batching │
//! └──────────────┴─────────────────────┴──────────────┴──────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Field name case conversion
pub mod case;

/// SQL dialect definitions
pub mod dialect;

/// Schema inference from JSON records
pub mod schema;

/// DDL and DML generation
pub mod sql;

/// Conversion sessions
pub mod session;

/// Conversion options
pub mod config;

/// Mapping tables and SQL destinations
pub mod output;

/// Command-line interface and HTTP server
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use case::CaseStyle;
pub use config::{ConvertOptions, OptionOverrides};
pub use dialect::{Dialect, DialectConfig, SqlKind};
pub use schema::{CollisionPolicy, FieldMapper, FieldMapping, JsonType, SamplingMode};
pub use session::{convert, parse_records, ConversionResult, ConversionSession};
pub use sql::SqlGenerator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
