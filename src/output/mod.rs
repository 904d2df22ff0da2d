//! Output module
//!
//! Handles everything that leaves the library as text.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Rendering the field mapping as a plain-text table
//! - Rendering the JSON → SQL type reference for every dialect
//! - Writing generated SQL to a file or stdout

mod table;
mod writer;

pub use table::{format_mapping_table, format_type_reference};
pub use writer::{write_sql, SqlDestination};
