//! SQL generation module
//!
//! Emits one CREATE TABLE statement followed by multi-row INSERT statements,
//! one per fixed-size batch of records.

mod generator;

pub use generator::{batch_count, SqlGenerator};
