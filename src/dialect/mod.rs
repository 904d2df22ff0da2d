//! Dialect module
//!
//! Static configuration for the supported SQL dialects: column types for each
//! semantic kind, statement syntax, identifier quoting and literal rendering.

mod config;
mod types;

pub use config::DialectConfig;
pub use types::{Dialect, SqlKind};

#[cfg(test)]
mod tests;
