//! CLI module
//!
//! Command-line interface for converting JSON to SQL.
//!
//! # Commands
//!
//! - `convert` - Convert a JSON file (or stdin) to SQL
//! - `dialects` - List supported dialects
//! - `types` - Show the JSON → SQL type reference
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, ConvertArgs, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve, ServerConfig};
