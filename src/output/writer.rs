//! SQL text writer

use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where generated SQL goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlDestination {
    Stdout,
    File(PathBuf),
}

impl SqlDestination {
    /// File destination, or stdout when no path (or `-`) is given
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => SqlDestination::File(p.to_path_buf()),
            _ => SqlDestination::Stdout,
        }
    }
}

/// Write SQL text, creating parent directories for file destinations
///
/// Returns the number of bytes written.
pub fn write_sql(sql: &str, destination: &SqlDestination) -> Result<usize> {
    match destination {
        SqlDestination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(sql.as_bytes())?;
            stdout.flush()?;
        }
        SqlDestination::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, sql)?;
            tracing::info!(path = %path.display(), bytes = sql.len(), "Wrote SQL");
        }
    }
    Ok(sql.len())
}
