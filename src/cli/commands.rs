//! CLI commands and argument parsing

use crate::case::CaseStyle;
use crate::config::OptionOverrides;
use crate::dialect::Dialect;
use crate::schema::{CollisionPolicy, SamplingMode};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Infer a SQL schema from JSON records and generate CREATE TABLE / INSERT statements
#[derive(Parser, Debug)]
#[command(name = "json2sql")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Options file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a JSON array of records to SQL
    Convert {
        /// Input JSON file (omit or use `-` for stdin)
        input: Option<PathBuf>,

        #[command(flatten)]
        options: ConvertArgs,

        /// Write SQL to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the field mapping table to stderr
        #[arg(long)]
        show_mapping: bool,

        /// Output format
        #[arg(short, long, default_value = "sql")]
        format: OutputFormat,
    },

    /// List supported dialects
    Dialects,

    /// Show the JSON to SQL type reference for every dialect
    Types,

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// Conversion flags, each overriding the options file
#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Target SQL dialect
    #[arg(short, long)]
    pub dialect: Option<Dialect>,

    /// Case style for field names
    #[arg(long = "case")]
    pub case_style: Option<CaseStyle>,

    /// Table name
    #[arg(short, long)]
    pub table: Option<String>,

    /// Records per INSERT statement
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Records inspected for column types
    #[arg(long)]
    pub sampling: Option<SamplingMode>,

    /// Policy for keys that convert to the same column name
    #[arg(long)]
    pub collision: Option<CollisionPolicy>,
}

impl From<&ConvertArgs> for OptionOverrides {
    fn from(args: &ConvertArgs) -> Self {
        OptionOverrides {
            dialect: args.dialect,
            case_style: args.case_style,
            table_name: args.table.clone(),
            batch_size: args.batch_size,
            sampling: args.sampling,
            collision: args.collision,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// SQL text
    Sql,
    /// Conversion result as JSON (sql, mapping, batch count)
    Json,
}
