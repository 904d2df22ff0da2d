//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, ConvertArgs, OutputFormat};
use crate::config::{ConvertOptions, OptionOverrides};
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::output::{format_mapping_table, format_type_reference, write_sql, SqlDestination};
use crate::session::{ConversionResult, ConversionSession};
use std::fs;
use std::io::Read;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Convert {
                input,
                options,
                output,
                show_mapping,
                format,
            } => self.convert(
                input.as_deref(),
                options,
                output.as_deref(),
                *show_mapping,
                *format,
            ),
            Commands::Dialects => {
                self.dialects();
                Ok(())
            }
            Commands::Types => {
                print!("{}", format_type_reference());
                Ok(())
            }
            Commands::Serve { port } => {
                let config = crate::cli::ServerConfig {
                    defaults: self.load_options(&ConvertArgs::default())?,
                };
                crate::cli::serve(config, *port).await
            }
        }
    }

    /// Load options from the options file (if any) and apply CLI overrides
    fn load_options(&self, args: &ConvertArgs) -> Result<ConvertOptions> {
        let base = match &self.cli.config {
            Some(path) => ConvertOptions::from_file(path)?,
            None => ConvertOptions::default(),
        };
        let options = base.with_overrides(OptionOverrides::from(args));
        options.validate()?;
        Ok(options)
    }

    /// Convert a JSON file or stdin to SQL
    fn convert(
        &self,
        input: Option<&Path>,
        args: &ConvertArgs,
        output: Option<&Path>,
        show_mapping: bool,
        format: OutputFormat,
    ) -> Result<()> {
        let options = self.load_options(args)?;
        let json = read_input(input)?;

        let dialect = options.dialect;
        let mut session = ConversionSession::new(options);
        let result = session.convert(&json)?;

        tracing::info!(
            "{} records | {} batches | {}",
            result.record_count,
            result.insert_batches,
            dialect.as_str().to_uppercase()
        );

        if show_mapping {
            eprint!("{}", format_mapping_table(&result.mapping, dialect));
        }

        let text = render(result, format)?;
        write_sql(&text, &SqlDestination::from_arg(output))?;
        Ok(())
    }

    /// List supported dialects
    fn dialects(&self) {
        for dialect in Dialect::ALL {
            let config = dialect.config();
            let separator = if config.uses_batch_separator {
                "GO batches"
            } else {
                "; terminated"
            };
            println!(
                "{:<12} {} ... | quote {} | {}",
                dialect.as_str(),
                config.create_prefix,
                config.quote,
                separator
            );
        }
    }
}

/// Read JSON text from a file, or stdin when no path (or `-`) is given
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).map_err(|e| Error::read_input(path, e))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Render a conversion result in the requested format
fn render(result: &ConversionResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Sql => Ok(result.sql.clone()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(result)?;
            json.push('\n');
            Ok(json)
        }
    }
}
