//! Command-line interface module

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::conversion::config::{
    DEFAULT_CATEGORY_COLUMN, DEFAULT_CATEGORY_PREFIX, DEFAULT_ICAO_COLUMN,
};
use crate::conversion::{ConversionConfig, ConversionResult};
use crate::error::{ConversionError, ConversionErrorKind};
use crate::parser::{CsvSource, DEFAULT_INPUT_PATH};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "recatconv")]
#[command(about = "Convert a RECAT wake category CSV table to a JSON array")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Input CSV file (default: recat_raw.csv)
    #[arg()]
    pub input: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read CSV from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Pretty-print the JSON array
    #[arg(long)]
    pub pretty: bool,

    /// Header of the ICAO designator column
    #[arg(long, default_value = DEFAULT_ICAO_COLUMN)]
    pub icao_column: String,

    /// Header of the RECAT category column
    #[arg(long, default_value = DEFAULT_CATEGORY_COLUMN)]
    pub category_column: String,

    /// Prefix removed from every category label
    #[arg(long, default_value = DEFAULT_CATEGORY_PREFIX)]
    pub category_prefix: String,

    /// Maximum input file size (e.g., 100MB, default: 100MB)
    #[arg(long)]
    pub memory_limit: Option<String>,

    /// Only validate the converted table, don't emit JSON
    #[arg(long)]
    pub validate_only: bool,

    /// Output conversion statistics on stderr
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Look up the category label of an ICAO designator in a generated JSON table
    Lookup {
        /// ICAO aircraft type designator
        icao: String,
        /// Generated JSON table (default: read from stdin)
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let memory_limit = parse_memory_limit(&args.memory_limit)?;

        let config = ConversionConfig::new()
            .with_icao_column(args.icao_column.as_str())
            .with_category_column(args.category_column.as_str())
            .with_category_prefix(args.category_prefix.as_str())
            .with_pretty(args.pretty)
            .with_memory_limit(memory_limit);

        // Validate configuration
        config
            .validate()
            .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;

        Ok(config)
    }

    /// Resolve the CSV source; stdin wins over a path
    pub fn source(&self) -> CsvSource {
        if self.args.stdin {
            CsvSource::Stdin
        } else {
            CsvSource::File(
                self.args
                    .input
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH)),
            )
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    pub fn is_validate_only(&self) -> bool {
        self.args.validate_only
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        if let Some(output) = &self.args.output {
            format!("'{}'", output.display())
        } else {
            "standard output".to_string()
        }
    }
}

/// Install the stderr log subscriber.
///
/// `--verbose` selects debug, `--quiet` selects error, otherwise `RUST_LOG`
/// applies with a `warn` fallback.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parse memory limit string (e.g., "100MB", "1GB", "500KB")
fn parse_memory_limit(limit: &Option<String>) -> ConversionResult<usize> {
    let invalid = |limit_str: &str| {
        ConversionError::conversion(ConversionErrorKind::configuration(format!(
            "Invalid memory limit: {}",
            limit_str
        )))
    };

    match limit {
        None => Ok(ConversionConfig::default().memory_limit),
        Some(limit_str) => {
            let limit_str = limit_str.trim().to_uppercase();

            let (number, multiplier) = if let Some(size) = limit_str.strip_suffix("GB") {
                (size, 1024.0 * 1024.0 * 1024.0)
            } else if let Some(size) = limit_str.strip_suffix("MB") {
                (size, 1024.0 * 1024.0)
            } else if let Some(size) = limit_str.strip_suffix("KB") {
                (size, 1024.0)
            } else if let Some(size) = limit_str.strip_suffix('B') {
                (size, 1.0)
            } else {
                // Assume bytes
                (limit_str.as_str(), 1.0)
            };

            let value = number.trim().parse::<f64>().map_err(|_| invalid(limit_str.as_str()))?;
            if value < 0.0 {
                return Err(invalid(limit_str.as_str()));
            }
            Ok((value * multiplier) as usize)
        }
    }
}
