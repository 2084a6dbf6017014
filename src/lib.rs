//! RECAT wake category converter
//!
//! Converts a CSV table of ICAO aircraft type designators and their RECAT
//! category labels into a deduplicated JSON array of
//! `{"icao": ..., "categoryLabel": ...}` records.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod lookup;
pub mod parser;
pub mod validation;

// Re-export commonly used types
pub use conversion::{ConversionConfig, ConversionEngine, RecatData, RecatDefinition};
pub use error::{ConversionError, ConversionErrorKind, ParseError};
pub use formatter::JsonFormatter;
pub use lookup::RecatTable;
pub use parser::CsvSource;

/// Convert CSV text to a JSON array with default configuration
pub fn convert_csv(csv: &str) -> Result<String, ConversionError> {
    let config = ConversionConfig::default();
    convert_csv_with_config(csv, &config)
}

/// Convert CSV text to a JSON array with custom configuration
pub fn convert_csv_with_config(
    csv: &str,
    config: &ConversionConfig,
) -> Result<String, ConversionError> {
    let result = conversion::convert_csv_string(csv, config)?;
    Ok(result.content)
}
