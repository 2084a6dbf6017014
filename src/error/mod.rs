//! Error types and handling infrastructure for RECAT CSV to JSON conversion

use std::fmt;
use std::path::PathBuf;

/// Core error types for the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("CSV too large: {size} bytes (limit: {limit} bytes)")]
    CsvTooLarge { size: usize, limit: usize },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("JSON serialization error: {message}")]
    Serialization { message: String },

    #[error("Output validation failed: {message}")]
    Validation { message: String },
}

impl ConversionErrorKind {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    pub fn serialization(message: String) -> Self {
        Self::Serialization { message }
    }

    pub fn validation(message: String) -> Self {
        Self::Validation { message }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("{kind}")]
    Conversion { kind: ConversionErrorKind },
}

impl ConversionError {
    pub fn parse(message: String, location: Option<(u64, u64)>) -> Self {
        Self::ParseError(ParseError::new(message, location))
    }

    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => {
                if let Some((line, record)) = err.location {
                    format!(
                        "CSV parse error at line {}, record {}: {}",
                        line, record, err.message
                    )
                } else {
                    format!("CSV parse error: {}", err.message)
                }
            }
            Self::Conversion { kind } => match kind {
                ConversionErrorKind::Io {
                    message,
                    path: Some(path),
                } => format!("{}: {}", path.display(), message),
                ConversionErrorKind::CsvTooLarge { size, limit } => {
                    format!(
                        "CSV file too large: {} bytes (limit: {} bytes)",
                        size, limit
                    )
                }
                _ => self.to_string(),
            },
        }
    }
}

/// CSV parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    /// Line and record index reported by the CSV reader
    pub location: Option<(u64, u64)>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(u64, u64)>) -> Self {
        Self { message, location }
    }

    /// Build from a `csv` reader error, keeping its position when present
    pub fn from_csv(error: &csv::Error) -> Self {
        let location = error
            .position()
            .map(|pos| (pos.line(), pos.record()));
        Self::new(error.to_string(), location)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, record)) = self.location {
            write!(f, " at line {}, record {}", line, record)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
