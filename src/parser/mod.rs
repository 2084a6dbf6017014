//! CSV input sources and header-keyed row access

use crate::error::{ConversionError, ConversionErrorKind, ConversionResult, ParseError, ParseResult};
use csv::{ReaderBuilder, StringRecord};
use std::io::{Cursor, Read};
use std::path::PathBuf;

/// Default input file name used when no path is given
pub const DEFAULT_INPUT_PATH: &str = "recat_raw.csv";

/// Source for CSV input
#[derive(Debug, Clone)]
pub enum CsvSource {
    /// In-memory CSV text
    String(String),
    /// CSV file path
    File(PathBuf),
    /// Standard input stream
    Stdin,
}

impl CsvSource {
    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            CsvSource::String(_) => "string input".to_string(),
            CsvSource::File(path) => format!("file: {}", path.display()),
            CsvSource::Stdin => "standard input".to_string(),
        }
    }

    /// Get the size of the source in bytes (if known before reading)
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            CsvSource::String(s) => Some(s.len() as u64),
            CsvSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            CsvSource::Stdin => None,
        }
    }

    /// Open the source and read its header row.
    ///
    /// The underlying file handle is owned by the returned reader and is
    /// released when it is dropped.
    pub fn open(&self) -> ConversionResult<CsvRows> {
        let input: Box<dyn Read> = match self {
            CsvSource::String(content) => Box::new(Cursor::new(content.clone().into_bytes())),
            CsvSource::File(path) => {
                let file = std::fs::File::open(path).map_err(|e| {
                    ConversionError::conversion(ConversionErrorKind::io(
                        e.to_string(),
                        Some(path.clone()),
                    ))
                })?;
                Box::new(file)
            }
            CsvSource::Stdin => Box::new(std::io::stdin()),
        };

        CsvRows::new(input).map_err(ConversionError::ParseError)
    }
}

/// Row-by-row reader over a headed CSV stream
pub struct CsvRows {
    reader: csv::Reader<Box<dyn Read>>,
    headers: StringRecord,
    record: StringRecord,
}

impl CsvRows {
    fn new(input: Box<dyn Read>) -> ParseResult<Self> {
        // Rows may be shorter or longer than the header; missing cells are
        // treated as absent fields.
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let headers = reader
            .headers()
            .map_err(|e| ParseError::from_csv(&e))?
            .clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }

    /// Header names in file order
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Read the next data row, or `None` at end of input
    pub fn next_row(&mut self) -> ParseResult<Option<CsvRow<'_>>> {
        let more = self
            .reader
            .read_record(&mut self.record)
            .map_err(|e| ParseError::from_csv(&e))?;

        if !more {
            return Ok(None);
        }

        Ok(Some(CsvRow {
            headers: &self.headers,
            record: &self.record,
        }))
    }

    /// Total bytes consumed from the input so far
    pub fn bytes_read(&self) -> u64 {
        self.reader.position().byte()
    }
}

/// A single data row viewed through the header names
#[derive(Debug, Clone, Copy)]
pub struct CsvRow<'a> {
    headers: &'a StringRecord,
    record: &'a StringRecord,
}

impl<'a> CsvRow<'a> {
    /// Value of the named column.
    ///
    /// Returns `None` when no header carries that name or the row ends
    /// before the column. With repeated header names the last one wins.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let index = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, header)| *header == column)
            .map(|(index, _)| index)
            .last()?;
        self.record.get(index)
    }

    /// Line number of this row in the input (1-based)
    pub fn line(&self) -> Option<u64> {
        self.record.position().map(|p| p.line())
    }
}
