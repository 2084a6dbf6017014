//! Category lookup over a generated definition list

use crate::conversion::RecatDefinition;
use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};
use std::io::Read;
use std::path::Path;

/// Ordered list of RECAT definitions queried by ICAO designator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecatTable {
    definitions: Vec<RecatDefinition>,
}

impl RecatTable {
    pub fn new(definitions: Vec<RecatDefinition>) -> Self {
        Self { definitions }
    }

    /// Parse a JSON array of definitions
    pub fn from_json_str(json: &str) -> ConversionResult<Self> {
        let definitions: Vec<RecatDefinition> = serde_json::from_str(json).map_err(|e| {
            ConversionError::parse(
                format!("Invalid RECAT definition JSON: {}", e),
                Some((e.line() as u64, e.column() as u64)),
            )
        })?;
        Ok(Self::new(definitions))
    }

    /// Load a JSON array of definitions from a file
    pub fn from_json_file(path: &Path) -> ConversionResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConversionError::conversion(ConversionErrorKind::io(
                e.to_string(),
                Some(path.to_path_buf()),
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Load a JSON array of definitions from a reader
    pub fn from_reader<R: Read>(mut reader: R) -> ConversionResult<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content).map_err(|e| {
            ConversionError::conversion(ConversionErrorKind::io(e.to_string(), None))
        })?;
        Self::from_json_str(&content)
    }

    /// First definition with exactly this ICAO designator
    pub fn find(&self, icao: &str) -> Option<&RecatDefinition> {
        self.definitions.iter().find(|def| def.icao == icao)
    }

    /// Category label for `icao`, or an empty string when unknown
    pub fn category_for(&self, icao: &str) -> &str {
        self.find(icao)
            .map(|def| def.category_label.as_str())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl From<Vec<RecatDefinition>> for RecatTable {
    fn from(definitions: Vec<RecatDefinition>) -> Self {
        Self::new(definitions)
    }
}
