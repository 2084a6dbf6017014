//! Statistics collected during a conversion pass

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Why a row produced no output record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A required column is not present in the row
    MissingField,
    /// A required column is empty or whitespace only
    EmptyField,
    /// The raw ICAO value was already emitted
    Duplicate,
}

/// Row counters and timing for a single conversion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionStatistics {
    /// Data rows read (header excluded)
    pub rows_read: usize,
    /// Output records produced
    pub rows_emitted: usize,
    pub skipped_missing: usize,
    pub skipped_empty: usize,
    pub skipped_duplicate: usize,
    /// Input size in bytes
    pub input_size_bytes: u64,
    /// Output size in bytes
    pub output_size_bytes: u64,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

impl ConversionStatistics {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a row that produced an output record
    pub fn record_emitted(&mut self) {
        self.rows_read += 1;
        self.rows_emitted += 1;
    }

    /// Count a row that was dropped
    pub fn record_skipped(&mut self, reason: SkipReason) {
        self.rows_read += 1;
        match reason {
            SkipReason::MissingField => self.skipped_missing += 1,
            SkipReason::EmptyField => self.skipped_empty += 1,
            SkipReason::Duplicate => self.skipped_duplicate += 1,
        }
    }

    /// Total rows dropped for any reason
    pub fn rows_skipped(&self) -> usize {
        self.skipped_missing + self.skipped_empty + self.skipped_duplicate
    }

    pub fn set_processing_time(&mut self, elapsed: Duration) {
        self.processing_time_ms = elapsed.as_millis() as u64;
    }
}

impl fmt::Display for ConversionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conversion Statistics:")?;
        writeln!(f, "Rows read: {}", self.rows_read)?;
        writeln!(f, "Records emitted: {}", self.rows_emitted)?;
        writeln!(
            f,
            "Rows skipped: {} (missing field: {}, empty field: {}, duplicate: {})",
            self.rows_skipped(),
            self.skipped_missing,
            self.skipped_empty,
            self.skipped_duplicate
        )?;
        writeln!(f, "Input size: {} bytes", self.input_size_bytes)?;
        writeln!(f, "Output size: {} bytes", self.output_size_bytes)?;
        write!(f, "Processing time: {}ms", self.processing_time_ms)
    }
}
