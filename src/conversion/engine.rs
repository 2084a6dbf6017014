//! Core conversion engine for RECAT CSV to JSON transformation

use crate::conversion::config::ConversionConfig;
use crate::conversion::limits;
use crate::conversion::record::{relabel, RecatDefinition};
use crate::conversion::stats::{ConversionStatistics, SkipReason};
use crate::conversion::ConversionResult;
use crate::error::{ConversionError, ConversionErrorKind};
use crate::formatter::JsonFormatter;
use crate::parser::{CsvRow, CsvSource};
use crate::validation::{OutputValidator, ValidationReport};
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, info, trace};

/// Core conversion result
#[derive(Debug, Clone)]
pub struct RecatData {
    /// Rendered JSON array
    pub content: String,
    /// Output records in first-seen order
    pub definitions: Vec<RecatDefinition>,
    pub statistics: ConversionStatistics,
    /// Present when output validation ran
    pub validation: Option<ValidationReport>,
}

impl RecatData {
    /// Number of output records
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Result of classifying one input row
#[derive(Debug, Clone, PartialEq)]
enum RowOutcome {
    Emit(RecatDefinition),
    Skip(SkipReason),
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Convert CSV from a source to JSON
    pub fn convert_from_source(&self, source: &CsvSource) -> ConversionResult<RecatData> {
        self.config
            .validate()
            .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;

        limits::check_source_size_before_read(source, &self.config)?;

        let start_time = Instant::now();
        debug!(source = %source.description(), "reading RECAT table");

        let (definitions, mut statistics) = self.extract_definitions(source)?;

        let validation = self.check_output(&definitions)?;

        let content = JsonFormatter::from_config(&self.config).format(&definitions)?;

        statistics.output_size_bytes = content.len() as u64;
        statistics.set_processing_time(start_time.elapsed());

        info!(
            rows = statistics.rows_read,
            emitted = statistics.rows_emitted,
            skipped = statistics.rows_skipped(),
            "converted RECAT table"
        );

        Ok(RecatData {
            content,
            definitions,
            statistics,
            validation,
        })
    }

    /// Run output validation when enabled; error-level issues abort
    fn check_output(
        &self,
        definitions: &[RecatDefinition],
    ) -> ConversionResult<Option<ValidationReport>> {
        if !self.config.validate_output {
            return Ok(None);
        }

        let report =
            OutputValidator::new(self.config.category_prefix.as_str()).validate(definitions);
        if !report.is_valid() {
            return Err(ConversionError::conversion(ConversionErrorKind::validation(
                report.error_summary(),
            )));
        }
        Ok(Some(report))
    }

    /// Convert CSV text to JSON
    pub fn convert_string(&self, csv_str: &str) -> ConversionResult<RecatData> {
        let source = CsvSource::String(csv_str.to_string());
        self.convert_from_source(&source)
    }

    /// Read every row and apply the filter, dedup and relabel rules.
    ///
    /// The seen set and output list live only for this call.
    fn extract_definitions(
        &self,
        source: &CsvSource,
    ) -> ConversionResult<(Vec<RecatDefinition>, ConversionStatistics)> {
        let mut rows = source.open()?;
        let mut seen: HashSet<String> = HashSet::new();
        let mut definitions = Vec::new();
        let mut statistics = ConversionStatistics::new();

        while let Some(row) = rows.next_row().map_err(ConversionError::ParseError)? {
            match self.classify_row(&row, &mut seen) {
                RowOutcome::Emit(def) => {
                    trace!(icao = %def.icao, label = %def.category_label, "emit");
                    statistics.record_emitted();
                    definitions.push(def);
                }
                RowOutcome::Skip(reason) => {
                    debug!(line = ?row.line(), ?reason, "skipping row");
                    statistics.record_skipped(reason);
                }
            }
        }

        statistics.input_size_bytes = rows.bytes_read();
        Ok((definitions, statistics))
    }

    fn classify_row(&self, row: &CsvRow<'_>, seen: &mut HashSet<String>) -> RowOutcome {
        let (icao, category) = match (
            row.get(&self.config.icao_column),
            row.get(&self.config.category_column),
        ) {
            (Some(icao), Some(category)) => (icao, category),
            _ => return RowOutcome::Skip(SkipReason::MissingField),
        };

        if icao.trim().is_empty() || category.trim().is_empty() {
            return RowOutcome::Skip(SkipReason::EmptyField);
        }

        // Dedup keys on the raw cell, the emitted value is trimmed.
        if !seen.insert(icao.to_string()) {
            return RowOutcome::Skip(SkipReason::Duplicate);
        }

        RowOutcome::Emit(RecatDefinition::new(
            icao.trim(),
            relabel(category, &self.config.category_prefix),
        ))
    }
}

/// Convert CSV text with the given configuration
pub fn convert_csv_string(csv_str: &str, config: &ConversionConfig) -> ConversionResult<RecatData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_string(csv_str)
}
