//! Output validation for converted RECAT definitions
//!
//! Checks that a produced definition list is well formed and reports ICAO
//! values that collide once trimmed. Deduplication compares raw cell values,
//! so `"A320"` and `" A320"` both survive conversion and end up as identical
//! output entries; these are reported as warnings and left in place.

use crate::conversion::RecatDefinition;
use std::collections::HashMap;
use tracing::warn;

/// Output validator
pub struct OutputValidator {
    category_prefix: String,
}

impl OutputValidator {
    pub fn new(category_prefix: impl Into<String>) -> Self {
        Self {
            category_prefix: category_prefix.into(),
        }
    }

    /// Validate a definition list
    pub fn validate(&self, definitions: &[RecatDefinition]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut first_seen: HashMap<&str, usize> = HashMap::new();

        for (index, def) in definitions.iter().enumerate() {
            if def.icao.is_empty() {
                report.add_error(
                    index,
                    IssueKind::EmptyField,
                    format!("record {} has an empty ICAO designator", index),
                );
            }

            // A raw label made only of the prefix relabels to "".
            if def.category_label.is_empty() {
                report.add_warning(
                    index,
                    IssueKind::EmptyLabel,
                    format!("record {} ({}) has an empty category label", index, def.icao),
                );
            }

            if !self.category_prefix.is_empty() && def.category_label.contains(&self.category_prefix)
            {
                report.add_error(
                    index,
                    IssueKind::PrefixRemaining,
                    format!(
                        "record {} ({}) label '{}' still contains '{}'",
                        index, def.icao, def.category_label, self.category_prefix
                    ),
                );
            }

            match first_seen.get(def.icao.as_str()) {
                Some(&first) => {
                    warn!(
                        icao = %def.icao,
                        first,
                        duplicate = index,
                        "ICAO designator appears more than once after trimming"
                    );
                    report.add_warning(
                        index,
                        IssueKind::TrimmedDuplicate,
                        format!(
                            "record {} repeats ICAO '{}' first emitted at record {}",
                            index, def.icao, first
                        ),
                    );
                }
                None => {
                    first_seen.insert(def.icao.as_str(), index);
                }
            }
        }

        report
    }
}

/// Validation report
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// List of validation issues
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error to the report
    pub fn add_error(&mut self, index: usize, kind: IssueKind, message: String) {
        self.issues.push(ValidationIssue {
            severity: IssueSeverity::Error,
            kind,
            index,
            message,
        });
    }

    /// Add a warning to the report
    pub fn add_warning(&mut self, index: usize, kind: IssueKind, message: String) {
        self.issues.push(ValidationIssue {
            severity: IssueSeverity::Warning,
            kind,
            index,
            message,
        });
    }

    /// Check if validation passed (no errors)
    pub fn is_valid(&self) -> bool {
        !self
            .issues
            .iter()
            .any(|i| i.severity == IssueSeverity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Warning)
            .count()
    }

    /// Messages of every error-level issue, joined for display
    pub fn error_summary(&self) -> String {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error)
            .map(|i| i.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validation issue
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub kind: IssueKind,
    /// Position of the offending record in the output
    pub index: usize,
    pub message: String,
}

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    EmptyField,
    EmptyLabel,
    PrefixRemaining,
    TrimmedDuplicate,
}
