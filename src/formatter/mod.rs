//! JSON formatting of RECAT definitions

use crate::conversion::{ConversionConfig, ConversionResult, RecatDefinition};
use crate::error::{ConversionError, ConversionErrorKind};
use std::io::Write;

/// Renders definition lists as a JSON array
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn from_config(config: &ConversionConfig) -> Self {
        Self::new(config.pretty)
    }

    /// Format definitions as a JSON array string (no trailing newline)
    pub fn format(&self, definitions: &[RecatDefinition]) -> ConversionResult<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(definitions)
        } else {
            serde_json::to_string(definitions)
        };

        rendered.map_err(|e| {
            ConversionError::conversion(ConversionErrorKind::serialization(e.to_string()))
        })
    }

    /// Write definitions to `writer` followed by a single newline
    pub fn write_to<W: Write>(
        &self,
        definitions: &[RecatDefinition],
        mut writer: W,
    ) -> ConversionResult<()> {
        let content = self.format(definitions)?;
        writeln!(writer, "{}", content)
            .and_then(|_| writer.flush())
            .map_err(|e| {
                ConversionError::conversion(ConversionErrorKind::io(
                    format!("Failed to write output: {}", e),
                    None,
                ))
            })
    }
}

/// Format definitions with the given configuration
pub fn format_definitions(
    definitions: &[RecatDefinition],
    config: &ConversionConfig,
) -> ConversionResult<String> {
    JsonFormatter::from_config(config).format(definitions)
}
