//! Configuration options for RECAT CSV to JSON conversion

/// Column holding the ICAO aircraft type designator
pub const DEFAULT_ICAO_COLUMN: &str = "icao";
/// Column holding the raw RECAT category label
pub const DEFAULT_CATEGORY_COLUMN: &str = "recatCat";
/// Prefix stripped from raw category labels
pub const DEFAULT_CATEGORY_PREFIX: &str = "CAT-";

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Header name of the ICAO designator column
    pub icao_column: String,
    /// Header name of the raw category column
    pub category_column: String,
    /// Substring removed from every category label
    pub category_prefix: String,
    /// Pretty-print output (vs compact)
    pub pretty: bool,
    /// Validate output records after conversion
    pub validate_output: bool,
    /// Maximum input size in bytes for file sources
    pub memory_limit: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            icao_column: DEFAULT_ICAO_COLUMN.to_string(),
            category_column: DEFAULT_CATEGORY_COLUMN.to_string(),
            category_prefix: DEFAULT_CATEGORY_PREFIX.to_string(),
            pretty: false,
            validate_output: true,
            memory_limit: 100 * 1024 * 1024, // 100MB
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ICAO column name
    pub fn with_icao_column(mut self, column: impl Into<String>) -> Self {
        self.icao_column = column.into();
        self
    }

    /// Set the category column name
    pub fn with_category_column(mut self, column: impl Into<String>) -> Self {
        self.category_column = column.into();
        self
    }

    /// Set the prefix stripped from category labels
    pub fn with_category_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.category_prefix = prefix.into();
        self
    }

    /// Enable/disable pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Enable/disable output validation
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_output = validate;
        self
    }

    /// Set memory limit
    pub fn with_memory_limit(mut self, limit_bytes: usize) -> Self {
        self.memory_limit = limit_bytes;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.icao_column.is_empty() || self.category_column.is_empty() {
            return Err("Column names must not be empty".to_string());
        }

        if self.icao_column == self.category_column {
            return Err(format!(
                "ICAO and category columns must differ (both '{}')",
                self.icao_column
            ));
        }

        if self.memory_limit < 1024 {
            return Err("Memory limit must be at least 1KB".to_string());
        }

        Ok(())
    }
}
