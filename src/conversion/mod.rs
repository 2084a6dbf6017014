//! RECAT CSV to JSON conversion module
//!
//! This module contains the core conversion logic, configuration, and statistics.

pub mod config;
pub mod engine;
pub mod limits;
pub mod record;
pub mod stats;

pub use config::ConversionConfig;

pub use engine::{convert_csv_string, ConversionEngine, RecatData};
pub use record::{relabel, RecatDefinition};
pub use stats::{ConversionStatistics, SkipReason};

pub use crate::error::ConversionResult;
