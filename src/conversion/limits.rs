use crate::conversion::config::ConversionConfig;
use crate::conversion::ConversionResult;
use crate::error::{ConversionError, ConversionErrorKind};
use crate::parser::CsvSource;

/// Check the source size before attempting to read it.
/// Sources of unknown size (stdin) are not checked.
pub fn check_source_size_before_read(
    source: &CsvSource,
    config: &ConversionConfig,
) -> ConversionResult<()> {
    if let Some(size) = source.estimated_size() {
        if size > config.memory_limit as u64 {
            return Err(ConversionError::conversion(
                ConversionErrorKind::CsvTooLarge {
                    size: size as usize,
                    limit: config.memory_limit,
                },
            ));
        }
    }

    Ok(())
}
