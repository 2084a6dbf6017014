use assert_matches::assert_matches;
use recatconv::conversion::{ConversionConfig, ConversionEngine};
use recatconv::error::{ConversionError, ConversionErrorKind};
use recatconv::parser::CsvSource;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_file_to_json_success() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "icao,recatCat\nA388,CAT-A\nB77W,CAT-B\n").unwrap();

    let engine = ConversionEngine::new(ConversionConfig::default());

    let source = CsvSource::File(tmp.path().to_path_buf());
    let result = engine.convert_from_source(&source).unwrap();
    assert_eq!(
        result.content,
        r#"[{"icao":"A388","categoryLabel":"A"},{"icao":"B77W","categoryLabel":"B"}]"#
    );
}

#[test]
fn test_missing_file() {
    let engine = ConversionEngine::new(ConversionConfig::default());
    let source = CsvSource::File(PathBuf::from("/nonexistent/dir/recat_raw.csv"));

    let result = engine.convert_from_source(&source);
    assert_matches!(
        result,
        Err(ConversionError::Conversion {
            kind: ConversionErrorKind::Io { path: Some(_), .. },
            ..
        })
    );
}

#[test]
fn test_file_invalid_utf8() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(b"icao,recatCat\nA320,CAT-\xffC\n").unwrap();

    let engine = ConversionEngine::new(ConversionConfig::default());
    let source = CsvSource::File(tmp.path().to_path_buf());

    let result = engine.convert_from_source(&source);
    assert_matches!(result, Err(ConversionError::ParseError(_)));
}

#[test]
fn test_file_over_memory_limit() {
    let mut tmp = NamedTempFile::new().unwrap();
    writeln!(tmp, "icao,recatCat").unwrap();
    for i in 0..200 {
        writeln!(tmp, "T{:03},CAT-C", i).unwrap();
    }

    let config = ConversionConfig::default().with_memory_limit(1024);
    let engine = ConversionEngine::new(config);
    let source = CsvSource::File(tmp.path().to_path_buf());

    let result = engine.convert_from_source(&source);
    assert_matches!(
        result,
        Err(ConversionError::Conversion {
            kind: ConversionErrorKind::CsvTooLarge { limit: 1024, .. },
            ..
        })
    );
}
