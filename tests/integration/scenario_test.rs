//! Behavioural tests for the conversion rules

use pretty_assertions::assert_eq;
use recatconv::conversion::{ConversionEngine, RecatData};
use recatconv::{convert_csv, ConversionConfig, RecatDefinition};
use std::collections::HashSet;

fn convert(csv: &str) -> RecatData {
    ConversionEngine::new(ConversionConfig::default())
        .convert_string(csv)
        .unwrap()
}

/// Rows covering every skip rule and a few relabel shapes
const MIXED: &str = "\
icao,recatCat
A320,CAT-C
A320,CAT-B
,CAT-D
B738,
A388,CAT-A
   ,CAT-A
B744
C172,CAT-F
E190, CAT-E
B744,CAT-B
C172,CAT-E
";

#[test]
fn test_documented_scenario() {
    let csv = "icao,recatCat\nA320,CAT-C\nA320,CAT-B\n,CAT-D\nB738,  \n";
    assert_eq!(
        convert_csv(csv).unwrap(),
        r#"[{"icao":"A320","categoryLabel":"C"}]"#
    );
}

#[test]
fn test_header_only_is_empty_array() {
    assert_eq!(convert_csv("icao,recatCat\n").unwrap(), "[]");
}

#[test]
fn test_empty_input_is_empty_array() {
    assert_eq!(convert_csv("").unwrap(), "[]");
}

#[test]
fn test_first_occurrence_wins_in_input_order() {
    let result = convert(MIXED);
    assert_eq!(
        result.definitions,
        vec![
            RecatDefinition::new("A320", "C"),
            RecatDefinition::new("A388", "A"),
            RecatDefinition::new("C172", "F"),
            RecatDefinition::new("E190", "E"),
            RecatDefinition::new("B744", "B"),
        ]
    );
}

#[test]
fn test_skip_counts() {
    let stats = convert(MIXED).statistics;
    assert_eq!(stats.rows_read, 11);
    assert_eq!(stats.skipped_missing, 1);
    assert_eq!(stats.skipped_empty, 3);
    assert_eq!(stats.skipped_duplicate, 2);
    assert_eq!(stats.rows_emitted, 5);
}

#[test]
fn test_output_bounds() {
    let result = convert(MIXED);
    let data_rows = MIXED.lines().count() - 1;
    assert!(result.len() <= data_rows);

    let distinct: HashSet<&str> = result.definitions.iter().map(|d| d.icao.as_str()).collect();
    assert_eq!(distinct.len(), result.len());
}

#[test]
fn test_labels_never_keep_prefix() {
    let csv = "icao,recatCat\nA1,CAT-A\nA2,CAT-CAT-B\nA3,CACAT-T-C\nA4,xCAT-y\nA5,cat-D\n";
    let result = convert(csv);

    for def in &result.definitions {
        assert!(!def.category_label.contains("CAT-"), "{:?}", def);
    }
    assert_eq!(result.definitions[3].category_label, "xy");
    // Matching is case sensitive
    assert_eq!(result.definitions[4].category_label, "cat-D");
}

#[test]
fn test_output_round_trips_with_exact_keys() {
    let json = convert_csv(MIXED).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    for entry in parsed.as_array().unwrap() {
        let object = entry.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["icao", "categoryLabel"]);
        assert!(object.values().all(|v| v.is_string()));
    }
}

#[test]
fn test_quoted_fields() {
    let csv = "icao,recatCat,notes\n\"A359\",\"CAT-B\",\"long, haul\"\n";
    let result = convert(csv);
    assert_eq!(result.definitions, vec![RecatDefinition::new("A359", "B")]);
}

#[test]
fn test_raw_value_dedup_keeps_whitespace_variants() {
    let csv = "icao,recatCat\nA320,CAT-C\nA320 ,CAT-D\nA320,CAT-B\n";
    let result = convert(csv);

    assert_eq!(
        result.definitions,
        vec![
            RecatDefinition::new("A320", "C"),
            RecatDefinition::new("A320", "D"),
        ]
    );
    assert_eq!(result.validation.unwrap().warning_count(), 1);
}

#[test]
fn test_prefix_only_label_is_kept_empty() {
    let csv = "icao,recatCat\nA320,CAT-C\nZZZZ,CAT-\nYYYY, CAT-CAT- \n";
    assert_eq!(
        convert_csv(csv).unwrap(),
        r#"[{"icao":"A320","categoryLabel":"C"},{"icao":"ZZZZ","categoryLabel":""},{"icao":"YYYY","categoryLabel":""}]"#
    );

    let result = convert(csv);
    let report = result.validation.unwrap();
    assert!(report.is_valid());
    assert_eq!(report.warning_count(), 2);
}
