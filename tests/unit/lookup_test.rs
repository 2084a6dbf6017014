use recatconv::{convert_csv, RecatTable};
use std::io::Write;
use tempfile::NamedTempFile;

const TABLE: &str = "icao,recatCat\nA388,CAT-A\nB744,CAT-B\nA320,CAT-D\nA320,CAT-C\n";

#[test]
fn test_lookup_on_generated_table() {
    let json = convert_csv(TABLE).unwrap();
    let table = RecatTable::from_json_str(&json).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.category_for("A388"), "A");
    assert_eq!(table.category_for("A320"), "D");
    assert_eq!(table.category_for("ZZZZ"), "");
}

#[test]
fn test_lookup_from_file() {
    let json = convert_csv(TABLE).unwrap();
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(json.as_bytes()).unwrap();

    let table = RecatTable::from_json_file(tmp.path()).unwrap();
    assert_eq!(table.find("B744").map(|d| d.category_label.as_str()), Some("B"));
}

#[test]
fn test_lookup_rejects_non_array() {
    assert!(RecatTable::from_json_str(r#"{"icao":"A320"}"#).is_err());
    assert!(RecatTable::from_reader("not json".as_bytes()).is_err());
}
