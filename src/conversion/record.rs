//! Output record type

use serde::{Deserialize, Serialize};

/// One ICAO designator with its RECAT category label.
///
/// Serializes as `{"icao": ..., "categoryLabel": ...}` in that field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecatDefinition {
    pub icao: String,
    #[serde(rename = "categoryLabel")]
    pub category_label: String,
}

impl RecatDefinition {
    pub fn new(icao: impl Into<String>, category_label: impl Into<String>) -> Self {
        Self {
            icao: icao.into(),
            category_label: category_label.into(),
        }
    }
}

/// Strip every occurrence of `prefix` from a raw category label and trim it.
///
/// `"CAT-C"` becomes `"C"`; `" CAT-B "` becomes `"B"`. Removal repeats until
/// no occurrence is left, so the result never contains `prefix`.
pub fn relabel(raw: &str, prefix: &str) -> String {
    let mut label = raw.to_string();
    if !prefix.is_empty() {
        // Repeated, unlike a single replace pass: "CACAT-T-A" must not leave "CAT-A".
        while label.contains(prefix) {
            label = label.replace(prefix, "");
        }
    }
    label.trim().to_string()
}
