//! Field mapping of vendor-native records onto the canonical shape.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::path::extract;

/// Mapping from each canonical field name to the path expression that
/// locates it in the vendor-native record. Immutable and shared
/// read-only across ingestion calls.
pub type FieldMapping = BTreeMap<String, String>;

/// Map `document` into a new object per `mapping`.
///
/// Every mapped field is extracted from `document` and assigned under
/// its canonical name. Absent source values are omitted from the
/// output rather than reported; validation and coercion are the
/// schema validator's concern, not the mapper's.
pub fn map(document: &Value, mapping: &FieldMapping) -> Value {
    let mut output = Map::new();
    for (field, path) in mapping {
        if let Some(value) = extract(document, path) {
            output.insert(field.clone(), value.clone());
        }
    }
    Value::Object(output)
}
