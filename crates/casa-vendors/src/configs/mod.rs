//! Built-in vendor configuration bundles.
//!
//! Each bundle pairs a field mapping with the input schema describing
//! the vendor's native record shape. All bundles share the canonical
//! property schema as their output schema.

use casa_transform::{FieldMapping, FieldSpec, Schema};

pub mod default;
pub mod other_vendor;
pub mod sample_vendor;

/// Schema for the canonical CRM property payload. Guards the output
/// side of every bundle, and both sides of the pass-through bundle.
pub fn property_schema() -> Schema {
    Schema::new()
        .field("mls_name", FieldSpec::text())
        .field("mls_id", FieldSpec::integer())
        .field("street_address", FieldSpec::text())
        .field("city", FieldSpec::text())
        .field("state", FieldSpec::text())
        .field("zip_code", FieldSpec::integer().min(10_000.0).max(99_999.0))
        .field("list_price", FieldSpec::number())
        .field("list_date", FieldSpec::integer())
        .field("bedrooms", FieldSpec::integer().optional())
        .field("full_baths", FieldSpec::integer().optional())
        .field("half_baths", FieldSpec::integer().optional())
        .field("size", FieldSpec::integer().optional())
}

fn mapping(pairs: [(&str, &str); 12]) -> FieldMapping {
    pairs
        .into_iter()
        .map(|(field, path)| (field.to_string(), path.to_string()))
        .collect()
}
