//! Bundle for a vendor sending flat camelCase records.

use casa_transform::{FieldSpec, Schema};

use crate::registry::VendorConfig;

use super::{mapping, property_schema};

fn input_schema() -> Schema {
    Schema::new()
        .field("mlsName", FieldSpec::text())
        .field("mlsId", FieldSpec::integer())
        .field("streetAddress", FieldSpec::text())
        .field("city", FieldSpec::text())
        .field("state", FieldSpec::text())
        .field("zipCode", FieldSpec::integer().min(10_000.0).max(99_999.0))
        .field("listPrice", FieldSpec::number())
        .field("listDate", FieldSpec::integer())
        .field("bedrooms", FieldSpec::integer().optional())
        .field("fullBaths", FieldSpec::integer().optional())
        .field("halfBaths", FieldSpec::integer().optional())
        .field("size", FieldSpec::integer().optional())
}

pub fn config() -> VendorConfig {
    VendorConfig {
        mapping: mapping([
            ("mls_name", "$.mlsName"),
            ("mls_id", "$.mlsId"),
            ("street_address", "$.streetAddress"),
            ("city", "$.city"),
            ("state", "$.state"),
            ("zip_code", "$.zipCode"),
            ("list_price", "$.listPrice"),
            ("list_date", "$.listDate"),
            ("bedrooms", "$.bedrooms"),
            ("full_baths", "$.fullBaths"),
            ("half_baths", "$.halfBaths"),
            ("size", "$.size"),
        ]),
        input_schema: input_schema(),
        output_schema: property_schema(),
    }
}
