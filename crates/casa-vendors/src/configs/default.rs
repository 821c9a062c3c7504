//! Pass-through bundle for sources already in the canonical shape.
//!
//! Each field maps to itself and the canonical property schema guards
//! both validation boundaries.

use crate::registry::VendorConfig;

use super::{mapping, property_schema};

pub fn config() -> VendorConfig {
    VendorConfig {
        mapping: mapping([
            ("mls_name", "$.mls_name"),
            ("mls_id", "$.mls_id"),
            ("street_address", "$.street_address"),
            ("city", "$.city"),
            ("state", "$.state"),
            ("zip_code", "$.zip_code"),
            ("list_price", "$.list_price"),
            ("list_date", "$.list_date"),
            ("bedrooms", "$.bedrooms"),
            ("full_baths", "$.full_baths"),
            ("half_baths", "$.half_baths"),
            ("size", "$.size"),
        ]),
        input_schema: property_schema(),
        output_schema: property_schema(),
    }
}
