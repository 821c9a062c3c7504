//! Bundle for the sample vendor's nested record shape.
//!
//! Address, price, and detail fields arrive grouped under nested
//! objects; the mapping flattens them into the canonical payload.

use casa_transform::{FieldSpec, Schema};

use crate::registry::VendorConfig;

use super::{mapping, property_schema};

fn input_schema() -> Schema {
    Schema::new()
        .field("mlsName", FieldSpec::text())
        .field("mlsId", FieldSpec::integer())
        .field(
            "address",
            FieldSpec::object(
                Schema::new()
                    .field("street", FieldSpec::text())
                    .field("city", FieldSpec::text())
                    .field("state", FieldSpec::text())
                    .field("zipCode", FieldSpec::integer().min(10_000.0).max(99_999.0)),
            ),
        )
        .field(
            "price",
            FieldSpec::object(Schema::new().field("listPrice", FieldSpec::number())),
        )
        .field("listingDate", FieldSpec::integer())
        .field(
            "details",
            FieldSpec::object(
                Schema::new()
                    .field("bedrooms", FieldSpec::integer().optional())
                    .field("fullBaths", FieldSpec::integer().optional())
                    .field("halfBaths", FieldSpec::integer().optional())
                    .field("size", FieldSpec::integer().optional()),
            ),
        )
}

pub fn config() -> VendorConfig {
    VendorConfig {
        mapping: mapping([
            ("mls_name", "$.mlsName"),
            ("mls_id", "$.mlsId"),
            ("street_address", "$.address.street"),
            ("city", "$.address.city"),
            ("state", "$.address.state"),
            ("zip_code", "$.address.zipCode"),
            ("list_price", "$.price.listPrice"),
            ("list_date", "$.listingDate"),
            ("bedrooms", "$.details.bedrooms"),
            ("full_baths", "$.details.fullBaths"),
            ("half_baths", "$.details.halfBaths"),
            ("size", "$.details.size"),
        ]),
        input_schema: input_schema(),
        output_schema: property_schema(),
    }
}

#[cfg(test)]
mod tests {
    use casa_transform::{TransformError, Transformer};
    use serde_json::json;

    use super::*;

    fn transformer() -> Transformer {
        let config = config();
        Transformer::new(config.input_schema, config.output_schema, config.mapping)
    }

    #[test]
    fn flattens_nested_records_into_canonical_payload() {
        let record = json!({
            "mlsName": "Sample MLS",
            "mlsId": 789012,
            "address": {
                "street": "789 Tertiary Rd",
                "city": "Samplecity",
                "state": "TX",
                "zipCode": 75001
            },
            "price": {"listPrice": 550000},
            "listingDate": 1725143600,
            "details": {"bedrooms": 4, "fullBaths": 3, "halfBaths": 1, "size": 2200}
        });

        let payload = transformer().transform(&record).unwrap();
        assert_eq!(
            payload,
            json!({
                "mls_name": "Sample MLS",
                "mls_id": 789012,
                "street_address": "789 Tertiary Rd",
                "city": "Samplecity",
                "state": "TX",
                "zip_code": 75001,
                "list_price": 550000,
                "list_date": 1725143600,
                "bedrooms": 4,
                "full_baths": 3,
                "half_baths": 1,
                "size": 2200
            })
        );
    }

    #[test]
    fn omitted_optional_details_stay_omitted() {
        let record = json!({
            "mlsName": "Sample MLS",
            "mlsId": 789012,
            "address": {
                "street": "789 Tertiary Rd",
                "city": "Samplecity",
                "state": "TX",
                "zipCode": 75001
            },
            "price": {"listPrice": 550000},
            "listingDate": 1725143600,
            "details": {}
        });

        let payload = transformer().transform(&record).unwrap();
        let object = payload.as_object().unwrap();
        assert!(!object.contains_key("bedrooms"));
        assert!(!object.contains_key("size"));
    }

    #[test]
    fn malformed_nested_input_reports_dotted_paths() {
        let record = json!({
            "mlsName": "Sample MLS",
            "mlsId": 789012,
            "address": {
                "street": "789 Tertiary Rd",
                "city": "Samplecity",
                "state": "TX",
                "zipCode": "75001"
            },
            "price": {},
            "listingDate": 1725143600,
            "details": {}
        });

        let error = transformer().transform(&record).unwrap_err();
        match error {
            TransformError::InputValidation { issues } => {
                assert!(issues
                    .iter()
                    .any(|i| i.path == "address.zipCode"
                        && i.message == "Expected integer, received string"));
                assert!(issues
                    .iter()
                    .any(|i| i.path == "price.listPrice" && i.message == "Required"));
            }
            other => panic!("expected input validation error, got {other:?}"),
        }
    }
}
