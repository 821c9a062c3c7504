//! Composition of the two validation boundaries around the mapper.

use serde_json::Value;
use tracing::debug;

use crate::errors::TransformError;
use crate::mapper::{self, FieldMapping};
use crate::schema::Schema;

/// Reshapes a vendor-native listing record into the canonical payload.
///
/// Input validation runs before mapping so malformed sources are
/// rejected before any mapping work; output validation runs after
/// mapping so a misconfigured path expression surfaces as an
/// [`TransformError::OutputValidation`] instead of a bad payload
/// reaching the CRM. That ordering is the contract, not an
/// implementation detail.
#[derive(Debug, Clone)]
pub struct Transformer {
    input_schema: Schema,
    output_schema: Schema,
    mapping: FieldMapping,
}

impl Transformer {
    pub fn new(input_schema: Schema, output_schema: Schema, mapping: FieldMapping) -> Self {
        Self {
            input_schema,
            output_schema,
            mapping,
        }
    }

    /// Validate, map, and re-validate one listing record.
    pub fn transform(&self, input: &Value) -> Result<Value, TransformError> {
        let validated = self
            .input_schema
            .validate(input)
            .map_err(|issues| TransformError::InputValidation { issues })?;

        let mapped = mapper::map(&validated, &self.mapping);

        let output = self
            .output_schema
            .validate(&mapped)
            .map_err(|issues| TransformError::OutputValidation { issues })?;

        debug!(
            fields = output.as_object().map_or(0, |o| o.len()),
            "transformed listing record"
        );
        Ok(output)
    }
}
