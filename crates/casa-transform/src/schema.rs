//! Declarative schema descriptors for listing documents.
//!
//! A [`Schema`] declares, per field, a kind, optionality, and an
//! optional numeric range. The same descriptor type guards both
//! validation boundaries: vendor-native input shapes (possibly nested)
//! and the flat canonical output shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::errors::Issue;

/// Constraint kinds a field can declare.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// UTF-8 text.
    Text,
    /// Whole number. Fractionless floats are coerced to integers.
    Integer,
    /// Any JSON number.
    Number,
    /// Nested object validated against its own schema.
    Object(Schema),
}

impl FieldKind {
    fn expected(&self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Object(_) => "object",
        }
    }
}

/// Declarative constraints for a single field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    kind: FieldKind,
    required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<f64>,
}

impl FieldSpec {
    fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            required: true,
            min: None,
            max: None,
        }
    }

    /// Required text field.
    pub fn text() -> Self {
        Self::new(FieldKind::Text)
    }

    /// Required whole-number field.
    pub fn integer() -> Self {
        Self::new(FieldKind::Integer)
    }

    /// Required numeric field.
    pub fn number() -> Self {
        Self::new(FieldKind::Number)
    }

    /// Required nested object field.
    pub fn object(schema: Schema) -> Self {
        Self::new(FieldKind::Object(schema))
    }

    /// Mark the field optional. A missing key passes; an explicit
    /// `null` still fails the kind check.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Lower bound for numeric kinds, inclusive.
    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Upper bound for numeric kinds, inclusive.
    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// A declarative document schema: field name → constraints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    fields: BTreeMap<String, FieldSpec>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field constraint, replacing any previous spec for `name`.
    #[must_use]
    pub fn field(mut self, name: &str, spec: FieldSpec) -> Self {
        self.fields.insert(name.to_string(), spec);
        self
    }

    /// Validate `document` against this schema.
    ///
    /// Validation is total: the result is either the fully coerced
    /// document or the complete list of violations, never a partial
    /// report. Integer-kind fields are normalized to JSON integers in
    /// the coerced output; unknown keys pass through untouched.
    pub fn validate(&self, document: &Value) -> Result<Value, Vec<Issue>> {
        let mut issues = Vec::new();
        let coerced = self.check_object(document, "", &mut issues);
        if issues.is_empty() {
            Ok(coerced.unwrap_or(Value::Null))
        } else {
            Err(issues)
        }
    }

    fn check_object(&self, value: &Value, prefix: &str, issues: &mut Vec<Issue>) -> Option<Value> {
        let object = match value {
            Value::Object(object) => object,
            other => {
                let path = if prefix.is_empty() { "$" } else { prefix };
                issues.push(Issue::new(
                    path,
                    format!("Expected object, received {}", json_type(other)),
                ));
                return None;
            }
        };

        let mut coerced: Map<String, Value> = object.clone();
        for (name, spec) in &self.fields {
            let path = join_path(prefix, name);
            match object.get(name) {
                None => {
                    if spec.required {
                        issues.push(Issue::new(path, "Required"));
                    }
                }
                Some(value) => {
                    if let Some(checked) = check_field(spec, value, &path, issues) {
                        coerced.insert(name.clone(), checked);
                    }
                }
            }
        }
        Some(Value::Object(coerced))
    }
}

fn check_field(spec: &FieldSpec, value: &Value, path: &str, issues: &mut Vec<Issue>) -> Option<Value> {
    let checked = match (&spec.kind, value) {
        (FieldKind::Text, Value::String(_)) => Some(value.clone()),
        (FieldKind::Integer, Value::Number(n)) => match as_integer(n) {
            Some(i) => Some(Value::Number(Number::from(i))),
            None => {
                issues.push(Issue::new(path, "Expected integer, received float"));
                None
            }
        },
        (FieldKind::Number, Value::Number(_)) => Some(value.clone()),
        (FieldKind::Object(schema), value) => return schema.check_object(value, path, issues),
        (kind, other) => {
            issues.push(Issue::new(
                path,
                format!("Expected {}, received {}", kind.expected(), json_type(other)),
            ));
            None
        }
    };

    if let Some(Value::Number(n)) = &checked {
        if let Some(v) = n.as_f64() {
            if let Some(min) = spec.min {
                if v < min {
                    issues.push(Issue::new(
                        path,
                        format!("Number must be greater than or equal to {min}"),
                    ));
                }
            }
            if let Some(max) = spec.max {
                if v > max {
                    issues.push(Issue::new(
                        path,
                        format!("Number must be less than or equal to {max}"),
                    ));
                }
            }
        }
    }
    checked
}

/// Whole-number view of a JSON number, tolerating fractionless floats.
fn as_integer(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
