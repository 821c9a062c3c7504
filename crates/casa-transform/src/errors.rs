//! Transformation pipeline error types

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field-level schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Dotted path to the offending field, e.g. `address.zipCode`.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Transformation errors
#[derive(Error, Debug)]
pub enum TransformError {
    /// The raw input failed the vendor's input schema.
    #[error("Error parsing input schema: {}", summarize(.issues))]
    InputValidation { issues: Vec<Issue> },

    /// The mapped document failed the canonical output schema. This
    /// indicates a mapping misconfiguration rather than bad input.
    #[error("Error validating output schema: {}", summarize(.issues))]
    OutputValidation { issues: Vec<Issue> },
}

impl TransformError {
    /// The complete list of violations, regardless of which boundary
    /// rejected the document.
    pub fn issues(&self) -> &[Issue] {
        match self {
            Self::InputValidation { issues } | Self::OutputValidation { issues } => issues,
        }
    }
}

fn summarize(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
