//! # casa-transform
//!
//! Vendor-configurable transformation pipeline for property listings.
//!
//! This crate provides functionality for:
//! - Extracting values from nested listing records by path expression
//! - Mapping vendor-native records into the canonical CRM shape
//! - Validating documents against declarative schema descriptors
//! - Composing both validation boundaries around the field mapper

mod errors;
mod mapper;
mod path;
mod schema;
mod transformer;

pub use errors::{Issue, TransformError};
pub use mapper::{map, FieldMapping};
pub use path::extract;
pub use schema::{FieldKind, FieldSpec, Schema};
pub use transformer::Transformer;
