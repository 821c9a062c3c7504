//! # casa-vendors
//!
//! Vendor configuration bundles for the ingestion pipeline.
//!
//! This crate provides functionality for:
//! - The [`VendorRegistry`] lookup contract the ingestion core depends on
//! - A static registry over the built-in vendor bundles
//! - The built-in bundles themselves: `default`, `sample_vendor`,
//!   `other_vendor`

pub mod configs;
mod errors;
mod registry;

pub use errors::VendorError;
pub use registry::{StaticVendorRegistry, VendorConfig, VendorRegistry};
