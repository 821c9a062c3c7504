//! Vendor configuration lookup.

use std::collections::HashMap;

use casa_transform::{FieldMapping, Schema};

use crate::configs;
use crate::errors::VendorError;

/// One vendor's complete configuration bundle: how its records map
/// onto the canonical shape, and the schemas guarding both sides of
/// that mapping.
#[derive(Debug, Clone)]
pub struct VendorConfig {
    pub mapping: FieldMapping,
    pub input_schema: Schema,
    pub output_schema: Schema,
}

/// Lookup contract for vendor configuration.
///
/// The ingestion core depends on this single synchronous lookup; how
/// bundles are populated (static table, file, remote config) is the
/// implementer's concern. Registries are read-only at call time.
pub trait VendorRegistry: Send + Sync {
    /// Resolve the bundle registered under `vendor`.
    fn resolve(&self, vendor: &str) -> Result<&VendorConfig, VendorError>;
}

/// Registry backed by an in-memory table of bundles.
#[derive(Debug, Clone)]
pub struct StaticVendorRegistry {
    configs: HashMap<String, VendorConfig>,
}

impl StaticVendorRegistry {
    /// Empty registry; populate with [`StaticVendorRegistry::register`].
    pub fn new() -> Self {
        Self {
            configs: HashMap::new(),
        }
    }

    /// Register `config` under `vendor`, replacing any previous bundle.
    pub fn register(&mut self, vendor: impl Into<String>, config: VendorConfig) {
        self.configs.insert(vendor.into(), config);
    }
}

impl Default for StaticVendorRegistry {
    /// Registry carrying every built-in bundle: `default`,
    /// `sample_vendor`, and `other_vendor`.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register("default", configs::default::config());
        registry.register("sample_vendor", configs::sample_vendor::config());
        registry.register("other_vendor", configs::other_vendor::config());
        registry
    }
}

impl VendorRegistry for StaticVendorRegistry {
    fn resolve(&self, vendor: &str) -> Result<&VendorConfig, VendorError> {
        self.configs.get(vendor).ok_or_else(|| VendorError::UnknownVendor {
            vendor: vendor.to_string(),
        })
    }
}
