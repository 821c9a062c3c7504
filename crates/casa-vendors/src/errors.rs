//! Vendor registry error types

use thiserror::Error;

/// Vendor registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VendorError {
    /// No configuration bundle is registered under the requested key.
    /// Absence is terminal; there is no fallback bundle.
    #[error("Error loading config for vendor '{vendor}'")]
    UnknownVendor { vendor: String },
}
