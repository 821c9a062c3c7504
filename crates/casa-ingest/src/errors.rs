//! Ingestion error taxonomy

use thiserror::Error;

use casa_client::ClientError;
use casa_transform::TransformError;
use casa_vendors::VendorError;

/// Unified failure taxonomy for one ingestion call.
///
/// A tagged union rather than a class hierarchy: callers match on the
/// stage that failed and read the same payload fields the stage-level
/// errors carry (status, issues, attempt count, last failure).
#[derive(Error, Debug)]
pub enum IngestError {
    /// Vendor registry lookup failed.
    #[error(transparent)]
    Vendor(#[from] VendorError),

    /// Input or output schema validation failed.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Delivery failed, before or after exhausting the retry budget.
    #[error(transparent)]
    Client(#[from] ClientError),
}
