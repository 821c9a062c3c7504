//! Orchestration of vendor lookup, transformation, and delivery.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info};

use casa_client::{CreatePropertyResponse, CrmClient, RetryPolicy};
use casa_transform::Transformer;
use casa_vendors::{StaticVendorRegistry, VendorRegistry};

use crate::errors::IngestError;

/// Registry key used when the caller does not select a vendor.
const DEFAULT_VENDOR: &str = "default";

/// Options accepted by [`IngestService::create`].
pub struct CreateOptions<'a> {
    /// Vendor-native listing record.
    pub input: Value,
    /// Registry key selecting the vendor bundle. Defaults to
    /// `"default"`.
    pub vendor: Option<&'a str>,
    /// CRM customer the property belongs to.
    pub customer_id: i64,
    /// Overrides [`RetryPolicy::default`] when set.
    pub retry_policy: Option<RetryPolicy>,
    /// When set, any stage failure is handed here and `create`
    /// returns `Ok(None)` instead of propagating. This is the sole
    /// suppression mechanism.
    pub error_handler: Option<&'a (dyn Fn(&IngestError) + Send + Sync)>,
}

impl<'a> CreateOptions<'a> {
    /// Options with the default vendor, default retry policy, and no
    /// error handler.
    pub fn new(input: Value, customer_id: i64) -> Self {
        Self {
            input,
            vendor: None,
            customer_id,
            retry_policy: None,
            error_handler: None,
        }
    }
}

/// Entry point for ingesting one vendor-native listing record.
///
/// Holds the vendor registry and the CRM client; both are read-only
/// after construction, so one service can serve concurrent calls
/// without locking.
pub struct IngestService {
    registry: Arc<dyn VendorRegistry>,
    client: CrmClient,
}

impl IngestService {
    /// Service over the built-in vendor bundles and the production
    /// CRM endpoint.
    pub fn new() -> Result<Self, IngestError> {
        Ok(Self::with_registry(
            Arc::new(StaticVendorRegistry::default()),
            CrmClient::new()?,
        ))
    }

    /// Service with an injected registry and client.
    pub fn with_registry(registry: Arc<dyn VendorRegistry>, client: CrmClient) -> Self {
        Self { registry, client }
    }

    /// Resolve the vendor bundle, transform `input`, and deliver the
    /// canonical payload, retrying transient CRM failures.
    ///
    /// Without an error handler every failure propagates as
    /// [`IngestError`]; with one, failures are routed to the handler
    /// and the call resolves to `Ok(None)`.
    pub async fn create(
        &self,
        options: CreateOptions<'_>,
    ) -> Result<Option<CreatePropertyResponse>, IngestError> {
        let CreateOptions {
            input,
            vendor,
            customer_id,
            retry_policy,
            error_handler,
        } = options;
        let vendor = vendor.unwrap_or(DEFAULT_VENDOR);
        let policy = retry_policy.unwrap_or_default();

        match self.create_inner(&input, vendor, customer_id, &policy).await {
            Ok(response) => {
                info!(vendor, property_id = response.id, "listing ingested");
                Ok(Some(response))
            }
            Err(e) => match error_handler {
                Some(handler) => {
                    error!(vendor, error = %e, "ingestion failed, routing to error handler");
                    handler(&e);
                    Ok(None)
                }
                None => Err(e),
            },
        }
    }

    async fn create_inner(
        &self,
        input: &Value,
        vendor: &str,
        customer_id: i64,
        policy: &RetryPolicy,
    ) -> Result<CreatePropertyResponse, IngestError> {
        let config = self.registry.resolve(vendor)?;
        let transformer = Transformer::new(
            config.input_schema.clone(),
            config.output_schema.clone(),
            config.mapping.clone(),
        );
        let payload = transformer.transform(input)?;
        let response = self
            .client
            .create_property(customer_id, &payload, policy)
            .await?;
        Ok(response)
    }
}
