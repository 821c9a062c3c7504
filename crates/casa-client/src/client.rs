//! Outbound CRM delivery client.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::errors::ClientError;
use crate::retry::{run_with_retry, RetryPolicy};
use crate::types::CreatePropertyResponse;

/// Production CRM endpoint.
const CRM_BASE_URL: &str = "https://knock-crm.io";

/// Client for the CRM's customer-scoped property endpoint.
///
/// Each delivery runs under the retry executor: transient failures
/// back off per the supplied policy while permanent ones surface
/// immediately.
pub struct CrmClient {
    http: Client,
    base_url: Url,
}

impl CrmClient {
    /// Client against the production CRM.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_base_url(CRM_BASE_URL)
    }

    /// Client against an alternate CRM deployment.
    pub fn with_base_url(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            source: e,
        })?;

        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent("Casa-Client/1.0")
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self { http, base_url })
    }

    /// Create `payload` as a property of customer `customer_id`.
    ///
    /// A zero or negative customer id is rejected as
    /// [`ClientError::InvalidCustomer`] before any network I/O. On a
    /// 2xx response the CRM's body is decoded verbatim, including the
    /// server-assigned id.
    pub async fn create_property(
        &self,
        customer_id: i64,
        payload: &Value,
        policy: &RetryPolicy,
    ) -> Result<CreatePropertyResponse, ClientError> {
        if customer_id <= 0 {
            return Err(ClientError::InvalidCustomer { customer_id });
        }

        let url = self
            .base_url
            .join(&format!("customers/{customer_id}/properties"))
            .map_err(|e| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                source: e,
            })?;

        run_with_retry(|| self.post_property(url.clone(), payload), policy).await
    }

    async fn post_property(
        &self,
        url: Url,
        payload: &Value,
    ) -> Result<CreatePropertyResponse, ClientError> {
        debug!(%url, "posting property to CRM");

        let response = self
            .http
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| ClientError::Http {
                status: 0,
                body: None,
                source: Some(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            warn!(status = status.as_u16(), "CRM rejected property creation");
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
                source: None,
            });
        }

        let created: CreatePropertyResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Decode { source: e })?;
        info!(property_id = created.id, "property created in CRM");
        Ok(created)
    }
}
