//! Wire types for the CRM properties endpoint.

use serde::{Deserialize, Serialize};

/// Response returned by the CRM after creating a property: the
/// canonical payload echoed back plus the server-assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePropertyResponse {
    /// Server-assigned property identifier.
    pub id: i64,
    pub mls_name: String,
    pub mls_id: i64,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: i64,
    pub list_price: f64,
    /// Listing date as Unix epoch seconds.
    pub list_date: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_baths: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half_baths: Option<i64>,
    /// Interior size in square feet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}
