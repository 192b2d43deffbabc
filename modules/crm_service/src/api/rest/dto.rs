//! REST DTOs with serde derives for HTTP API
//!
//! Every field is optional on input. Resource URLs are output-only: a URL
//! supplied by the client is ignored by the mappers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Customer DTOs =====

/// Customer request/response DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomerDto {
    #[schema(example = "Joe")]
    pub firstname: Option<String>,

    #[schema(example = "Smith")]
    pub lastname: Option<String>,

    /// Resource URL, derived from the identifier
    #[schema(example = "/api/v1/customers/1")]
    pub customer_url: Option<String>,
}

/// List of customers
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerListDto {
    pub customers: Vec<CustomerDto>,
}

// ===== Vendor DTOs =====

/// Vendor request/response DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VendorDto {
    #[schema(example = "Coca Cola Solutions")]
    pub name: Option<String>,

    /// Resource URL, derived from the identifier
    #[serde(rename = "vendor_url")]
    #[schema(example = "/api/v1/vendors/1")]
    pub url: Option<String>,
}

/// List of vendors
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VendorListDto {
    pub vendors: Vec<VendorDto>,
}
