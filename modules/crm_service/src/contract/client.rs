//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with the CRM service.
//! NO HTTP - direct function calls for performance.

use super::{
    error::CrmError,
    model::{Customer, CustomerData, CustomerPatch, Resource, Vendor, VendorData, VendorPatch},
};
use async_trait::async_trait;

/// CRM service API for inter-module communication
#[async_trait]
pub trait CrmApi: Send + Sync {
    // ===== Customer Operations =====

    async fn list_customers(&self) -> Result<Vec<Resource<Customer>>, CrmError>;

    async fn get_customer(&self, id: i64) -> Result<Resource<Customer>, CrmError>;

    async fn create_customer(&self, data: CustomerData) -> Result<Resource<Customer>, CrmError>;

    /// Full replace; creates the customer under `id` if it does not exist
    async fn replace_customer(
        &self,
        id: i64,
        data: CustomerData,
    ) -> Result<Resource<Customer>, CrmError>;

    async fn patch_customer(
        &self,
        id: i64,
        patch: CustomerPatch,
    ) -> Result<Resource<Customer>, CrmError>;

    async fn delete_customer(&self, id: i64) -> Result<(), CrmError>;

    // ===== Vendor Operations =====

    async fn list_vendors(&self) -> Result<Vec<Resource<Vendor>>, CrmError>;

    async fn get_vendor(&self, id: i64) -> Result<Resource<Vendor>, CrmError>;

    async fn create_vendor(&self, data: VendorData) -> Result<Resource<Vendor>, CrmError>;

    /// Full replace; creates the vendor under `id` if it does not exist
    async fn replace_vendor(&self, id: i64, data: VendorData)
        -> Result<Resource<Vendor>, CrmError>;

    async fn patch_vendor(&self, id: i64, patch: VendorPatch)
        -> Result<Resource<Vendor>, CrmError>;

    async fn delete_vendor(&self, id: i64) -> Result<(), CrmError>;
}
