//! Domain service - business logic orchestration

use crate::contract::{
    Category, CrmError, Customer, CustomerData, CustomerPatch, Resource, Vendor, VendorData,
    VendorPatch,
};
use super::repository::{CategoryRepository, CustomerRepository, VendorRepository};
use std::sync::Arc;

/// Base paths used to derive resource URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    pub customers: String,
    pub vendors: String,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            customers: "/api/v1/customers".to_string(),
            vendors: "/api/v1/vendors".to_string(),
        }
    }
}

/// Domain service for customer and vendor management
pub struct Service {
    customer_repo: Arc<dyn CustomerRepository>,
    vendor_repo: Arc<dyn VendorRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    paths: ResourcePaths,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        customer_repo: Arc<dyn CustomerRepository>,
        vendor_repo: Arc<dyn VendorRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        paths: ResourcePaths,
    ) -> Self {
        Self {
            customer_repo,
            vendor_repo,
            category_repo,
            paths,
        }
    }

    pub fn paths(&self) -> &ResourcePaths {
        &self.paths
    }

    // ===== Customer Operations =====

    /// List all customers with their resource URLs
    pub async fn list_customers(&self) -> Result<Vec<Resource<Customer>>, CrmError> {
        let customers = self.customer_repo.find_all().await.map_err(internal)?;

        Ok(customers
            .into_iter()
            .map(|c| self.locate_customer(c))
            .collect())
    }

    /// Get a specific customer
    pub async fn get_customer(&self, id: i64) -> Result<Resource<Customer>, CrmError> {
        self.customer_repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .map(|c| self.locate_customer(c))
            .ok_or_else(|| CrmError::customer_not_found(id))
    }

    /// Create a customer under a store-assigned identifier
    pub async fn create_customer(
        &self,
        data: CustomerData,
    ) -> Result<Resource<Customer>, CrmError> {
        self.save_customer(None, &data).await
    }

    /// Replace a customer, creating it under `id` when absent
    pub async fn replace_customer(
        &self,
        id: i64,
        data: CustomerData,
    ) -> Result<Resource<Customer>, CrmError> {
        self.save_customer(Some(id), &data).await
    }

    /// Overwrite only the fields present in `patch`
    pub async fn patch_customer(
        &self,
        id: i64,
        patch: CustomerPatch,
    ) -> Result<Resource<Customer>, CrmError> {
        let mut customer = self
            .customer_repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| CrmError::customer_not_found(id))?;

        customer.apply(patch);
        self.save_customer(Some(customer.id), &customer.data()).await
    }

    /// Delete a customer; succeeds when the customer does not exist
    pub async fn delete_customer(&self, id: i64) -> Result<(), CrmError> {
        tracing::debug!(customer_id = id, "deleting customer");
        self.customer_repo.delete_by_id(id).await.map_err(internal)
    }

    // ===== Vendor Operations =====

    /// List all vendors with their resource URLs
    pub async fn list_vendors(&self) -> Result<Vec<Resource<Vendor>>, CrmError> {
        let vendors = self.vendor_repo.find_all().await.map_err(internal)?;

        Ok(vendors.into_iter().map(|v| self.locate_vendor(v)).collect())
    }

    /// Get a specific vendor
    pub async fn get_vendor(&self, id: i64) -> Result<Resource<Vendor>, CrmError> {
        self.vendor_repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .map(|v| self.locate_vendor(v))
            .ok_or_else(|| CrmError::vendor_not_found(id))
    }

    /// Create a vendor under a store-assigned identifier
    pub async fn create_vendor(&self, data: VendorData) -> Result<Resource<Vendor>, CrmError> {
        self.save_vendor(None, &data).await
    }

    /// Replace a vendor, creating it under `id` when absent
    pub async fn replace_vendor(
        &self,
        id: i64,
        data: VendorData,
    ) -> Result<Resource<Vendor>, CrmError> {
        self.save_vendor(Some(id), &data).await
    }

    /// Overwrite only the fields present in `patch`
    pub async fn patch_vendor(
        &self,
        id: i64,
        patch: VendorPatch,
    ) -> Result<Resource<Vendor>, CrmError> {
        let mut vendor = self
            .vendor_repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| CrmError::vendor_not_found(id))?;

        vendor.apply(patch);
        self.save_vendor(Some(vendor.id), &vendor.data()).await
    }

    /// Delete a vendor; succeeds when the vendor does not exist
    pub async fn delete_vendor(&self, id: i64) -> Result<(), CrmError> {
        tracing::debug!(vendor_id = id, "deleting vendor");
        self.vendor_repo.delete_by_id(id).await.map_err(internal)
    }

    // ===== Category Operations =====

    pub async fn list_categories(&self) -> Result<Vec<Category>, CrmError> {
        self.category_repo.find_all().await.map_err(internal)
    }

    pub async fn count_categories(&self) -> Result<u64, CrmError> {
        self.category_repo.count().await.map_err(internal)
    }

    // ===== Helper Methods =====

    async fn save_customer(
        &self,
        id: Option<i64>,
        data: &CustomerData,
    ) -> Result<Resource<Customer>, CrmError> {
        let saved = self.customer_repo.save(id, data).await.map_err(internal)?;
        tracing::debug!(customer_id = saved.id, "customer saved");
        Ok(self.locate_customer(saved))
    }

    async fn save_vendor(
        &self,
        id: Option<i64>,
        data: &VendorData,
    ) -> Result<Resource<Vendor>, CrmError> {
        let saved = self.vendor_repo.save(id, data).await.map_err(internal)?;
        tracing::debug!(vendor_id = saved.id, "vendor saved");
        Ok(self.locate_vendor(saved))
    }

    fn locate_customer(&self, customer: Customer) -> Resource<Customer> {
        Resource::located(customer, &self.paths.customers)
    }

    fn locate_vendor(&self, vendor: Vendor) -> Resource<Vendor> {
        Resource::located(vendor, &self.paths.vendors)
    }
}

/// Log a store failure and hide it behind `CrmError::Internal`
fn internal(error: anyhow::Error) -> CrmError {
    tracing::error!("Store error: {:?}", error);
    CrmError::Internal
}
