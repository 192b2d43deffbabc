//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    CrmApi, CrmError, Customer, CustomerData, CustomerPatch, Resource, Vendor, VendorData,
    VendorPatch,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CrmApi for NativeClient {
    async fn list_customers(&self) -> Result<Vec<Resource<Customer>>, CrmError> {
        self.service.list_customers().await
    }

    async fn get_customer(&self, id: i64) -> Result<Resource<Customer>, CrmError> {
        self.service.get_customer(id).await
    }

    async fn create_customer(&self, data: CustomerData) -> Result<Resource<Customer>, CrmError> {
        self.service.create_customer(data).await
    }

    async fn replace_customer(
        &self,
        id: i64,
        data: CustomerData,
    ) -> Result<Resource<Customer>, CrmError> {
        self.service.replace_customer(id, data).await
    }

    async fn patch_customer(
        &self,
        id: i64,
        patch: CustomerPatch,
    ) -> Result<Resource<Customer>, CrmError> {
        self.service.patch_customer(id, patch).await
    }

    async fn delete_customer(&self, id: i64) -> Result<(), CrmError> {
        self.service.delete_customer(id).await
    }

    async fn list_vendors(&self) -> Result<Vec<Resource<Vendor>>, CrmError> {
        self.service.list_vendors().await
    }

    async fn get_vendor(&self, id: i64) -> Result<Resource<Vendor>, CrmError> {
        self.service.get_vendor(id).await
    }

    async fn create_vendor(&self, data: VendorData) -> Result<Resource<Vendor>, CrmError> {
        self.service.create_vendor(data).await
    }

    async fn replace_vendor(
        &self,
        id: i64,
        data: VendorData,
    ) -> Result<Resource<Vendor>, CrmError> {
        self.service.replace_vendor(id, data).await
    }

    async fn patch_vendor(
        &self,
        id: i64,
        patch: VendorPatch,
    ) -> Result<Resource<Vendor>, CrmError> {
        self.service.patch_vendor(id, patch).await
    }

    async fn delete_vendor(&self, id: i64) -> Result<(), CrmError> {
        self.service.delete_vendor(id).await
    }
}
