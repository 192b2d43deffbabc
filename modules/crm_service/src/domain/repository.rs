//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs
//!
//! `save` is the single write path: with `id = None` the store assigns a new
//! identifier, with `Some(id)` the row under `id` is overwritten, or inserted
//! under that identifier when it does not exist yet.

use crate::contract::{Category, CategoryData, Customer, CustomerData, Vendor, VendorData};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for customers
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// List all customers ordered by identifier
    async fn find_all(&self) -> Result<Vec<Customer>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>>;

    /// Insert or overwrite a customer
    async fn save(&self, id: Option<i64>, data: &CustomerData) -> Result<Customer>;

    /// Delete a customer; deleting a missing row is not an error
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    async fn count(&self) -> Result<u64>;
}

/// Repository for vendors
#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// List all vendors ordered by identifier
    async fn find_all(&self) -> Result<Vec<Vendor>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Vendor>>;

    /// Insert or overwrite a vendor
    async fn save(&self, id: Option<i64>, data: &VendorData) -> Result<Vendor>;

    /// Delete a vendor; deleting a missing row is not an error
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    async fn count(&self) -> Result<u64>;
}

/// Repository for reference categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Category>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>>;

    async fn save(&self, id: Option<i64>, data: &CategoryData) -> Result<Category>;

    async fn delete_by_id(&self, id: i64) -> Result<()>;

    async fn count(&self) -> Result<u64>;
}
