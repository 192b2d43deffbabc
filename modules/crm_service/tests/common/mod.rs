//! Common test utilities: in-memory repositories and SQLite connections
#![allow(dead_code)]

use async_trait::async_trait;
use crm_service::contract::{Category, CategoryData, Customer, CustomerData, Vendor, VendorData};
use crm_service::domain::repository::{CategoryRepository, CustomerRepository, VendorRepository};
use crm_service::domain::{ResourcePaths, Service};
use parking_lot::RwLock;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Fresh in-memory SQLite database; a single pooled connection keeps the
/// schema alive for the lifetime of the handle
pub async fn memory_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    Database::connect(opts).await.unwrap()
}

/// Rows keyed by id plus the next id to hand out, mirroring an
/// auto-increment column
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn save(&mut self, id: Option<i64>, build: impl FnOnce(i64) -> T) -> T {
        let id = id.unwrap_or(self.next_id);
        self.next_id = self.next_id.max(id + 1);
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }
}

#[derive(Clone)]
pub struct MockCustomerRepo {
    data: Arc<RwLock<Table<Customer>>>,
}

impl MockCustomerRepo {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(Table::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.data.read().rows.len()
    }
}

#[async_trait]
impl CustomerRepository for MockCustomerRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Customer>> {
        Ok(self.data.read().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Customer>> {
        Ok(self.data.read().rows.get(&id).cloned())
    }

    async fn save(&self, id: Option<i64>, data: &CustomerData) -> anyhow::Result<Customer> {
        Ok(self.data.write().save(id, |id| Customer {
            id,
            firstname: data.firstname.clone(),
            lastname: data.lastname.clone(),
        }))
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        self.data.write().rows.remove(&id);
        Ok(())
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Ok(self.data.read().rows.len() as u64)
    }
}

#[derive(Clone)]
pub struct MockVendorRepo {
    data: Arc<RwLock<Table<Vendor>>>,
}

impl MockVendorRepo {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(Table::new())),
        }
    }
}

#[async_trait]
impl VendorRepository for MockVendorRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Vendor>> {
        Ok(self.data.read().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Vendor>> {
        Ok(self.data.read().rows.get(&id).cloned())
    }

    async fn save(&self, id: Option<i64>, data: &VendorData) -> anyhow::Result<Vendor> {
        Ok(self.data.write().save(id, |id| Vendor {
            id,
            name: data.name.clone(),
        }))
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        self.data.write().rows.remove(&id);
        Ok(())
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Ok(self.data.read().rows.len() as u64)
    }
}

#[derive(Clone)]
pub struct MockCategoryRepo {
    data: Arc<RwLock<Table<Category>>>,
}

impl MockCategoryRepo {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(Table::new())),
        }
    }
}

#[async_trait]
impl CategoryRepository for MockCategoryRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Category>> {
        Ok(self.data.read().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Category>> {
        Ok(self.data.read().rows.get(&id).cloned())
    }

    async fn save(&self, id: Option<i64>, data: &CategoryData) -> anyhow::Result<Category> {
        Ok(self.data.write().save(id, |id| Category {
            id,
            name: data.name.clone(),
        }))
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        self.data.write().rows.remove(&id);
        Ok(())
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Ok(self.data.read().rows.len() as u64)
    }
}

/// Customer repository whose every call fails, as a broken store would
pub struct FailingCustomerRepo;

#[async_trait]
impl CustomerRepository for FailingCustomerRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Customer>> {
        anyhow::bail!("connection refused")
    }

    async fn find_by_id(&self, _id: i64) -> anyhow::Result<Option<Customer>> {
        anyhow::bail!("connection refused")
    }

    async fn save(&self, _id: Option<i64>, _data: &CustomerData) -> anyhow::Result<Customer> {
        anyhow::bail!("connection refused")
    }

    async fn delete_by_id(&self, _id: i64) -> anyhow::Result<()> {
        anyhow::bail!("connection refused")
    }

    async fn count(&self) -> anyhow::Result<u64> {
        anyhow::bail!("connection refused")
    }
}

/// Service over fresh mock repositories with the default base paths
pub fn mock_service() -> (Service, MockCustomerRepo, MockVendorRepo) {
    let customers = MockCustomerRepo::new();
    let vendors = MockVendorRepo::new();
    let service = Service::new(
        Arc::new(customers.clone()),
        Arc::new(vendors.clone()),
        Arc::new(MockCategoryRepo::new()),
        ResourcePaths::default(),
    );
    (service, customers, vendors)
}

pub fn customer_data(firstname: &str, lastname: &str) -> CustomerData {
    CustomerData {
        firstname: Some(firstname.to_string()),
        lastname: Some(lastname.to_string()),
    }
}

pub fn vendor_data(name: &str) -> VendorData {
    VendorData {
        name: Some(name.to_string()),
    }
}
