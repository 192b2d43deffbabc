//! Module declaration and lifecycle implementation
//!
//! Lifecycle order: `migrate` creates the schema, `init` wires repositories
//! and the domain service (loading seed data when configured), and
//! `register_rest` mounts the HTTP routes.

use crate::config::Config;
use crate::contract::CrmApi;
use crate::domain::{load_seed_data, Service};
use crate::infra::storage::repositories::{
    SeaOrmCategoryRepository, SeaOrmCustomerRepository, SeaOrmVendorRepository,
};
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// CRM service module
#[derive(Default)]
pub struct CrmServiceModule {
    service: RwLock<Option<Arc<Service>>>,
}

impl CrmServiceModule {
    pub async fn init(&self, cfg: Config, db: DatabaseConnection) -> Result<()> {
        cfg.validate()?;
        let conn = Arc::new(db);

        // Build repositories
        let customer_repo = Arc::new(SeaOrmCustomerRepository::new(conn.clone()));
        let vendor_repo = Arc::new(SeaOrmVendorRepository::new(conn.clone()));
        let category_repo = Arc::new(SeaOrmCategoryRepository::new(conn));

        if cfg.load_seed_data {
            let summary = load_seed_data(&*category_repo, &*customer_repo, &*vendor_repo).await?;
            tracing::info!(?summary, "Seed data ready");
        }

        // Build domain service
        let service = Arc::new(Service::new(
            customer_repo,
            vendor_repo,
            category_repo,
            cfg.resource_paths(),
        ));
        *self.service.write() = Some(service);

        tracing::info!("CRM service initialized");
        Ok(())
    }

    /// Apply pending database migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("CRM service migrations completed");
        Ok(())
    }

    /// Mount the REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;

        tracing::info!(
            customers = %service.paths().customers,
            vendors = %service.paths().vendors,
            "Registering CRM service REST routes"
        );
        crate::api::rest::routes::register_routes(router, service)
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn CrmApi>> {
        let client = crate::api::native::NativeClient::new(self.service()?);
        Ok(Arc::new(client))
    }

    pub fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }
}
