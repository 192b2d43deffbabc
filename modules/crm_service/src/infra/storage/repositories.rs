//! SeaORM repository implementations

use crate::contract::{Category, CategoryData, Customer, CustomerData, Vendor, VendorData};
use crate::domain::repository::{CategoryRepository, CustomerRepository, VendorRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue::Set, ConnectionTrait,
    DatabaseConnection, DbBackend, EntityName, EntityTrait, PaginatorTrait, QueryOrder, Statement,
};
use std::sync::Arc;

use super::entity::{category, customer, vendor};

/// Statement realigning the id sequence of `table` with its highest stored id.
///
/// Postgres does not advance an identity sequence when a row is inserted with
/// an explicit id, so the next generated id could collide with it. Other
/// backends derive the next id from the table itself.
fn id_sequence_sync(backend: DbBackend, table: &str) -> Option<Statement> {
    match backend {
        DbBackend::Postgres => Some(Statement::from_string(
            backend,
            format!(
                "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
                 GREATEST((SELECT MAX(id) FROM \"{table}\"), 1))"
            ),
        )),
        _ => None,
    }
}

async fn sync_id_sequence(db: &DatabaseConnection, table: &str) -> Result<()> {
    if let Some(stmt) = id_sequence_sync(db.get_database_backend(), table) {
        db.execute(stmt).await?;
    }
    Ok(())
}

// ===== Customer Repository =====

pub struct SeaOrmCustomerRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>> {
        let results = customer::Entity::find()
            .order_by_asc(customer::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let result = customer::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn save(&self, id: Option<i64>, data: &CustomerData) -> Result<Customer> {
        let mut active: customer::ActiveModel = data.into();

        let result = match id {
            None => active.insert(&*self.db).await?,
            Some(id) => {
                active.id = Set(id);
                customer::Entity::insert(active)
                    .on_conflict(
                        OnConflict::column(customer::Column::Id)
                            .update_columns([
                                customer::Column::Firstname,
                                customer::Column::Lastname,
                            ])
                            .to_owned(),
                    )
                    .exec(&*self.db)
                    .await?;
                sync_id_sequence(&self.db, customer::Entity.table_name()).await?;

                customer::Entity::find_by_id(id)
                    .one(&*self.db)
                    .await?
                    .ok_or_else(|| anyhow::anyhow!("customer {id} missing after upsert"))?
            }
        };

        Ok(result.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        customer::Entity::delete_by_id(id).exec(&*self.db).await?;

        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        Ok(customer::Entity::find().count(&*self.db).await?)
    }
}

// ===== Vendor Repository =====

pub struct SeaOrmVendorRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmVendorRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VendorRepository for SeaOrmVendorRepository {
    async fn find_all(&self) -> Result<Vec<Vendor>> {
        let results = vendor::Entity::find()
            .order_by_asc(vendor::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vendor>> {
        let result = vendor::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn save(&self, id: Option<i64>, data: &VendorData) -> Result<Vendor> {
        let mut active: vendor::ActiveModel = data.into();

        let result = match id {
            None => active.insert(&*self.db).await?,
            Some(id) => {
                active.id = Set(id);
                vendor::Entity::insert(active)
                    .on_conflict(
                        OnConflict::column(vendor::Column::Id)
                            .update_columns([vendor::Column::Name])
                            .to_owned(),
                    )
                    .exec(&*self.db)
                    .await?;
                sync_id_sequence(&self.db, vendor::Entity.table_name()).await?;

                vendor::Entity::find_by_id(id)
                    .one(&*self.db)
                    .await?
                    .ok_or_else(|| anyhow::anyhow!("vendor {id} missing after upsert"))?
            }
        };

        Ok(result.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        vendor::Entity::delete_by_id(id).exec(&*self.db).await?;

        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        Ok(vendor::Entity::find().count(&*self.db).await?)
    }
}

// ===== Category Repository =====

pub struct SeaOrmCategoryRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>> {
        let results = category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
        let result = category::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn save(&self, id: Option<i64>, data: &CategoryData) -> Result<Category> {
        let mut active: category::ActiveModel = data.into();

        let result = match id {
            None => active.insert(&*self.db).await?,
            Some(id) => {
                active.id = Set(id);
                category::Entity::insert(active)
                    .on_conflict(
                        OnConflict::column(category::Column::Id)
                            .update_columns([category::Column::Name])
                            .to_owned(),
                    )
                    .exec(&*self.db)
                    .await?;
                sync_id_sequence(&self.db, category::Entity.table_name()).await?;

                category::Entity::find_by_id(id)
                    .one(&*self.db)
                    .await?
                    .ok_or_else(|| anyhow::anyhow!("category {id} missing after upsert"))?
            }
        };

        Ok(result.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        category::Entity::delete_by_id(id).exec(&*self.db).await?;

        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        Ok(category::Entity::find().count(&*self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_resyncs_id_sequence() {
        let stmt = id_sequence_sync(DbBackend::Postgres, "customer").unwrap();
        assert!(stmt
            .sql
            .starts_with("SELECT setval(pg_get_serial_sequence('customer', 'id')"));
        assert!(stmt.sql.contains(r#"MAX(id) FROM "customer""#));
    }

    #[test]
    fn sqlite_needs_no_sequence_sync() {
        assert!(id_sequence_sync(DbBackend::Sqlite, "vendor").is_none());
    }
}
