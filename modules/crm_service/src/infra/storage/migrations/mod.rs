//! Database migrations for CRM service
//!
//! Migrations share this file, so each one names itself; the derived name
//! would be the file stem for all of them.

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241215_000001_create_category::Migration),
            Box::new(m20241215_000002_create_customer::Migration),
            Box::new(m20241215_000003_create_vendor::Migration),
        ]
    }
}

mod m20241215_000001_create_category {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20241215_000001_create_category"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Category::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Category::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Category::Name).string())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Category::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Category {
        Table,
        Id,
        Name,
    }
}

mod m20241215_000002_create_customer {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20241215_000002_create_customer"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Customer::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Customer::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Customer::Firstname).string())
                        .col(ColumnDef::new(Customer::Lastname).string())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Customer::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Customer {
        Table,
        Id,
        Firstname,
        Lastname,
    }
}

mod m20241215_000003_create_vendor {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20241215_000003_create_vendor"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Vendor::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Vendor::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Vendor::Name).string())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Vendor::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Vendor {
        Table,
        Id,
        Name,
    }
}
