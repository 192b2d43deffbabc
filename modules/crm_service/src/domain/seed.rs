//! Reference data loaded at startup when `load_seed_data` is enabled

use crate::contract::{CategoryData, CustomerData, VendorData};
use super::repository::{CategoryRepository, CustomerRepository, VendorRepository};
use anyhow::Result;

const CATEGORIES: [&str; 5] = ["Fruits", "Dried", "Fresh", "Exotic", "Nuts"];
const CUSTOMERS: [(&str, &str); 2] = [("Joe", "Smith"), ("Bob", "Franco")];
const VENDORS: [&str; 2] = ["Coca Cola Solutions", "Dell Solutions"];

/// Row counts after seeding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: u64,
    pub customers: u64,
    pub vendors: u64,
}

/// Insert the reference rows and report how many rows each table holds.
///
/// Seeding is skipped when any of the tables already holds rows, so a
/// persistent database is seeded once.
pub async fn load_seed_data(
    categories: &dyn CategoryRepository,
    customers: &dyn CustomerRepository,
    vendors: &dyn VendorRepository,
) -> Result<SeedSummary> {
    let existing = SeedSummary {
        categories: categories.count().await?,
        customers: customers.count().await?,
        vendors: vendors.count().await?,
    };
    if existing.categories + existing.customers + existing.vendors > 0 {
        tracing::info!(?existing, "Store already populated, skipping seed data");
        return Ok(existing);
    }

    for name in CATEGORIES {
        categories
            .save(None, &CategoryData { name: Some(name.to_string()) })
            .await?;
    }
    let category_count = categories.count().await?;
    tracing::info!(count = category_count, "Categories loaded");

    for (firstname, lastname) in CUSTOMERS {
        let data = CustomerData {
            firstname: Some(firstname.to_string()),
            lastname: Some(lastname.to_string()),
        };
        customers.save(None, &data).await?;
    }
    let customer_count = customers.count().await?;
    tracing::info!(count = customer_count, "Customers loaded");

    for name in VENDORS {
        vendors
            .save(None, &VendorData { name: Some(name.to_string()) })
            .await?;
    }
    let vendor_count = vendors.count().await?;
    tracing::info!(count = vendor_count, "Vendors loaded");

    Ok(SeedSummary {
        categories: category_count,
        customers: customer_count,
        vendors: vendor_count,
    })
}
