//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models. Active models
//! built from `*Data` leave the identifier unset; repositories decide it.

use crate::contract::{Category, CategoryData, Customer, CustomerData, Vendor, VendorData};
use super::entity::{category, customer, vendor};
use sea_orm::ActiveValue::{NotSet, Set};

// ===== Customer Conversions =====

impl From<customer::Model> for Customer {
    fn from(entity: customer::Model) -> Self {
        Self {
            id: entity.id,
            firstname: entity.firstname,
            lastname: entity.lastname,
        }
    }
}

impl From<&CustomerData> for customer::ActiveModel {
    fn from(data: &CustomerData) -> Self {
        Self {
            id: NotSet,
            firstname: Set(data.firstname.clone()),
            lastname: Set(data.lastname.clone()),
        }
    }
}

// ===== Vendor Conversions =====

impl From<vendor::Model> for Vendor {
    fn from(entity: vendor::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

impl From<&VendorData> for vendor::ActiveModel {
    fn from(data: &VendorData) -> Self {
        Self {
            id: NotSet,
            name: Set(data.name.clone()),
        }
    }
}

// ===== Category Conversions =====

impl From<category::Model> for Category {
    fn from(entity: category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

impl From<&CategoryData> for category::ActiveModel {
    fn from(data: &CategoryData) -> Self {
        Self {
            id: NotSet,
            name: Set(data.name.clone()),
        }
    }
}
