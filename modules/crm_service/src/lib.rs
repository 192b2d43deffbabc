//! CRM Service Module
//!
//! Customer and vendor resources over a relational store, exposed as REST
//! endpoints and as an in-process client.

// Public exports
pub mod contract;
pub use contract::{
    client::CrmApi, error::CrmError, Category, Customer, CustomerData, CustomerPatch, Resource,
    Vendor, VendorData, VendorPatch,
};

pub mod module;
pub use module::CrmServiceModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
