//! Domain layer - business logic and services

pub mod repository;
pub mod seed;
pub mod service;

pub use repository::{CategoryRepository, CustomerRepository, VendorRepository};
pub use seed::{load_seed_data, SeedSummary};
pub use service::{ResourcePaths, Service};
