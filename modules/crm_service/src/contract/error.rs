//! Contract error types for CRM service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// CRM service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrmError {
    /// Customer or vendor not found
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (customer, vendor)
        resource: &'static str,
        /// Resource identifier
        id: i64,
    },
    /// Store failure; the cause is logged where it happens
    #[error("Internal error")]
    Internal,
}

impl CrmError {
    pub fn customer_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "customer",
            id,
        }
    }

    pub fn vendor_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "vendor",
            id,
        }
    }
}
