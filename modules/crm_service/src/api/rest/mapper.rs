//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/Into implementations for bidirectional
//! conversion between REST DTOs and transport-agnostic contract models.
//! Only the name fields are copied; the resource URL is set solely from an
//! already-located `Resource`.

use super::dto::*;
use crate::contract::{
    Customer, CustomerData, CustomerPatch, Resource, Vendor, VendorData, VendorPatch,
};

// ===== Customer conversions =====

impl From<CustomerDto> for CustomerData {
    fn from(dto: CustomerDto) -> Self {
        Self {
            firstname: dto.firstname,
            lastname: dto.lastname,
        }
    }
}

impl From<CustomerDto> for CustomerPatch {
    fn from(dto: CustomerDto) -> Self {
        Self {
            firstname: dto.firstname,
            lastname: dto.lastname,
        }
    }
}

impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        Self {
            firstname: customer.firstname.clone(),
            lastname: customer.lastname.clone(),
            customer_url: None,
        }
    }
}

impl From<Resource<Customer>> for CustomerDto {
    fn from(resource: Resource<Customer>) -> Self {
        Self {
            customer_url: Some(resource.url),
            ..Self::from(&resource.item)
        }
    }
}

// ===== Vendor conversions =====

impl From<VendorDto> for VendorData {
    fn from(dto: VendorDto) -> Self {
        Self { name: dto.name }
    }
}

impl From<VendorDto> for VendorPatch {
    fn from(dto: VendorDto) -> Self {
        Self { name: dto.name }
    }
}

impl From<&Vendor> for VendorDto {
    fn from(vendor: &Vendor) -> Self {
        Self {
            name: vendor.name.clone(),
            url: None,
        }
    }
}

impl From<Resource<Vendor>> for VendorDto {
    fn from(resource: Resource<Vendor>) -> Self {
        Self {
            url: Some(resource.url),
            ..Self::from(&resource.item)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_to_dto_leaves_url_unset() {
        let customer = Customer {
            id: 1,
            firstname: Some("Joe".into()),
            lastname: Some("Smith".into()),
        };
        let dto = CustomerDto::from(&customer);
        assert_eq!(dto.firstname.as_deref(), Some("Joe"));
        assert_eq!(dto.lastname.as_deref(), Some("Smith"));
        assert!(dto.customer_url.is_none());
    }

    #[test]
    fn client_supplied_url_is_dropped() {
        let dto = CustomerDto {
            firstname: Some("Joe".into()),
            lastname: None,
            customer_url: Some("/api/v1/customers/99".into()),
        };
        let data = CustomerData::from(dto);
        assert_eq!(
            data,
            CustomerData {
                firstname: Some("Joe".into()),
                lastname: None,
            }
        );
    }

    #[test]
    fn located_vendor_carries_url() {
        let resource = Resource::located(
            Vendor {
                id: 3,
                name: Some("Coca Cola Solutions".into()),
            },
            "/api/v1/vendors",
        );
        let dto = VendorDto::from(resource);
        assert_eq!(dto.name.as_deref(), Some("Coca Cola Solutions"));
        assert_eq!(dto.url.as_deref(), Some("/api/v1/vendors/3"));
    }
}
