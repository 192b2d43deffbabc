//! HTTP request handlers - thin layer that delegates to domain service

use crate::domain::Service;
use super::{dto::*, error::{map_domain_error, Problem}};
use axum::{extract::Path, http::StatusCode, Extension, Json};
use std::sync::Arc;

// ===== Customer Handlers =====

/// List all customers
pub async fn list_customers(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<CustomerListDto>, Problem> {
    let customers = service.list_customers().await.map_err(map_domain_error)?;

    Ok(Json(CustomerListDto {
        customers: customers.into_iter().map(CustomerDto::from).collect(),
    }))
}

/// Get a specific customer
pub async fn get_customer(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerDto>, Problem> {
    let customer = service.get_customer(id).await.map_err(map_domain_error)?;

    Ok(Json(customer.into()))
}

/// Create a new customer
pub async fn create_customer(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<CustomerDto>,
) -> Result<(StatusCode, Json<CustomerDto>), Problem> {
    let customer = service
        .create_customer(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(customer.into())))
}

/// Replace a customer, creating it when absent
pub async fn replace_customer(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
    Json(req): Json<CustomerDto>,
) -> Result<Json<CustomerDto>, Problem> {
    let customer = service
        .replace_customer(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(customer.into()))
}

/// Update only the supplied customer fields
pub async fn patch_customer(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
    Json(req): Json<CustomerDto>,
) -> Result<Json<CustomerDto>, Problem> {
    let customer = service
        .patch_customer(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(customer.into()))
}

/// Delete a customer
pub async fn delete_customer(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    service.delete_customer(id).await.map_err(map_domain_error)?;

    Ok(StatusCode::OK)
}

// ===== Vendor Handlers =====

/// List all vendors
pub async fn list_vendors(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<VendorListDto>, Problem> {
    let vendors = service.list_vendors().await.map_err(map_domain_error)?;

    Ok(Json(VendorListDto {
        vendors: vendors.into_iter().map(VendorDto::from).collect(),
    }))
}

/// Get a specific vendor
pub async fn get_vendor(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<Json<VendorDto>, Problem> {
    let vendor = service.get_vendor(id).await.map_err(map_domain_error)?;

    Ok(Json(vendor.into()))
}

/// Create a new vendor
pub async fn create_vendor(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<VendorDto>,
) -> Result<(StatusCode, Json<VendorDto>), Problem> {
    let vendor = service
        .create_vendor(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(vendor.into())))
}

/// Replace a vendor, creating it when absent
pub async fn replace_vendor(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
    Json(req): Json<VendorDto>,
) -> Result<Json<VendorDto>, Problem> {
    let vendor = service
        .replace_vendor(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(vendor.into()))
}

/// Update only the supplied vendor fields
pub async fn patch_vendor(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
    Json(req): Json<VendorDto>,
) -> Result<Json<VendorDto>, Problem> {
    let vendor = service
        .patch_vendor(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(vendor.into()))
}

/// Delete a vendor
pub async fn delete_vendor(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    service.delete_vendor(id).await.map_err(map_domain_error)?;

    Ok(StatusCode::OK)
}
