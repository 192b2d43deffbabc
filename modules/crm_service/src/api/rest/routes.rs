//! Route registration and OpenAPI document

use crate::domain::Service;
use super::{dto::*, handlers};
use axum::{routing::get, Extension, Json, Router};
use std::sync::Arc;
use utoipa::OpenApi;

/// Path of the generated OpenAPI document
pub const OPENAPI_PATH: &str = "/api/v1/openapi.json";

/// Schemas of the REST DTOs
#[derive(OpenApi)]
#[openapi(components(schemas(CustomerDto, CustomerListDto, VendorDto, VendorListDto)))]
pub struct ApiDoc;

/// Register all REST routes under the configured base paths
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let customers = service.paths().customers.trim_end_matches('/').to_string();
    let vendors = service.paths().vendors.trim_end_matches('/').to_string();

    let router = router
        // Customer endpoints
        .route(
            &customers,
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route(
            &format!("{customers}/"),
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route(
            &format!("{customers}/{{id}}"),
            get(handlers::get_customer)
                .put(handlers::replace_customer)
                .patch(handlers::patch_customer)
                .delete(handlers::delete_customer),
        )
        // Vendor endpoints
        .route(
            &vendors,
            get(handlers::list_vendors).post(handlers::create_vendor),
        )
        .route(
            &format!("{vendors}/"),
            get(handlers::list_vendors).post(handlers::create_vendor),
        )
        .route(
            &format!("{vendors}/{{id}}"),
            get(handlers::get_vendor)
                .put(handlers::replace_vendor)
                .patch(handlers::patch_vendor)
                .delete(handlers::delete_vendor),
        )
        .route(OPENAPI_PATH, get(openapi_handler))
        // Add service as extension for handlers
        .layer(Extension(service));

    Ok(router)
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
