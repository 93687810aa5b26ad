pub mod lookups;
pub mod manufacturers;
pub mod vendors;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for master data endpoints (mounted at the root)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/vendors", get(vendors::list_vendors))
        .route("/api/manufacturers", get(manufacturers::list_manufacturers))
        .route("/api/lookups", get(lookups::get_lookups))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        vendors::list_vendors,
        manufacturers::list_manufacturers,
        lookups::get_lookups,
    ),
    components(schemas(
        vendors::VendorsResponse,
        manufacturers::ManufacturersResponse,
        lookups::LookupsResponse,
        lookups::MaterialGroupSet,
        matmaster_core::Vendor,
        matmaster_core::Manufacturer,
        matmaster_core::catalog::CodeEntry,
        matmaster_core::catalog::Plant,
    ))
)]
pub struct ApiDoc;
