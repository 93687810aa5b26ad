use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use matmaster_core::Vendor;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VendorsResponse {
    pub vendors: Vec<Vendor>,
}

#[utoipa::path(
    get,
    path = "/api/vendors",
    tag = "master-data",
    responses(
        (status = 200, description = "Vendors from the active data source", body = VendorsResponse)
    )
)]
pub async fn list_vendors(State(state): State<AppState>) -> impl IntoResponse {
    let data = state.store.snapshot().await;
    let vendors = data.vendors.clone();
    (StatusCode::OK, Json(VendorsResponse { vendors }))
}
