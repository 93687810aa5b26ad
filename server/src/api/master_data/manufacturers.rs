use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use matmaster_core::Manufacturer;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ManufacturersResponse {
    pub manufacturers: Vec<Manufacturer>,
}

#[utoipa::path(
    get,
    path = "/api/manufacturers",
    tag = "master-data",
    responses(
        (status = 200, description = "Manufacturers from the active data source", body = ManufacturersResponse)
    )
)]
pub async fn list_manufacturers(State(state): State<AppState>) -> impl IntoResponse {
    let data = state.store.snapshot().await;
    let manufacturers = data.manufacturers.clone();
    (StatusCode::OK, Json(ManufacturersResponse { manufacturers }))
}
