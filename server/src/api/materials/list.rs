use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use matmaster_core::{DataSource, Material};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MaterialsListResponse {
    pub source: DataSource,
    pub materials: Vec<Material>,
}

#[utoipa::path(
    get,
    path = "/api/materials",
    tag = "materials",
    responses(
        (status = 200, description = "Materials from the active data source", body = MaterialsListResponse)
    )
)]
pub async fn list_materials(State(state): State<AppState>) -> impl IntoResponse {
    let (source, data) = state.store.source_snapshot().await;

    let response = MaterialsListResponse {
        source,
        materials: data.materials.clone(),
    };

    (StatusCode::OK, Json(response))
}
