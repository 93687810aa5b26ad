use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use matmaster_core::DataSource;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DataSourceBody {
    pub source: DataSource,
}

#[utoipa::path(
    get,
    path = "/api/admin/data-source",
    tag = "admin",
    responses(
        (status = 200, description = "Data source requests currently read", body = DataSourceBody)
    )
)]
pub async fn get_data_source(State(state): State<AppState>) -> impl IntoResponse {
    let source = state.store.source().await;
    (StatusCode::OK, Json(DataSourceBody { source }))
}

#[utoipa::path(
    put,
    path = "/api/admin/data-source",
    tag = "admin",
    request_body(content = DataSourceBody, example = json!({"source": "mock"})),
    responses(
        (status = 200, description = "Data source switched", body = DataSourceBody)
    )
)]
pub async fn set_data_source(
    State(state): State<AppState>,
    Json(req): Json<DataSourceBody>,
) -> impl IntoResponse {
    state.store.set_source(req.source).await;
    (StatusCode::OK, Json(DataSourceBody { source: req.source }))
}
