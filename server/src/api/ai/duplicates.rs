use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use matmaster_core::DuplicateMatch;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DuplicatesRequest {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DuplicatesResponse {
    /// Closest first
    pub duplicates: Vec<DuplicateMatch>,
}

#[utoipa::path(
    post,
    path = "/api/ai/duplicates",
    tag = "ai",
    request_body(content = DuplicatesRequest, example = json!({"description": "10mm Steel Rod"})),
    responses(
        (status = 200, description = "Existing materials resembling the description", body = DuplicatesResponse)
    )
)]
pub async fn find_duplicates(
    State(state): State<AppState>,
    Json(req): Json<DuplicatesRequest>,
) -> impl IntoResponse {
    let data = state.store.snapshot().await;
    let duplicates = state.engine.duplicates(&req.description, &data);

    (StatusCode::OK, Json(DuplicatesResponse { duplicates }))
}
