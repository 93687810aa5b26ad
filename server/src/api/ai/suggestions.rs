use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use matmaster_core::{SuggestionContext, SuggestionField};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SuggestionsRequest {
    /// Field to suggest values for; unknown fields get no suggestions
    pub field: SuggestionField,
    #[serde(default)]
    pub context: SuggestionContext,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SuggestionsResponse {
    /// At most two values, best first
    pub suggestions: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/ai/suggestions",
    tag = "ai",
    request_body(
        content = SuggestionsRequest,
        example = json!({"field": "materialType", "context": {"description": "Portland cement 50kg"}})
    ),
    responses(
        (status = 200, description = "Suggested values for the field", body = SuggestionsResponse)
    )
)]
pub async fn get_suggestions(
    State(state): State<AppState>,
    Json(req): Json<SuggestionsRequest>,
) -> impl IntoResponse {
    state.latency.suggestion().await;

    let data = state.store.snapshot().await;
    let suggestions = state.engine.suggest(req.field, &req.context, &data).await;

    (StatusCode::OK, Json(SuggestionsResponse { suggestions }))
}
