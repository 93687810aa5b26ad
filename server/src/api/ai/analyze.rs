use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use matmaster_core::{Analysis, MaterialEntry};

#[utoipa::path(
    post,
    path = "/api/ai/analyze",
    tag = "ai",
    request_body(
        content = MaterialEntry,
        example = json!({"materialCode": "S1566153", "description": "Drill bit 8 inch", "materialType": "ZDRL"})
    ),
    responses(
        (status = 200, description = "Suggestions, validation findings and risk score", body = Analysis)
    )
)]
pub async fn analyze_entry(
    State(state): State<AppState>,
    Json(entry): Json<MaterialEntry>,
) -> impl IntoResponse {
    state.latency.analysis().await;

    let data = state.store.snapshot().await;
    let analysis = state.engine.analyze(&entry, &data).await;

    tracing::debug!(risk_score = analysis.risk_score, "Analyzed material entry");

    (StatusCode::OK, Json(analysis))
}
