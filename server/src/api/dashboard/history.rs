use axum::{extract::Query, http::StatusCode, response::IntoResponse, Json};
use matmaster_core::dashboard::{validation_history, HistoryItem, HistoryQuery};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HistoryResponse {
    pub items: Vec<HistoryItem>,
}

#[utoipa::path(
    get,
    path = "/api/dashboard/history",
    tag = "dashboard",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Past submissions", body = HistoryResponse)
    )
)]
pub async fn get_history(Query(query): Query<HistoryQuery>) -> impl IntoResponse {
    let items = validation_history(&query);
    (StatusCode::OK, Json(HistoryResponse { items }))
}
