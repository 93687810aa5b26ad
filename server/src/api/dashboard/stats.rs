use axum::{http::StatusCode, response::IntoResponse, Json};
use matmaster_core::dashboard::{dashboard_stats, DashboardStats};

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "dashboard",
    responses(
        (status = 200, description = "Aggregate validation statistics", body = DashboardStats)
    )
)]
pub async fn get_stats() -> impl IntoResponse {
    (StatusCode::OK, Json(dashboard_stats()))
}
