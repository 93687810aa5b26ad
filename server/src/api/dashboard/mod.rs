pub mod history;
pub mod stats;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/dashboard endpoints (mounted at /api/dashboard)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats::get_stats))
        .route("/history", get(history::get_history))
}

#[derive(OpenApi)]
#[openapi(
    paths(stats::get_stats, history::get_history),
    components(schemas(
        matmaster_core::dashboard::DashboardStats,
        matmaster_core::dashboard::MonthlyDuplicates,
        matmaster_core::dashboard::ValidationTypeShare,
        matmaster_core::dashboard::WeeklyRisk,
        matmaster_core::dashboard::VendorQualificationShare,
        matmaster_core::dashboard::HistoryItem,
        matmaster_core::dashboard::HistorySort,
        history::HistoryResponse,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use crate::api::test_support::{send_json, test_app, test_state};

    #[tokio::test]
    async fn test_stats() {
        let app = test_app(test_state(None));
        let (status, body) = send_json(&app, Method::GET, "/api/dashboard/stats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["duplicateDetection"].is_array());
    }

    #[tokio::test]
    async fn test_history_defaults_to_newest_first() {
        let app = test_app(test_state(None));
        let (status, body) = send_json(&app, Method::GET, "/api/dashboard/history", None).await;
        assert_eq!(status, StatusCode::OK);
        let items = body["items"].as_array().unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0]["id"], "1");
    }

    #[tokio::test]
    async fn test_history_filters() {
        let app = test_app(test_state(None));
        let (_, body) = send_json(
            &app,
            Method::GET,
            "/api/dashboard/history?status=rejected&sort=riskScore",
            None,
        )
        .await;
        let items = body["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["riskScore"], 85);

        let (_, body) =
            send_json(&app, Method::GET, "/api/dashboard/history?search=cement", None).await;
        assert_eq!(body["items"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_history_rejects_unknown_status() {
        let app = test_app(test_state(None));
        let (status, _) =
            send_json(&app, Method::GET, "/api/dashboard/history?status=lost", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
