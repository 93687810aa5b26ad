pub mod testing;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for public endpoints
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/test/unauthed-ping",
        get(testing::unauthed_ping::unauthed_ping),
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(testing::unauthed_ping::unauthed_ping),
    components(schemas(testing::unauthed_ping::UnauthedPingResponse))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use crate::api::test_support::{send_json, test_app, test_state};

    #[tokio::test]
    async fn test_unauthed_ping() {
        let app = test_app(test_state(None));
        let (status, body) = send_json(&app, Method::GET, "/api/test/unauthed-ping", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "unauthed-ping");
    }
}
