pub mod data_source;
pub mod import;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/admin endpoints (mounted at /api/admin)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/import/{kind}", post(import::import_file))
        .route(
            "/data-source",
            get(data_source::get_data_source).put(data_source::set_data_source),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        import::import_file,
        data_source::get_data_source,
        data_source::set_data_source,
    ),
    components(schemas(
        import::ImportFileRequest,
        import::ImportFailedResponse,
        matmaster_core::ImportReport,
        matmaster_core::ImportKind,
        data_source::DataSourceBody,
        matmaster_core::DataSource,
    ))
)]
pub struct ApiDoc;
