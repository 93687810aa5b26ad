pub mod create;
pub mod list;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/materials endpoints (mounted at /api/materials)
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list::list_materials).post(create::create_material))
}

#[derive(OpenApi)]
#[openapi(
    paths(list::list_materials, create::create_material),
    components(schemas(
        list::MaterialsListResponse,
        create::CreateMaterialResponse,
        create::SubmissionRejectedResponse,
        matmaster_core::Material,
        matmaster_core::MaterialStatus,
        matmaster_core::DataSource,
    ))
)]
pub struct ApiDoc;
