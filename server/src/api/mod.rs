pub mod admin;
pub mod ai;
pub mod dashboard;
pub mod master_data;
pub mod materials;
pub mod public;

#[cfg(test)]
pub mod test_support;

use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::AppState;

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// All API routes, without state.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .merge(master_data::router())
        .nest("/api/ai", ai::router())
        .nest("/api/materials", materials::router())
        .nest("/api/dashboard", dashboard::router())
        .nest("/api/admin", admin::router())
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Material Master Assistant API"),
        components(schemas(ErrorResponse))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        public::ApiDoc::openapi(),
        ai::ApiDoc::openapi(),
        materials::ApiDoc::openapi(),
        master_data::ApiDoc::openapi(),
        dashboard::ApiDoc::openapi(),
        admin::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        // Merge paths
        spec.paths.paths.extend(module_spec.paths.paths);

        // Merge components (schemas)
        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
