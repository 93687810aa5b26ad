pub mod analyze;
pub mod duplicates;
pub mod linkage;
pub mod suggestions;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/ai endpoints (mounted at /api/ai)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/suggestions", post(suggestions::get_suggestions))
        .route("/analyze", post(analyze::analyze_entry))
        .route("/duplicates", post(duplicates::find_duplicates))
        .route("/linkage", post(linkage::check_linkage))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        suggestions::get_suggestions,
        analyze::analyze_entry,
        duplicates::find_duplicates,
        linkage::check_linkage,
    ),
    components(schemas(
        suggestions::SuggestionsRequest,
        suggestions::SuggestionsResponse,
        duplicates::DuplicatesRequest,
        duplicates::DuplicatesResponse,
        linkage::LinkageRequest,
        matmaster_core::Analysis,
        matmaster_core::FieldSuggestions,
        matmaster_core::MaterialEntry,
        matmaster_core::SuggestionContext,
        matmaster_core::SuggestionField,
        matmaster_core::ValidationResult,
        matmaster_core::ValidationStatus,
        matmaster_core::DuplicateMatch,
        matmaster_core::MatchType,
    ))
)]
pub struct ApiDoc;
