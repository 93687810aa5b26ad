use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use matmaster_core::{import_upload, FileFormat, ImportError, ImportKind, ImportReport};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImportFileRequest {
    /// A .csv file with a header row, or a .json array of objects
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImportFailedResponse {
    pub error: String,
    pub errors: Vec<String>,
}

fn bad_request(error: String) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
}

#[utoipa::path(
    post,
    path = "/api/admin/import/{kind}",
    tag = "admin",
    params(
        ("kind" = ImportKind, Path, description = "Collection to replace")
    ),
    request_body(content_type = "multipart/form-data", content = ImportFileRequest),
    responses(
        (status = 200, description = "Collection replaced", body = ImportReport),
        (status = 400, description = "Unreadable file or invalid rows", body = ImportFailedResponse),
        (status = 404, description = "Unknown collection", body = ErrorResponse)
    )
)]
pub async fn import_file(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let kind: ImportKind = match kind.parse() {
        Ok(kind) => kind,
        Err(error) => {
            return (StatusCode::NOT_FOUND, Json(ErrorResponse { error })).into_response()
        }
    };

    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => return bad_request("No file provided".to_string()),
        Err(e) => {
            tracing::warn!("Multipart read error: {}", e);
            return (
                e.status(),
                Json(ErrorResponse {
                    error: format!("Failed to read multipart data: {}", e.body_text()),
                }),
            )
                .into_response();
        }
    };

    let file_name = field.file_name().map(str::to_string);
    let content_type = field.content_type().map(str::to_string);

    let data = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Field read error: {}", e);
            return (
                e.status(),
                Json(ErrorResponse {
                    error: format!("Failed to read file data: {}", e.body_text()),
                }),
            )
                .into_response();
        }
    };

    let format = match FileFormat::detect(file_name.as_deref(), content_type.as_deref()) {
        Ok(format) => format,
        Err(e) => return bad_request(e.to_string()),
    };

    match import_upload(&state.store, kind, format, &data).await {
        Ok(report) => {
            tracing::info!(
                %kind,
                records = report.records_imported,
                file = file_name.as_deref().unwrap_or("upload"),
                "Import complete"
            );
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(e) => {
            tracing::warn!(%kind, "Import rejected: {}", e);
            let errors = e.details();
            let error = match &e {
                ImportError::InvalidRows(_) => format!("Import failed: {}", e),
                _ => e.to_string(),
            };
            (
                StatusCode::BAD_REQUEST,
                Json(ImportFailedResponse { error, errors }),
            )
                .into_response()
        }
    }
}
