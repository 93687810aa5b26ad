use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use matmaster_core::{Analysis, Material, MaterialEntry, MaterialStatus};
use serde::Serialize;
use utoipa::ToSchema;

/// Entries scoring above this cannot be submitted.
pub const MAX_SUBMISSION_RISK: u8 = 50;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateMaterialResponse {
    pub material: Material,
    pub analysis: Analysis,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmissionRejectedResponse {
    pub error: String,
    pub analysis: Analysis,
}

fn bad_request(error: &str) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

fn text(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

#[utoipa::path(
    post,
    path = "/api/materials",
    tag = "materials",
    request_body(
        content = MaterialEntry,
        example = json!({"materialCode": "S1566153", "description": "Drill bit 8 inch", "vendorId": "200001"})
    ),
    responses(
        (status = 201, description = "Material submitted for approval", body = CreateMaterialResponse),
        (status = 400, description = "Material code or description missing", body = ErrorResponse),
        (status = 422, description = "Risk score, including resembling existing materials, too high to submit", body = SubmissionRejectedResponse)
    )
)]
pub async fn create_material(
    State(state): State<AppState>,
    Json(entry): Json<MaterialEntry>,
) -> impl IntoResponse {
    let Some(material_code) = entry.code().map(str::to_string) else {
        return bad_request("materialCode is required");
    };
    let Some(description) = entry
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
    else {
        return bad_request("description is required");
    };

    let data = state.store.snapshot().await;
    let analysis = state.engine.analyze_submission(&entry, &data).await;

    if analysis.risk_score > MAX_SUBMISSION_RISK {
        tracing::info!(
            material_code = %material_code,
            risk_score = analysis.risk_score,
            duplicates = analysis.duplicates.len(),
            "Rejected high-risk material submission"
        );
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(SubmissionRejectedResponse {
                error: "High risk score detected. Please resolve validation issues.".to_string(),
                analysis,
            }),
        )
            .into_response();
    }

    let material = state
        .store
        .insert_material(Material {
            id: String::new(),
            material_code,
            description,
            material_type: text(&entry.material_type),
            plant_code: text(&entry.plant_code),
            vendor_id: text(&entry.vendor_id),
            manufacturer_id: text(&entry.manufacturer_id),
            unit_of_measure: text(&entry.unit_of_measure),
            category: text(&entry.category),
            base_price: entry.base_price,
            created_at: Utc::now(),
            status: MaterialStatus::Pending,
        })
        .await;

    tracing::info!(id = %material.id, code = %material.material_code, "Material submitted");

    (
        StatusCode::CREATED,
        Json(CreateMaterialResponse { material, analysis }),
    )
        .into_response()
}
