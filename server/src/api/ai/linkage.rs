use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use matmaster_core::linkage::check_vendor_manufacturer_link;
use matmaster_core::ValidationResult;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkageRequest {
    pub vendor_id: String,
    pub manufacturer_id: String,
}

#[utoipa::path(
    post,
    path = "/api/ai/linkage",
    tag = "ai",
    request_body(
        content = LinkageRequest,
        example = json!({"vendorId": "200001", "manufacturerId": "200101"})
    ),
    responses(
        (status = 200, description = "Linkage finding", body = ValidationResult)
    )
)]
pub async fn check_linkage(
    State(state): State<AppState>,
    Json(req): Json<LinkageRequest>,
) -> impl IntoResponse {
    let data = state.store.snapshot().await;
    let result = check_vendor_manufacturer_link(&req.vendor_id, &req.manufacturer_id, &data);

    (StatusCode::OK, Json(result))
}
