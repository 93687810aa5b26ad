use axum::{http::StatusCode, response::IntoResponse, Json};
use matmaster_core::catalog::{
    CodeEntry, Plant, BASE_UNITS_OF_MEASURE, INDUSTRY_SECTORS, MATERIAL_GROUPS, MATERIAL_TYPES,
    PLANT_CODES,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialGroupSet {
    pub material_type: &'static str,
    pub groups: Vec<CodeEntry>,
}

/// Static option lists for the entry form's dropdowns.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupsResponse {
    pub material_types: Vec<CodeEntry>,
    pub base_units_of_measure: Vec<CodeEntry>,
    pub industry_sectors: Vec<CodeEntry>,
    pub material_groups: Vec<MaterialGroupSet>,
    pub plants: Vec<Plant>,
}

#[utoipa::path(
    get,
    path = "/api/lookups",
    tag = "master-data",
    responses(
        (status = 200, description = "Catalog tables", body = LookupsResponse)
    )
)]
pub async fn get_lookups() -> impl IntoResponse {
    let response = LookupsResponse {
        material_types: MATERIAL_TYPES.to_vec(),
        base_units_of_measure: BASE_UNITS_OF_MEASURE.to_vec(),
        industry_sectors: INDUSTRY_SECTORS.to_vec(),
        material_groups: MATERIAL_GROUPS
            .iter()
            .map(|&(material_type, groups)| MaterialGroupSet {
                material_type,
                groups: groups.to_vec(),
            })
            .collect(),
        plants: PLANT_CODES.to_vec(),
    };

    (StatusCode::OK, Json(response))
}
