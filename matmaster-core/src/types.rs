use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Vendor ids starting with this prefix belong to qualified vendors.
pub const QUALIFIED_VENDOR_PREFIX: &str = "200";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MaterialStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub material_code: String,
    pub description: String,
    pub material_type: String,
    pub plant_code: String,
    pub vendor_id: String,
    pub manufacturer_id: String,
    pub unit_of_measure: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub status: MaterialStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub code: String,
    pub is_qualified: bool,
    pub category: Vec<String>,
    pub linked_manufacturers: Vec<String>,
}

impl Vendor {
    /// Build a vendor whose qualification follows the id prefix convention.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Vec<String>,
        linked_manufacturers: Vec<String>,
    ) -> Self {
        let id = id.into();
        Self {
            is_qualified: id.starts_with(QUALIFIED_VENDOR_PREFIX),
            code: id.clone(),
            id,
            name: name.into(),
            category,
            linked_manufacturers,
        }
    }

    pub fn serves_category(&self, category: &str) -> bool {
        self.category.iter().any(|c| c == category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Manufacturer {
    pub id: String,
    pub name: String,
    pub code: String,
    pub linked_vendors: Vec<String>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Valid,
    Warning,
    Error,
}

/// One data-quality finding about a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub field: String,
    pub status: ValidationStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl ValidationResult {
    pub fn valid(field: &str, message: impl Into<String>) -> Self {
        Self::new(field, ValidationStatus::Valid, message, None)
    }

    pub fn warning(field: &str, message: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::new(field, ValidationStatus::Warning, message, suggestion)
    }

    pub fn error(field: &str, message: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::new(field, ValidationStatus::Error, message, suggestion)
    }

    fn new(
        field: &str,
        status: ValidationStatus,
        message: impl Into<String>,
        suggestion: Option<String>,
    ) -> Self {
        Self {
            field: field.to_string(),
            status,
            message: message.into(),
            suggestion,
            confidence: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Similar,
    Fuzzy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateMatch {
    pub material: Material,
    pub similarity: f64,
    pub match_type: MatchType,
}

/// Fields the suggestion scorer knows how to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionField {
    MaterialType,
    BaseUnitOfMeasure,
    IndustrySector,
    MaterialGroup,
    VendorId,
    /// Any field name without suggestion rules.
    #[serde(other)]
    Unsupported,
}

impl SuggestionField {
    /// Fields filled in by a full analysis, in response order.
    pub const ANALYZED: [SuggestionField; 4] = [
        SuggestionField::BaseUnitOfMeasure,
        SuggestionField::MaterialType,
        SuggestionField::IndustrySector,
        SuggestionField::MaterialGroup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionField::MaterialType => "materialType",
            SuggestionField::BaseUnitOfMeasure => "baseUnitOfMeasure",
            SuggestionField::IndustrySector => "industrySector",
            SuggestionField::MaterialGroup => "materialGroup",
            SuggestionField::VendorId => "vendorId",
            SuggestionField::Unsupported => "unsupported",
        }
    }
}

/// What is already known about the material when asking for a suggestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestionContext {
    pub description: String,
    pub material_type: String,
    pub material_code: String,
    pub category: String,
}

/// A material as typed into the entry form, all fields optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialEntry {
    #[serde(alias = "material")]
    pub material_code: Option<String>,
    #[serde(alias = "materialDescription")]
    pub description: Option<String>,
    pub material_type: Option<String>,
    pub material_group: Option<String>,
    #[serde(alias = "baseUnitOfMeasure")]
    pub unit_of_measure: Option<String>,
    pub industry_sector: Option<String>,
    pub plant_code: Option<String>,
    pub vendor_id: Option<String>,
    pub manufacturer_id: Option<String>,
    pub category: Option<String>,
    pub base_price: Option<f64>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl MaterialEntry {
    pub fn code(&self) -> Option<&str> {
        non_blank(&self.material_code)
    }

    /// The description, falling back to the material code like the entry form does.
    pub fn effective_description(&self) -> &str {
        non_blank(&self.description)
            .or_else(|| self.code())
            .unwrap_or("")
    }

    pub fn material_type(&self) -> Option<&str> {
        non_blank(&self.material_type)
    }

    pub fn material_group(&self) -> Option<&str> {
        non_blank(&self.material_group)
    }

    pub fn vendor_id(&self) -> Option<&str> {
        non_blank(&self.vendor_id)
    }

    pub fn manufacturer_id(&self) -> Option<&str> {
        non_blank(&self.manufacturer_id)
    }

    pub fn category(&self) -> Option<&str> {
        non_blank(&self.category)
    }

    pub fn suggestion_context(&self) -> SuggestionContext {
        SuggestionContext {
            description: self.effective_description().to_string(),
            material_type: self.material_type().unwrap_or_default().to_string(),
            material_code: self.code().unwrap_or_default().to_string(),
            category: self.category().unwrap_or_default().to_string(),
        }
    }
}

/// Suggestions for every analyzed field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldSuggestions {
    pub base_unit_of_measure: Vec<String>,
    pub material_type: Vec<String>,
    pub industry_sector: Vec<String>,
    pub material_group: Vec<String>,
}

impl FieldSuggestions {
    pub fn get(&self, field: SuggestionField) -> &[String] {
        match field {
            SuggestionField::BaseUnitOfMeasure => &self.base_unit_of_measure,
            SuggestionField::MaterialType => &self.material_type,
            SuggestionField::IndustrySector => &self.industry_sector,
            SuggestionField::MaterialGroup => &self.material_group,
            SuggestionField::VendorId | SuggestionField::Unsupported => &[],
        }
    }
}

/// Full result of analysing one entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub suggestions: FieldSuggestions,
    pub validations: Vec<ValidationResult>,
    pub risk_score: u8,
    pub duplicates: Vec<DuplicateMatch>,
}
