//! Field format validators.
//!
//! Each rule runs independently and reports one [`ValidationResult`]. Rules
//! never block anything; callers turn the findings into a risk score.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::linkage::check_vendor_manufacturer_link;
use crate::store::DataSet;
use crate::types::{FieldSuggestions, MaterialEntry, ValidationResult};

/// Minimum description length in characters.
pub const MIN_DESCRIPTION_LEN: usize = 5;

static SAP8_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z0-9]{8}$").expect("Invalid SAP code regex"));
static LEGACY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}\d{3}$").expect("Invalid legacy code regex"));
static MATERIAL_GROUP_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\d{2}[A-Z]{3}$").expect("Invalid material group regex"));

/// Accepted shape of a material code.
///
/// Two conventions are in use: eight SAP alphanumerics (`S1566153`) and the
/// older three letters plus three digits (`STL001`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MaterialCodeFormat {
    #[default]
    Sap8,
    Legacy,
}

impl MaterialCodeFormat {
    pub fn matches(&self, code: &str) -> bool {
        match self {
            MaterialCodeFormat::Sap8 => SAP8_CODE.is_match(code),
            MaterialCodeFormat::Legacy => LEGACY_CODE.is_match(code),
        }
    }

    fn warning(&self) -> (&'static str, &'static str) {
        match self {
            MaterialCodeFormat::Sap8 => (
                "Material code should be 8 characters long",
                "Consider using format: LETTERSNUMBERS (e.g., S1566153)",
            ),
            MaterialCodeFormat::Legacy => (
                "Material code should follow format: ABC123",
                "Consider using format: three letters and three digits (e.g., STL001)",
            ),
        }
    }

    /// A random code in this format, prefixed from the category.
    pub fn generate(&self, category: Option<&str>) -> String {
        let mut prefix: String = category
            .unwrap_or("GEN")
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .take(3)
            .collect::<String>()
            .to_uppercase();
        while prefix.len() < 3 {
            prefix.push('X');
        }
        let mut rng = rand::rng();
        match self {
            MaterialCodeFormat::Sap8 => format!("{}{}", prefix, rng.random_range(10_000..=99_999)),
            MaterialCodeFormat::Legacy => format!("{}{}", prefix, rng.random_range(100..=999)),
        }
    }
}

impl fmt::Display for MaterialCodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialCodeFormat::Sap8 => write!(f, "sap8"),
            MaterialCodeFormat::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for MaterialCodeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sap8" => Ok(MaterialCodeFormat::Sap8),
            "legacy" => Ok(MaterialCodeFormat::Legacy),
            other => Err(format!(
                "unknown material code format '{}', expected 'sap8' or 'legacy'",
                other
            )),
        }
    }
}

pub fn validate_material_code(
    code: Option<&str>,
    category: Option<&str>,
    format: MaterialCodeFormat,
) -> ValidationResult {
    const FIELD: &str = "materialCode";
    match code {
        None => ValidationResult::error(
            FIELD,
            "Material code is required",
            Some(format.generate(category)),
        ),
        Some(code) if !format.matches(code) => {
            let (message, suggestion) = format.warning();
            ValidationResult::warning(FIELD, message, Some(suggestion.to_string()))
        }
        Some(_) => ValidationResult::valid(FIELD, "Valid material code format"),
    }
}

pub fn validate_description(description: Option<&str>) -> ValidationResult {
    const FIELD: &str = "description";
    match description {
        Some(d) if d.chars().count() >= MIN_DESCRIPTION_LEN => {
            ValidationResult::valid(FIELD, "Valid description")
        }
        _ => ValidationResult::error(
            FIELD,
            format!("Description must be at least {} characters", MIN_DESCRIPTION_LEN),
            Some("Please provide a detailed material description".to_string()),
        ),
    }
}

/// Only warns; an empty suggestion list says nothing about the chosen type.
pub fn validate_material_type(material_type: &str, suggested: &[String]) -> Option<ValidationResult> {
    if suggested.is_empty() || suggested.iter().any(|s| s == material_type) {
        return None;
    }
    Some(ValidationResult::warning(
        "materialType",
        "Material type might not be optimal for this material",
        Some(format!(
            "Consider using one of the suggested types: {}",
            suggested.join(", ")
        )),
    ))
}

/// The code is the first space-separated token, e.g. `43JDX (SELF INDEXING GUIDE)`.
pub fn validate_material_group(material_group: &str) -> ValidationResult {
    const FIELD: &str = "materialGroup";
    let code = material_group.split(' ').next().unwrap_or_default();
    if MATERIAL_GROUP_CODE.is_match(code) {
        ValidationResult::valid(FIELD, "Valid material group format")
    } else {
        ValidationResult::warning(
            FIELD,
            "Material group code should follow format: 2 numbers + 3 letters",
            Some("Example format: 43JDX (SELF INDEXING GUIDE)".to_string()),
        )
    }
}

pub fn validate_vendor(vendor_id: &str, category: Option<&str>, data: &DataSet) -> ValidationResult {
    const FIELD: &str = "vendorId";
    match data.vendor(vendor_id) {
        None => ValidationResult::error(
            FIELD,
            "Vendor not found",
            Some("Select from qualified vendors list".to_string()),
        ),
        Some(vendor) if !vendor.is_qualified => ValidationResult::error(
            FIELD,
            "Only qualified vendors (200xxx series) are allowed",
            Some(suggest_qualified_vendor(category, data)),
        ),
        Some(_) => ValidationResult::valid(FIELD, "Valid qualified vendor"),
    }
}

fn suggest_qualified_vendor(category: Option<&str>, data: &DataSet) -> String {
    data.vendors
        .iter()
        .find(|v| v.is_qualified && category.map_or(true, |c| v.serves_category(c)))
        .map(|v| format!("Try vendor: {} ({})", v.name, v.id))
        .unwrap_or_else(|| "Select a qualified vendor (200xxx series)".to_string())
}

/// Run every rule that applies to `entry`.
pub fn validate_entry(
    entry: &MaterialEntry,
    suggestions: &FieldSuggestions,
    data: &DataSet,
    format: MaterialCodeFormat,
) -> Vec<ValidationResult> {
    let mut results = vec![
        validate_material_code(entry.code(), entry.category(), format),
        validate_description(entry.description.as_deref().map(str::trim)),
    ];

    if let Some(material_type) = entry.material_type() {
        results.extend(validate_material_type(material_type, &suggestions.material_type));
    }

    if let Some(group) = entry.material_group() {
        results.push(validate_material_group(group));
    }

    if let Some(vendor_id) = entry.vendor_id() {
        results.push(validate_vendor(vendor_id, entry.category(), data));
        if let Some(manufacturer_id) = entry.manufacturer_id() {
            results.push(check_vendor_manufacturer_link(vendor_id, manufacturer_id, data));
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidationStatus;

    #[test]
    fn test_sap8_format() {
        let format = MaterialCodeFormat::Sap8;
        assert!(format.matches("S1566153"));
        assert!(format.matches("s1566153"));
        assert!(!format.matches("STL001"));
        assert!(!format.matches("S15661530"));
    }

    #[test]
    fn test_legacy_format() {
        let format = MaterialCodeFormat::Legacy;
        assert!(format.matches("STL001"));
        assert!(!format.matches("stl001"));
        assert!(!format.matches("S1566153"));
    }

    #[test]
    fn test_generated_codes_pass_their_own_format() {
        for format in [MaterialCodeFormat::Sap8, MaterialCodeFormat::Legacy] {
            let code = format.generate(Some("steel"));
            assert!(code.starts_with("STE"), "{}", code);
            assert!(format.matches(&code), "{} should match {}", code, format);
        }
        assert!(MaterialCodeFormat::Legacy.generate(None).starts_with("GEN"));
        assert!(MaterialCodeFormat::Legacy
            .generate(Some("2x"))
            .starts_with("XXX"));
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("SAP8".parse(), Ok(MaterialCodeFormat::Sap8));
        assert_eq!(" legacy ".parse(), Ok(MaterialCodeFormat::Legacy));
        assert!("abc".parse::<MaterialCodeFormat>().is_err());
    }

    #[test]
    fn test_missing_code_is_error_with_suggestion() {
        let result = validate_material_code(None, Some("CEMENT"), MaterialCodeFormat::Legacy);
        assert_eq!(result.status, ValidationStatus::Error);
        assert!(result.suggestion.unwrap().starts_with("CEM"));
    }

    #[test]
    fn test_bad_code_is_warning() {
        let result = validate_material_code(Some("ABC"), None, MaterialCodeFormat::Sap8);
        assert_eq!(result.status, ValidationStatus::Warning);
    }

    #[test]
    fn test_description_length() {
        assert_eq!(validate_description(None).status, ValidationStatus::Error);
        assert_eq!(validate_description(Some("Rod")).status, ValidationStatus::Error);
        assert_eq!(validate_description(Some("Steel")).status, ValidationStatus::Valid);
    }

    #[test]
    fn test_material_group_format() {
        let valid = validate_material_group("43JDX (SELF INDEXING GUIDE)");
        assert_eq!(valid.status, ValidationStatus::Valid);
        let invalid = validate_material_group("JDX43");
        assert_eq!(invalid.status, ValidationStatus::Warning);
    }

    #[test]
    fn test_material_type_mismatch() {
        let suggested = vec!["ZCHM".to_string(), "ZCEM".to_string()];
        assert!(validate_material_type("ZCEM", &suggested).is_none());
        assert!(validate_material_type("ZDRL", &[]).is_none());
        let warning = validate_material_type("ZDRL", &suggested).unwrap();
        assert_eq!(warning.status, ValidationStatus::Warning);
        assert!(warning.suggestion.unwrap().contains("ZCHM, ZCEM"));
    }

    #[test]
    fn test_unqualified_vendor_suggests_same_category() {
        let data = DataSet::mock();
        let result = validate_vendor("100001", Some("STEEL"), &data);
        assert_eq!(result.status, ValidationStatus::Error);
        assert_eq!(
            result.suggestion.as_deref(),
            Some("Try vendor: Premium Steel Suppliers (200001)")
        );

        let result = validate_vendor("100001", Some("TEXTILES"), &data);
        assert_eq!(
            result.suggestion.as_deref(),
            Some("Select a qualified vendor (200xxx series)")
        );
    }

    #[test]
    fn test_validate_entry_runs_applicable_rules() {
        let data = DataSet::mock();
        let entry = MaterialEntry {
            material_code: Some("S1566153".to_string()),
            description: Some("Steel Rod 12mm".to_string()),
            material_group: Some("47DEF (STEEL BARS)".to_string()),
            vendor_id: Some("200001".to_string()),
            manufacturer_id: Some("200101".to_string()),
            ..Default::default()
        };
        let results = validate_entry(
            &entry,
            &FieldSuggestions::default(),
            &data,
            MaterialCodeFormat::Sap8,
        );
        let fields: Vec<&str> = results.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["materialCode", "description", "materialGroup", "vendorId", "linkage"]
        );
        assert!(results.iter().all(|r| r.status == ValidationStatus::Valid));
    }
}
