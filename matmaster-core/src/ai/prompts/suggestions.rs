//! Prompts asking the model to pick field values from the static catalog.

use crate::catalog::{self, CodeEntry, BASE_UNITS_OF_MEASURE, INDUSTRY_SECTORS, MATERIAL_TYPES};
use crate::types::{SuggestionContext, SuggestionField};

/// Prompt name used in logs and spans.
pub const SUGGESTION_PROMPT_NAME: &str = "field_suggestions";

pub const SUGGESTION_SYSTEM_PROMPT: &str = "You are an AI assistant specializing in SAP material master data. Choose the most appropriate options from the provided list based on the material description. Return only the codes/values from the list, maximum 2 suggestions.";

fn options<'a>(entries: impl IntoIterator<Item = &'a CodeEntry>) -> String {
    entries
        .into_iter()
        .map(|e| format!("{} ({})", e.code, e.description))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the user prompt for one field. Returns `None` for fields without a catalog.
pub fn render_suggestion_prompt(field: SuggestionField, context: &SuggestionContext) -> Option<String> {
    let description = &context.description;
    let material_type = &context.material_type;

    let prompt = match field {
        SuggestionField::MaterialType => format!(
            "Material description: \"{description}\"\nAvailable material types: {}\nChoose the most appropriate material type codes (maximum 2):",
            options(MATERIAL_TYPES)
        ),
        SuggestionField::BaseUnitOfMeasure => format!(
            "Material description: \"{description}\"\nMaterial type: \"{material_type}\"\nAvailable units: {}\nChoose the most appropriate unit codes (maximum 2):",
            options(BASE_UNITS_OF_MEASURE)
        ),
        SuggestionField::IndustrySector => format!(
            "Material description: \"{description}\"\nMaterial type: \"{material_type}\"\nAvailable industry sectors: {}\nChoose the most appropriate industry sector codes (maximum 2):",
            options(INDUSTRY_SECTORS)
        ),
        SuggestionField::MaterialGroup => format!(
            "Material description: \"{description}\"\nMaterial type: \"{material_type}\"\nAvailable material groups: {}\nChoose the most appropriate material group codes with descriptions (maximum 2):",
            options(catalog::material_groups_for(material_type))
        ),
        SuggestionField::VendorId | SuggestionField::Unsupported => return None,
    };
    Some(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(description: &str, material_type: &str) -> SuggestionContext {
        SuggestionContext {
            description: description.to_string(),
            material_type: material_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_material_type_prompt() {
        let prompt =
            render_suggestion_prompt(SuggestionField::MaterialType, &context("Drill bit", ""))
                .unwrap();
        assert!(prompt.contains("\"Drill bit\""));
        assert!(prompt.contains("ZDRL (Drilling Materials), ZCHM (Chemical Materials)"));
    }

    #[test]
    fn test_material_group_prompt_lists_type_groups() {
        let prompt = render_suggestion_prompt(
            SuggestionField::MaterialGroup,
            &context("Drill bit", "ZDRL"),
        )
        .unwrap();
        assert!(prompt.contains("43JDX (SELF INDEXING GUIDE)"));
        assert!(!prompt.contains("44ABC"));
    }

    #[test]
    fn test_no_prompt_for_vendor() {
        assert!(render_suggestion_prompt(SuggestionField::VendorId, &context("x", "")).is_none());
    }
}
