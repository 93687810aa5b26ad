//! Keyword-overlap suggestion scorer.
//!
//! Every candidate scores one point per keyword found as a substring of the
//! lowercased description, plus fixed bonuses for compatibility with an
//! already-chosen material type. Candidates scoring zero are dropped and the
//! best two survive, ties keeping table order.

use crate::catalog::{
    self, GROUP_DOMAIN_TERMS, INDUSTRY_KEYWORDS, MATERIAL_KEYWORDS, SECTOR_TYPE_AFFINITY,
    UNIT_KEYWORDS, UNIT_TYPE_AFFINITY,
};
use crate::store::DataSet;
use crate::types::{SuggestionContext, SuggestionField};

/// Maximum number of suggestions returned per field.
pub const MAX_SUGGESTIONS: usize = 2;

const CODE_PREFIX_BONUS: u32 = 2;
const UNIT_AFFINITY_BONUS: u32 = 2;
const SECTOR_AFFINITY_BONUS: u32 = 3;
const GROUP_TERM_BONUS: u32 = 3;

/// Local suggestions for `field`, computed from the static catalog and `data`.
///
/// Material types are scored on the description alone.
pub fn suggest(field: SuggestionField, context: &SuggestionContext, data: &DataSet) -> Vec<String> {
    score_field(field, context, data, "")
}

/// Like [`suggest`], but material types also take the entry's material code
/// prefix into account. Used when analyzing a whole entry.
pub fn suggest_with_code_hint(
    field: SuggestionField,
    context: &SuggestionContext,
    data: &DataSet,
) -> Vec<String> {
    score_field(field, context, data, &context.material_code)
}

fn score_field(
    field: SuggestionField,
    context: &SuggestionContext,
    data: &DataSet,
    material_code: &str,
) -> Vec<String> {
    let description = context.description.to_lowercase();
    let material_type = context.material_type.as_str();

    match field {
        SuggestionField::MaterialType => suggest_material_type(&description, material_code),
        SuggestionField::BaseUnitOfMeasure => suggest_base_unit(&description, material_type),
        SuggestionField::IndustrySector => suggest_industry_sector(&description, material_type),
        SuggestionField::MaterialGroup => suggest_material_group(&description, material_type),
        SuggestionField::VendorId => suggest_vendors(&context.category, data),
        SuggestionField::Unsupported => Vec::new(),
    }
}

fn keyword_hits(description: &str, keywords: &[&str]) -> u32 {
    keywords.iter().filter(|k| description.contains(*k)).count() as u32
}

fn has_affinity(table: &[(&'static str, &[&str])], material_type: &str, code: &str) -> bool {
    catalog::lookup(table, material_type)
        .map(|codes| codes.contains(&code))
        .unwrap_or(false)
}

/// Keep positive scores, order by score descending (stable), take the best two.
fn top_ranked<T>(mut scored: Vec<(T, u32)>) -> Vec<T> {
    scored.retain(|(_, score)| *score > 0);
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(candidate, _)| candidate)
        .collect()
}

pub fn suggest_material_type(description: &str, material_code: &str) -> Vec<String> {
    let code = material_code.to_lowercase();
    let scored: Vec<(String, u32)> = MATERIAL_KEYWORDS
        .iter()
        .map(|(type_code, keywords)| {
            let mut score = keyword_hits(description, keywords);
            // "ZSTL" -> "stl": codes such as STL001 hint at the type.
            let stem = type_code.to_lowercase();
            let stem = stem.get(1..).unwrap_or_default();
            if !code.is_empty() && !stem.is_empty() && code.starts_with(stem) {
                score += CODE_PREFIX_BONUS;
            }
            (type_code.to_string(), score)
        })
        .collect();
    top_ranked(scored)
}

pub fn suggest_base_unit(description: &str, material_type: &str) -> Vec<String> {
    let scored: Vec<(String, u32)> = UNIT_KEYWORDS
        .iter()
        .map(|(unit, keywords)| {
            let mut score = keyword_hits(description, keywords);
            if has_affinity(UNIT_TYPE_AFFINITY, material_type, unit) {
                score += UNIT_AFFINITY_BONUS;
            }
            (unit.to_string(), score)
        })
        .collect();
    top_ranked(scored)
}

pub fn suggest_industry_sector(description: &str, material_type: &str) -> Vec<String> {
    let scored: Vec<(String, u32)> = INDUSTRY_KEYWORDS
        .iter()
        .map(|(sector, keywords)| {
            let mut score = keyword_hits(description, keywords);
            if has_affinity(SECTOR_TYPE_AFFINITY, material_type, sector) {
                score += SECTOR_AFFINITY_BONUS;
            }
            (sector.to_string(), score)
        })
        .collect();
    top_ranked(scored)
}

/// Material groups come back as `"CODE (LABEL)"`.
pub fn suggest_material_group(description: &str, material_type: &str) -> Vec<String> {
    let scored: Vec<(String, u32)> = catalog::material_groups_for(material_type)
        .into_iter()
        .map(|group| {
            let label_words = group.description.to_lowercase();
            let mut score = label_words
                .split(' ')
                .filter(|word| description.contains(word))
                .count() as u32;
            for (term, label_term) in GROUP_DOMAIN_TERMS {
                if description.contains(term) && group.description.contains(label_term) {
                    score += GROUP_TERM_BONUS;
                }
            }
            (format!("{} ({})", group.code, group.description), score)
        })
        .collect();
    top_ranked(scored)
}

/// Qualified vendors serving `category`.
pub fn suggest_vendors(category: &str, data: &DataSet) -> Vec<String> {
    data.vendors
        .iter()
        .filter(|v| v.is_qualified && v.serves_category(category))
        .map(|v| v.id.clone())
        .collect()
}
