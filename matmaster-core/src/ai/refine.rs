//! Parsing model replies and reconciling them with local suggestions.

use std::sync::LazyLock;

use regex::Regex;

use crate::suggest::MAX_SUGGESTIONS;
use crate::types::SuggestionField;

static GROUP_WITH_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d{2}[A-Z]{3}(\s*\([^)]+\))?").expect("Invalid material group regex")
});
static LEADING_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z0-9]+").expect("Invalid code regex"));

/// Pull at most two distinct candidate values out of a free-text reply.
///
/// Each non-blank line contributes one candidate: the first material group
/// code (with its label, if present) for material groups, otherwise the
/// leading alphanumeric token. Lines without a match contribute themselves.
pub fn parse_ai_response(content: &str, field: SuggestionField) -> Vec<String> {
    let pattern: &Regex = match field {
        SuggestionField::MaterialGroup => &GROUP_WITH_LABEL,
        _ => &LEADING_CODE,
    };

    let mut suggestions: Vec<String> = Vec::new();
    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let candidate = pattern
            .find(line)
            .map(|m| m.as_str().trim())
            .unwrap_or(line)
            .to_string();
        if !suggestions.contains(&candidate) {
            suggestions.push(candidate);
        }
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
    }
    suggestions
}

/// Keep model suggestions that contain, or are contained by, a local one.
///
/// Falls back to `local` when nothing overlaps.
pub fn refine_suggestions(ai: Vec<String>, local: &[String]) -> Vec<String> {
    let kept: Vec<String> = ai
        .into_iter()
        .filter(|suggestion| {
            let suggestion = suggestion.to_lowercase();
            local.iter().any(|l| {
                let l = l.to_lowercase();
                l.contains(&suggestion) || suggestion.contains(&l)
            })
        })
        .collect();

    if kept.is_empty() {
        local.to_vec()
    } else {
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_leading_codes() {
        let parsed = parse_ai_response("ZCEM - cement\n\nZCHM\nZDRL", SuggestionField::MaterialType);
        assert_eq!(parsed, strings(&["ZCEM", "ZCHM"]));
    }

    #[test]
    fn test_parse_deduplicates() {
        let parsed = parse_ai_response("BAG\nBAG (Bag)\nKG", SuggestionField::BaseUnitOfMeasure);
        assert_eq!(parsed, strings(&["BAG", "KG"]));
    }

    #[test]
    fn test_parse_material_groups_with_labels() {
        let parsed = parse_ai_response(
            "1. 43MNP (DRILL BITS)\n2. 43kLm",
            SuggestionField::MaterialGroup,
        );
        assert_eq!(parsed, strings(&["43MNP (DRILL BITS)", "43kLm"]));
    }

    #[test]
    fn test_parse_unmatched_line_kept_whole() {
        let parsed = parse_ai_response("- none fit", SuggestionField::IndustrySector);
        assert_eq!(parsed, strings(&["- none fit"]));
    }

    #[test]
    fn test_refine_intersects_by_containment() {
        let local = strings(&["43MNP (DRILL BITS)", "43KLM (DRILLING TOOLS)"]);
        let refined = refine_suggestions(strings(&["43mnp", "45XYZ"]), &local);
        assert_eq!(refined, strings(&["43mnp"]));
    }

    #[test]
    fn test_refine_falls_back_to_local() {
        let local = strings(&["ZCHM", "ZCEM"]);
        assert_eq!(refine_suggestions(strings(&["ZELE"]), &local), local);
        assert_eq!(refine_suggestions(vec![], &local), local);
    }
}
