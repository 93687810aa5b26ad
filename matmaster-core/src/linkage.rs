use crate::store::DataSet;
use crate::types::ValidationResult;

const FIELD: &str = "linkage";

/// Check that the vendor lists the manufacturer among its linked manufacturers.
///
/// Only the vendor's side of the relationship is consulted.
pub fn check_vendor_manufacturer_link(
    vendor_id: &str,
    manufacturer_id: &str,
    data: &DataSet,
) -> ValidationResult {
    let (Some(vendor), Some(_)) = (data.vendor(vendor_id), data.manufacturer(manufacturer_id))
    else {
        return ValidationResult::error(FIELD, "Vendor or manufacturer not found", None);
    };

    if vendor.linked_manufacturers.iter().any(|id| id == manufacturer_id) {
        return ValidationResult::valid(FIELD, "Valid vendor-manufacturer relationship");
    }

    let linked: Vec<&str> = data
        .manufacturers
        .iter()
        .filter(|m| vendor.linked_manufacturers.contains(&m.id))
        .map(|m| m.name.as_str())
        .collect();
    let suggestion = (!linked.is_empty())
        .then(|| format!("Suggested manufacturers for this vendor: {}", linked.join(", ")));

    ValidationResult::warning(FIELD, "Vendor and manufacturer are not linked", suggestion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidationStatus;

    #[test]
    fn test_linked_pair_is_valid() {
        let data = DataSet::mock();
        let result = check_vendor_manufacturer_link("200002", "200103", &data);
        assert_eq!(result.status, ValidationStatus::Valid);
    }

    #[test]
    fn test_unlinked_pair_lists_linked_names() {
        let data = DataSet::mock();
        let result = check_vendor_manufacturer_link("200002", "200104", &data);
        assert_eq!(result.status, ValidationStatus::Warning);
        assert_eq!(
            result.suggestion.as_deref(),
            Some("Suggested manufacturers for this vendor: Steel Works International, Pipe Manufacturing Corp")
        );
    }

    #[test]
    fn test_unlinked_without_known_links_has_no_suggestion() {
        // 100001 links only to 100101, which is not in the data set.
        let data = DataSet::mock();
        let result = check_vendor_manufacturer_link("100001", "200101", &data);
        assert_eq!(result.status, ValidationStatus::Warning);
        assert!(result.suggestion.is_none());
    }

    #[test]
    fn test_unknown_ids_are_errors() {
        let data = DataSet::mock();
        for (vendor, manufacturer) in [("999999", "200101"), ("200001", "999999")] {
            let result = check_vendor_manufacturer_link(vendor, manufacturer, &data);
            assert_eq!(result.status, ValidationStatus::Error);
        }
    }
}
