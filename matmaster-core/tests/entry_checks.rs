//! End-to-end checks of the entry assistant rules against the demo data set.

use matmaster_core::import::{import_upload, FileFormat, ImportKind};
use matmaster_core::risk::RiskWeights;
use matmaster_core::suggest::suggest_material_type;
use matmaster_core::validate::{validate_material_group, validate_vendor};
use matmaster_core::{duplicates, DataSet, DataStore, MatchType, ValidationStatus};

#[test]
fn test_cement_prefers_chemical_over_unrelated_types() {
    let types = suggest_material_type("cement", "");
    assert_eq!(types[0], "ZCHM");
    assert!(!types.contains(&"ZDRL".to_string()));
    assert!(!types.contains(&"ZELE".to_string()));
}

#[test]
fn test_vendor_must_exist_and_be_qualified() {
    let data = DataSet::mock();
    assert_eq!(validate_vendor("100001", None, &data).status, ValidationStatus::Error);
    assert_eq!(validate_vendor("123456", None, &data).status, ValidationStatus::Error);
    assert_eq!(validate_vendor("200001", None, &data).status, ValidationStatus::Valid);
}

#[test]
fn test_material_group_code_format() {
    assert_eq!(
        validate_material_group("43JDX (SELF INDEXING GUIDE)").status,
        ValidationStatus::Valid
    );
    assert_eq!(validate_material_group("JDX43").status, ValidationStatus::Warning);
}

#[test]
fn test_risk_is_monotone_and_capped() {
    let weights = RiskWeights::default();
    let mut previous = 0;
    for errors in 0..6 {
        for warnings in 0..6 {
            let score = weights.score(errors, warnings, 0);
            assert!(score <= 100);
            assert!(score >= weights.score(errors.saturating_sub(1), warnings, 0));
            assert!(score >= weights.score(errors, warnings.saturating_sub(1), 0));
            if warnings == 0 {
                assert!(score >= previous);
                previous = score;
            }
        }
    }
    assert_eq!(weights.score(10, 10, 10), 100);
}

#[test]
fn test_duplicate_detection() {
    let data = DataSet::mock();
    let matches = duplicates::find_duplicates("Electrical Cable 2.5mm", &data.materials);
    assert!(matches[0].similarity >= 0.9);
    assert_eq!(matches[0].match_type, MatchType::Exact);

    assert!(duplicates::find_duplicates("Safety goggles", &data.materials).is_empty());
}

#[tokio::test]
async fn test_reimport_replaces_previous_contents() {
    let store = DataStore::default();
    let first = "id,name,category\n200901,First,STEEL\n200902,Second,STEEL\n";
    let second = "id,name,category\n200903,Third,CEMENT\n";

    import_upload(&store, ImportKind::Vendors, FileFormat::Csv, first.as_bytes())
        .await
        .unwrap();
    import_upload(&store, ImportKind::Vendors, FileFormat::Csv, second.as_bytes())
        .await
        .unwrap();
    import_upload(&store, ImportKind::Vendors, FileFormat::Csv, second.as_bytes())
        .await
        .unwrap();

    let ids: Vec<String> = store
        .snapshot()
        .await
        .vendors
        .iter()
        .map(|v| v.id.clone())
        .collect();
    assert_eq!(ids, vec!["200903"]);
}
