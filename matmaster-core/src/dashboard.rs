//! Demo dashboard figures and validation history.
//!
//! Nothing here is computed from real submissions.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::types::MaterialStatus;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_entries: u32,
    pub duplicates_prevented: u32,
    pub validation_errors: u32,
    pub risk_reduction_percentage: u32,
    pub qualified_vendor_usage: f64,
    pub avg_risk_score: f64,
    pub duplicate_detection: Vec<MonthlyDuplicates>,
    pub validation_types: Vec<ValidationTypeShare>,
    pub risk_trend: Vec<WeeklyRisk>,
    pub vendor_qualification: Vec<VendorQualificationShare>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MonthlyDuplicates {
    pub month: &'static str,
    pub duplicates: u32,
    pub prevented: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationTypeShare {
    pub name: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRisk {
    pub week: &'static str,
    pub avg_risk: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VendorQualificationShare {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub count: u32,
    pub percentage: f64,
}

pub fn dashboard_stats() -> DashboardStats {
    let month = |month, duplicates, prevented| MonthlyDuplicates {
        month,
        duplicates,
        prevented,
    };
    let week = |week, avg_risk| WeeklyRisk { week, avg_risk };

    DashboardStats {
        total_entries: 1247,
        duplicates_prevented: 89,
        validation_errors: 156,
        risk_reduction_percentage: 67,
        qualified_vendor_usage: 94.2,
        avg_risk_score: 23.5,
        duplicate_detection: vec![
            month("Jan", 12, 11),
            month("Feb", 15, 14),
            month("Mar", 8, 8),
            month("Apr", 22, 20),
            month("May", 18, 17),
            month("Jun", 9, 9),
        ],
        validation_types: vec![
            ValidationTypeShare { name: "Field Validation", value: 45 },
            ValidationTypeShare { name: "Duplicate Detection", value: 30 },
            ValidationTypeShare { name: "Vendor Qualification", value: 15 },
            ValidationTypeShare { name: "Linkage Validation", value: 10 },
        ],
        risk_trend: vec![
            week("W1", 35),
            week("W2", 28),
            week("W3", 32),
            week("W4", 24),
            week("W5", 19),
            week("W6", 23),
        ],
        vendor_qualification: vec![
            VendorQualificationShare { kind: "Qualified (200xxx)", count: 156, percentage: 94.2 },
            VendorQualificationShare { kind: "Unqualified (100xxx)", count: 9, percentage: 5.8 },
        ],
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    pub material_code: String,
    pub description: String,
    pub submitted_by: String,
    pub timestamp: DateTime<Utc>,
    pub status: MaterialStatus,
    pub risk_score: u8,
    pub issues: Vec<String>,
    pub duplicates_found: u32,
    pub ai_actions: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum HistorySort {
    #[default]
    Timestamp,
    RiskScore,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// Case-insensitive match on code, description or submitter
    pub search: Option<String>,
    /// Omit for every status
    pub status: Option<MaterialStatus>,
    pub sort: HistorySort,
}

#[allow(clippy::too_many_arguments)]
fn history_item(
    id: &str,
    code: &str,
    description: &str,
    submitted_by: &str,
    (day, hour, minute): (u32, u32, u32),
    status: MaterialStatus,
    risk_score: u8,
    issues: &[&str],
    duplicates_found: u32,
    ai_actions: &[&str],
) -> HistoryItem {
    HistoryItem {
        id: id.to_string(),
        material_code: code.to_string(),
        description: description.to_string(),
        submitted_by: submitted_by.to_string(),
        timestamp: Utc
            .with_ymd_and_hms(2024, 1, day, hour, minute, 0)
            .single()
            .unwrap_or_default(),
        status,
        risk_score,
        issues: issues.iter().map(|s| s.to_string()).collect(),
        duplicates_found,
        ai_actions: ai_actions.iter().map(|s| s.to_string()).collect(),
    }
}

fn mock_history() -> Vec<HistoryItem> {
    use MaterialStatus::*;
    vec![
        history_item("1", "STL003", "Steel Rod 8mm", "John Doe", (15, 10, 30), Approved, 15, &[], 0,
            &["Auto-suggested material type: ROD", "Validated vendor qualification"]),
        history_item("2", "CEM002", "Portland Cement 25kg", "Jane Smith", (15, 9, 15), Rejected, 75,
            &["Potential duplicate found", "Invalid vendor ID (100 series)"], 1,
            &["Blocked duplicate entry", "Suggested qualified vendor"]),
        history_item("3", "PIP001", "PVC Pipe 6 inch", "Mike Johnson", (15, 8, 45), Pending, 35,
            &["Vendor-manufacturer linkage warning"], 0,
            &["Suggested unit of measure: M", "Flagged linkage issue"]),
        history_item("4", "STL004", "10mm Steel Rod", "Sarah Wilson", (14, 16, 20), Rejected, 85,
            &["High similarity with existing material", "Missing required fields"], 2,
            &["Detected 89% similarity", "Prevented duplicate creation"]),
        history_item("5", "ELE001", "Electrical Cable 2.5mm", "Tom Brown", (14, 14, 10), Approved, 22, &[], 0,
            &["Auto-completed category: ELECTRICAL", "Validated all fields"]),
    ]
}

/// Filtered and sorted validation history, newest or riskiest first.
pub fn validation_history(query: &HistoryQuery) -> Vec<HistoryItem> {
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_lowercase();

    let mut items: Vec<HistoryItem> = mock_history()
        .into_iter()
        .filter(|item| {
            search.is_empty()
                || item.material_code.to_lowercase().contains(&search)
                || item.description.to_lowercase().contains(&search)
                || item.submitted_by.to_lowercase().contains(&search)
        })
        .filter(|item| query.status.map_or(true, |status| item.status == status))
        .collect();

    match query.sort {
        HistorySort::Timestamp => items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        HistorySort::RiskScore => items.sort_by(|a, b| b.risk_score.cmp(&a.risk_score)),
    }
    items
}
