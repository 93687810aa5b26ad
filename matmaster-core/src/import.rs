//! Bulk import of client master data from CSV or JSON uploads.
//!
//! Files are read into loose JSON objects first so both formats share one
//! set of typed row definitions. A file is accepted only when every row
//! converts; otherwise nothing is imported.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::{ImportError, RowError};
use crate::store::DataStore;
use crate::types::{Manufacturer, Material, MaterialStatus, Vendor};

/// Which collection an upload replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    Materials,
    Vendors,
    Manufacturers,
}

impl fmt::Display for ImportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImportKind::Materials => "materials",
            ImportKind::Vendors => "vendors",
            ImportKind::Manufacturers => "manufacturers",
        };
        f.write_str(name)
    }
}

impl FromStr for ImportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "materials" => Ok(ImportKind::Materials),
            "vendors" => Ok(ImportKind::Vendors),
            "manufacturers" => Ok(ImportKind::Manufacturers),
            other => Err(format!("Unknown import kind: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Json,
}

impl FileFormat {
    /// Detect the format from the file extension, then the content type.
    pub fn detect(file_name: Option<&str>, content_type: Option<&str>) -> Result<Self, ImportError> {
        let extension = file_name
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match (extension.as_deref(), content_type) {
            (Some("csv"), _) => Ok(FileFormat::Csv),
            (Some("json"), _) => Ok(FileFormat::Json),
            (None, Some(ct)) if ct.contains("csv") => Ok(FileFormat::Csv),
            (None, Some(ct)) if ct.contains("json") => Ok(FileFormat::Json),
            _ => Err(ImportError::UnsupportedFormat(
                file_name.or(content_type).unwrap_or("unknown").to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub kind: ImportKind,
    pub records_imported: usize,
    pub errors: Vec<String>,
}

/// Parsed records, ready to replace a client collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportedRecords {
    Materials(Vec<Material>),
    Vendors(Vec<Vendor>),
    Manufacturers(Vec<Manufacturer>),
}

impl ImportedRecords {
    pub fn kind(&self) -> ImportKind {
        match self {
            ImportedRecords::Materials(_) => ImportKind::Materials,
            ImportedRecords::Vendors(_) => ImportKind::Vendors,
            ImportedRecords::Manufacturers(_) => ImportKind::Manufacturers,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ImportedRecords::Materials(records) => records.len(),
            ImportedRecords::Vendors(records) => records.len(),
            ImportedRecords::Manufacturers(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn read_csv(bytes: &[u8]) -> Result<Vec<Map<String, Value>>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .filter(|(_, value)| !value.is_empty())
            .map(|(header, value)| (header.to_string(), Value::String(value.to_string())))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

fn read_json(bytes: &[u8]) -> Result<Vec<Map<String, Value>>, ImportError> {
    let Value::Array(items) = serde_json::from_slice::<Value>(bytes)? else {
        return Err(ImportError::NotAnArray);
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(row) => Ok(row),
            _ => Err(ImportError::NotAnArray),
        })
        .collect()
}

/// Parse an uploaded file into typed records.
pub fn parse_records(
    kind: ImportKind,
    format: FileFormat,
    bytes: &[u8],
) -> Result<ImportedRecords, ImportError> {
    let rows = match format {
        FileFormat::Csv => read_csv(bytes)?,
        FileFormat::Json => read_json(bytes)?,
    };
    if rows.is_empty() {
        return Err(ImportError::Empty);
    }

    let records = match kind {
        ImportKind::Materials => ImportedRecords::Materials(convert_rows::<MaterialRow, _>(rows)?),
        ImportKind::Vendors => ImportedRecords::Vendors(convert_rows::<VendorRow, _>(rows)?),
        ImportKind::Manufacturers => {
            ImportedRecords::Manufacturers(convert_rows::<ManufacturerRow, _>(rows)?)
        }
    };
    Ok(records)
}

/// Parse an upload and, if every row is valid, replace the client collection
/// and switch reads to client data.
pub async fn import_upload(
    store: &DataStore,
    kind: ImportKind,
    format: FileFormat,
    bytes: &[u8],
) -> Result<ImportReport, ImportError> {
    let records = parse_records(kind, format, bytes)?;
    let records_imported = records.len();

    store.import_records(records).await;

    Ok(ImportReport {
        kind,
        records_imported,
        errors: Vec::new(),
    })
}

/// A row type that turns into a record given its 1-based row number.
trait ImportRow: DeserializeOwned {
    type Record;

    fn into_record(self, row: usize) -> Result<Self::Record, String>;
}

fn convert_rows<R: ImportRow<Record = T>, T>(
    rows: Vec<Map<String, Value>>,
) -> Result<Vec<T>, ImportError> {
    let mut records = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();

    for (index, row) in rows.into_iter().enumerate() {
        let row_number = index + 1;
        let converted = serde_json::from_value::<R>(Value::Object(row))
            .map_err(|e| e.to_string())
            .and_then(|r| r.into_record(row_number));
        match converted {
            Ok(record) => records.push(record),
            Err(message) => errors.push(RowError {
                row: row_number,
                message,
            }),
        }
    }

    if errors.is_empty() {
        Ok(records)
    } else {
        Err(ImportError::InvalidRows(errors))
    }
}

fn required(value: Option<String>, name: &str) -> Result<String, String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| format!("missing required field '{}'", name))
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(serde_json::Number),
    Bool(bool),
    Text(String),
}

/// Accept a string or a bare JSON number, e.g. vendor ids typed as numbers.
fn flexible_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Scalar>::deserialize(d)? {
        None => None,
        Some(Scalar::Number(n)) => Some(n.to_string()),
        Some(Scalar::Bool(b)) => Some(b.to_string()),
        Some(Scalar::Text(t)) => Some(t),
    })
}

/// Accept a number or a numeric string; blank means absent.
fn flexible_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    match Option::<Scalar>::deserialize(d)? {
        None | Some(Scalar::Bool(_)) => Ok(None),
        Some(Scalar::Number(n)) => Ok(n.as_f64()),
        Some(Scalar::Text(t)) if t.trim().is_empty() => Ok(None),
        Some(Scalar::Text(t)) => t
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid number '{}'", t))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrText {
    List(Vec<String>),
    Text(String),
}

/// Accept a JSON array or a `;`/`|`-separated string.
fn string_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    let items: Vec<String> = match Option::<ListOrText>::deserialize(d)? {
        None => Vec::new(),
        Some(ListOrText::List(items)) => items,
        Some(ListOrText::Text(text)) => text.split([';', '|']).map(str::to_string).collect(),
    };
    Ok(items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect())
}

fn parse_status(value: Option<String>) -> Result<MaterialStatus, String> {
    let Some(value) = value.map(|v| v.trim().to_lowercase()).filter(|v| !v.is_empty()) else {
        return Ok(MaterialStatus::Approved);
    };
    match value.as_str() {
        "pending" => Ok(MaterialStatus::Pending),
        "approved" => Ok(MaterialStatus::Approved),
        "rejected" => Ok(MaterialStatus::Rejected),
        other => Err(format!("invalid status '{}'", other)),
    }
}

fn parse_created_at(value: Option<String>) -> Result<DateTime<Utc>, String> {
    let Some(value) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        return Ok(Utc::now());
    };
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(&value) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid date '{}'", value))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct MaterialRow {
    #[serde(alias = "code", deserialize_with = "flexible_string")]
    material_code: Option<String>,
    description: Option<String>,
    material_type: Option<String>,
    #[serde(alias = "plant", deserialize_with = "flexible_string")]
    plant_code: Option<String>,
    #[serde(alias = "vendor", deserialize_with = "flexible_string")]
    vendor_id: Option<String>,
    #[serde(alias = "manufacturer", deserialize_with = "flexible_string")]
    manufacturer_id: Option<String>,
    #[serde(alias = "unit")]
    unit_of_measure: Option<String>,
    category: Option<String>,
    #[serde(alias = "price", deserialize_with = "flexible_f64")]
    base_price: Option<f64>,
    created_at: Option<String>,
    status: Option<String>,
}

impl ImportRow for MaterialRow {
    type Record = Material;

    fn into_record(self, row: usize) -> Result<Material, String> {
        Ok(Material {
            id: format!("client_{}", row),
            material_code: or_default(self.material_code, &format!("MAT{}", row)),
            description: required(self.description, "description")?,
            material_type: or_default(self.material_type, "MATERIAL"),
            plant_code: or_default(self.plant_code, "P001"),
            vendor_id: or_default(self.vendor_id, "200001"),
            manufacturer_id: or_default(self.manufacturer_id, "200101"),
            unit_of_measure: or_default(self.unit_of_measure, "PCS"),
            category: or_default(self.category, "GENERAL"),
            base_price: self.base_price,
            created_at: parse_created_at(self.created_at)?,
            status: parse_status(self.status)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct VendorRow {
    #[serde(alias = "code", alias = "vendorCode", deserialize_with = "flexible_string")]
    id: Option<String>,
    #[serde(alias = "vendorName")]
    name: Option<String>,
    #[serde(deserialize_with = "string_list")]
    category: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    linked_manufacturers: Vec<String>,
}

impl ImportRow for VendorRow {
    type Record = Vendor;

    fn into_record(self, _row: usize) -> Result<Vendor, String> {
        let category = if self.category.is_empty() {
            vec!["GENERAL".to_string()]
        } else {
            self.category
        };
        Ok(Vendor::new(
            required(self.id, "id")?,
            or_default(self.name, "Unknown Vendor"),
            category,
            self.linked_manufacturers,
        ))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ManufacturerRow {
    #[serde(alias = "code", alias = "manufacturerCode", deserialize_with = "flexible_string")]
    id: Option<String>,
    #[serde(alias = "manufacturerName")]
    name: Option<String>,
    #[serde(deserialize_with = "string_list")]
    linked_vendors: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    certifications: Vec<String>,
}

impl ImportRow for ManufacturerRow {
    type Record = Manufacturer;

    fn into_record(self, _row: usize) -> Result<Manufacturer, String> {
        let id = required(self.id, "id")?;
        Ok(Manufacturer {
            code: id.clone(),
            id,
            name: or_default(self.name, "Unknown Manufacturer"),
            linked_vendors: self.linked_vendors,
            certifications: self.certifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataSource;

    #[test]
    fn test_detect_format() {
        assert_eq!(FileFormat::detect(Some("v.CSV"), None).unwrap(), FileFormat::Csv);
        assert_eq!(
            FileFormat::detect(None, Some("application/json")).unwrap(),
            FileFormat::Json
        );
        assert!(matches!(
            FileFormat::detect(Some("v.xlsx"), None),
            Err(ImportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_csv_vendors_with_aliases_and_lists() {
        let csv = "vendorCode,vendorName,category,linkedManufacturers\n\
                   200900,\"Acme, Inc\",STEEL;METAL,200101|200103\n\
                   100900,Legacy Co,,\n";
        let records = parse_records(ImportKind::Vendors, FileFormat::Csv, csv.as_bytes()).unwrap();
        let ImportedRecords::Vendors(vendors) = records else {
            panic!("expected vendors");
        };
        assert_eq!(vendors.len(), 2);
        assert_eq!(vendors[0].name, "Acme, Inc");
        assert_eq!(vendors[0].category, vec!["STEEL", "METAL"]);
        assert_eq!(vendors[0].linked_manufacturers, vec!["200101", "200103"]);
        assert!(vendors[0].is_qualified);
        assert!(!vendors[1].is_qualified);
        assert_eq!(vendors[1].category, vec!["GENERAL"]);
    }

    #[test]
    fn test_json_materials_with_defaults() {
        let json = r#"[
            {"code": "STL010", "description": "Steel Plate 5mm", "price": "12.5"},
            {"materialCode": "CEM010", "description": "Cement", "basePrice": 4, "status": "Pending",
             "createdAt": "2024-02-01"}
        ]"#;
        let records =
            parse_records(ImportKind::Materials, FileFormat::Json, json.as_bytes()).unwrap();
        let ImportedRecords::Materials(materials) = records else {
            panic!("expected materials");
        };
        assert_eq!(materials[0].id, "client_1");
        assert_eq!(materials[0].material_code, "STL010");
        assert_eq!(materials[0].base_price, Some(12.5));
        assert_eq!(materials[0].plant_code, "P001");
        assert_eq!(materials[0].status, MaterialStatus::Approved);
        assert_eq!(materials[1].base_price, Some(4.0));
        assert_eq!(materials[1].status, MaterialStatus::Pending);
        assert_eq!(materials[1].created_at.to_rfc3339(), "2024-02-01T00:00:00+00:00");
    }

    #[test]
    fn test_numeric_json_ids() {
        let json = r#"[{"id": 200123, "name": "Numeric Co"}]"#;
        let records = parse_records(ImportKind::Vendors, FileFormat::Json, json.as_bytes()).unwrap();
        let ImportedRecords::Vendors(vendors) = records else {
            panic!("expected vendors");
        };
        assert_eq!(vendors[0].id, "200123");
        assert!(vendors[0].is_qualified);
    }

    #[test]
    fn test_any_bad_row_rejects_file() {
        let csv = "id,name\n200101,Good\n,Missing id\n200103,Fine\n";
        let err = parse_records(ImportKind::Manufacturers, FileFormat::Csv, csv.as_bytes())
            .unwrap_err();
        let ImportError::InvalidRows(rows) = &err else {
            panic!("expected row errors, got {err:?}");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row, 2);
        assert_eq!(err.details(), vec!["row 2: missing required field 'id'"]);
    }

    #[test]
    fn test_bad_values_are_row_errors() {
        let json = r#"[{"description": "Rod", "price": "cheap"}, {"description": "Bar", "status": "lost"}]"#;
        let err = parse_records(ImportKind::Materials, FileFormat::Json, json.as_bytes())
            .unwrap_err();
        let ImportError::InvalidRows(rows) = err else {
            panic!("expected row errors");
        };
        assert_eq!(rows.iter().map(|r| r.row).collect::<Vec<_>>(), vec![1, 2]);
        assert!(rows[1].message.contains("lost"));
    }

    #[test]
    fn test_json_must_be_array_of_objects() {
        for body in [r#"{"id": "1"}"#, r#"["1"]"#] {
            let err = parse_records(ImportKind::Vendors, FileFormat::Json, body.as_bytes())
                .unwrap_err();
            assert!(matches!(err, ImportError::NotAnArray));
        }
        let err = parse_records(ImportKind::Vendors, FileFormat::Json, b"[]").unwrap_err();
        assert!(matches!(err, ImportError::Empty));
    }

    #[tokio::test]
    async fn test_import_switches_to_client_data() {
        let store = DataStore::default();
        let csv = "id,name\n200900,Only Vendor\n";
        let report = import_upload(&store, ImportKind::Vendors, FileFormat::Csv, csv.as_bytes())
            .await
            .unwrap();
        assert_eq!(report.records_imported, 1);
        assert_eq!(store.source().await, DataSource::Client);
        assert_eq!(store.snapshot().await.vendors.len(), 1);
    }
}
