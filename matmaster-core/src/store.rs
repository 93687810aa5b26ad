//! In-memory master data: the built-in mock set and imported client data.
//!
//! Handlers never touch the collections directly. They take a [`DataSet`]
//! snapshot from the [`DataStore`] and work on that, so a request sees one
//! consistent view even while an import swaps collections underneath it.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use utoipa::ToSchema;

use crate::import::ImportedRecords;
use crate::types::{Manufacturer, Material, MaterialStatus, Vendor};

/// Which collections requests should read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    #[default]
    Mock,
    Client,
}

/// One consistent view of materials, vendors and manufacturers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    pub materials: Vec<Material>,
    pub vendors: Vec<Vendor>,
    pub manufacturers: Vec<Manufacturer>,
}

impl DataSet {
    pub fn vendor(&self, id: &str) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == id)
    }

    pub fn manufacturer(&self, id: &str) -> Option<&Manufacturer> {
        self.manufacturers.iter().find(|m| m.id == id)
    }

    /// The demo data set shipped with the service.
    pub fn mock() -> Self {
        Self {
            materials: mock_materials(),
            vendors: mock_vendors(),
            manufacturers: mock_manufacturers(),
        }
    }
}

#[derive(Debug)]
struct StoreState {
    source: DataSource,
    mock: Arc<DataSet>,
    client: DataSet,
    /// Cached resolution of `source` over `mock`/`client`.
    active: Arc<DataSet>,
}

fn prefer<T: Clone>(client: &[T], mock: &[T]) -> Vec<T> {
    if client.is_empty() {
        mock.to_vec()
    } else {
        client.to_vec()
    }
}

impl StoreState {
    fn resolve(&mut self) {
        self.active = match self.source {
            DataSource::Mock => self.mock.clone(),
            DataSource::Client => Arc::new(DataSet {
                materials: prefer(&self.client.materials, &self.mock.materials),
                vendors: prefer(&self.client.vendors, &self.mock.vendors),
                manufacturers: prefer(&self.client.manufacturers, &self.mock.manufacturers),
            }),
        };
    }
}

/// Shared, switchable master data. Cheap to clone behind an `Arc`.
#[derive(Debug)]
pub struct DataStore {
    state: RwLock<StoreState>,
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new(DataSet::mock())
    }
}

impl DataStore {
    pub fn new(mock: DataSet) -> Self {
        let mock = Arc::new(mock);
        Self {
            state: RwLock::new(StoreState {
                source: DataSource::Mock,
                active: mock.clone(),
                mock,
                client: DataSet::default(),
            }),
        }
    }

    /// The data requests should read right now.
    ///
    /// With the client source selected, each collection falls back to the
    /// mock collection until something has been imported for it.
    pub async fn snapshot(&self) -> Arc<DataSet> {
        self.state.read().await.active.clone()
    }

    pub async fn source(&self) -> DataSource {
        self.state.read().await.source
    }

    pub async fn set_source(&self, source: DataSource) {
        let mut state = self.state.write().await;
        state.source = source;
        state.resolve();
        tracing::info!(?source, "Switched data source");
    }

    /// The active source together with the data it resolves to.
    pub async fn source_snapshot(&self) -> (DataSource, Arc<DataSet>) {
        let state = self.state.read().await;
        (state.source, state.active.clone())
    }

    /// Replace one client collection with `records` and switch reads to
    /// client data. Readers see either the old state or the new one.
    pub async fn import_records(&self, records: ImportedRecords) {
        let mut state = self.state.write().await;
        let kind = records.kind();
        let count = records.len();
        match records {
            ImportedRecords::Materials(materials) => state.client.materials = materials,
            ImportedRecords::Vendors(vendors) => state.client.vendors = vendors,
            ImportedRecords::Manufacturers(manufacturers) => {
                state.client.manufacturers = manufacturers
            }
        }
        state.source = DataSource::Client;
        state.resolve();
        tracing::info!(%kind, count, "Imported client records");
    }

    /// Add a submitted material to the collection currently being read,
    /// assigning it the next free id.
    pub async fn insert_material(&self, mut material: Material) -> Material {
        let mut state = self.state.write().await;
        material.id = (state.active.materials.len() + 1).to_string();
        let reading_client =
            state.source == DataSource::Client && !state.client.materials.is_empty();
        if reading_client {
            state.client.materials.push(material.clone());
        } else {
            Arc::make_mut(&mut state.mock).materials.push(material.clone());
        }
        state.resolve();
        material
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn material(
    id: &str,
    code: &str,
    description: &str,
    material_type: &str,
    plant: &str,
    vendor: &str,
    manufacturer: &str,
    unit: &str,
    category: &str,
    price: f64,
    (year, month, day): (i32, u32, u32),
) -> Material {
    Material {
        id: id.to_string(),
        material_code: code.to_string(),
        description: description.to_string(),
        material_type: material_type.to_string(),
        plant_code: plant.to_string(),
        vendor_id: vendor.to_string(),
        manufacturer_id: manufacturer.to_string(),
        unit_of_measure: unit.to_string(),
        category: category.to_string(),
        base_price: Some(price),
        created_at: Utc
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .unwrap_or_default(),
        status: MaterialStatus::Approved,
    }
}

fn mock_materials() -> Vec<Material> {
    vec![
        material("1", "STL001", "Steel Rod 10mm", "ROD", "P001", "200001", "200101", "MT", "STEEL", 150.0, (2023, 1, 15)),
        material("2", "STL002", "10mm Steel Rod", "ROD", "P002", "200002", "200101", "MT", "STEEL", 148.0, (2023, 2, 20)),
        material("3", "CEM001", "Portland Cement 50kg", "CEMENT", "P001", "200003", "200102", "BAG", "CEMENT", 25.0, (2023, 3, 10)),
        material("4", "PIP001", "PVC Pipe 6 inch", "PIPE", "P003", "200004", "200103", "M", "PLUMBING", 45.0, (2023, 4, 5)),
        material("5", "ELE001", "Electrical Cable 2.5mm", "CABLE", "P002", "200005", "200104", "M", "ELECTRICAL", 22.0, (2023, 5, 12)),
    ]
}

fn mock_vendors() -> Vec<Vendor> {
    vec![
        Vendor::new("200001", "Premium Steel Suppliers", strings(&["STEEL", "METAL"]), strings(&["200101"])),
        Vendor::new("200002", "Global Steel Trading", strings(&["STEEL", "CONSTRUCTION"]), strings(&["200101", "200103"])),
        Vendor::new("200003", "Cement Solutions Ltd", strings(&["CEMENT", "CONSTRUCTION"]), strings(&["200102"])),
        Vendor::new("200004", "PVC Systems India", strings(&["PLUMBING", "PIPES"]), strings(&["200103"])),
        Vendor::new("200005", "Electrical Components Co", strings(&["ELECTRICAL", "CABLES"]), strings(&["200104"])),
        Vendor::new("100001", "Old Steel Company", strings(&["STEEL"]), strings(&["100101"])),
    ]
}

fn manufacturer(id: &str, name: &str, vendors: &[&str], certifications: &[&str]) -> Manufacturer {
    Manufacturer {
        id: id.to_string(),
        name: name.to_string(),
        code: id.to_string(),
        linked_vendors: strings(vendors),
        certifications: strings(certifications),
    }
}

fn mock_manufacturers() -> Vec<Manufacturer> {
    vec![
        manufacturer("200101", "Steel Works International", &["200001", "200002"], &["ISO9001", "ISO14001"]),
        manufacturer("200102", "Cement Solutions Ltd", &["200003"], &["ISO9001"]),
        manufacturer("200103", "Pipe Manufacturing Corp", &["200002", "200004"], &["ISO9001", "BIS"]),
        manufacturer("200104", "Electrical Systems Ltd", &["200005"], &["ISO9001", "CE", "UL"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(id: &str) -> Vendor {
        Vendor::new(id, "Imported", vec!["GENERAL".to_string()], vec![])
    }

    #[test]
    fn test_mock_vendor_qualification() {
        let data = DataSet::mock();
        assert!(data.vendor("200001").unwrap().is_qualified);
        assert!(!data.vendor("100001").unwrap().is_qualified);
        assert!(data.vendor("999999").is_none());
    }

    #[tokio::test]
    async fn test_client_source_falls_back_per_collection() {
        let store = DataStore::default();
        store
            .import_records(ImportedRecords::Vendors(vec![vendor("200900")]))
            .await;

        let (source, data) = store.source_snapshot().await;
        assert_eq!(source, DataSource::Client);
        assert_eq!(data.vendors.len(), 1);
        assert_eq!(data.materials.len(), 5);

        store.set_source(DataSource::Mock).await;
        let (source, data) = store.source_snapshot().await;
        assert_eq!(source, DataSource::Mock);
        assert_eq!(data.vendors.len(), 6);
    }

    #[tokio::test]
    async fn test_snapshot_is_stable_across_imports() {
        let store = DataStore::default();
        let before = store.snapshot().await;
        store
            .import_records(ImportedRecords::Vendors(vec![vendor("200900")]))
            .await;
        assert_eq!(before.vendors.len(), 6);
        assert_eq!(store.snapshot().await.vendors.len(), 1);
    }

    #[tokio::test]
    async fn test_import_and_source_switch_never_interleave() {
        let store = Arc::new(DataStore::default());
        let mut tasks = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                if i % 2 == 0 {
                    store
                        .import_records(ImportedRecords::Vendors(vec![vendor("200900")]))
                        .await;
                } else {
                    store.set_source(DataSource::Mock).await;
                }
                let (source, data) = store.source_snapshot().await;
                // Imported vendors are only ever visible while reading client data.
                assert_eq!(data.vendors.len() == 1, source == DataSource::Client);
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_insert_material_goes_to_active_collection() {
        let store = DataStore::default();
        let extra = store.snapshot().await.materials[0].clone();
        let inserted = store.insert_material(extra).await;
        assert_eq!(inserted.id, "6");
        assert_eq!(store.snapshot().await.materials.len(), 6);

        store
            .import_records(ImportedRecords::Materials(vec![inserted.clone()]))
            .await;
        let second = store.insert_material(inserted).await;
        assert_eq!(second.id, "2");
        assert_eq!(store.snapshot().await.materials.len(), 2);
    }
}
