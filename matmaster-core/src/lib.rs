pub mod ai;
pub mod catalog;
pub mod dashboard;
pub mod duplicates;
pub mod engine;
pub mod error;
pub mod import;
pub mod linkage;
pub mod risk;
pub mod store;
pub mod suggest;
pub mod types;
pub mod validate;

pub use engine::SuggestionEngine;
pub use error::{ImportError, RowError};
pub use import::{import_upload, FileFormat, ImportKind, ImportReport, ImportedRecords};
pub use risk::RiskWeights;
pub use store::{DataSet, DataSource, DataStore};
pub use types::{
    Analysis, DuplicateMatch, FieldSuggestions, Manufacturer, MatchType, Material, MaterialEntry,
    MaterialStatus, SuggestionContext, SuggestionField, ValidationResult, ValidationStatus, Vendor,
};
pub use validate::MaterialCodeFormat;
