pub mod connectors;
pub mod dataset;

pub use connectors::{CsvConnector, DataValidator, DepartmentColumn, JsonConnector};
pub use dataset::{DatasetLoader, HospitalDataset};
