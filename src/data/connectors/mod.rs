mod csv;
mod json;
mod types;
mod validator;

pub use csv::CsvConnector;
pub use json::JsonConnector;
pub use types::DepartmentColumn;
pub use validator::DataValidator;
