pub mod config;
pub mod contact;
pub mod data;
pub mod engines;
pub mod error;
pub mod types;
pub mod utils;

pub use error::{FinanceError, Result};
