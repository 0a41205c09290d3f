pub mod format;

pub use format::{format_amount, format_compact, format_currency, format_percentage};
