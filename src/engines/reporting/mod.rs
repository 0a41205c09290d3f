pub mod render;
pub mod report;

pub use render::{render_text, to_json, TextReport};
pub use report::{
    ClaimReport, FinancialReport, OverrunAlert, ReportBuilder, ReportKind, TreatmentReport,
};
