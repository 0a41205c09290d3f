//! Chart and table rows derived from engine output, ready for rendering.

pub mod insights;

pub use insights::{
    bottom_performer, claim_distribution, efficiency_chart, overrun_alerts, per_patient_chart,
    top_performer, treatment_comparison, utilization_chart, ClaimSlice, ClaimStatus,
    EfficiencyPoint, PerPatientPoint, TreatmentComparison, UtilizationPoint,
};
