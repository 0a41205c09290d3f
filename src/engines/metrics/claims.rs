use super::guarded_percent;
use crate::types::ClaimStats;
use serde::{Deserialize, Serialize};

pub fn approval_rate(approved: u64, total: u64) -> f64 {
    guarded_percent(approved as f64, total as f64)
}

pub fn pending_rate(pending: u64, total: u64) -> f64 {
    guarded_percent(pending as f64, total as f64)
}

pub fn rejection_rate(rejected: u64, total: u64) -> f64 {
    guarded_percent(rejected as f64, total as f64)
}

/// True when the fraud score is strictly above the alert threshold.
pub fn fraud_alert(fraud_score: f64, threshold: f64) -> bool {
    fraud_score > threshold
}

/// Status rates for a claim population
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimBreakdown {
    pub approval_rate: f64,
    pub pending_rate: f64,
    pub rejection_rate: f64,
    pub consistent: bool,
}

impl ClaimBreakdown {
    pub fn from_stats(stats: &ClaimStats) -> Self {
        Self {
            approval_rate: approval_rate(stats.approved, stats.total),
            pending_rate: pending_rate(stats.pending, stats.total),
            rejection_rate: rejection_rate(stats.rejected, stats.total),
            consistent: stats.is_consistent(),
        }
    }
}
