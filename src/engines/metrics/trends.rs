use super::guarded_percent;
use crate::types::{NamedValue, YearlyAmount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPoint {
    pub year: i32,
    pub amount: f64,
    pub growth_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharePoint {
    pub name: String,
    pub value: f64,
    pub percent: f64,
}

/// Growth of each point over the previous one, in series order.
/// The first point has no predecessor and reports 0.
pub fn year_over_year_growth(series: &[YearlyAmount]) -> Vec<GrowthPoint> {
    let mut previous: Option<f64> = None;

    series
        .iter()
        .map(|point| {
            let growth_percent = previous
                .map(|prev| guarded_percent(point.amount - prev, prev))
                .unwrap_or(0.0);
            previous = Some(point.amount);
            GrowthPoint {
                year: point.year,
                amount: point.amount,
                growth_percent,
            }
        })
        .collect()
}

/// Each slice as a percentage of the slice total.
pub fn share_percentages(slices: &[NamedValue]) -> Vec<SharePoint> {
    let total: f64 = slices.iter().map(|s| s.value).sum();

    slices
        .iter()
        .map(|slice| SharePoint {
            name: slice.name.clone(),
            value: slice.value,
            percent: guarded_percent(slice.value, total),
        })
        .collect()
}
