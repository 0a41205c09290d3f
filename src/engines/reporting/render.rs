use super::report::FinancialReport;
use crate::config::DisplayConfig;
use crate::error::Result;
use crate::utils::{format_amount, format_currency, format_percentage};
use std::fmt;

pub fn to_json(report: &FinancialReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_text(report: &FinancialReport, display: &DisplayConfig) -> String {
    TextReport { report, display }.to_string()
}

/// Plain-text rendering of a report, sections chosen by its kind
pub struct TextReport<'a> {
    pub report: &'a FinancialReport,
    pub display: &'a DisplayConfig,
}

impl TextReport<'_> {
    fn pct(&self, value: f64) -> String {
        format_percentage(value, self.display.percentage_precision)
    }

    fn money(&self, value: f64) -> String {
        format_currency(value, &self.display.currency_symbol)
    }

    fn amount(&self, value: f64) -> String {
        format_amount(value, self.display)
    }

    fn overview(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hospital = &self.report.hospital;
        writeln!(f, "== Hospital Overview ==")?;
        writeln!(f, "Avg cost per patient:    {}", self.money(hospital.avg_cost_per_patient))?;
        writeln!(f, "Avg revenue per patient: {}", self.money(hospital.avg_revenue_per_patient))?;
        writeln!(f, "Avg efficiency:          {}", self.pct(hospital.avg_efficiency))?;
        writeln!(f, "Avg profitability:       {}", self.pct(hospital.avg_profitability))?;

        if let Some(summary) = &self.report.summary {
            writeln!(f, "Total spending:          {}", self.amount(summary.total_spending))?;
            writeln!(f, "Total revenue:           {}", self.amount(summary.total_revenue))?;
            writeln!(f, "Profit margin:           {}", self.pct(summary.profit_margin))?;
            writeln!(f, "Claims processed:        {}", summary.insurance_claims_processed)?;
        }
        writeln!(f)
    }

    fn financials(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Department Rankings ==")?;
        writeln!(
            f,
            "{:>4}  {:<20} {:>12} {:>14} {:>12} {:>12}",
            "Rank", "Department", "Efficiency", "Profitability", "Budget", "Revenue"
        )?;
        for dept in &self.report.rankings {
            writeln!(
                f,
                "{:>4}  {:<20} {:>12} {:>14} {:>12} {:>12}",
                dept.rank,
                dept.department.name,
                self.pct(dept.efficiency),
                self.pct(dept.profitability),
                self.amount(dept.department.budget),
                self.amount(dept.department.revenue_generated),
            )?;
        }
        writeln!(f)?;

        writeln!(f, "== Budget Utilization ==")?;
        for point in &self.report.utilization {
            writeln!(
                f,
                "{:<20} {:>10}  ({:.1}M budget)",
                point.name,
                self.pct(point.utilization),
                point.budget_millions
            )?;
        }
        for alert in &self.report.overrun_alerts {
            writeln!(
                f,
                "ALERT: {} is {} over budget",
                alert.name,
                self.pct(alert.cost_overruns)
            )?;
        }
        writeln!(f)?;

        if !self.report.spending_growth.is_empty() {
            writeln!(f, "== Spending Trend ==")?;
            for point in &self.report.spending_growth {
                writeln!(
                    f,
                    "{}  {:>12}  {:>10}",
                    point.year,
                    self.amount(point.amount),
                    self.pct(point.growth_percent)
                )?;
            }
            writeln!(f)?;
        }

        if !self.report.cost_breakdown.is_empty() {
            writeln!(f, "== Cost Breakdown ==")?;
            for share in &self.report.cost_breakdown {
                writeln!(f, "{:<20} {:>10}", share.name, self.pct(share.percent))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn patient_flow(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Patient Flow ==")?;
        writeln!(
            f,
            "{:<20} {:>10} {:>16} {:>16}",
            "Department", "Patients", "Cost/Patient", "Revenue/Patient"
        )?;
        for dept in &self.report.rankings {
            writeln!(
                f,
                "{:<20} {:>10} {:>16} {:>16}",
                dept.department.name,
                dept.department.patient_load,
                self.money(dept.cost_per_patient),
                self.money(dept.revenue_per_patient),
            )?;
        }
        writeln!(f)
    }

    fn insurance(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(claims) = &self.report.claims else {
            return writeln!(f, "== Insurance Claims ==\nNo insurance data loaded\n");
        };

        let stats = &claims.stats;
        let breakdown = &claims.breakdown;
        writeln!(f, "== Insurance Claims ==")?;
        writeln!(f, "Total claims:   {}", stats.total)?;
        writeln!(f, "Approved:       {} ({})", stats.approved, self.pct(breakdown.approval_rate))?;
        writeln!(f, "Pending:        {} ({})", stats.pending, self.pct(breakdown.pending_rate))?;
        writeln!(f, "Rejected:       {} ({})", stats.rejected, self.pct(breakdown.rejection_rate))?;
        writeln!(f, "Average amount: {}", self.money(stats.average_amount))?;
        writeln!(
            f,
            "Fraud score:    {}/10{}",
            stats.fraud_score,
            if claims.fraud_alert { "  ALERT" } else { "" }
        )?;
        if !breakdown.consistent {
            writeln!(f, "Warning: claim counts do not add up to the total")?;
        }
        for share in &self.report.settlement_ratios {
            writeln!(f, "Settlement {:<12} {:>10}", share.name, self.pct(share.percent))?;
        }
        writeln!(f)
    }

    fn treatments(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.report.treatments.is_empty() {
            return Ok(());
        }

        writeln!(f, "== Treatment Costs ==")?;
        writeln!(
            f,
            "{:<24} {:>12} {:>12} {:>12} {:>9} {:>14}",
            "Treatment", "Private", "Government", "Savings", "Savings%", "Out of pocket"
        )?;
        for treatment in &self.report.treatments {
            let out_of_pocket = treatment
                .coverage
                .map(|c| self.money(c.out_of_pocket))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:<24} {:>12} {:>12} {:>12} {:>9} {:>14}",
                treatment.name,
                self.money(treatment.private_cost),
                self.money(treatment.government_cost),
                self.money(treatment.savings.absolute_savings),
                self.pct(treatment.savings.percentage_savings),
                out_of_pocket,
            )?;
        }
        writeln!(
            f,
            "Weighted average: {} private, {} government",
            self.money(self.report.weighted_avg_private_cost),
            self.money(self.report.weighted_avg_gov_cost)
        )?;
        writeln!(f)
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.report.kind;
        writeln!(f, "{} ({})", self.report.title, kind)?;
        writeln!(
            f,
            "Generated: {}",
            self.report.generated_at.format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!(f)?;

        self.overview(f)?;
        if kind.includes_financials() {
            self.financials(f)?;
        }
        if kind.includes_patient_flow() {
            self.patient_flow(f)?;
        }
        if kind.includes_insurance() {
            self.insurance(f)?;
        }
        if kind.includes_financials() || kind.includes_insurance() {
            self.treatments(f)?;
        }
        Ok(())
    }
}
