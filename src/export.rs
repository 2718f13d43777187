//! serializable views of a calculation for rendering and export hosts

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::schedule::{CalculationResult, ComparisonPoint, ScheduleEntry};

/// summary plus schedule, as handed to a table or document renderer
#[derive(Debug, Serialize, Deserialize)]
pub struct CalculationView {
    pub summary: SummaryView,
    pub schedule: Vec<ScheduleEntry>,
    pub comparison_series: Vec<ComparisonPoint>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryView {
    pub principal: Money,
    pub down_payment: Money,
    pub first_monthly_payment: Money,
    pub last_monthly_payment: Money,
    pub total_paid: Money,
    pub total_interest: Money,
    pub total_extra_paid: Money,
    pub savings_vs_baseline: Money,
    pub months_to_payoff: u32,
    pub original_term_months: u32,
    pub term_reduction_months: u32,
    pub paid_off: bool,
}

impl CalculationView {
    pub fn from_result(result: &CalculationResult) -> Self {
        CalculationView {
            summary: SummaryView {
                principal: result.principal,
                down_payment: result.down_payment,
                first_monthly_payment: result.first_monthly_payment,
                last_monthly_payment: result.last_monthly_payment,
                total_paid: result.total_paid,
                total_interest: result.total_interest,
                total_extra_paid: result.total_extra_paid,
                savings_vs_baseline: result.savings_vs_baseline,
                months_to_payoff: result.months_to_payoff,
                original_term_months: result.original_term_months,
                term_reduction_months: result.term_reduction_months,
                paid_off: result.is_paid_off(),
            },
            schedule: result.schedule.clone(),
            comparison_series: result.comparison_series.clone(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// write the retained schedule as csv, one row per month
pub fn write_schedule_csv<W: Write>(result: &CalculationResult, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "month",
        "payment_date",
        "payment_total",
        "principal_portion",
        "interest_portion",
        "extra_payment",
        "remaining_balance",
        "had_extra_payment",
    ])?;

    for entry in &result.schedule {
        wtr.write_record([
            entry.month.to_string(),
            entry.payment_date.map(|d| d.to_string()).unwrap_or_default(),
            entry.payment_total.to_string(),
            entry.principal_portion.to_string(),
            entry.interest_portion.to_string(),
            entry.extra_payment.to_string(),
            entry.remaining_balance.to_string(),
            entry.had_extra_payment.to_string(),
        ])?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// write the yearly comparison series as csv
pub fn write_comparison_csv<W: Write>(result: &CalculationResult, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["year_label", "month", "balance_with_extra", "balance_baseline"])?;
    for point in &result.comparison_series {
        wtr.write_record([
            point.year_label.clone(),
            point.month.to_string(),
            point.balance_with_extra.to_string(),
            point.balance_baseline.to_string(),
        ])?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoanSpecification;
    use crate::decimal::Rate;
    use crate::payments::{calculate, ExtraPayment};
    use crate::types::ExtraPaymentEffect;
    use chrono::NaiveDate;

    fn sample_result() -> CalculationResult {
        let spec = LoanSpecification {
            first_payment_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            extra_payments: vec![ExtraPayment::one_time(
                Money::from_major(200_000),
                2,
                ExtraPaymentEffect::ReduceTerm,
            )],
            ..LoanSpecification::mortgage(
                Money::from_major(1_200_000),
                Money::from_major(200_000),
                1,
                Rate::from_percentage(12),
            )
        };
        calculate(&spec).unwrap()
    }

    #[test]
    fn test_schedule_csv() {
        let result = sample_result();
        let mut out = Vec::new();
        write_schedule_csv(&result, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), result.schedule.len() + 1);
        assert_eq!(
            lines[0],
            "month,payment_date,payment_total,principal_portion,interest_portion,extra_payment,remaining_balance,had_extra_payment"
        );
        assert!(lines[1].starts_with("1,2025-03-01,88849,78849,10000,0,921151,false"));
        assert!(lines[2].starts_with("2,2025-04-01,"));
        assert!(lines[2].ends_with(",true"));
    }

    #[test]
    fn test_comparison_csv() {
        let result = sample_result();
        let mut out = Vec::new();
        write_comparison_csv(&result, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("year_label,month,balance_with_extra,balance_baseline"));
        assert!(lines.next().unwrap().starts_with("Year 1,"));
    }

    #[test]
    fn test_json_view() {
        let result = sample_result();
        let view = CalculationView::from_result(&result);
        let json = view.to_json_pretty().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["principal"], "1000000");
        assert_eq!(value["summary"]["paid_off"], true);
        assert_eq!(
            value["schedule"].as_array().unwrap().len(),
            result.schedule.len()
        );
    }
}
