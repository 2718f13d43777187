use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::events::Event;

/// one elapsed month, amounts rounded to whole currency units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub month: u32,
    pub payment_date: Option<NaiveDate>,
    /// regular installment plus any extra payment
    pub payment_total: Money,
    /// all principal repaid this month, extras included
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub extra_payment: Money,
    pub remaining_balance: Money,
    pub had_extra_payment: bool,
}

/// yearly balance pair for charting accelerated against baseline repayment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    pub month: u32,
    pub year: u32,
    pub year_label: String,
    pub balance_with_extra: Money,
    pub balance_baseline: Money,
}

impl ComparisonPoint {
    pub fn new(month: u32, balance_with_extra: Money, balance_baseline: Money) -> Self {
        let year = month.div_ceil(12);
        Self {
            month,
            year,
            year_label: format!("Year {}", year),
            balance_with_extra: balance_with_extra.round_whole(),
            balance_baseline: balance_baseline.round_whole(),
        }
    }
}

/// outcome of one amortization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub principal: Money,
    pub down_payment: Money,
    pub first_monthly_payment: Money,
    pub last_monthly_payment: Money,
    pub baseline_payment: Money,
    pub total_paid: Money,
    pub total_interest: Money,
    pub total_extra_paid: Money,
    pub baseline_total_interest: Money,
    pub savings_vs_baseline: Money,
    /// balance left when the run stopped, tracked past the retained entries
    pub final_balance: Money,
    pub months_to_payoff: u32,
    pub original_term_months: u32,
    pub term_reduction_months: u32,
    /// the run stopped at the month ceiling, not at payoff
    pub ceiling_reached: bool,
    pub schedule: Vec<ScheduleEntry>,
    pub comparison_series: Vec<ComparisonPoint>,
    pub events: Vec<Event>,
}

impl CalculationResult {
    /// result for a loan with nothing to finance
    pub fn empty(down_payment: Money, original_term_months: u32) -> Self {
        Self {
            principal: Money::ZERO,
            down_payment: down_payment.round_whole(),
            first_monthly_payment: Money::ZERO,
            last_monthly_payment: Money::ZERO,
            baseline_payment: Money::ZERO,
            total_paid: Money::ZERO,
            total_interest: Money::ZERO,
            total_extra_paid: Money::ZERO,
            baseline_total_interest: Money::ZERO,
            savings_vs_baseline: Money::ZERO,
            final_balance: Money::ZERO,
            months_to_payoff: 0,
            original_term_months,
            term_reduction_months: 0,
            ceiling_reached: false,
            schedule: Vec::new(),
            comparison_series: Vec::new(),
            events: Vec::new(),
        }
    }

    /// entry for a 1-based month, if retained
    pub fn entry(&self, month: u32) -> Option<&ScheduleEntry> {
        if month == 0 {
            return None;
        }
        self.schedule
            .get((month - 1) as usize)
            .filter(|e| e.month == month)
    }

    /// balance when the run stopped, including months past the retained entries
    pub fn final_balance(&self) -> Money {
        self.final_balance
    }

    pub fn payoff_date(&self) -> Option<NaiveDate> {
        self.entry(self.months_to_payoff).and_then(|e| e.payment_date)
    }

    pub fn is_paid_off(&self) -> bool {
        !self.ceiling_reached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(month: u32, balance: i64) -> ScheduleEntry {
        ScheduleEntry {
            month,
            payment_date: NaiveDate::from_ymd_opt(2025, 1, 1)
                .and_then(|d| d.checked_add_months(chrono::Months::new(month - 1))),
            payment_total: Money::from_major(100),
            principal_portion: Money::from_major(90),
            interest_portion: Money::from_major(10),
            extra_payment: Money::ZERO,
            remaining_balance: Money::from_major(balance),
            had_extra_payment: false,
        }
    }

    #[test]
    fn test_comparison_point_labels() {
        let year_end = ComparisonPoint::new(24, Money::from_major(10), Money::from_major(20));
        assert_eq!(year_end.year, 2);
        assert_eq!(year_end.year_label, "Year 2");

        let partial = ComparisonPoint::new(138, Money::ZERO, Money::from_major(20));
        assert_eq!(partial.year, 12);
    }

    #[test]
    fn test_entry_lookup() {
        let mut result = CalculationResult::empty(Money::ZERO, 24);
        result.principal = Money::from_major(180);
        result.schedule = vec![entry(1, 90), entry(2, 0)];
        result.months_to_payoff = 2;
        result.final_balance = Money::ZERO;

        assert!(result.entry(0).is_none());
        assert_eq!(result.entry(2).unwrap().remaining_balance, Money::ZERO);
        assert!(result.entry(3).is_none());
        assert_eq!(result.final_balance(), Money::ZERO);
        assert_eq!(result.payoff_date(), NaiveDate::from_ymd_opt(2025, 2, 1));
    }

    #[test]
    fn test_empty_result() {
        let result = CalculationResult::empty(Money::from_major(1_000_000), 240);
        assert_eq!(result.months_to_payoff, 0);
        assert_eq!(result.original_term_months, 240);
        assert_eq!(result.final_balance(), Money::ZERO);
        assert!(result.schedule.is_empty());
        assert!(result.is_paid_off());
    }
}
