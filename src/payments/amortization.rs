use chrono::{Months, NaiveDate};
use tracing::{debug, warn};

use crate::config::{EngineLimits, LoanSpecification};
use crate::decimal::Money;
use crate::errors::Result;
use crate::events::{Event, EventStore};
use crate::schedule::{CalculationResult, ComparisonPoint, ScheduleEntry};
use crate::types::PaymentType;

use super::annuity::{annuity_payment, differentiated_slice, first_payment};
use super::baseline::BaselineTracker;
use super::extra::ExtraPaymentPlan;

/// month-by-month amortization with early repayments
#[derive(Debug, Clone, Default)]
pub struct AmortizationEngine {
    limits: EngineLimits,
}

impl AmortizationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: EngineLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &EngineLimits {
        &self.limits
    }

    /// build the full schedule and summary for a loan
    ///
    /// the specification is validated first; past that point every input
    /// produces a result, including zero rates, zero principal and runs
    /// cut short by the month ceiling.
    pub fn calculate(&self, spec: &LoanSpecification) -> Result<CalculationResult> {
        spec.validate()?;

        let term_months = spec.term_months();
        let monthly_rate = spec.monthly_rate();
        let down_payment = spec.down_payment_amount();
        let principal = spec.financed_principal();

        if principal.is_zero() {
            debug!(price = %spec.price, down_payment = %down_payment, "nothing to finance");
            return Ok(CalculationResult::empty(down_payment, term_months));
        }

        debug!(
            principal = %principal,
            term_months,
            monthly_rate = %monthly_rate,
            payment_type = ?spec.payment_type,
            extra_payments = spec.extra_payments.len(),
            "starting amortization run"
        );

        let baseline_payment = annuity_payment(principal, monthly_rate, term_months)?;
        let first = first_payment(spec.payment_type, principal, monthly_rate, term_months)?;
        let slice = differentiated_slice(principal, term_months);

        let mut baseline = BaselineTracker::new(principal, baseline_payment, monthly_rate, term_months);
        let mut events = EventStore::new();

        let mut balance = principal;
        let mut installment = baseline_payment;
        let mut month = 0u32;

        let mut total_interest = Money::ZERO;
        let mut total_paid = Money::ZERO;
        let mut total_extra = Money::ZERO;
        let mut last_payment = Money::ZERO;

        let retained = term_months.min(self.limits.max_retained_entries) as usize;
        let mut schedule = Vec::with_capacity(retained);
        let mut comparison_series = Vec::new();

        while balance > self.limits.payoff_epsilon && month < self.limits.max_months {
            month += 1;

            let interest = balance.interest_at(monthly_rate);
            let plan = ExtraPaymentPlan::for_month(&spec.extra_payments, month);

            let base_principal = match spec.payment_type {
                PaymentType::Annuity => balance.min(installment - interest),
                PaymentType::Differentiated => balance.min(slice),
            }
            .max(Money::ZERO);

            let principal_applied = balance.min(base_principal + plan.total);
            let extra_applied = principal_applied - base_principal;
            balance -= principal_applied;

            for (payment_id, amount, effect) in &plan.applied {
                events.emit(Event::ExtraPaymentApplied {
                    payment_id: *payment_id,
                    month,
                    amount: *amount,
                    effect: *effect,
                });
            }

            // differentiated schedules keep their slice regardless of effect
            if plan.reduce_payment && spec.payment_type == PaymentType::Annuity && balance.is_positive() {
                let remaining_months = term_months.saturating_sub(month);
                let recalculated = annuity_payment(balance, monthly_rate, remaining_months)?;

                debug!(
                    month,
                    old_installment = %installment,
                    new_installment = %recalculated,
                    remaining_months,
                    "installment recalculated after extra payment"
                );

                events.emit(Event::InstallmentRecalculated {
                    month,
                    old_installment: installment.round_whole(),
                    new_installment: recalculated.round_whole(),
                    remaining_months,
                });
                installment = recalculated;
            }

            let baseline_balance = baseline.advance();

            let payment = principal_applied + interest;
            total_interest += interest;
            total_paid += payment;
            total_extra += extra_applied;
            last_payment = payment;

            if month <= self.limits.max_retained_entries {
                schedule.push(ScheduleEntry {
                    month,
                    payment_date: payment_date(spec.first_payment_date, month),
                    payment_total: payment.round_whole(),
                    principal_portion: principal_applied.round_whole(),
                    interest_portion: interest.round_whole(),
                    extra_payment: extra_applied.round_whole(),
                    remaining_balance: balance.round_whole(),
                    had_extra_payment: plan.has_amount(),
                });
            }

            let finished = balance <= self.limits.payoff_epsilon || month == self.limits.max_months;
            if month % 12 == 0 || finished {
                comparison_series.push(ComparisonPoint::new(month, balance, baseline_balance));
            }
        }

        let ceiling_reached = balance > self.limits.payoff_epsilon;
        if ceiling_reached {
            warn!(
                month,
                remaining_balance = %balance,
                "amortization stopped at month ceiling before payoff"
            );
            events.emit(Event::SafetyCeilingReached {
                month,
                remaining_balance: balance.round_whole(),
            });
        } else {
            events.emit(Event::LoanPaidOff {
                month,
                total_paid: total_paid.round_whole(),
                total_interest: total_interest.round_whole(),
            });
        }

        let baseline_total_interest = baseline.total_interest();
        let savings = (baseline_total_interest - total_interest).max(Money::ZERO);
        let months_to_payoff = month.min(term_months);

        debug!(
            months_to_payoff,
            total_interest = %total_interest,
            savings = %savings,
            "amortization run finished"
        );

        Ok(CalculationResult {
            principal: principal.round_whole(),
            down_payment: down_payment.round_whole(),
            first_monthly_payment: first.round_whole(),
            last_monthly_payment: last_payment.round_whole(),
            baseline_payment: baseline_payment.round_whole(),
            total_paid: total_paid.round_whole(),
            total_interest: total_interest.round_whole(),
            total_extra_paid: total_extra.round_whole(),
            baseline_total_interest: baseline_total_interest.max(Money::ZERO).round_whole(),
            savings_vs_baseline: savings.round_whole(),
            final_balance: balance.max(Money::ZERO).round_whole(),
            months_to_payoff,
            original_term_months: term_months,
            term_reduction_months: term_months - months_to_payoff,
            ceiling_reached,
            schedule,
            comparison_series,
            events: events.take_events(),
        })
    }
}

/// calculate with the default engine limits
pub fn calculate(spec: &LoanSpecification) -> Result<CalculationResult> {
    AmortizationEngine::new().calculate(spec)
}

fn payment_date(first: Option<NaiveDate>, month: u32) -> Option<NaiveDate> {
    first.and_then(|date| date.checked_add_months(Months::new(month - 1)))
}
