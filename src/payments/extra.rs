use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::MAX_AMOUNT;
use crate::decimal::Money;
use crate::errors::{MortgageError, Result};
use crate::types::{ExtraPaymentEffect, ExtraPaymentId, ExtraPaymentKind};

/// an early repayment row as submitted by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraPayment {
    pub id: ExtraPaymentId,
    pub amount: Money,
    pub kind: ExtraPaymentKind,
    /// 1-based month of the first application
    pub applies_at_month: u32,
    pub effect: ExtraPaymentEffect,
}

impl ExtraPayment {
    pub fn new(
        amount: Money,
        kind: ExtraPaymentKind,
        applies_at_month: u32,
        effect: ExtraPaymentEffect,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            kind,
            applies_at_month,
            effect,
        }
    }

    /// single payment in the given month
    pub fn one_time(amount: Money, month: u32, effect: ExtraPaymentEffect) -> Self {
        Self::new(amount, ExtraPaymentKind::OneTime, month, effect)
    }

    /// payment every month starting at the given month
    pub fn recurring(amount: Money, from_month: u32, effect: ExtraPaymentEffect) -> Self {
        Self::new(amount, ExtraPaymentKind::Recurring, from_month, effect)
    }

    /// replace the generated id with a host-supplied one
    pub fn with_id(mut self, id: ExtraPaymentId) -> Self {
        self.id = id;
        self
    }

    /// whether this row contributes in the given month
    pub fn applies_in(&self, month: u32) -> bool {
        match self.kind {
            ExtraPaymentKind::OneTime => month == self.applies_at_month,
            ExtraPaymentKind::Recurring => month >= self.applies_at_month,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.amount.is_negative() || self.amount > Money::from_major(MAX_AMOUNT) {
            return Err(MortgageError::InvalidExtraPayment {
                id: self.id,
                message: format!("amount must be between 0 and {}, got {}", MAX_AMOUNT, self.amount),
            });
        }

        if self.applies_at_month == 0 {
            return Err(MortgageError::InvalidExtraPayment {
                id: self.id,
                message: "months are 1-based, got 0".to_string(),
            });
        }

        Ok(())
    }
}

/// extra payments that fire in a single month
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtraPaymentPlan {
    pub total: Money,
    pub reduce_payment: bool,
    pub applied: Vec<(ExtraPaymentId, Money, ExtraPaymentEffect)>,
}

impl ExtraPaymentPlan {
    /// collect every row applicable in `month`
    pub fn for_month(payments: &[ExtraPayment], month: u32) -> Self {
        let mut plan = ExtraPaymentPlan::default();

        for payment in payments.iter().filter(|p| p.applies_in(month)) {
            plan.total += payment.amount;
            if payment.effect == ExtraPaymentEffect::ReducePayment {
                plan.reduce_payment = true;
            }
            plan.applied.push((payment.id, payment.amount, payment.effect));
        }

        plan
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    pub fn has_amount(&self) -> bool {
        self.total.is_positive()
    }
}
