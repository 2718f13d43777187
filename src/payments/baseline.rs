use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};

/// parallel amortization of the same loan with no extra payments
#[derive(Debug, Clone)]
pub struct BaselineTracker {
    principal: Money,
    payment: Money,
    monthly_rate: Rate,
    term_months: u32,
    balance: Money,
}

impl BaselineTracker {
    pub fn new(principal: Money, payment: Money, monthly_rate: Rate, term_months: u32) -> Self {
        Self {
            principal,
            payment,
            monthly_rate,
            term_months,
            balance: principal,
        }
    }

    /// advance one month at the fixed baseline payment
    pub fn advance(&mut self) -> Money {
        let interest = self.balance.interest_at(self.monthly_rate);
        let principal_portion = self.balance.min(self.payment - interest);
        self.balance = (self.balance - principal_portion).max(Money::ZERO);
        self.balance
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn payment(&self) -> Money {
        self.payment
    }

    /// interest over the full term: payment * months - principal
    pub fn total_interest(&self) -> Money {
        self.payment * Decimal::from(self.term_months) - self.principal
    }
}
