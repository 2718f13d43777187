use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;

/// opaque identifier for an extra-payment row, only meaningful to the host ui
pub type ExtraPaymentId = Uuid;

/// how the fixed monthly installment is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentType {
    /// equal installments, interest share shrinking over time
    #[default]
    Annuity,
    /// constant principal slice, total payment declining over time
    Differentiated,
}

/// down payment, either absolute or a share of the price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownPayment {
    Amount(Money),
    /// percent units, 20 means 20% of the price
    Percent(Decimal),
}

impl DownPayment {
    /// absolute down payment for the given price
    pub fn resolve(&self, price: Money) -> Money {
        match self {
            DownPayment::Amount(amount) => *amount,
            DownPayment::Percent(percent) => price.percentage(*percent),
        }
    }

    pub fn is_percent(&self) -> bool {
        matches!(self, DownPayment::Percent(_))
    }
}

impl Default for DownPayment {
    fn default() -> Self {
        DownPayment::Amount(Money::ZERO)
    }
}

/// when an extra payment fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtraPaymentKind {
    /// only in its starting month
    OneTime,
    /// every month from its starting month onward
    Recurring,
}

/// what happens to the installment after an extra payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtraPaymentEffect {
    /// keep the installment, finish early
    ReduceTerm,
    /// re-spread the remaining balance over the remaining term
    ReducePayment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_down_payment_resolution() {
        let price = Money::from_major(5_000_000);

        let absolute = DownPayment::Amount(Money::from_major(1_000_000));
        assert_eq!(absolute.resolve(price), Money::from_major(1_000_000));
        assert!(!absolute.is_percent());

        let percent = DownPayment::Percent(dec!(20));
        assert_eq!(percent.resolve(price), Money::from_major(1_000_000));
        assert!(percent.is_percent());
    }
}
