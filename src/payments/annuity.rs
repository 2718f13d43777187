use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{MortgageError, Result};
use crate::types::PaymentType;

/// (1 + r)^n by repeated multiplication, failing on decimal overflow
pub fn compound_factor(periodic_rate: Rate, periods: u32) -> Result<Decimal> {
    let base = Decimal::ONE + periodic_rate.as_decimal();
    let mut factor = Decimal::ONE;

    for _ in 0..periods {
        factor = factor
            .checked_mul(base)
            .ok_or_else(|| MortgageError::CalculationError {
                message: format!(
                    "compound factor overflow at rate {} over {} periods",
                    periodic_rate, periods
                ),
            })?;
    }

    Ok(factor)
}

/// fixed installment that repays `principal` over `periods` at `periodic_rate`
///
/// payment = P * r * (1 + r)^n / ((1 + r)^n - 1), or P / n when r == 0.
/// with no periods left the whole principal is due at once.
pub fn annuity_payment(principal: Money, periodic_rate: Rate, periods: u32) -> Result<Money> {
    if periods == 0 {
        return Ok(principal);
    }

    if periodic_rate.is_zero() {
        return Ok(principal / Decimal::from(periods));
    }

    let r = periodic_rate.as_decimal();
    let compound = compound_factor(periodic_rate, periods)?;

    let numerator = principal
        .as_decimal()
        .checked_mul(r)
        .and_then(|scaled| scaled.checked_mul(compound))
        .ok_or_else(|| MortgageError::CalculationError {
            message: format!("installment overflow for principal {} at rate {}", principal, periodic_rate),
        })?;
    let denominator = compound - Decimal::ONE;

    if denominator.is_zero() {
        // rate too small to register in 28 digits
        return Ok(principal / Decimal::from(periods));
    }

    Ok(Money::from_decimal(numerator / denominator))
}

/// constant principal share of a differentiated schedule
pub fn differentiated_slice(principal: Money, periods: u32) -> Money {
    if periods == 0 {
        return principal;
    }
    principal / Decimal::from(periods)
}

/// first month's installment for the chosen payment type
pub fn first_payment(
    payment_type: PaymentType,
    principal: Money,
    periodic_rate: Rate,
    periods: u32,
) -> Result<Money> {
    match payment_type {
        PaymentType::Annuity => annuity_payment(principal, periodic_rate, periods),
        PaymentType::Differentiated => {
            Ok(differentiated_slice(principal, periods) + principal.interest_at(periodic_rate))
        }
    }
}
