use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{MortgageError, Result};
use crate::payments::ExtraPayment;
use crate::types::{DownPayment, PaymentType};

/// longest accepted term, matching the 600-month ceiling
pub const MAX_TERM_YEARS: u32 = 50;

/// largest accepted price, down payment, subsidy or extra payment
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// highest accepted annual rate, in percent
pub const MAX_ANNUAL_RATE_PERCENT: u32 = 1_000;

/// numeric margins of the amortization loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineLimits {
    /// balance at or below this counts as repaid
    pub payoff_epsilon: Money,
    /// hard stop for non-converging input (50 years)
    pub max_months: u32,
    /// schedule entries kept in the result (30 years)
    pub max_retained_entries: u32,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            payoff_epsilon: Money::ONE,
            max_months: 600,
            max_retained_entries: 360,
        }
    }
}

/// loan inputs collected by the host, rebuilt on every calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSpecification {
    pub price: Money,
    pub down_payment: DownPayment,
    pub term_years: u32,
    pub annual_rate: Rate,
    pub subsidy: Option<Money>,
    pub payment_type: PaymentType,
    #[serde(default)]
    pub extra_payments: Vec<ExtraPayment>,
    #[serde(default)]
    pub first_payment_date: Option<NaiveDate>,
}

impl LoanSpecification {
    pub fn builder() -> LoanSpecificationBuilder {
        LoanSpecificationBuilder::new()
    }

    /// annuity mortgage with an absolute down payment and no extras
    pub fn mortgage(price: Money, down_payment: Money, term_years: u32, annual_rate: Rate) -> Self {
        Self {
            price,
            down_payment: DownPayment::Amount(down_payment),
            term_years,
            annual_rate,
            subsidy: None,
            payment_type: PaymentType::Annuity,
            extra_payments: Vec::new(),
            first_payment_date: None,
        }
    }

    pub fn term_months(&self) -> u32 {
        self.term_years.saturating_mul(12)
    }

    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate.monthly_rate()
    }

    pub fn down_payment_amount(&self) -> Money {
        self.down_payment.resolve(self.price)
    }

    /// amount financed after down payment and subsidy, never below zero
    pub fn financed_principal(&self) -> Money {
        let subsidy = self.subsidy.unwrap_or(Money::ZERO);
        (self.price - self.down_payment_amount() - subsidy).max(Money::ZERO)
    }

    /// reject input outside the engine's contract
    pub fn validate(&self) -> Result<()> {
        if self.term_years == 0 || self.term_years > MAX_TERM_YEARS {
            return Err(MortgageError::InvalidSpecification {
                message: format!(
                    "term must be between 1 and {} years, got {}",
                    MAX_TERM_YEARS, self.term_years
                ),
            });
        }

        if self.annual_rate.is_negative() || self.annual_rate > Rate::from_percentage(MAX_ANNUAL_RATE_PERCENT) {
            return Err(MortgageError::InvalidSpecification {
                message: format!(
                    "interest rate must be between 0% and {}%, got {}",
                    MAX_ANNUAL_RATE_PERCENT, self.annual_rate
                ),
            });
        }

        check_amount("price", self.price)?;

        match self.down_payment {
            DownPayment::Amount(amount) => check_amount("down payment", amount)?,
            DownPayment::Percent(percent) => {
                if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
                    return Err(MortgageError::InvalidSpecification {
                        message: format!("down payment percent must be between 0 and 100, got {}", percent),
                    });
                }
            }
        }

        if let Some(subsidy) = self.subsidy {
            check_amount("subsidy", subsidy)?;
        }

        for payment in &self.extra_payments {
            payment.validate()?;
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// reject negative amounts and amounts whose schedule totals could overflow a decimal
fn check_amount(field: &str, amount: Money) -> Result<()> {
    if amount.is_negative() || amount > Money::from_major(MAX_AMOUNT) {
        return Err(MortgageError::InvalidSpecification {
            message: format!("{} must be between 0 and {}, got {}", field, MAX_AMOUNT, amount),
        });
    }
    Ok(())
}

/// fluent builder for loan specifications
#[derive(Debug, Default)]
pub struct LoanSpecificationBuilder {
    price: Option<Money>,
    down_payment: Option<DownPayment>,
    term_years: Option<u32>,
    annual_rate: Option<Rate>,
    subsidy: Option<Money>,
    payment_type: Option<PaymentType>,
    extra_payments: Vec<ExtraPayment>,
    first_payment_date: Option<NaiveDate>,
}

impl LoanSpecificationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn down_payment(mut self, amount: Money) -> Self {
        self.down_payment = Some(DownPayment::Amount(amount));
        self
    }

    /// down payment as percent of price (20 means 20%)
    pub fn down_payment_percent(mut self, percent: Decimal) -> Self {
        self.down_payment = Some(DownPayment::Percent(percent));
        self
    }

    pub fn term_years(mut self, years: u32) -> Self {
        self.term_years = Some(years);
        self
    }

    pub fn rate(mut self, rate: Rate) -> Self {
        self.annual_rate = Some(rate);
        self
    }

    /// annual rate in percent units (18.0 means 18%)
    pub fn rate_percent(mut self, percent: Decimal) -> Self {
        self.annual_rate = Some(Rate::from_percentage_decimal(percent));
        self
    }

    pub fn subsidy(mut self, amount: Money) -> Self {
        self.subsidy = Some(amount);
        self
    }

    pub fn payment_type(mut self, payment_type: PaymentType) -> Self {
        self.payment_type = Some(payment_type);
        self
    }

    pub fn extra_payment(mut self, payment: ExtraPayment) -> Self {
        self.extra_payments.push(payment);
        self
    }

    pub fn extra_payments(mut self, payments: impl IntoIterator<Item = ExtraPayment>) -> Self {
        self.extra_payments.extend(payments);
        self
    }

    pub fn first_payment_date(mut self, date: NaiveDate) -> Self {
        self.first_payment_date = Some(date);
        self
    }

    pub fn build(self) -> Result<LoanSpecification> {
        let price = self.price.ok_or(MortgageError::InvalidSpecification {
            message: "price required".to_string(),
        })?;

        let term_years = self.term_years.ok_or(MortgageError::InvalidSpecification {
            message: "term required".to_string(),
        })?;

        let annual_rate = self.annual_rate.ok_or(MortgageError::InvalidSpecification {
            message: "rate required".to_string(),
        })?;

        let spec = LoanSpecification {
            price,
            down_payment: self.down_payment.unwrap_or_default(),
            term_years,
            annual_rate,
            subsidy: self.subsidy,
            payment_type: self.payment_type.unwrap_or_default(),
            extra_payments: self.extra_payments,
            first_payment_date: self.first_payment_date,
        };

        spec.validate()?;
        Ok(spec)
    }
}
