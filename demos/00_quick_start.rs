/// quick start - minimal example to get started
use mortgage_engine_rs::{calculate, LoanSpecification, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 5,000,000 flat, 1,000,000 down, 20 years at 18%
    let spec = LoanSpecification::mortgage(
        Money::from_major(5_000_000),
        Money::from_major(1_000_000),
        20,
        Rate::from_percentage(18),
    );

    let result = calculate(&spec)?;

    println!("financed:        {}", result.principal);
    println!("monthly payment: {}", result.first_monthly_payment);
    println!("total interest:  {}", result.total_interest);
    println!("total paid:      {}", result.total_paid);
    println!("months:          {}", result.months_to_payoff);

    Ok(())
}
