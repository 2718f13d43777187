/// extra payments - compare term reduction against payment reduction
use mortgage_engine_rs::{
    calculate, Event, ExtraPayment, ExtraPaymentEffect, LoanSpecification, Money, Rate,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let base = LoanSpecification::mortgage(
        Money::from_major(5_000_000),
        Money::from_major(1_000_000),
        20,
        Rate::from_percentage(18),
    );

    for effect in [ExtraPaymentEffect::ReduceTerm, ExtraPaymentEffect::ReducePayment] {
        let spec = LoanSpecification {
            extra_payments: vec![
                ExtraPayment::one_time(Money::from_major(500_000), 12, effect),
                ExtraPayment::recurring(Money::from_major(5_000), 24, effect),
            ],
            ..base.clone()
        };

        let result = calculate(&spec)?;

        println!("=== {:?} ===", effect);
        println!("months to payoff: {} of {}", result.months_to_payoff, result.original_term_months);
        println!("interest saved:   {}", result.savings_vs_baseline);
        println!("last payment:     {}", result.last_monthly_payment);

        let recalculations = result
            .events
            .iter()
            .filter(|e| matches!(e, Event::InstallmentRecalculated { .. }))
            .count();
        println!("recalculations:   {}\n", recalculations);
    }

    Ok(())
}
