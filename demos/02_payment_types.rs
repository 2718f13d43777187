/// payment types - annuity against differentiated on the same loan
use mortgage_engine_rs::{calculate, Decimal, LoanSpecification, Money, PaymentType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for payment_type in [PaymentType::Annuity, PaymentType::Differentiated] {
        let spec = LoanSpecification::builder()
            .price(Money::from_major(5_000_000))
            .down_payment_percent(Decimal::from(20))
            .term_years(20)
            .rate_percent(Decimal::from(18))
            .payment_type(payment_type)
            .build()?;

        let result = calculate(&spec)?;

        println!("=== {:?} ===", payment_type);
        println!("{:>5} {:>10} {:>10} {:>10} {:>12}", "month", "payment", "principal", "interest", "balance");
        for entry in result.schedule.iter().take(6) {
            println!(
                "{:>5} {:>10} {:>10} {:>10} {:>12}",
                entry.month,
                entry.payment_total,
                entry.principal_portion,
                entry.interest_portion,
                entry.remaining_balance
            );
        }
        let interest_share = result.total_interest.to_f64() / result.total_paid.to_f64() * 100.0;
        println!(
            "total interest: {} ({:.1}% of everything paid)\n",
            result.total_interest, interest_share
        );
    }

    Ok(())
}
