/// export - json summary and csv schedule for document hosts
use mortgage_engine_rs::chrono::NaiveDate;
use mortgage_engine_rs::{
    calculate, write_comparison_csv, write_schedule_csv, CalculationView, ExtraPayment,
    ExtraPaymentEffect, LoanSpecification, Money, Rate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spec = LoanSpecification::builder()
        .price(Money::from_major(1_200_000))
        .down_payment(Money::from_major(200_000))
        .term_years(1)
        .rate(Rate::from_percentage(12))
        .extra_payment(ExtraPayment::one_time(
            Money::from_major(200_000),
            3,
            ExtraPaymentEffect::ReduceTerm,
        ))
        .first_payment_date(NaiveDate::from_ymd_opt(2025, 3, 1).ok_or("bad date")?)
        .build()?;

    let result = calculate(&spec)?;

    println!("{}\n", CalculationView::from_result(&result).to_json_pretty()?);

    let stdout = std::io::stdout();
    write_schedule_csv(&result, stdout.lock())?;
    println!();
    write_comparison_csv(&result, stdout.lock())?;

    Ok(())
}
