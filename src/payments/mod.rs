pub mod amortization;
pub mod annuity;
pub mod baseline;
pub mod extra;

pub use amortization::{calculate, AmortizationEngine};
pub use annuity::{annuity_payment, compound_factor, differentiated_slice, first_payment};
pub use baseline::BaselineTracker;
pub use extra::{ExtraPayment, ExtraPaymentPlan};
