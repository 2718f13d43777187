pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod export;
pub mod payments;
pub mod schedule;
pub mod types;

// re-export key types
pub use config::{EngineLimits, LoanSpecification, LoanSpecificationBuilder};
pub use decimal::{Money, Rate};
pub use errors::{MortgageError, Result};
pub use events::{Event, EventStore};
pub use export::{write_comparison_csv, write_schedule_csv, CalculationView};
pub use payments::{calculate, AmortizationEngine, ExtraPayment};
pub use schedule::{CalculationResult, ComparisonPoint, ScheduleEntry};
pub use types::{DownPayment, ExtraPaymentEffect, ExtraPaymentId, ExtraPaymentKind, PaymentType};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
