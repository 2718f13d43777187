use thiserror::Error;

use crate::types::ExtraPaymentId;

#[derive(Error, Debug)]
pub enum MortgageError {
    #[error("invalid specification: {message}")]
    InvalidSpecification {
        message: String,
    },

    #[error("invalid extra payment {id}: {message}")]
    InvalidExtraPayment {
        id: ExtraPaymentId,
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("export failed: {0}")]
    Export(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, MortgageError>;
