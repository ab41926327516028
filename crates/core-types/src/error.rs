use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Failed to parse {field} value '{value}'")]
    Parse { field: String, value: String },

    #[error("Duplicate trade ticket: {0}")]
    DuplicateTicket(String),

    #[error("Trade {ticket} has non-positive size {size}")]
    NonPositiveSize { ticket: String, size: Decimal },
}
