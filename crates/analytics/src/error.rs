use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Failed to parse {field} value '{value}'")]
    Parse { field: String, value: String },

    #[error("Invalid {criterion} filter '{value}'")]
    InvalidFilterCriterion { criterion: &'static str, value: String },

    #[error("Value for '{field}' is out of range: {value}")]
    OutOfRange { field: String, value: String },

    #[error("Invalid trade data: {0}")]
    Core(CoreError),
}

impl From<CoreError> for AnalyticsError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Parse { field, value } => AnalyticsError::Parse { field, value },
            other => AnalyticsError::Core(other),
        }
    }
}
