use thiserror::Error;

/// Failures while reading or checking the dashboard dataset.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document or a `TRADEBOARD_*` override could not be read or
    /// did not match the expected shape.
    #[error("Failed to load dashboard data: {0}")]
    Load(#[from] config::ConfigError),

    /// The dataset parsed but describes an account the dashboard cannot show.
    #[error("Invalid dashboard data: {0}")]
    Invalid(String),
}
