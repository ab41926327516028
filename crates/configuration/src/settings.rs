use core_types::{
    Benchmark, DEFAULT_STARTING_BALANCE, PerformanceMetrics, Trade, TradeStatistics,
};
use rust_decimal::Decimal;
use serde::Deserialize;

/// The root configuration structure for the entire application.
///
/// Besides the few settings it also carries the static dataset the dashboard
/// renders: the account snapshots, the market benchmarks and the trade history.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    pub performance: PerformanceMetrics,
    pub statistics: TradeStatistics,
    /// Market benchmarks in chart order. At most one entry may be tagged
    /// `kind = "riskfree"` to place and name the risk-free bar; its figures
    /// must agree with `performance.risk_free_rate` and a Sharpe of 0. The
    /// portfolio bar is always derived from `performance`.
    #[serde(default)]
    pub benchmarks: Vec<Benchmark>,
    #[serde(default)]
    pub trades: Vec<Trade>,
}

/// Presentation-independent dashboard parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSettings {
    /// The account balance before the first trade in the history.
    #[serde(default = "default_starting_balance")]
    pub starting_balance: Decimal,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            starting_balance: default_starting_balance(),
            title: default_title(),
        }
    }
}

fn default_starting_balance() -> Decimal {
    DEFAULT_STARTING_BALANCE
}

fn default_title() -> String {
    "Trading Performance".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
