use crate::error::ConfigError;
use core_types::{BenchmarkKind, TradeLog};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, DashboardSettings, LogLevel, LoggingSettings};

/// Used when neither `--config` nor `TRADEBOARD_CONFIG` names a file.
pub const DEFAULT_CONFIG_PATH: &str = "dashboard.toml";

/// Prefix for environment overrides, e.g. `TRADEBOARD_DASHBOARD__STARTING_BALANCE`.
pub const ENV_PREFIX: &str = "TRADEBOARD";

/// Loads and validates the dashboard configuration from a TOML file.
///
/// Environment variables prefixed with `TRADEBOARD_` (nested keys separated
/// by `__`) override values from the file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config = read_config(path)?;
    config.validate()?;
    Ok(config)
}

/// Reads the file and environment overrides without validating the dataset.
///
/// Lets the caller set up logging from `logging.level` before validation
/// starts reporting problems; call [`Config::validate`] afterwards.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).format(config::FileFormat::Toml))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    Ok(builder.try_deserialize::<Config>()?)
}

/// Same as [`load_config`] but from an in-memory TOML document, without
/// environment overrides.
pub fn load_config_from_str(toml: &str) -> Result<Config, ConfigError> {
    let config = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize::<Config>()?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Rejects datasets the analytics layer cannot render meaningfully.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dashboard.starting_balance <= Decimal::ZERO {
            return Err(ConfigError::Invalid(format!(
                "dashboard.starting_balance must be positive, got {}",
                self.dashboard.starting_balance
            )));
        }

        for (field, rate) in [
            ("statistics.long_win_rate", self.statistics.long_win_rate),
            ("statistics.short_win_rate", self.statistics.short_win_rate),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
                return Err(ConfigError::Invalid(format!(
                    "{} must be between 0 and 100, got {}",
                    field, rate
                )));
            }
        }

        let mut names = HashSet::new();
        let mut risk_free_seen = false;
        for benchmark in &self.benchmarks {
            let name = benchmark.name.trim();
            if name.is_empty() {
                return Err(ConfigError::Invalid(
                    "benchmark names must not be empty".to_string(),
                ));
            }
            if !names.insert(name) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate benchmark '{}'",
                    name
                )));
            }
            match benchmark.kind {
                BenchmarkKind::Benchmark => {}
                BenchmarkKind::Portfolio => {
                    return Err(ConfigError::Invalid(format!(
                        "benchmark '{}' cannot be of kind portfolio",
                        name
                    )));
                }
                BenchmarkKind::RiskFree => {
                    if risk_free_seen {
                        return Err(ConfigError::Invalid(
                            "at most one riskfree benchmark may be configured".to_string(),
                        ));
                    }
                    risk_free_seen = true;
                    if benchmark.return_pct != self.performance.risk_free_rate
                        || !benchmark.sharpe_ratio.is_zero()
                    {
                        return Err(ConfigError::Invalid(format!(
                            "riskfree benchmark '{}' must report return_pct = {} and sharpe_ratio = 0",
                            name, self.performance.risk_free_rate
                        )));
                    }
                }
            }
        }

        self.trade_log()?;

        tracing::debug!(
            trades = self.trades.len(),
            benchmarks = self.benchmarks.len(),
            "Validated dashboard configuration."
        );
        Ok(())
    }

    /// The trade history as a validated, read-only log.
    pub fn trade_log(&self) -> Result<TradeLog, ConfigError> {
        TradeLog::new(self.trades.clone())
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{BenchmarkKind, TradeType};
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"
[dashboard]
starting_balance = 25000

[logging]
level = "debug"

[performance]
roi = 17.8
sharpe_ratio_annualized = 1.15
alpha = 5.3
risk_free_rate = 4.5
std_deviation = 12.1
excess_return = 13.3
profit_factor = 4.40

[statistics]
profit_trades = 1
loss_trades = 1
long_positions = 1
long_win_rate = 100
short_positions = 1
short_win_rate = 0

[[benchmarks]]
name = "S&P 500"
return_pct = 12.5
sharpe_ratio = 0.9

[[trades]]
ticket = "T1"
type = "buy"
item = "EURUSD"
size = 0.5
open_price = 1.0850
close_price = 1.0875
open_time = "2024-01-02 09:15:00"
close_time = "2024-01-02 16:40:00"
profit = 125.0

[[trades]]
ticket = "T2"
type = "sell"
item = "GBPUSD"
size = 0.3
open_price = 1.2710
close_price = 1.2735
open_time = "2024-01-03 10:00:00"
close_time = "2024-01-03 12:30:00"
profit = -75.5
"#;

    #[test]
    fn test_loads_dataset_and_settings() {
        let config = load_config_from_str(SAMPLE).unwrap();
        assert_eq!(config.dashboard.starting_balance, dec!(25000));
        assert_eq!(config.dashboard.title, "Trading Performance");
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.performance.roi, dec!(17.8));
        assert_eq!(config.performance.relative_drawdown, Decimal::ZERO);
        assert_eq!(config.benchmarks[0].kind, BenchmarkKind::Benchmark);
        assert_eq!(config.trades.len(), 2);
        assert_eq!(config.trades[1].trade_type, TradeType::Sell);
        assert_eq!(config.trades[1].profit, dec!(-75.5));
        assert_eq!(config.trade_log().unwrap().net_profit(), dec!(49.5));
    }

    #[test]
    fn test_starting_balance_defaults_to_shared_constant() {
        let doc = SAMPLE.replace("[dashboard]\nstarting_balance = 25000\n", "");
        let config = load_config_from_str(&doc).unwrap();
        assert_eq!(
            config.dashboard.starting_balance,
            core_types::DEFAULT_STARTING_BALANCE
        );
        assert_eq!(config.dashboard.starting_balance, dec!(10000));
    }

    #[test]
    fn test_rejects_duplicate_tickets() {
        let doc = SAMPLE.replace("ticket = \"T2\"", "ticket = \"T1\"");
        let err = load_config_from_str(&doc).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("T1")));
    }

    #[test]
    fn test_rejects_non_positive_trade_size() {
        let doc = SAMPLE.replace("size = 0.3", "size = 0");
        let err = load_config_from_str(&doc).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("T2")));

        let doc = SAMPLE.replace("size = 0.5", "size = -0.5");
        let err = load_config_from_str(&doc).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("T1")));
    }

    #[test]
    fn test_risk_free_benchmark_must_match_performance() {
        let entry = "[[benchmarks]]\nname = \"US T-Bill\"\nreturn_pct = 4.5\nsharpe_ratio = 0\nkind = \"riskfree\"\n\n[[trades]]";
        let doc = SAMPLE.replacen("[[trades]]", entry, 1);
        let config = load_config_from_str(&doc).unwrap();
        assert_eq!(config.benchmarks[1].kind, BenchmarkKind::RiskFree);

        let doc = doc.replace("return_pct = 4.5", "return_pct = 5.0");
        assert!(matches!(
            load_config_from_str(&doc),
            Err(ConfigError::Invalid(msg)) if msg.contains("US T-Bill")
        ));
    }

    #[test]
    fn test_rejects_portfolio_kind_benchmark() {
        let doc = SAMPLE.replace("sharpe_ratio = 0.9", "sharpe_ratio = 0.9\nkind = \"portfolio\"");
        assert!(matches!(
            load_config_from_str(&doc),
            Err(ConfigError::Invalid(msg)) if msg.contains("portfolio")
        ));
    }

    #[test]
    fn test_rejects_win_rate_above_100() {
        let doc = SAMPLE.replace("long_win_rate = 100", "long_win_rate = 120");
        let err = load_config_from_str(&doc).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("long_win_rate")));
    }

    #[test]
    fn test_rejects_non_positive_starting_balance() {
        let doc = SAMPLE.replace("starting_balance = 25000", "starting_balance = 0");
        assert!(matches!(
            load_config_from_str(&doc),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_unknown_trade_type_fails_to_load() {
        let doc = SAMPLE.replace("type = \"sell\"", "type = \"hold\"");
        assert!(matches!(
            load_config_from_str(&doc),
            Err(ConfigError::Load(_))
        ));
    }

    #[test]
    fn test_load_error_names_dashboard_data() {
        let doc = SAMPLE.replace("profit = -75.5", "profit = \"lots\"");
        let err = load_config_from_str(&doc).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load dashboard data:"));
    }

    #[test]
    fn test_read_config_defers_validation() {
        let path = std::env::temp_dir().join(format!("tradeboard-{}.toml", std::process::id()));
        let doc = SAMPLE.replace("ticket = \"T2\"", "ticket = \"T1\"");
        std::fs::write(&path, doc).unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.trades.len(), 2);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        assert!(matches!(load_config(&path), Err(ConfigError::Invalid(_))));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_dataset_section_fails_to_load() {
        let doc = SAMPLE.replace("[performance]", "[perf]");
        assert!(load_config_from_str(&doc).is_err());
    }
}
