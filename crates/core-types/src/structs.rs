use crate::enums::{BenchmarkKind, TradeType};
use crate::error::CoreError;
use crate::time::parse_timestamp;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single closed position, exactly as it appears in the account history.
///
/// Timestamps are kept as the raw strings the broker exported; use
/// [`Trade::closed_at`] to get a chronological value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub ticket: String,
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    pub item: String,
    pub size: Decimal,
    pub open_price: Decimal,
    pub close_price: Decimal,
    pub open_time: String,
    pub close_time: String,
    pub profit: Decimal,
}

impl Trade {
    /// Parses `close_time`. This is the sort key for every time series.
    pub fn closed_at(&self) -> Result<NaiveDateTime, CoreError> {
        parse_timestamp("close_time", &self.close_time)
    }

    pub fn is_win(&self) -> bool {
        self.profit > Decimal::ZERO
    }

    pub fn is_loss(&self) -> bool {
        self.profit < Decimal::ZERO
    }
}

/// Account balance before the first trade when no other is configured.
pub const DEFAULT_STARTING_BALANCE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Account-level statistics computed upstream by the trading platform.
/// All values are percentages except the ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub roi: Decimal,
    pub sharpe_ratio_annualized: Decimal,
    pub alpha: Decimal,
    pub risk_free_rate: Decimal,
    pub std_deviation: Decimal,
    pub excess_return: Decimal,
    pub profit_factor: Decimal,
    #[serde(default)]
    pub relative_drawdown: Decimal,
}

/// Aggregate trade counts and win rates computed upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeStatistics {
    #[serde(default)]
    pub total_trades: u32,
    pub profit_trades: u32,
    pub loss_trades: u32,
    pub long_positions: u32,
    pub long_win_rate: Decimal,
    pub short_positions: u32,
    pub short_win_rate: Decimal,
    #[serde(default)]
    pub max_consecutive_wins: u32,
    #[serde(default)]
    pub max_consecutive_wins_profit: Decimal,
}

impl TradeStatistics {
    /// Share of winning trades in percent.
    ///
    /// Falls back to `profit_trades + loss_trades` when `total_trades` was not
    /// supplied. Returns `None` when there is nothing to divide by.
    pub fn win_rate(&self) -> Option<Decimal> {
        let total = if self.total_trades > 0 {
            u64::from(self.total_trades)
        } else {
            u64::from(self.profit_trades) + u64::from(self.loss_trades)
        };
        if total == 0 {
            return None;
        }
        Some(Decimal::from(self.profit_trades) / Decimal::from(total) * Decimal::ONE_HUNDRED)
    }
}

/// A named external reference the portfolio is measured against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub name: String,
    pub return_pct: Decimal,
    pub sharpe_ratio: Decimal,
    #[serde(default)]
    pub kind: BenchmarkKind,
}

impl Benchmark {
    pub fn new(name: impl Into<String>, return_pct: Decimal, sharpe_ratio: Decimal) -> Self {
        Self {
            name: name.into(),
            return_pct,
            sharpe_ratio,
            kind: BenchmarkKind::Benchmark,
        }
    }
}
