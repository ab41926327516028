use crate::error::AnalyticsError;
use core_types::{PositionType, TradeStatistics};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two slices of the win/loss pie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLossDistribution {
    pub wins: u32,
    pub losses: u32,
}

impl WinLossDistribution {
    /// Widened so that two `u32` counts can never overflow.
    pub fn total(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }

    pub fn win_pct(&self) -> Option<Decimal> {
        self.share(self.wins)
    }

    pub fn loss_pct(&self) -> Option<Decimal> {
        self.share(self.losses)
    }

    fn share(&self, part: u32) -> Option<Decimal> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        Some(Decimal::from(part) / Decimal::from(total) * Decimal::ONE_HUNDRED)
    }
}

/// Wins and losses for one side of the book, reconstructed from its win rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionBreakdown {
    pub position: PositionType,
    pub name: String,
    pub total: u32,
    pub win_rate: Decimal,
    pub wins: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeDistribution {
    pub outcome: WinLossDistribution,
    /// Short first, then long.
    pub positions: Vec<PositionBreakdown>,
}

/// Derives the categorical chart data from pre-computed trade statistics.
#[derive(Debug, Default)]
pub struct DistributionAggregator {}

impl DistributionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aggregate(&self, stats: &TradeStatistics) -> Result<TradeDistribution, AnalyticsError> {
        let outcome = WinLossDistribution {
            wins: stats.profit_trades,
            losses: stats.loss_trades,
        };

        let positions = vec![
            self.breakdown(PositionType::Short, stats.short_positions, stats.short_win_rate)?,
            self.breakdown(PositionType::Long, stats.long_positions, stats.long_win_rate)?,
        ];

        tracing::debug!(
            wins = outcome.wins,
            losses = outcome.losses,
            "Aggregated trade distribution."
        );

        Ok(TradeDistribution { outcome, positions })
    }

    /// `wins = round(total * win_rate / 100)`, half away from zero.
    /// `losses` is always `total - wins`, never rounded on its own.
    pub fn breakdown(
        &self,
        position: PositionType,
        total: u32,
        win_rate: Decimal,
    ) -> Result<PositionBreakdown, AnalyticsError> {
        if win_rate < Decimal::ZERO || win_rate > Decimal::ONE_HUNDRED {
            return Err(AnalyticsError::OutOfRange {
                field: format!("{:?} win rate", position).to_lowercase(),
                value: win_rate.to_string(),
            });
        }

        let wins = (Decimal::from(total) * win_rate / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .ok_or_else(|| AnalyticsError::OutOfRange {
                field: "wins".to_string(),
                value: total.to_string(),
            })?;

        Ok(PositionBreakdown {
            position,
            name: position.label().to_string(),
            total,
            win_rate,
            wins,
            losses: total - wins,
        })
    }
}
