use crate::format::{percent, ratio};
use core_types::{PerformanceMetrics, TradeStatistics};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    /// Up above `pivot`, down below it, neutral on it.
    pub fn relative_to(value: Decimal, pivot: Decimal) -> Self {
        if value > pivot {
            Trend::Up
        } else if value < pivot {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }

    pub fn from_sign(value: Decimal) -> Self {
        Self::relative_to(value, Decimal::ZERO)
    }
}

/// A headline figure at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub trend: Trend,
}

impl MetricCard {
    fn new(title: &str, value: String, trend: Trend) -> Self {
        Self {
            title: title.to_string(),
            value,
            subtitle: None,
            trend,
        }
    }

    fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

pub fn metric_cards(metrics: &PerformanceMetrics, stats: &TradeStatistics) -> Vec<MetricCard> {
    let mut cards = vec![
        MetricCard::new("ROI", percent(metrics.roi), Trend::from_sign(metrics.roi))
            .with_subtitle("Return on investment"),
        MetricCard::new(
            "Sharpe Ratio",
            ratio(metrics.sharpe_ratio_annualized),
            Trend::from_sign(metrics.sharpe_ratio_annualized),
        )
        .with_subtitle("Annualized"),
        MetricCard::new("Alpha", percent(metrics.alpha), Trend::from_sign(metrics.alpha)),
        MetricCard::new(
            "Profit Factor",
            ratio(metrics.profit_factor),
            Trend::relative_to(metrics.profit_factor, Decimal::ONE),
        )
        .with_subtitle("Gross profit / gross loss"),
    ];

    if let Some(win_rate) = stats.win_rate() {
        cards.push(
            MetricCard::new(
                "Win Rate",
                percent(win_rate),
                Trend::relative_to(win_rate, Decimal::from(50)),
            )
            .with_subtitle(format!(
                "{} wins / {} losses",
                stats.profit_trades, stats.loss_trades
            )),
        );
    }

    cards.extend([
        MetricCard::new(
            "Excess Return",
            percent(metrics.excess_return),
            Trend::from_sign(metrics.excess_return),
        )
        .with_subtitle("Above the risk-free rate"),
        MetricCard::new("Std Deviation", percent(metrics.std_deviation), Trend::Neutral),
        MetricCard::new("Risk-Free Rate", percent(metrics.risk_free_rate), Trend::Neutral),
        MetricCard::new(
            "Relative Drawdown",
            percent(metrics.relative_drawdown),
            if metrics.relative_drawdown > Decimal::ZERO {
                Trend::Down
            } else {
                Trend::Neutral
            },
        ),
    ]);

    cards
}
