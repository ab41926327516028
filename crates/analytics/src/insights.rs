use crate::format::{compact_percent, money, percent, ratio};
use core_types::{PerformanceMetrics, TradeStatistics};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Win rate at or above which the strategy is called exceptional.
const STRONG_WIN_RATE: Decimal = Decimal::from_parts(70, 0, 0, false, 0);
const HEALTHY_WIN_RATE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
const STRONG_PROFIT_FACTOR: Decimal = Decimal::from_parts(2, 0, 0, false, 0);
/// Relative drawdown (percent) beyond which risk is flagged.
const DRAWDOWN_LIMIT: Decimal = Decimal::from_parts(15, 0, 0, false, 0);
const BALANCED_SIDE_WIN_RATE: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    Success,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    pub severity: InsightSeverity,
}

impl Insight {
    fn new(title: &str, description: String, severity: InsightSeverity) -> Self {
        Self {
            title: title.to_string(),
            description,
            severity,
        }
    }
}

/// Generates the "Performance Insights & Tips" list.
///
/// Every figure quoted in an insight is read from `metrics` or `stats`; nothing
/// is hard-coded, so the text stays in step with the data it describes.
pub fn generate_insights(metrics: &PerformanceMetrics, stats: &TradeStatistics) -> Vec<Insight> {
    let mut insights = Vec::with_capacity(5);

    if let Some(win_rate) = stats.win_rate() {
        insights.push(win_rate_insight(win_rate));
    }
    insights.push(profit_factor_insight(metrics.profit_factor));
    insights.push(drawdown_insight(metrics.relative_drawdown));
    if stats.long_positions > 0 || stats.short_positions > 0 {
        insights.push(position_balance_insight(stats));
    }
    if stats.max_consecutive_wins > 0 {
        insights.push(Insight::new(
            "Consecutive Wins Streak",
            format!(
                "{} consecutive wins generated {}. While impressive, ensure you maintain strict stop-losses to protect gains.",
                stats.max_consecutive_wins,
                money(stats.max_consecutive_wins_profit)
            ),
            InsightSeverity::Warning,
        ));
    }

    tracing::debug!(count = insights.len(), "Generated performance insights.");
    insights
}

fn win_rate_insight(win_rate: Decimal) -> Insight {
    let rate = compact_percent(win_rate);
    if win_rate >= STRONG_WIN_RATE {
        Insight::new(
            "Exceptional Win Rate",
            format!(
                "{} win rate significantly exceeds industry standards. Your strategy demonstrates strong market timing and risk management.",
                rate
            ),
            InsightSeverity::Success,
        )
    } else if win_rate >= HEALTHY_WIN_RATE {
        Insight::new(
            "Solid Win Rate",
            format!(
                "{} of trades close in profit. Keep reviewing losing setups to push the ratio higher.",
                rate
            ),
            InsightSeverity::Info,
        )
    } else {
        Insight::new(
            "Low Win Rate",
            format!(
                "Only {} of trades close in profit. Make sure winners are large enough to cover the more frequent losses.",
                rate
            ),
            InsightSeverity::Warning,
        )
    }
}

fn profit_factor_insight(profit_factor: Decimal) -> Insight {
    let pf = ratio(profit_factor);
    if profit_factor >= STRONG_PROFIT_FACTOR {
        Insight::new(
            "Profit Factor Strength",
            format!(
                "{} profit factor indicates excellent risk-reward ratio. For every $1 lost, you're making ${} in profit.",
                pf, pf
            ),
            InsightSeverity::Success,
        )
    } else if profit_factor >= Decimal::ONE {
        Insight::new(
            "Positive Profit Factor",
            format!(
                "{} profit factor: gross profit exceeds gross loss. Tightening exits on losing trades would widen the margin.",
                pf
            ),
            InsightSeverity::Info,
        )
    } else {
        Insight::new(
            "Profit Factor Below 1",
            format!(
                "{} profit factor: gross losses exceed gross profits. Review position sizing and stop placement.",
                pf
            ),
            InsightSeverity::Warning,
        )
    }
}

fn drawdown_insight(relative_drawdown: Decimal) -> Insight {
    let dd = percent(relative_drawdown);
    if relative_drawdown <= DRAWDOWN_LIMIT {
        Insight::new(
            "Controlled Drawdown",
            format!(
                "{} relative drawdown shows disciplined risk management. Consider maintaining position sizing during volatile periods.",
                dd
            ),
            InsightSeverity::Info,
        )
    } else {
        Insight::new(
            "Elevated Drawdown",
            format!(
                "{} relative drawdown exceeds the {}% comfort level. Consider reducing position size until equity recovers.",
                dd, DRAWDOWN_LIMIT
            ),
            InsightSeverity::Warning,
        )
    }
}

fn position_balance_insight(stats: &TradeStatistics) -> Insight {
    let long = compact_percent(stats.long_win_rate);
    let short = compact_percent(stats.short_win_rate);

    if stats.long_win_rate >= BALANCED_SIDE_WIN_RATE && stats.short_win_rate >= BALANCED_SIDE_WIN_RATE {
        return Insight::new(
            "Position Type Balance",
            format!(
                "Both long ({} win rate) and short ({} win rate) positions perform exceptionally well. Your strategy adapts to market conditions.",
                long, short
            ),
            InsightSeverity::Info,
        );
    }

    let (stronger, weaker) = if stats.long_win_rate >= stats.short_win_rate {
        (format!("Long positions ({})", long), format!("short positions ({})", short))
    } else {
        (format!("Short positions ({})", short), format!("long positions ({})", long))
    };
    Insight::new(
        "Directional Bias",
        format!(
            "{} outperform {}. Consider whether the weaker side deserves the same allocation.",
            stronger, weaker
        ),
        InsightSeverity::Info,
    )
}
