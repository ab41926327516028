use crate::error::AnalyticsError;
use chrono::NaiveDateTime;
use core_types::{CoreError, Trade};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

pub use core_types::DEFAULT_STARTING_BALANCE;

/// One step of the running account balance, one per closed trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    pub ticket: String,
    /// Chart label, e.g. `Jan 2`.
    pub date: String,
    pub closed_at: NaiveDateTime,
    pub balance: Decimal,
    pub profit: Decimal,
    /// 1-based position in close-time order.
    pub trade_index: usize,
}

/// The balance path produced by [`PerformanceCalculator::calculate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativeSeries {
    pub starting_balance: Decimal,
    pub points: Vec<CumulativePoint>,
}

impl CumulativeSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Balance after the last trade, or the starting balance if there were none.
    pub fn final_balance(&self) -> Decimal {
        self.points
            .last()
            .map_or(self.starting_balance, |p| p.balance)
    }

    pub fn net_profit(&self) -> Decimal {
        self.final_balance() - self.starting_balance
    }

    /// Largest peak-to-trough decline of the balance, in account currency.
    /// The starting balance counts as the first peak.
    pub fn max_drawdown(&self) -> Decimal {
        self.drawdown().0
    }

    /// `max_drawdown` relative to the peak it was measured from, in percent.
    pub fn max_drawdown_pct(&self) -> Option<Decimal> {
        let (drawdown, peak) = self.drawdown();
        if peak <= Decimal::ZERO {
            return None;
        }
        Some(drawdown / peak * Decimal::ONE_HUNDRED)
    }

    fn drawdown(&self) -> (Decimal, Decimal) {
        let mut peak = self.starting_balance;
        let mut max_drawdown = Decimal::ZERO;
        let mut peak_at_max = peak;

        for point in &self.points {
            if point.balance > peak {
                peak = point.balance;
            }
            let drawdown = peak - point.balance;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
                peak_at_max = peak;
            }
        }

        (max_drawdown, peak_at_max)
    }
}

/// A stateless calculator turning an unordered trade history into a
/// running balance series.
#[derive(Debug, Clone, Copy)]
pub struct PerformanceCalculator {
    starting_balance: Decimal,
}

impl Default for PerformanceCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_BALANCE)
    }
}

impl PerformanceCalculator {
    pub fn new(starting_balance: Decimal) -> Self {
        Self { starting_balance }
    }

    pub fn starting_balance(&self) -> Decimal {
        self.starting_balance
    }

    /// Sorts a copy of `trades` by close time and accumulates the balance.
    ///
    /// Trades closing at the same instant keep their input order. Every
    /// timestamp is parsed before any accumulation happens, so a malformed
    /// `close_time` anywhere fails the whole computation.
    pub fn calculate(&self, trades: &[Trade]) -> Result<CumulativeSeries, AnalyticsError> {
        let mut ordered = trades
            .iter()
            .map(|trade| Ok((trade.closed_at()?, trade)))
            .collect::<Result<Vec<_>, CoreError>>()?;

        // `sort_by_key` is stable.
        ordered.sort_by_key(|(closed_at, _)| *closed_at);

        let mut running_balance = self.starting_balance;
        let points: Vec<CumulativePoint> = ordered
            .into_iter()
            .enumerate()
            .map(|(position, (closed_at, trade))| {
                let balance = round_cents(running_balance + trade.profit);
                running_balance = balance;
                CumulativePoint {
                    ticket: trade.ticket.clone(),
                    date: closed_at.format("%b %-d").to_string(),
                    closed_at,
                    balance,
                    profit: trade.profit,
                    trade_index: position + 1,
                }
            })
            .collect();

        tracing::debug!(
            trades = points.len(),
            final_balance = %points.last().map_or(self.starting_balance, |p| p.balance),
            "Computed cumulative performance series."
        );

        Ok(CumulativeSeries {
            starting_balance: self.starting_balance,
            points,
        })
    }
}

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::TradeType;
    use rust_decimal_macros::dec;

    fn trade(ticket: &str, profit: Decimal, close_time: &str) -> Trade {
        Trade {
            ticket: ticket.to_string(),
            trade_type: TradeType::Buy,
            item: "EURUSD".to_string(),
            size: dec!(1),
            open_price: dec!(1.1),
            close_price: dec!(1.1),
            open_time: "2024-01-01".to_string(),
            close_time: close_time.to_string(),
            profit,
        }
    }

    #[test]
    fn test_sorts_by_close_time_before_accumulating() {
        let trades = vec![
            trade("A1", dec!(100), "2024-01-02"),
            trade("A2", dec!(-50), "2024-01-01"),
        ];
        let series = PerformanceCalculator::new(dec!(10000)).calculate(&trades).unwrap();

        let summary: Vec<_> = series
            .points
            .iter()
            .map(|p| (p.ticket.as_str(), p.balance, p.trade_index))
            .collect();
        assert_eq!(summary, vec![("A2", dec!(9950), 1), ("A1", dec!(10050), 2)]);
        assert_eq!(series.points[0].date, "Jan 1");
        assert_eq!(series.points[1].date, "Jan 2");
    }

    #[test]
    fn test_equal_close_times_keep_input_order() {
        let trades = vec![
            trade("X", dec!(1), "2024-02-01 10:00:00"),
            trade("Y", dec!(2), "2024-02-01 10:00:00"),
            trade("Z", dec!(3), "2024-01-31 23:59:59"),
        ];
        let series = PerformanceCalculator::default().calculate(&trades).unwrap();
        let tickets: Vec<_> = series.points.iter().map(|p| p.ticket.as_str()).collect();
        assert_eq!(tickets, vec!["Z", "X", "Y"]);
    }

    #[test]
    fn test_empty_input_emits_no_starting_point() {
        let series = PerformanceCalculator::default().calculate(&[]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.final_balance(), DEFAULT_STARTING_BALANCE);
        assert_eq!(series.max_drawdown(), Decimal::ZERO);
    }

    #[test]
    fn test_balance_is_rounded_to_cents() {
        let trades = vec![
            trade("A", dec!(0.005), "2024-01-01"),
            trade("B", dec!(-0.015), "2024-01-02"),
        ];
        let series = PerformanceCalculator::new(dec!(100)).calculate(&trades).unwrap();
        assert_eq!(series.points[0].balance, dec!(100.01));
        // 100.01 - 0.015 = 99.995 -> away from zero
        assert_eq!(series.points[1].balance, dec!(100.00));
    }

    #[test]
    fn test_malformed_close_time_fails() {
        let trades = vec![
            trade("A", dec!(10), "2024-01-01"),
            trade("B", dec!(10), "01/02/2024"),
        ];
        let err = PerformanceCalculator::default().calculate(&trades).unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::Parse {
                field: "close_time".to_string(),
                value: "01/02/2024".to_string()
            }
        );
    }

    #[test]
    fn test_max_drawdown_from_peak() {
        let trades = vec![
            trade("A", dec!(500), "2024-01-01"),
            trade("B", dec!(-1050), "2024-01-02"),
            trade("C", dec!(300), "2024-01-03"),
            trade("D", dec!(-100), "2024-01-04"),
        ];
        let series = PerformanceCalculator::new(dec!(10000)).calculate(&trades).unwrap();
        assert_eq!(series.max_drawdown(), dec!(1050));
        assert_eq!(series.max_drawdown_pct(), Some(dec!(10)));
        assert_eq!(series.net_profit(), dec!(-350));
    }
}
