//! Reference scenarios for each dashboard view, driven through `Dashboard`.

use analytics::{
    AnalyticsError, Dashboard, DistributionAggregator, ResultFilter, TradeFilter, TypeFilter,
    compare,
};
use core_types::{Benchmark, PerformanceMetrics, Trade, TradeLog, TradeStatistics, TradeType};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn trade(ticket: &str, item: &str, trade_type: TradeType, profit: Decimal, close_time: &str) -> Trade {
    Trade {
        ticket: ticket.to_string(),
        trade_type,
        item: item.to_string(),
        size: dec!(0.5),
        open_price: dec!(1.2500),
        close_price: dec!(1.2600),
        open_time: "2023-12-31 08:00:00".to_string(),
        close_time: close_time.to_string(),
        profit,
    }
}

fn metrics() -> PerformanceMetrics {
    PerformanceMetrics {
        roi: dec!(17.8),
        sharpe_ratio_annualized: dec!(1.15),
        alpha: dec!(5.3),
        risk_free_rate: dec!(4.5),
        std_deviation: dec!(12.1),
        excess_return: dec!(13.3),
        profit_factor: dec!(4.40),
        relative_drawdown: dec!(10.74),
    }
}

fn statistics() -> TradeStatistics {
    TradeStatistics {
        total_trades: 100,
        profit_trades: 80,
        loss_trades: 20,
        long_positions: 50,
        long_win_rate: dec!(80),
        short_positions: 50,
        short_win_rate: dec!(80),
        max_consecutive_wins: 12,
        max_consecutive_wins_profit: dec!(2380.40),
    }
}

fn dashboard(trades: Vec<Trade>) -> Dashboard {
    Dashboard::new(
        TradeLog::new(trades).unwrap(),
        metrics(),
        statistics(),
        vec![
            Benchmark::new("S&P 500", dec!(12.5), dec!(0.9)),
            Benchmark::new("NASDAQ", dec!(15.2), dec!(0.85)),
            Benchmark::new("Hedge Fund Avg", dec!(8.5), dec!(1.2)),
        ],
        dec!(10000),
    )
}

#[test]
fn test_cumulative_balance_reference_scenario() {
    let board = dashboard(vec![
        trade("A1", "EURUSD", TradeType::Buy, dec!(100), "2024-01-02"),
        trade("A2", "EURUSD", TradeType::Sell, dec!(-50), "2024-01-01"),
    ]);

    let series = board.cumulative_performance().unwrap();
    let rows: Vec<_> = series
        .points
        .iter()
        .map(|p| (p.ticket.as_str(), p.balance))
        .collect();
    assert_eq!(rows, vec![("A2", dec!(9950)), ("A1", dec!(10050))]);
    assert_eq!(series.final_balance(), dec!(10050));

    // the source history is untouched
    let order: Vec<_> = board.trades().iter().map(|t| t.ticket.as_str()).collect();
    assert_eq!(order, vec!["A1", "A2"]);
}

#[test]
fn test_recomputation_is_identical() {
    let board = dashboard(vec![
        trade("A1", "EURUSD", TradeType::Buy, dec!(100.10), "2024-01-02 10:00"),
        trade("A2", "XAUUSD", TradeType::Sell, dec!(-50.05), "2024-01-01 10:00"),
    ]);
    assert_eq!(
        board.cumulative_performance().unwrap(),
        board.cumulative_performance().unwrap()
    );
    assert_eq!(board.benchmark_report(), board.benchmark_report());
    assert_eq!(board.insights(), board.insights());
}

#[test]
fn test_malformed_close_time_surfaces_parse_error() {
    let board = dashboard(vec![trade("A1", "EURUSD", TradeType::Buy, dec!(1), "2024/01/02")]);
    assert!(matches!(
        board.cumulative_performance(),
        Err(AnalyticsError::Parse { .. })
    ));
}

#[test]
fn test_distribution_reference_scenario() {
    let dist = DistributionAggregator::new().aggregate(&statistics()).unwrap();
    assert_eq!((dist.outcome.wins, dist.outcome.losses), (80, 20));
    for position in &dist.positions {
        assert_eq!((position.wins, position.losses), (40, 10));
    }
}

#[test]
fn test_benchmark_reference_scenario() {
    let row = compare("vs S&P 500", dec!(17.8), dec!(12.5), "%");
    assert_eq!(row.rounded_difference(), dec!(5.30));
    assert!(row.is_outperforming());

    let report = dashboard(Vec::new()).benchmark_report();
    assert_eq!(report.return_advantage[0], row);
    assert_eq!(report.return_chart.len(), 5);
}

#[test]
fn test_benchmark_chart_is_labelled_with_dashboard_title() {
    let board = dashboard(Vec::new()).with_title("BMC Portfolio");
    assert_eq!(board.title(), "BMC Portfolio");

    let report = board.benchmark_report();
    assert_eq!(report.return_chart[0].name, "BMC Portfolio");
    assert_eq!(report.sharpe_chart[0].name, "BMC Portfolio");
    assert_eq!(report.return_chart[4].name, "US T-Bill");
}

#[test]
fn test_trade_filter_reference_scenario() {
    let board = dashboard(vec![
        trade("T1", "EURUSD", TradeType::Buy, dec!(10), "2024-01-01"),
        trade("T2", "GBPUSD", TradeType::Sell, dec!(-5), "2024-01-02"),
    ]);
    let filter = TradeFilter::parse("eur", "all", "all").unwrap();
    let filtered = board.filter_trades(&filter);
    let tickets: Vec<_> = filtered.trades.iter().map(|t| t.ticket.as_str()).collect();
    assert_eq!(tickets, vec!["T1"]);
    assert_eq!(filtered.total, 2);
}

#[test]
fn test_filter_combination_reference_scenario() {
    let board = dashboard(vec![
        trade("X1", "EURUSD", TradeType::Buy, dec!(10), "2024-01-01"),
        trade("X2", "EURUSD", TradeType::Buy, dec!(-10), "2024-01-02"),
        trade("X3", "EURUSD", TradeType::Sell, dec!(10), "2024-01-03"),
        trade("Y1", "GBPUSD", TradeType::Buy, dec!(10), "2024-01-04"),
    ]);
    let filtered = board.filter_trades(&TradeFilter::new("X", TypeFilter::Buy, ResultFilter::Profit));
    let tickets: Vec<_> = filtered.trades.iter().map(|t| t.ticket.as_str()).collect();
    assert_eq!(tickets, vec!["X1"]);
}
