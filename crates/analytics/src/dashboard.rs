use crate::benchmark::{BenchmarkComparator, BenchmarkReport, DEFAULT_PORTFOLIO_NAME};
use crate::cards::{MetricCard, metric_cards};
use crate::distribution::{DistributionAggregator, TradeDistribution};
use crate::error::AnalyticsError;
use crate::filter::{FilteredTrades, TradeFilter};
use crate::insights::{Insight, generate_insights};
use crate::performance::{CumulativeSeries, PerformanceCalculator};
use core_types::{Benchmark, PerformanceMetrics, TradeLog, TradeStatistics};
use rust_decimal::Decimal;

/// The static dataset the dashboard is rendered from, passed around
/// explicitly instead of living in globals.
///
/// Nothing is cached: every accessor recomputes its view from the source
/// data, so two calls with the same arguments always agree.
#[derive(Debug, Clone)]
pub struct Dashboard {
    title: String,
    trades: TradeLog,
    metrics: PerformanceMetrics,
    statistics: TradeStatistics,
    benchmarks: Vec<Benchmark>,
    starting_balance: Decimal,
}

impl Dashboard {
    pub fn new(
        trades: TradeLog,
        metrics: PerformanceMetrics,
        statistics: TradeStatistics,
        benchmarks: Vec<Benchmark>,
        starting_balance: Decimal,
    ) -> Self {
        Self {
            title: DEFAULT_PORTFOLIO_NAME.to_string(),
            trades,
            metrics,
            statistics,
            benchmarks,
            starting_balance,
        }
    }

    /// Names the account; the benchmark charts label the portfolio with it.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn trades(&self) -> &TradeLog {
        &self.trades
    }

    pub fn cumulative_performance(&self) -> Result<CumulativeSeries, AnalyticsError> {
        PerformanceCalculator::new(self.starting_balance).calculate(self.trades.as_slice())
    }

    pub fn distribution(&self) -> Result<TradeDistribution, AnalyticsError> {
        DistributionAggregator::new().aggregate(&self.statistics)
    }

    pub fn benchmark_report(&self) -> BenchmarkReport {
        BenchmarkComparator::new(&self.metrics, &self.benchmarks)
            .with_portfolio_name(&self.title)
            .report()
    }

    pub fn filter_trades(&self, filter: &TradeFilter) -> FilteredTrades {
        filter.apply(self.trades.as_slice())
    }

    pub fn insights(&self) -> Vec<Insight> {
        generate_insights(&self.metrics, &self.statistics)
    }

    pub fn metric_cards(&self) -> Vec<MetricCard> {
        metric_cards(&self.metrics, &self.statistics)
    }
}
