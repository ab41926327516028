//! # Tradeboard Analytics
//!
//! The derived-data layer of the trading dashboard. It turns the static trade
//! history and the pre-computed account snapshots into chart-ready and
//! table-ready views.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   rendering, files or the network. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every calculator takes its inputs by reference
//!   and returns a freshly built view. Nothing is mutated in place and nothing
//!   is remembered between calls.
//!
//! ## Public API
//!
//! - `PerformanceCalculator`: running balance series ordered by close time.
//! - `DistributionAggregator`: win/loss split and long/short breakdown.
//! - `BenchmarkComparator` / `compare`: outperformance against benchmarks.
//! - `TradeFilter`: search, type and result filtering of the trade table.
//! - `generate_insights`, `metric_cards`: the narrative and headline sections.
//! - `Dashboard`: the dataset plus one method per view.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod benchmark;
pub mod cards;
pub mod dashboard;
pub mod distribution;
pub mod error;
pub mod filter;
pub mod format;
pub mod insights;
pub mod performance;

// Re-export the key components to create a clean, public-facing API.
pub use benchmark::{BenchmarkComparator, BenchmarkReport, BenchmarkRow, ComparisonBar, compare};
pub use cards::{MetricCard, Trend, metric_cards};
pub use dashboard::Dashboard;
pub use distribution::{
    DistributionAggregator, PositionBreakdown, TradeDistribution, WinLossDistribution,
};
pub use error::AnalyticsError;
pub use filter::{FilteredTrades, ResultFilter, TradeFilter, TypeFilter, format_profit};
pub use insights::{Insight, InsightSeverity, generate_insights};
pub use performance::{
    CumulativePoint, CumulativeSeries, DEFAULT_STARTING_BALANCE, PerformanceCalculator,
};
