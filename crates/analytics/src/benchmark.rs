use core_types::{Benchmark, BenchmarkKind, PerformanceMetrics};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Name of the portfolio bar when the dashboard has no title.
pub const DEFAULT_PORTFOLIO_NAME: &str = "Portfolio";
/// Name of the risk-free bar when no risk-free entry is configured.
pub const DEFAULT_RISK_FREE_NAME: &str = "US T-Bill";

/// One line of an outperformance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    pub name: String,
    pub portfolio_value: Decimal,
    pub benchmark_value: Decimal,
    /// `portfolio_value - benchmark_value`, unrounded.
    pub difference: Decimal,
    pub unit: String,
}

impl BenchmarkRow {
    /// Strictly greater; a tie is not outperformance.
    pub fn is_outperforming(&self) -> bool {
        self.difference > Decimal::ZERO
    }

    /// The difference at two decimal places.
    pub fn rounded_difference(&self) -> Decimal {
        self.difference
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// `+5.30%` when outperforming, `-2.70%` or `0.00%` otherwise.
    pub fn formatted_difference(&self) -> String {
        let sign = if self.is_outperforming() { "+" } else { "" };
        format!("{}{:.2}{}", sign, self.rounded_difference(), self.unit)
    }
}

/// Compares a portfolio figure with a benchmark figure.
pub fn compare(
    name: impl Into<String>,
    portfolio_value: Decimal,
    benchmark_value: Decimal,
    unit: impl Into<String>,
) -> BenchmarkRow {
    BenchmarkRow {
        name: name.into(),
        portfolio_value,
        benchmark_value,
        difference: portfolio_value - benchmark_value,
        unit: unit.into(),
    }
}

/// A bar in the return or Sharpe comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonBar {
    pub name: String,
    pub value: Decimal,
    pub kind: BenchmarkKind,
}

/// Everything the benchmark section renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub return_chart: Vec<ComparisonBar>,
    pub sharpe_chart: Vec<ComparisonBar>,
    pub return_advantage: Vec<BenchmarkRow>,
    pub risk_adjusted_advantage: Vec<BenchmarkRow>,
}

/// Measures the portfolio's headline metrics against a fixed list of
/// market benchmarks. Holds borrowed inputs only.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkComparator<'a> {
    portfolio_name: &'a str,
    metrics: &'a PerformanceMetrics,
    benchmarks: &'a [Benchmark],
}

impl<'a> BenchmarkComparator<'a> {
    pub fn new(metrics: &'a PerformanceMetrics, benchmarks: &'a [Benchmark]) -> Self {
        Self {
            portfolio_name: DEFAULT_PORTFOLIO_NAME,
            metrics,
            benchmarks,
        }
    }

    /// Names the portfolio bar, usually after the dashboard title.
    pub fn with_portfolio_name(mut self, name: &'a str) -> Self {
        self.portfolio_name = name;
        self
    }

    /// The portfolio first, then the configured entries in order.
    ///
    /// A configured `riskfree` entry keeps its name and position but always
    /// reports the account's risk-free rate with a Sharpe of 0. Without one,
    /// the risk-free bar is appended last. Configured `portfolio` entries are
    /// ignored.
    pub fn entries(&self) -> Vec<Benchmark> {
        let mut entries = Vec::with_capacity(self.benchmarks.len() + 2);
        entries.push(Benchmark {
            name: self.portfolio_name.to_string(),
            return_pct: self.metrics.roi,
            sharpe_ratio: self.metrics.sharpe_ratio_annualized,
            kind: BenchmarkKind::Portfolio,
        });

        let mut has_risk_free = false;
        for benchmark in self.benchmarks {
            match benchmark.kind {
                BenchmarkKind::Benchmark => entries.push(benchmark.clone()),
                BenchmarkKind::RiskFree if !has_risk_free => {
                    has_risk_free = true;
                    entries.push(self.risk_free(&benchmark.name));
                }
                BenchmarkKind::RiskFree | BenchmarkKind::Portfolio => {}
            }
        }
        if !has_risk_free {
            entries.push(self.risk_free(DEFAULT_RISK_FREE_NAME));
        }
        entries
    }

    pub fn return_chart(&self) -> Vec<ComparisonBar> {
        self.chart(|b| b.return_pct)
    }

    pub fn sharpe_chart(&self) -> Vec<ComparisonBar> {
        self.chart(|b| b.sharpe_ratio)
    }

    pub fn return_advantage(&self) -> Vec<BenchmarkRow> {
        self.market_benchmarks()
            .map(|b| compare(format!("vs {}", b.name), self.metrics.roi, b.return_pct, "%"))
            .collect()
    }

    pub fn risk_adjusted_advantage(&self) -> Vec<BenchmarkRow> {
        self.market_benchmarks()
            .map(|b| {
                compare(
                    format!("vs {}", b.name),
                    self.metrics.sharpe_ratio_annualized,
                    b.sharpe_ratio,
                    "",
                )
            })
            .collect()
    }

    pub fn report(&self) -> BenchmarkReport {
        let report = BenchmarkReport {
            return_chart: self.return_chart(),
            sharpe_chart: self.sharpe_chart(),
            return_advantage: self.return_advantage(),
            risk_adjusted_advantage: self.risk_adjusted_advantage(),
        };
        tracing::debug!(
            benchmarks = self.benchmarks.len(),
            outperformed = report
                .return_advantage
                .iter()
                .filter(|r| r.is_outperforming())
                .count(),
            "Compared portfolio against benchmarks."
        );
        report
    }

    fn risk_free(&self, name: &str) -> Benchmark {
        Benchmark {
            name: name.to_string(),
            return_pct: self.metrics.risk_free_rate,
            sharpe_ratio: Decimal::ZERO,
            kind: BenchmarkKind::RiskFree,
        }
    }

    fn chart<F>(&self, value: F) -> Vec<ComparisonBar>
    where
        F: Fn(&Benchmark) -> Decimal,
    {
        self.entries()
            .into_iter()
            .map(|b| ComparisonBar {
                value: value(&b),
                name: b.name,
                kind: b.kind,
            })
            .collect()
    }

    // Only market benchmarks get outperformance rows.
    fn market_benchmarks(&self) -> impl Iterator<Item = &'a Benchmark> {
        self.benchmarks
            .iter()
            .filter(|b| b.kind == BenchmarkKind::Benchmark)
    }
}
