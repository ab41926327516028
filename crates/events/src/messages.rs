use crate::error::EventsError;
use analytics::{
    AnalyticsError, BenchmarkReport, CumulativeSeries, Dashboard, FilteredTrades, Insight,
    MetricCard, TradeDistribution, TradeFilter,
};
use serde::{Deserialize, Serialize};

fn all() -> String {
    "all".to_string()
}

/// A request for one section of the dashboard.
///
/// Filter criteria arrive as the raw dropdown strings so that an unknown value
/// is rejected by the analytics layer instead of silently falling back.
/// Serialized as `{"type": "Trades", "search": "eur", "trade_type": "buy", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DashboardRequest {
    Summary,
    Performance,
    Distribution,
    Benchmarks,
    Trades {
        #[serde(default)]
        search: String,
        #[serde(default = "all")]
        trade_type: String,
        #[serde(default = "all")]
        result: String,
    },
    Insights,
}

/// The trade table: matching rows, the criteria that produced them, and the
/// "Showing N of M trades" caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeTable {
    pub filter: TradeFilter,
    pub caption: String,
    #[serde(flatten)]
    pub rows: FilteredTrades,
}

/// The top-level view enum. Every response from the analytics layer is one
/// of these variants.
///
/// Tagged as `{"type": "...", "payload": {...}}` so the front end can switch
/// on `type` without inspecting the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum DashboardView {
    Summary(Vec<MetricCard>),
    Performance(CumulativeSeries),
    Distribution(TradeDistribution),
    Benchmarks(BenchmarkReport),
    Trades(TradeTable),
    Insights(Vec<Insight>),
}

impl DashboardView {
    pub fn to_json(&self) -> Result<String, EventsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Recomputes the requested view from the full dataset.
pub fn respond(
    dashboard: &Dashboard,
    request: &DashboardRequest,
) -> Result<DashboardView, AnalyticsError> {
    tracing::debug!(?request, "Handling dashboard request.");

    let view = match request {
        DashboardRequest::Summary => DashboardView::Summary(dashboard.metric_cards()),
        DashboardRequest::Performance => {
            DashboardView::Performance(dashboard.cumulative_performance()?)
        }
        DashboardRequest::Distribution => DashboardView::Distribution(dashboard.distribution()?),
        DashboardRequest::Benchmarks => DashboardView::Benchmarks(dashboard.benchmark_report()),
        DashboardRequest::Trades {
            search,
            trade_type,
            result,
        } => {
            let filter = TradeFilter::parse(search, trade_type, result)?;
            let rows = dashboard.filter_trades(&filter);
            DashboardView::Trades(TradeTable {
                caption: rows.caption(),
                filter,
                rows,
            })
        }
        DashboardRequest::Insights => DashboardView::Insights(dashboard.insights()),
    };

    Ok(view)
}
