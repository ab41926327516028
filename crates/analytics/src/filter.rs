use crate::error::AnalyticsError;
use core_types::{Trade, TradeType};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Buy,
    Sell,
}

impl TypeFilter {
    fn matches(&self, trade_type: TradeType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Buy => trade_type == TradeType::Buy,
            TypeFilter::Sell => trade_type == TradeType::Sell,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TypeFilter::All),
            "buy" => Ok(TypeFilter::Buy),
            "sell" => Ok(TypeFilter::Sell),
            _ => Err(AnalyticsError::InvalidFilterCriterion {
                criterion: "type",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultFilter {
    #[default]
    All,
    Profit,
    Loss,
}

impl ResultFilter {
    /// Breakeven trades only pass `All`.
    fn matches(&self, trade: &Trade) -> bool {
        match self {
            ResultFilter::All => true,
            ResultFilter::Profit => trade.is_win(),
            ResultFilter::Loss => trade.is_loss(),
        }
    }
}

impl FromStr for ResultFilter {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ResultFilter::All),
            "profit" => Ok(ResultFilter::Profit),
            "loss" => Ok(ResultFilter::Loss),
            _ => Err(AnalyticsError::InvalidFilterCriterion {
                criterion: "result",
                value: s.to_string(),
            }),
        }
    }
}

/// The three independent criteria of the trade table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TradeFilter {
    pub search_term: String,
    pub type_filter: TypeFilter,
    pub result_filter: ResultFilter,
}

impl TradeFilter {
    pub fn new(
        search_term: impl Into<String>,
        type_filter: TypeFilter,
        result_filter: ResultFilter,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            type_filter,
            result_filter,
        }
    }

    /// Builds a filter from raw user input, rejecting unknown dropdown values.
    pub fn parse(search_term: &str, type_filter: &str, result_filter: &str) -> Result<Self, AnalyticsError> {
        let filter = Self::new(search_term, type_filter.parse()?, result_filter.parse()?);
        Ok(filter)
    }

    /// Case-insensitive substring match on ticket or item, AND the type
    /// criterion, AND the result criterion.
    pub fn matches(&self, trade: &Trade) -> bool {
        self.matches_lowered(&self.search_term.to_lowercase(), trade)
    }

    /// Returns the matching trades in input order.
    pub fn apply(&self, trades: &[Trade]) -> FilteredTrades {
        let needle = self.search_term.to_lowercase();
        let matched: Vec<Trade> = trades
            .iter()
            .filter(|trade| self.matches_lowered(&needle, trade))
            .cloned()
            .collect();

        tracing::debug!(
            search = %self.search_term,
            type_filter = ?self.type_filter,
            result_filter = ?self.result_filter,
            shown = matched.len(),
            total = trades.len(),
            "Filtered trade history."
        );

        FilteredTrades {
            trades: matched,
            total: trades.len(),
        }
    }

    fn matches_lowered(&self, needle: &str, trade: &Trade) -> bool {
        let matches_search = needle.is_empty()
            || trade.ticket.to_lowercase().contains(needle)
            || trade.item.to_lowercase().contains(needle);

        matches_search
            && self.type_filter.matches(trade.trade_type)
            && self.result_filter.matches(trade)
    }
}

/// The trade table's rows plus the size of the unfiltered history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredTrades {
    pub trades: Vec<Trade>,
    pub total: usize,
}

impl FilteredTrades {
    pub fn shown(&self) -> usize {
        self.trades.len()
    }

    pub fn caption(&self) -> String {
        format!("Showing {} of {} trades", self.shown(), self.total)
    }
}

/// `+$10.00` for gains and breakeven, `-$5.00` for losses.
pub fn format_profit(profit: Decimal) -> String {
    let sign = if profit >= Decimal::ZERO { "+$" } else { "-$" };
    let cents = profit
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}", sign, cents)
}
