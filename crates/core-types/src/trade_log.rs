use crate::error::CoreError;
use crate::structs::Trade;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;

/// The authoritative, read-only history of closed trades.
///
/// Construction guarantees that every `ticket` is unique and every `size` is
/// positive. After that the log
/// only hands out shared references; derived views are always built from
/// copies.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TradeLog {
    trades: Vec<Trade>,
}

impl TradeLog {
    pub fn new(trades: Vec<Trade>) -> Result<Self, CoreError> {
        if let Some(ticket) = first_duplicate(&trades) {
            tracing::warn!(%ticket, "Rejected trade log with duplicate ticket.");
            return Err(CoreError::DuplicateTicket(ticket));
        }
        if let Some(trade) = trades.iter().find(|t| t.size <= Decimal::ZERO) {
            tracing::warn!(ticket = %trade.ticket, size = %trade.size, "Rejected trade with non-positive size.");
            return Err(CoreError::NonPositiveSize {
                ticket: trade.ticket.clone(),
                size: trade.size,
            });
        }
        Ok(Self { trades })
    }

    pub fn as_slice(&self) -> &[Trade] {
        &self.trades
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trade> {
        self.trades.iter()
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Sum of realized profit over the whole history.
    pub fn net_profit(&self) -> Decimal {
        self.trades.iter().map(|t| t.profit).sum()
    }
}

fn first_duplicate(trades: &[Trade]) -> Option<String> {
    let mut seen = HashSet::with_capacity(trades.len());
    trades
        .iter()
        .find(|t| !seen.insert(t.ticket.as_str()))
        .map(|t| t.ticket.clone())
}

impl<'a> IntoIterator for &'a TradeLog {
    type Item = &'a Trade;
    type IntoIter = std::slice::Iter<'a, Trade>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
