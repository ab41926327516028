use serde::{Deserialize, Serialize};
use std::fmt;

/// The direction of a closed position as recorded by the broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    Buy,
    Sell,
}

impl TradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::Buy => "buy",
            TradeType::Sell => "sell",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionType {
    Long,
    Short,
}

impl PositionType {
    pub fn label(&self) -> &'static str {
        match self {
            PositionType::Long => "Long Positions",
            PositionType::Short => "Short Positions",
        }
    }
}

/// How an entry in the benchmark charts relates to the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkKind {
    Portfolio,
    Benchmark,
    #[serde(rename = "riskfree")]
    RiskFree,
}

impl Default for BenchmarkKind {
    fn default() -> Self {
        BenchmarkKind::Benchmark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_type_displays_lowercase() {
        assert_eq!(TradeType::Buy.to_string(), "buy");
        assert_eq!(TradeType::Sell.as_str(), "sell");
    }

    #[test]
    fn test_trade_type_rejects_unknown_value() {
        assert!(serde_json::from_str::<TradeType>("\"hold\"").is_err());
        assert_eq!(serde_json::from_str::<TradeType>("\"sell\"").unwrap(), TradeType::Sell);
    }

    #[test]
    fn test_benchmark_kind_serializes_riskfree() {
        let json = serde_json::to_string(&BenchmarkKind::RiskFree).unwrap();
        assert_eq!(json, "\"riskfree\"");
    }
}
