//! # Tradeboard Core Types
//!
//! The Layer 0 vocabulary of the dashboard: closed trades, the account-level
//! snapshots that arrive pre-computed, and the market benchmarks they are
//! compared against. Every other crate in the workspace speaks in these types.

pub mod enums;
pub mod error;
pub mod structs;
pub mod time;
pub mod trade_log;

// Re-export the core types to provide a clean public API.
pub use enums::{BenchmarkKind, PositionType, TradeType};
pub use error::CoreError;
pub use structs::{
    Benchmark, DEFAULT_STARTING_BALANCE, PerformanceMetrics, Trade, TradeStatistics,
};
pub use time::parse_timestamp;
pub use trade_log::TradeLog;
