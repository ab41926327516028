//! # Tradeboard Events
//!
//! The messages exchanged between the dashboard front end and the analytics
//! layer. A user action (opening a section, typing in the search box, picking
//! a dropdown value) becomes a [`DashboardRequest`]; the answer is a freshly
//! recomputed [`DashboardView`].

// Declare the modules that make up this crate.
pub mod error;
pub mod messages;

// Re-export the core types to provide a clean public API.
pub use error::EventsError;
pub use messages::{DashboardRequest, DashboardView, TradeTable, respond};
