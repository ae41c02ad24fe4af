//! Value types for one trade: the raw form inputs and the metrics derived
//! from them.
//!
//! This module provides:
//! - Decimal wrapper with checked arithmetic and fixed-scale rounding
//! - TradeInput (display strings as typed) and its parsed TradeValues snapshot
//! - DerivedMetrics, recomputed as a whole from one snapshot

pub mod decimal;
pub mod metrics;
pub mod trade;

pub use decimal::Decimal;
pub use metrics::{DerivedMetrics, ProfitSummary};
pub use trade::{TradeField, TradeInput, TradeValues};
