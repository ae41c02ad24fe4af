//! The calculator instance: owns the form state and keeps the derived
//! metrics in step with it.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{DerivedMetrics, TradeField, TradeInput};
use crate::engine::{self, FeeEstimationPolicy, FeeMode};
use crate::error::AppError;
use crate::format;

/// Everything the form shows at one moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorSnapshot {
    pub input: TradeInput,
    pub match_fees: bool,
    pub fee_mode: FeeMode,
    pub metrics: DerivedMetrics,
}

/// Single owner of TradeInput, the fee-match flag and DerivedMetrics.
///
/// Each mutator ends in exactly one recompute, so `metrics()` always
/// corresponds to `input()`.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    input: TradeInput,
    policy: FeeEstimationPolicy,
    metrics: DerivedMetrics,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &TradeInput {
        &self.input
    }

    pub fn metrics(&self) -> &DerivedMetrics {
        &self.metrics
    }

    pub fn fee_mode(&self) -> FeeMode {
        self.policy.mode()
    }

    pub fn match_fees(&self) -> bool {
        self.policy.is_estimating()
    }

    /// Store freshly typed text for `field` and recompute.
    ///
    /// Money fields are grouped for display; the coin amount is kept plain.
    ///
    /// # Errors
    /// `AppError::SellFeeLocked` when editing the sell fee while it is
    /// estimated. Nothing changes in that case.
    pub fn set_field(&mut self, field: TradeField, raw: &str) -> Result<(), AppError> {
        if field == TradeField::SellFee && self.policy.is_estimating() {
            warn!(raw = %raw, "Rejected sell fee edit while fee matching is on");
            return Err(AppError::SellFeeLocked);
        }
        let stored = match field {
            TradeField::PurchaseAmount => format::clean_input(raw),
            _ => format::sanitize_input(raw),
        };
        self.input.set(field, stored);
        self.recompute();
        Ok(())
    }

    /// Turn sell fee estimation on or off. Turning it off keeps the last
    /// estimated sell fee.
    pub fn set_match_fees(&mut self, enabled: bool) {
        self.policy.set_enabled(enabled);
        self.recompute();
    }

    /// Reset every field, the flag and all metrics.
    pub fn clear(&mut self) {
        self.input = TradeInput::new();
        self.policy = FeeEstimationPolicy::new();
        self.recompute();
    }

    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot {
            input: self.input.clone(),
            match_fees: self.match_fees(),
            fee_mode: self.fee_mode(),
            metrics: self.metrics,
        }
    }

    /// One pass: estimate the sell fee from the current snapshot, then
    /// derive every metric from the resulting input.
    fn recompute(&mut self) {
        let values = self.input.values();
        if let Some(sell_fee) = self.policy.estimate(&values) {
            self.input.sell_fee = format::format_decimal(sell_fee);
        }
        self.metrics = engine::recompute_all(&self.input.values());
        debug!(
            input = ?self.input,
            fee_mode = ?self.policy.mode(),
            metrics = ?self.metrics,
            "Recomputed metrics"
        );
    }
}
