//! Sell fee estimation from the buy-side fee percentage.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{buy_fee_percentage, effective_amount, MONEY_SCALE};
use crate::domain::{Decimal, TradeValues};

/// Who owns the sell fee field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeMode {
    /// The user types the sell fee.
    #[default]
    Manual,
    /// The sell fee is derived on every recompute.
    Estimated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeEstimationPolicy {
    mode: FeeMode,
}

impl FeeEstimationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FeeMode {
        self.mode
    }

    pub fn is_estimating(&self) -> bool {
        self.mode == FeeMode::Estimated
    }

    /// Switch modes. Returns true if the mode changed.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        let next = if enabled {
            FeeMode::Estimated
        } else {
            FeeMode::Manual
        };
        if next == self.mode {
            return false;
        }
        debug!(from = ?self.mode, to = ?next, "Fee estimation mode changed");
        self.mode = next;
        true
    }

    /// The sell fee to write for this snapshot, if the policy writes one.
    ///
    /// `None` in manual mode, and also while estimating when the buy fee
    /// percentage is not computable: the current sell fee then stays as is.
    pub fn estimate(&self, values: &TradeValues) -> Option<Decimal> {
        match self.mode {
            FeeMode::Manual => None,
            FeeMode::Estimated => estimate_sell_fee(values),
        }
    }
}

/// `buy_fee_percentage / 100 * (sale_price * effective_amount)`, 2 places.
///
/// Works from the rounded metric values, the same ones the form shows. Reads
/// nothing but the buy side and the sale price.
pub fn estimate_sell_fee(values: &TradeValues) -> Option<Decimal> {
    let fee_pct = buy_fee_percentage(
        values.purchase_price,
        values.purchase_amount,
        values.buy_fee,
    )?;
    let effective = effective_amount(
        values.purchase_price,
        values.purchase_amount,
        values.buy_fee,
    )?;
    let sale_amount = values.sale_price.checked_mul(effective)?;
    let fee = fee_pct
        .checked_div(Decimal::hundred())?
        .checked_mul(sale_amount)?;
    Some(fee.round_fixed(MONEY_SCALE))
}
