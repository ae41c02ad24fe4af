//! Derived trade metrics.

use crate::domain::Decimal;
use serde::{Deserialize, Serialize};

/// Profit and its percentage of total cost. Only ever exist as a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitSummary {
    pub profit: Decimal,
    pub profit_percentage: Decimal,
}

/// Every value the form derives from its inputs. `None` = not computable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Coins owned once the buy fee is accounted for (8 places).
    pub effective_amount: Option<Decimal>,
    pub buy_fee_percentage: Option<Decimal>,
    pub sell_fee_percentage: Option<Decimal>,
    pub price_increase_percentage: Option<Decimal>,
    pub profit: Option<ProfitSummary>,
}

impl DerivedMetrics {
    /// All metrics not computable; the state after `clear`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }
}
