//! Trade form inputs: TradeField, TradeInput, TradeValues.

use crate::domain::Decimal;
use crate::error::AppError;
use crate::format;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five editable numeric fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeField {
    PurchasePrice,
    PurchaseAmount,
    BuyFee,
    SalePrice,
    SellFee,
}

impl TradeField {
    pub const ALL: [TradeField; 5] = [
        TradeField::PurchasePrice,
        TradeField::PurchaseAmount,
        TradeField::BuyFee,
        TradeField::SalePrice,
        TradeField::SellFee,
    ];

    /// Command-line name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeField::PurchasePrice => "purchase-price",
            TradeField::PurchaseAmount => "purchase-amount",
            TradeField::BuyFee => "buy-fee",
            TradeField::SalePrice => "sale-price",
            TradeField::SellFee => "sell-fee",
        }
    }
}

impl fmt::Display for TradeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "purchase-price" | "buy-price" => Ok(TradeField::PurchasePrice),
            "purchase-amount" | "amount" => Ok(TradeField::PurchaseAmount),
            "buy-fee" => Ok(TradeField::BuyFee),
            "sale-price" | "sell-price" => Ok(TradeField::SalePrice),
            "sell-fee" => Ok(TradeField::SellFee),
            _ => Err(AppError::UnknownField(s.to_string())),
        }
    }
}

/// The form as the user sees it: every field holds its display string.
///
/// An empty string means the field is unset and counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeInput {
    pub purchase_price: String,
    pub purchase_amount: String,
    pub buy_fee: String,
    pub sale_price: String,
    pub sell_fee: String,
}

impl TradeInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: TradeField) -> &str {
        match field {
            TradeField::PurchasePrice => &self.purchase_price,
            TradeField::PurchaseAmount => &self.purchase_amount,
            TradeField::BuyFee => &self.buy_fee,
            TradeField::SalePrice => &self.sale_price,
            TradeField::SellFee => &self.sell_fee,
        }
    }

    /// Store `display` as the field's value. Callers sanitize first.
    pub fn set(&mut self, field: TradeField, display: String) {
        let slot = match field {
            TradeField::PurchasePrice => &mut self.purchase_price,
            TradeField::PurchaseAmount => &mut self.purchase_amount,
            TradeField::BuyFee => &mut self.buy_fee,
            TradeField::SalePrice => &mut self.sale_price,
            TradeField::SellFee => &mut self.sell_fee,
        };
        *slot = display;
    }

    /// Parse all five fields in one go.
    pub fn values(&self) -> TradeValues {
        TradeValues {
            purchase_price: format::parse(&self.purchase_price),
            purchase_amount: format::parse(&self.purchase_amount),
            buy_fee: format::parse(&self.buy_fee),
            sale_price: format::parse(&self.sale_price),
            sell_fee: format::parse(&self.sell_fee),
        }
    }
}

/// Parsed snapshot of a TradeInput; the only thing the engine reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeValues {
    pub purchase_price: Decimal,
    pub purchase_amount: Decimal,
    pub buy_fee: Decimal,
    pub sale_price: Decimal,
    pub sell_fee: Decimal,
}
