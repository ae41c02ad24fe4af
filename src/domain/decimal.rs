//! Decimal numeric type backed by rust_decimal.
//!
//! All trade arithmetic goes through the checked operations here so that an
//! overflow surfaces as `None` instead of a panic.

use rust_decimal::Decimal as RustDecimal;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decimal quantity used for prices, amounts, fees and percentages.
///
/// Display and serialization keep the scale, so a value rounded to two
/// places renders as `378.00`, not `378`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Decimal(#[serde(with = "rust_decimal::serde::str")] RustDecimal);

impl Decimal {
    /// Create a Decimal from a RustDecimal.
    pub fn new(value: RustDecimal) -> Self {
        Decimal(value)
    }

    /// Parse a Decimal from a plain decimal string (no separators).
    ///
    /// # Errors
    /// Returns an error if the string is not a valid decimal number.
    pub fn from_str_canonical(s: &str) -> Result<Self, rust_decimal::Error> {
        RustDecimal::from_str(s).map(Decimal)
    }

    /// Get the underlying RustDecimal.
    pub fn inner(&self) -> RustDecimal {
        self.0
    }

    /// The additive identity (0).
    pub fn zero() -> Self {
        Decimal(RustDecimal::ZERO)
    }

    /// Returns true if the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the value is > 0.
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.0.is_sign_positive()
    }

    /// Returns true if the value is < 0.
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.0.is_sign_negative()
    }

    /// Returns the value 100.
    pub fn hundred() -> Self {
        Decimal(RustDecimal::ONE_HUNDRED)
    }

    /// Round half away from zero to exactly `dp` fractional digits.
    ///
    /// The result always carries scale `dp` (trailing zeros kept) and a
    /// rounded-away negative zero is reported as plain zero.
    pub fn round_fixed(&self, dp: u32) -> Self {
        let mut rounded = self
            .0
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(dp);
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        Decimal(rounded)
    }

    pub fn checked_add(self, rhs: Decimal) -> Option<Decimal> {
        self.0.checked_add(rhs.0).map(Decimal)
    }

    pub fn checked_sub(self, rhs: Decimal) -> Option<Decimal> {
        self.0.checked_sub(rhs.0).map(Decimal)
    }

    pub fn checked_mul(self, rhs: Decimal) -> Option<Decimal> {
        self.0.checked_mul(rhs.0).map(Decimal)
    }

    /// Checked division; `None` on a zero divisor or overflow.
    pub fn checked_div(self, rhs: Decimal) -> Option<Decimal> {
        self.0.checked_div(rhs.0).map(Decimal)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Decimal {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_canonical(s)
    }
}

impl From<RustDecimal> for Decimal {
    fn from(value: RustDecimal) -> Self {
        Decimal(value)
    }
}

impl From<Decimal> for RustDecimal {
    fn from(value: Decimal) -> Self {
        value.0
    }
}
