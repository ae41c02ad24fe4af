//! Pure profit/loss derivations over a TradeValues snapshot.
//!
//! Every function returns `None` when its preconditions do not hold or the
//! arithmetic would overflow. Nothing here panics or mutates its inputs.

use crate::domain::{Decimal, DerivedMetrics, ProfitSummary, TradeValues};

pub mod fee_estimation;

pub use fee_estimation::{estimate_sell_fee, FeeEstimationPolicy, FeeMode};

/// Fractional digits kept for coin amounts.
pub const AMOUNT_SCALE: u32 = 8;
/// Fractional digits kept for percentages.
pub const PERCENT_SCALE: u32 = 2;
/// Fractional digits kept for money (profit, fees).
pub const MONEY_SCALE: u32 = 2;

/// Coins actually owned: `amount` scaled by the fee-free share of total cost.
pub fn effective_amount(price: Decimal, amount: Decimal, fee: Decimal) -> Option<Decimal> {
    if !(price.is_positive() && amount.is_positive()) {
        return None;
    }
    let gross = price.checked_mul(amount)?;
    let total_cost = gross.checked_add(fee)?;
    let effective = gross.checked_div(total_cost)?.checked_mul(amount)?;
    Some(effective.round_fixed(AMOUNT_SCALE))
}

/// Buy fee as a percentage of the gross purchase.
pub fn buy_fee_percentage(price: Decimal, amount: Decimal, fee: Decimal) -> Option<Decimal> {
    fee_percentage(price, amount, fee)
}

/// Sell fee as a percentage of the gross sale.
///
/// The sale is valued with the purchased `amount`: the whole position is
/// assumed to be sold.
pub fn sell_fee_percentage(
    sell_price: Decimal,
    amount: Decimal,
    sell_fee: Decimal,
) -> Option<Decimal> {
    fee_percentage(sell_price, amount, sell_fee)
}

fn fee_percentage(price: Decimal, amount: Decimal, fee: Decimal) -> Option<Decimal> {
    if !(price.is_positive() && amount.is_positive() && fee.is_positive()) {
        return None;
    }
    let gross = price.checked_mul(amount)?;
    let pct = fee.checked_div(gross)?.checked_mul(Decimal::hundred())?;
    Some(pct.round_fixed(PERCENT_SCALE))
}

/// Percentage change from `buy_price` to `sell_price`; negative on a drop.
pub fn price_increase_percentage(buy_price: Decimal, sell_price: Decimal) -> Option<Decimal> {
    if !(buy_price.is_positive() && sell_price.is_positive()) {
        return None;
    }
    let pct = sell_price
        .checked_sub(buy_price)?
        .checked_div(buy_price)?
        .checked_mul(Decimal::hundred())?;
    Some(pct.round_fixed(PERCENT_SCALE))
}

/// Net profit of buying and selling `amount` coins, fees included.
pub fn profit(
    buy_price: Decimal,
    amount: Decimal,
    sell_price: Decimal,
    buy_fee: Decimal,
    sell_fee: Decimal,
) -> Option<ProfitSummary> {
    if !(buy_price.is_positive() && amount.is_positive() && sell_price.is_positive()) {
        return None;
    }
    let total_cost = buy_price.checked_mul(amount)?.checked_add(buy_fee)?;
    let total_revenue = sell_price.checked_mul(amount)?.checked_sub(sell_fee)?;
    let profit = total_revenue.checked_sub(total_cost)?;
    let profit_percentage = profit
        .checked_div(total_cost)?
        .checked_mul(Decimal::hundred())?;

    Some(ProfitSummary {
        profit: profit.round_fixed(MONEY_SCALE),
        profit_percentage: profit_percentage.round_fixed(PERCENT_SCALE),
    })
}

/// Derive every metric from one snapshot.
///
/// A trade without a positive purchase amount has no metrics at all, so the
/// price change is withheld too even though it only reads the two prices.
pub fn recompute_all(values: &TradeValues) -> DerivedMetrics {
    if !values.purchase_amount.is_positive() {
        return DerivedMetrics::empty();
    }
    DerivedMetrics {
        effective_amount: effective_amount(
            values.purchase_price,
            values.purchase_amount,
            values.buy_fee,
        ),
        buy_fee_percentage: buy_fee_percentage(
            values.purchase_price,
            values.purchase_amount,
            values.buy_fee,
        ),
        sell_fee_percentage: sell_fee_percentage(
            values.sale_price,
            values.purchase_amount,
            values.sell_fee,
        ),
        price_increase_percentage: price_increase_percentage(
            values.purchase_price,
            values.sale_price,
        ),
        profit: profit(
            values.purchase_price,
            values.purchase_amount,
            values.sale_price,
            values.buy_fee,
            values.sell_fee,
        ),
    }
}
