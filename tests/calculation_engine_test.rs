use coinprofit::engine::{
    buy_fee_percentage, effective_amount, price_increase_percentage, profit, recompute_all,
    sell_fee_percentage,
};
use coinprofit::{Decimal, TradeValues};

fn d(s: &str) -> Decimal {
    Decimal::from_str_canonical(s).unwrap()
}

fn values(
    price: &str,
    amount: &str,
    buy_fee: &str,
    sale_price: &str,
    sell_fee: &str,
) -> TradeValues {
    TradeValues {
        purchase_price: d(price),
        purchase_amount: d(amount),
        buy_fee: d(buy_fee),
        sale_price: d(sale_price),
        sell_fee: d(sell_fee),
    }
}

#[test]
fn test_effective_amount_after_buy_fee() {
    // (1000 * 2 / 2010) * 2
    let effective = effective_amount(d("1000"), d("2"), d("10")).unwrap();
    assert_eq!(effective.to_string(), "1.99004975");
}

#[test]
fn test_effective_amount_without_fee_is_nominal() {
    let effective = effective_amount(d("1000"), d("2"), Decimal::zero()).unwrap();
    assert_eq!(effective, d("2"));
    assert_eq!(effective.to_string(), "2.00000000");
}

#[test]
fn test_effective_amount_never_exceeds_nominal() {
    let cases = [
        ("1000", "2", "10"),
        ("0.5", "1000", "3"),
        ("64000", "0.015", "1.25"),
        ("1", "1", "1"),
        ("3.3", "7", "0.01"),
    ];
    for (price, amount, fee) in cases {
        let effective = effective_amount(d(price), d(amount), d(fee)).unwrap();
        assert!(effective < d(amount), "fee {} should reduce {}", fee, amount);
        assert!(effective.is_positive());
    }
}

#[test]
fn test_effective_amount_requires_price_and_amount() {
    assert_eq!(effective_amount(Decimal::zero(), d("2"), d("10")), None);
    assert_eq!(effective_amount(d("1000"), Decimal::zero(), d("10")), None);
}

#[test]
fn test_buy_fee_percentage() {
    let pct = buy_fee_percentage(d("1000"), d("2"), d("10")).unwrap();
    assert_eq!(pct.to_string(), "0.50");
}

#[test]
fn test_fee_percentages_require_a_fee() {
    assert_eq!(buy_fee_percentage(d("1000"), d("2"), Decimal::zero()), None);
    assert_eq!(sell_fee_percentage(d("1200"), d("2"), Decimal::zero()), None);
}

#[test]
fn test_sell_fee_percentage_uses_purchase_amount() {
    // 12 / (1200 * 2) * 100
    let pct = sell_fee_percentage(d("1200"), d("2"), d("12")).unwrap();
    assert_eq!(pct.to_string(), "0.50");
}

#[test]
fn test_price_increase_and_decrease() {
    assert_eq!(
        price_increase_percentage(d("1000"), d("1200")).unwrap().to_string(),
        "20.00"
    );
    assert_eq!(
        price_increase_percentage(d("1000"), d("900")).unwrap().to_string(),
        "-10.00"
    );
    assert_eq!(
        price_increase_percentage(d("3"), d("4")).unwrap().to_string(),
        "33.33"
    );
    assert_eq!(price_increase_percentage(d("1000"), Decimal::zero()), None);
}

#[test]
fn test_profit_scenario() {
    // cost 2010, revenue 2388
    let summary = profit(d("1000"), d("2"), d("1200"), d("10"), d("12")).unwrap();
    assert_eq!(summary.profit.to_string(), "378.00");
    assert_eq!(summary.profit_percentage.to_string(), "18.81");
}

#[test]
fn test_loss_is_negative_profit() {
    let summary = profit(d("1000"), d("1"), d("900"), Decimal::zero(), Decimal::zero()).unwrap();
    assert_eq!(summary.profit.to_string(), "-100.00");
    assert_eq!(summary.profit_percentage.to_string(), "-10.00");
    assert!(summary.profit.is_negative());
}

#[test]
fn test_profit_needs_both_prices_and_amount() {
    assert!(profit(Decimal::zero(), d("2"), d("1200"), d("10"), d("12")).is_none());
    assert!(profit(d("1000"), Decimal::zero(), d("1200"), d("10"), d("12")).is_none());
    assert!(profit(d("1000"), d("2"), Decimal::zero(), d("10"), d("12")).is_none());
}

#[test]
fn test_recompute_all_scenario() {
    let metrics = recompute_all(&values("1000", "2", "10", "1200", "12"));
    assert_eq!(metrics.effective_amount, Some(d("1.99004975")));
    assert_eq!(metrics.buy_fee_percentage, Some(d("0.50")));
    assert_eq!(metrics.sell_fee_percentage, Some(d("0.50")));
    assert_eq!(metrics.price_increase_percentage, Some(d("20")));
    let summary = metrics.profit.unwrap();
    assert_eq!(summary.profit, d("378"));
    assert_eq!(summary.profit_percentage, d("18.81"));
}

#[test]
fn test_recompute_all_zero_amount_is_empty() {
    let metrics = recompute_all(&values("1000", "0", "10", "1200", "12"));
    assert!(metrics.is_empty());
    assert!(recompute_all(&TradeValues::default()).is_empty());
}

#[test]
fn test_zero_amount_withholds_price_change() {
    let metrics = recompute_all(&values("1000", "0", "0", "1200", "0"));
    assert_eq!(metrics.price_increase_percentage, None);
    assert!(metrics.is_empty());

    // The standalone derivation only looks at the prices.
    assert_eq!(
        price_increase_percentage(d("1000"), d("1200")),
        Some(d("20.00"))
    );
}

#[test]
fn test_recompute_all_zero_price_is_empty() {
    let metrics = recompute_all(&values("0", "2", "10", "0", "12"));
    assert!(metrics.is_empty());
}

#[test]
fn test_overflow_is_not_computable() {
    let huge = "79228162514264337593543950335";
    let metrics = recompute_all(&values(huge, "10", "0", huge, "0"));
    assert_eq!(metrics.effective_amount, None);
    assert_eq!(metrics.profit, None);
    assert_eq!(metrics.price_increase_percentage, Some(d("0.00")));
}
