//! Conversion between typed numeric text and grouped display strings.
//!
//! The display form groups the integer part with `,` every three digits and
//! leaves the fractional part untouched. Parsing accepts any display string
//! and never fails: text that is not a number reads as zero.

use crate::domain::Decimal;
use tracing::warn;

pub const GROUP_SEPARATOR: char = ',';

/// Render a value with its integer part grouped, scale preserved.
pub fn format_decimal(value: Decimal) -> String {
    group(&value.to_string())
}

/// Clean up freshly typed text and return it in display form.
///
/// Keeps ASCII digits and the first decimal point, drops anything after a
/// second point. Idempotent, and applying it to an already grouped string
/// returns that string.
pub fn sanitize_input(raw: &str) -> String {
    group(&strip(raw))
}

/// Like `sanitize_input` but without grouping, for plain quantity fields.
pub fn clean_input(raw: &str) -> String {
    strip(raw)
}

/// Read a display string (grouped or not) as a Decimal, zero when invalid.
pub fn parse(text: &str) -> Decimal {
    let stripped = strip(text);
    let (int, frac) = match stripped.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (stripped.as_str(), ""),
    };
    if int.is_empty() && frac.is_empty() {
        return Decimal::zero();
    }

    let int = if int.is_empty() { "0" } else { int };
    let canonical = if frac.is_empty() {
        int.to_string()
    } else {
        format!("{}.{}", int, frac)
    };

    match Decimal::from_str_canonical(&canonical) {
        Ok(value) => value,
        Err(e) => {
            warn!(input = %text, error = %e, "Unrepresentable numeric input, using zero");
            Decimal::zero()
        }
    }
}

/// Digits plus at most one point; the text after a second point is dropped.
fn strip(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let mut parts = kept.split('.');
    let int = parts.next().unwrap_or_default();
    match parts.next() {
        Some(frac) => format!("{}.{}", int, frac),
        None => int.to_string(),
    }
}

fn group(plain: &str) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(plain.len() + int.len() / 3);
    out.push_str(sign);
    // `int` is ASCII digits only, so byte length equals digit count.
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    #[test]
    fn test_format_groups_integer_part_only() {
        assert_eq!(format_decimal(d("1234567.891011")), "1,234,567.891011");
        assert_eq!(format_decimal(d("100")), "100");
        assert_eq!(format_decimal(d("1000")), "1,000");
        assert_eq!(format_decimal(d("0.12345")), "0.12345");
    }

    #[test]
    fn test_format_keeps_trailing_zeros() {
        assert_eq!(format_decimal(d("2388.00")), "2,388.00");
    }

    #[test]
    fn test_format_negative_sign_outside_groups() {
        assert_eq!(format_decimal(d("-1234.50")), "-1,234.50");
        assert_eq!(format_decimal(d("-123")), "-123");
    }

    #[test]
    fn test_sanitize_discards_invalid_characters() {
        assert_eq!(sanitize_input("$1a2b3c4"), "1,234");
        assert_eq!(sanitize_input("-5"), "5");
        assert_eq!(sanitize_input("  12 000 "), "12,000");
        assert_eq!(sanitize_input("abc"), "");
        assert_eq!(sanitize_input(""), "");
    }

    #[test]
    fn test_sanitize_keeps_single_point() {
        assert_eq!(sanitize_input("1234.5.6"), "1,234.5");
        assert_eq!(sanitize_input("12."), "12.");
        assert_eq!(sanitize_input(".5"), ".5");
        assert_eq!(sanitize_input("0.000123456"), "0.000123456");
    }

    #[test]
    fn test_clean_input_never_groups() {
        assert_eq!(clean_input("1,000.5x"), "1000.5");
        assert_eq!(clean_input("2.5.1"), "2.5");
        assert_eq!(parse(&clean_input("1234567")), d("1234567"));
    }

    #[test]
    fn test_sanitize_preserves_leading_zeros() {
        assert_eq!(sanitize_input("0012"), "0,012");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for raw in ["1234567.89", "1,2,3,4", "9.9.9", "x1000000y", "", ".", "007"] {
            let once = sanitize_input(raw);
            assert_eq!(sanitize_input(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_parse_strips_separators() {
        assert_eq!(parse("1,234,567.5"), d("1234567.5"));
        assert_eq!(parse("0,012"), d("12"));
    }

    #[test]
    fn test_parse_partial_input() {
        assert_eq!(parse("12."), d("12"));
        assert_eq!(parse(".5"), d("0.5"));
        assert_eq!(parse("."), Decimal::zero());
        assert_eq!(parse(""), Decimal::zero());
        assert_eq!(parse("abc"), Decimal::zero());
    }

    #[test]
    fn test_parse_unrepresentable_is_zero() {
        let too_big = "9".repeat(40);
        assert_eq!(parse(&too_big), Decimal::zero());
    }

    #[test]
    fn test_parse_format_round_trip() {
        let cases = [
            "0",
            "1",
            "999",
            "1000",
            "1,234,567.000001",
            "12.",
            ".75",
            "$ 42,000.10 USD",
            "3.14.15",
            "",
            "abc",
        ];
        for s in cases {
            let parsed = parse(s);
            assert_eq!(parse(&format_decimal(parsed)), parsed, "round trip failed for {:?}", s);
        }
    }
}
