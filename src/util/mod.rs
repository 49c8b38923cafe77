use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

pub mod assets;
pub mod version;

/// Parses the leading number of form input, so `"12abc"` reads as 12.
/// Input without a leading number becomes zero; values past the decimal range
/// clamp to `Decimal::MAX` / `Decimal::MIN`.
pub fn parse_decimal_or_zero(raw: &str) -> Decimal {
    let text = raw.trim_start();
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if body.starts_with("Infinity") {
        return saturated(negative);
    }

    let int_digits = leading_digits(body);
    let rest = &body[int_digits.len()..];
    let frac_digits = rest.strip_prefix('.').map(leading_digits).unwrap_or("");
    if int_digits.is_empty() && frac_digits.is_empty() {
        return Decimal::ZERO;
    }

    let consumed = int_digits.len() + if rest.starts_with('.') { 1 + frac_digits.len() } else { 0 };
    let exponent = exponent_suffix(&body[consumed..]);

    let Some(mantissa) = parse_mantissa(int_digits, frac_digits) else {
        return saturated(negative);
    };
    let magnitude = match scale_by_ten(mantissa, exponent) {
        Some(value) => value,
        None => return saturated(negative),
    };
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn leading_digits(text: &str) -> &str {
    let end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    &text[..end]
}

/// Reads `e12` / `E-3` style suffixes. A bare `e` is not an exponent.
fn exponent_suffix(text: &str) -> i64 {
    let Some(rest) = text.strip_prefix(['e', 'E']) else {
        return 0;
    };
    let (sign, digits_from) = match rest.as_bytes().first() {
        Some(b'-') => (-1, &rest[1..]),
        Some(b'+') => (1, &rest[1..]),
        _ => (1, rest),
    };
    let digits = leading_digits(digits_from);
    if digits.is_empty() {
        return 0;
    }
    // Far beyond the decimal range either way; only the sign matters past this.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX).min(1_000);
    sign * value
}

fn parse_mantissa(int_digits: &str, frac_digits: &str) -> Option<Decimal> {
    let int_digits = if int_digits.is_empty() { "0" } else { int_digits };
    if frac_digits.is_empty() {
        return Decimal::from_str(int_digits).ok();
    }
    Decimal::from_str(&format!("{int_digits}.{frac_digits}"))
        .or_else(|_| Decimal::from_str(int_digits))
        .ok()
}

/// `None` means the result overflowed.
fn scale_by_ten(mut value: Decimal, exponent: i64) -> Option<Decimal> {
    if value.is_zero() {
        return Some(Decimal::ZERO);
    }
    for _ in 0..exponent.unsigned_abs().min(64) {
        value = if exponent > 0 {
            value.checked_mul(Decimal::TEN)?
        } else {
            value.checked_div(Decimal::TEN).unwrap_or(Decimal::ZERO)
        };
    }
    Some(value)
}

fn saturated(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// Rounds to cents, halves away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Parses a container count. Fractions are truncated; negatives and junk become zero.
pub fn parse_count_or_zero(raw: &str) -> u32 {
    let value = parse_decimal_or_zero(raw);
    if value.is_sign_negative() {
        return 0;
    }
    value.trunc().to_u32().unwrap_or(u32::MAX)
}

/// Formats an amount with two decimals and thousands separators, e.g. `12,070.00`.
pub fn format_money(amount: Decimal) -> String {
    let rendered = format!("{:.2}", round_money(amount));
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn invalid_input_coerces_to_zero() {
        assert_eq!(parse_decimal_or_zero(""), Decimal::ZERO);
        assert_eq!(parse_decimal_or_zero("abc"), Decimal::ZERO);
        assert_eq!(parse_decimal_or_zero(" 7.15 "), dec!(7.15));
        assert_eq!(parse_decimal_or_zero("-12.5"), dec!(-12.5));
        assert_eq!(parse_decimal_or_zero("1e3"), dec!(1000));
        assert_eq!(parse_decimal_or_zero("-"), Decimal::ZERO);
        assert_eq!(parse_decimal_or_zero("."), Decimal::ZERO);
    }

    #[test]
    fn leading_number_is_kept() {
        assert_eq!(parse_decimal_or_zero("12abc"), dec!(12));
        assert_eq!(parse_decimal_or_zero("7.1 "), dec!(7.1));
        assert_eq!(parse_decimal_or_zero(".5元"), dec!(0.5));
        assert_eq!(parse_decimal_or_zero("850.RMB"), dec!(850));
        assert_eq!(parse_decimal_or_zero("2e"), dec!(2));
        assert_eq!(parse_decimal_or_zero("1.5e2x"), dec!(150));
        assert_eq!(parse_decimal_or_zero("25e-1"), dec!(2.5));
    }

    #[test]
    fn out_of_range_input_clamps() {
        assert_eq!(parse_decimal_or_zero("1e30"), Decimal::MAX);
        assert_eq!(parse_decimal_or_zero("-1e30"), Decimal::MIN);
        assert_eq!(parse_decimal_or_zero("123456789012345678901234567890"), Decimal::MAX);
        assert_eq!(parse_decimal_or_zero("Infinity"), Decimal::MAX);
        assert_eq!(parse_decimal_or_zero("1e-40"), Decimal::ZERO);
        assert_eq!(parse_decimal_or_zero("0e999"), Decimal::ZERO);
        assert_eq!(parse_count_or_zero("1e30"), u32::MAX);
    }

    #[test]
    fn counts_are_whole_and_non_negative() {
        assert_eq!(parse_count_or_zero("3"), 3);
        assert_eq!(parse_count_or_zero("2.9"), 2);
        assert_eq!(parse_count_or_zero("-4"), 0);
        assert_eq!(parse_count_or_zero("lots"), 0);
        assert_eq!(parse_count_or_zero("4 boxes"), 4);
    }

    #[test]
    fn money_formatting() {
        assert_eq!(format_money(dec!(12070)), "12,070.00");
        assert_eq!(format_money(dec!(500)), "500.00");
        assert_eq!(format_money(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_money(dec!(-3195)), "-3,195.00");
        assert_eq!(format_money(Decimal::ZERO), "0.00");
        assert_eq!(format_money(dec!(0.125)), "0.13");
        assert_eq!(format_money(dec!(-2.345)), "-2.35");
        assert_eq!(round_money(dec!(1.005)), dec!(1.01));
    }
}
