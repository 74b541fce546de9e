use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use thiserror::Error;

/// Error returned when a string cannot be read as an area.
#[derive(Debug, Error)]
pub enum ParseAreaError {
    #[error("invalid area '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("area '{0}' is negative")]
    Negative(String),

    #[error("area '{0}' is too large")]
    TooLarge(String),
}

/// How digits of the whole part are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitGrouping {
    /// 1,234,567
    #[default]
    Western,
    /// 12,34,567
    Indian,
}

/// Currency display settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping: DigitGrouping,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "₹".to_string(),
            grouping: DigitGrouping::Western,
        }
    }
}

/// Normalizes input for numeric parsing: trims whitespace, removes commas
/// (thousands separator) and a trailing unit suffix.
fn normalize_area_input(s: &str) -> String {
    let trimmed = s.trim();
    let without_unit = trimmed
        .strip_suffix("sq ft")
        .or_else(|| trimmed.strip_suffix("sqft"))
        .unwrap_or(trimmed);
    without_unit.trim().replace(',', "")
}

/// Parses typed area text into whole units.
///
/// Handles comma as thousands separator and an optional `sq ft` suffix.
/// Fractions are rounded to the nearest unit. Empty input is treated as 0,
/// which the calculator then raises to its minimum.
pub fn parse_area(s: &str) -> Result<u32, ParseAreaError> {
    let normalized = normalize_area_input(s);
    if normalized.is_empty() {
        return Ok(0);
    }

    let value: Decimal = normalized.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid area: {}", e);
        ParseAreaError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })?;

    if value < Decimal::ZERO {
        return Err(ParseAreaError::Negative(s.to_string()));
    }
    value
        .round()
        .to_u32()
        .ok_or_else(|| ParseAreaError::TooLarge(s.to_string()))
}

/// Groups the digits of a non-negative integer string.
fn group_digits(
    digits: &str,
    grouping: DigitGrouping,
) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 2);

    for (i, ch) in digits.chars().enumerate() {
        let remaining = len - i;
        let boundary = match grouping {
            DigitGrouping::Western => remaining % 3 == 0,
            DigitGrouping::Indian => remaining == 3 || (remaining > 3 && remaining % 2 == 1),
        };
        if i > 0 && boundary {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats an amount with digit grouping and no symbol.
///
/// Whole amounts print without decimals; fractional amounts are rounded to
/// two places.
pub fn format_amount(
    amount: Decimal,
    grouping: DigitGrouping,
) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let abs = rounded.abs();
    let whole = group_digits(&abs.trunc().to_string(), grouping);
    let fraction = abs.fract();

    if fraction.is_zero() {
        format!("{sign}{whole}")
    } else {
        let cents = (fraction * Decimal::ONE_HUNDRED)
            .round()
            .to_u32()
            .unwrap_or(0);
        format!("{sign}{whole}.{cents:02}")
    }
}

/// Formats an amount with the currency symbol, e.g. `₹1,52,500`.
pub fn format_currency(
    amount: Decimal,
    currency: &CurrencyFormat,
) -> String {
    format!("{}{}", currency.symbol, format_amount(amount, currency.grouping))
}

/// Formats a monthly installment, e.g. `₹12,708/mo`.
pub fn format_monthly(
    amount: Decimal,
    currency: &CurrencyFormat,
) -> String {
    format!("{}/mo", format_currency(amount, currency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rupees(grouping: DigitGrouping) -> CurrencyFormat {
        CurrencyFormat {
            symbol: "₹".to_string(),
            grouping,
        }
    }

    #[test]
    fn parse_area_accepts_comma_thousands_separator() {
        assert_eq!(parse_area("1,250").unwrap(), 1250);
    }

    #[test]
    fn parse_area_strips_unit_suffix() {
        assert_eq!(parse_area(" 1000 sq ft ").unwrap(), 1000);
        assert_eq!(parse_area("750sqft").unwrap(), 750);
    }

    #[test]
    fn parse_area_rounds_fractions() {
        assert_eq!(parse_area("999.5").unwrap(), 1000);
        assert_eq!(parse_area("999.4").unwrap(), 999);
    }

    #[test]
    fn parse_area_empty_treated_as_zero() {
        assert_eq!(parse_area("").unwrap(), 0);
        assert_eq!(parse_area("   ").unwrap(), 0);
    }

    #[test]
    fn parse_area_invalid_returns_error() {
        assert!(matches!(parse_area("big"), Err(ParseAreaError::Invalid { .. })));
    }

    #[test]
    fn parse_area_negative_returns_error() {
        assert!(matches!(parse_area("-100"), Err(ParseAreaError::Negative(_))));
    }

    #[test]
    fn parse_area_too_large_returns_error() {
        assert!(matches!(
            parse_area("99999999999"),
            Err(ParseAreaError::TooLarge(_))
        ));
    }

    #[test]
    fn format_amount_western_grouping() {
        assert_eq!(format_amount(dec!(0), DigitGrouping::Western), "0");
        assert_eq!(format_amount(dec!(999), DigitGrouping::Western), "999");
        assert_eq!(format_amount(dec!(1000), DigitGrouping::Western), "1,000");
        assert_eq!(format_amount(dec!(152500), DigitGrouping::Western), "152,500");
        assert_eq!(format_amount(dec!(1234567), DigitGrouping::Western), "1,234,567");
    }

    #[test]
    fn format_amount_indian_grouping() {
        assert_eq!(format_amount(dec!(999), DigitGrouping::Indian), "999");
        assert_eq!(format_amount(dec!(1000), DigitGrouping::Indian), "1,000");
        assert_eq!(format_amount(dec!(152500), DigitGrouping::Indian), "1,52,500");
        assert_eq!(format_amount(dec!(1234567), DigitGrouping::Indian), "12,34,567");
        assert_eq!(format_amount(dec!(123456789), DigitGrouping::Indian), "12,34,56,789");
    }

    #[test]
    fn format_amount_keeps_two_decimals_for_fractions() {
        assert_eq!(format_amount(dec!(1234.5), DigitGrouping::Western), "1,234.50");
        assert_eq!(format_amount(dec!(0.057), DigitGrouping::Western), "0.06");
    }

    #[test]
    fn format_amount_negative() {
        assert_eq!(format_amount(dec!(-1500), DigitGrouping::Western), "-1,500");
    }

    #[test]
    fn format_currency_and_monthly() {
        let inr = rupees(DigitGrouping::Indian);

        assert_eq!(format_currency(dec!(152500), &inr), "₹1,52,500");
        assert_eq!(format_monthly(dec!(12708), &inr), "₹12,708/mo");
    }
}
