//! Rounding and installment helpers shared by the estimator.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of monthly installments a financed project is spread over.
pub const FINANCING_TERM_MONTHS: u32 = 12;

/// Rounds a decimal value to a whole currency unit using half-up rounding.
///
/// Values at exactly 0.5 are rounded away from zero, which for the
/// non-negative amounts the estimator produces means upward.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use design_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(833.33)), dec!(833));
/// assert_eq!(round_whole(dec!(833.5)), dec!(834));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Spreads `total` over [`FINANCING_TERM_MONTHS`] and rounds to a whole unit.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use design_core::calculations::common::monthly_installment;
///
/// assert_eq!(monthly_installment(dec!(10000)), dec!(833));
/// assert_eq!(monthly_installment(dec!(152500)), dec!(12708));
/// ```
pub fn monthly_installment(total: Decimal) -> Decimal {
    round_whole(total / Decimal::from(FINANCING_TERM_MONTHS))
}
