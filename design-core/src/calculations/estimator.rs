//! Project cost estimate for the design calculator.
//!
//! # Formula
//!
//! | Step | Value |
//! |------|-------|
//! | 1 | Area, clamped into the card's area range |
//! | 2 | Design rate: the package's flat rate for the space type, or the space type base rate × package multiplier |
//! | 3 | Design cost: line 1 × line 2 |
//! | 4 | Add-on cost: line 1 × per-unit rate, for each enabled add-on |
//! | 5 | Total: line 3 + all line 4 amounts, rounded to a whole unit |
//! | 6 | Monthly payment: line 5 / 12, rounded to a whole unit |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use design_core::{CostEstimator, EstimateInput, RateCard};
//!
//! let card = RateCard::multiplier();
//! let estimator = CostEstimator::new(&card);
//!
//! let input = EstimateInput::new("living", 1000, "standard")
//!     .with_add_on("furniture")
//!     .with_add_on("accessories")
//!     .with_add_on("painting");
//!
//! let result = estimator.estimate(&input);
//!
//! assert_eq!(result.total, dec!(152500));
//! assert_eq!(result.monthly_payment, dec!(12708));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{monthly_installment, round_whole};
use crate::models::{AddOnLine, EstimateBreakdown, EstimateInput, EstimateResult, RateCard};

/// Prices estimate inputs against a borrowed rate card.
///
/// Holds no state of its own; every call recomputes from the input.
#[derive(Debug, Clone, Copy)]
pub struct CostEstimator<'a> {
    card: &'a RateCard,
}

impl<'a> CostEstimator<'a> {
    /// Prices against `card` as given. The card need not have passed
    /// [`RateCard::validate`]: selections it cannot price, including costs
    /// that overflow, estimate as zero.
    pub fn new(card: &'a RateCard) -> Self {
        Self { card }
    }

    pub fn card(&self) -> &'a RateCard {
        self.card
    }

    /// Computes the total cost and monthly payment for `input`.
    ///
    /// Selections missing from the rate card yield [`EstimateResult::ZERO`];
    /// the mismatch is logged rather than surfaced to the user.
    pub fn estimate(
        &self,
        input: &EstimateInput,
    ) -> EstimateResult {
        let Some(breakdown) = self.breakdown(input) else {
            return EstimateResult::ZERO;
        };

        let total = round_whole(breakdown.subtotal());
        let result = EstimateResult {
            total,
            monthly_payment: monthly_installment(total),
        };

        debug!(
            space_type = %input.space_type,
            package = %input.package,
            area = breakdown.area,
            total = %result.total,
            monthly = %result.monthly_payment,
            "estimate computed"
        );

        result
    }

    /// Returns the unrounded cost components for `input`.
    ///
    /// `None` when the space type or package is not on the card, the
    /// package has no flat rate for the space type, or a cost does not fit
    /// in a `Decimal`.
    pub fn breakdown(
        &self,
        input: &EstimateInput,
    ) -> Option<EstimateBreakdown> {
        let Some(space) = self.card.space_type(&input.space_type) else {
            warn!(space_type = %input.space_type, "unknown space type, estimating zero");
            return None;
        };
        let Some(package) = self.card.package(&input.package) else {
            warn!(package = %input.package, "unknown design package, estimating zero");
            return None;
        };
        let Some(unit_rate) = package.unit_rate(&space.id, space.base_rate) else {
            warn!(
                package = %package.id,
                space_type = %space.id,
                "package has no usable rate for space type, estimating zero"
            );
            return None;
        };

        let area = self.card.area.clamp(input.area);
        if area != input.area {
            debug!(requested = input.area, clamped = area, "area outside range");
        }
        let area_units = Decimal::from(area);

        let Some(design_cost) = area_units.checked_mul(unit_rate) else {
            warn!(package = %package.id, area, "design cost overflows, estimating zero");
            return None;
        };

        let mut add_ons = Vec::with_capacity(input.add_ons.len());
        for id in &input.add_ons {
            let Some(add_on) = self.card.add_on(id) else {
                warn!(add_on = %id, "unknown add-on ignored");
                continue;
            };
            let Some(amount) = area_units.checked_mul(add_on.per_unit_rate) else {
                warn!(add_on = %id, area, "add-on cost overflows, estimating zero");
                return None;
            };
            add_ons.push(AddOnLine {
                id: add_on.id.clone(),
                name: add_on.name.clone(),
                amount,
            });
        }

        let breakdown = EstimateBreakdown {
            area,
            design_cost,
            add_ons,
        };
        if breakdown.checked_subtotal().is_none() {
            warn!(area, "estimate total overflows, estimating zero");
            return None;
        }

        Some(breakdown)
    }
}
