//! Calculator state for a mounted estimator view.
//!
//! Holds the current selections and the last computed estimate. Every setter
//! recomputes, so the result always matches the input.

use std::fmt;

use design_core::{CostEstimator, EstimateBreakdown, EstimateInput, EstimateResult, RateCard};

use crate::utils::{CurrencyFormat, ParseAreaError, format_currency, format_monthly, parse_area};

/// Selections and result of one calculator instance.
///
/// Borrows the rate card it prices against; two states never share input.
#[derive(Debug, Clone)]
pub struct CalculatorState<'a> {
    estimator: CostEstimator<'a>,
    input: EstimateInput,
    result: EstimateResult,
}

impl<'a> CalculatorState<'a> {
    /// Starts with the first space type, the first package, the default area
    /// and no add-ons.
    pub fn new(card: &'a RateCard) -> Self {
        let mut state = Self {
            estimator: CostEstimator::new(card),
            input: Self::default_input(card),
            result: EstimateResult::ZERO,
        };
        state.recompute();
        state
    }

    fn default_input(card: &RateCard) -> EstimateInput {
        let space_type = card
            .space_types
            .first()
            .map(|s| s.id.clone())
            .unwrap_or_default();
        let package = card
            .packages
            .first()
            .map(|p| p.id.clone())
            .unwrap_or_default();

        EstimateInput::new(space_type, card.area.snap(card.area.default), package)
    }

    fn recompute(&mut self) {
        self.result = self.estimator.estimate(&self.input);
    }

    pub fn card(&self) -> &'a RateCard {
        self.estimator.card()
    }

    pub fn input(&self) -> &EstimateInput {
        &self.input
    }

    pub fn result(&self) -> EstimateResult {
        self.result
    }

    pub fn breakdown(&self) -> Option<EstimateBreakdown> {
        self.estimator.breakdown(&self.input)
    }

    pub fn select_space_type(
        &mut self,
        id: &str,
    ) {
        self.input.space_type = id.to_string();
        self.recompute();
    }

    /// Sets the area, snapped to the card's step and clamped to its range.
    /// Returns the value actually used.
    pub fn set_area(
        &mut self,
        area: u32,
    ) -> u32 {
        self.input.area = self.card().area.snap(area);
        self.recompute();
        self.input.area
    }

    /// Sets the area from typed text. On a parse error the state is unchanged.
    pub fn set_area_text(
        &mut self,
        text: &str,
    ) -> Result<u32, ParseAreaError> {
        let area = parse_area(text)?;
        Ok(self.set_area(area))
    }

    pub fn select_package(
        &mut self,
        id: &str,
    ) {
        self.input.package = id.to_string();
        self.recompute();
    }

    pub fn set_add_on(
        &mut self,
        id: &str,
        enabled: bool,
    ) {
        if enabled {
            self.input.add_ons.insert(id.to_string());
        } else {
            self.input.add_ons.remove(id);
        }
        self.recompute();
    }

    /// Back to the defaults chosen by [`CalculatorState::new`].
    pub fn reset(&mut self) {
        self.input = Self::default_input(self.card());
        self.recompute();
    }

    /// Display labels for the current selections and result.
    pub fn summary(
        &self,
        currency: &CurrencyFormat,
    ) -> EstimateSummary {
        let card = self.card();
        let space_type = card
            .space_type(&self.input.space_type)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| self.input.space_type.clone());
        let package = card
            .package(&self.input.package)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| self.input.package.clone());
        // unknown add-ons are dropped from pricing, so drop them here too
        let add_ons = self
            .input
            .add_ons
            .iter()
            .filter_map(|id| card.add_on(id).map(|a| a.name.clone()))
            .collect();

        EstimateSummary {
            space_type,
            area: self.input.area,
            package,
            add_ons,
            total: format_currency(self.result.total, currency),
            monthly: format_monthly(self.result.monthly_payment, currency),
        }
    }
}

/// Display-ready view of a calculator state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateSummary {
    pub space_type: String,
    pub area: u32,
    pub package: String,
    pub add_ons: Vec<String>,
    pub total: String,
    pub monthly: String,
}

impl fmt::Display for EstimateSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let add_ons = if self.add_ons.is_empty() {
            "None".to_string()
        } else {
            self.add_ons.join(", ")
        };

        writeln!(f, "Space type: {}", self.space_type)?;
        writeln!(f, "Area:       {} sq ft", self.area)?;
        writeln!(f, "Package:    {}", self.package)?;
        writeln!(f, "Add-ons:    {add_ons}")?;
        writeln!(f, "Total:      {}", self.total)?;
        write!(f, "Monthly:    {}", self.monthly)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::utils::DigitGrouping;

    fn inr() -> CurrencyFormat {
        CurrencyFormat {
            symbol: "₹".to_string(),
            grouping: DigitGrouping::Indian,
        }
    }

    // =========================================================================
    // defaults
    // =========================================================================

    #[test]
    fn new_state_uses_first_options_and_default_area() {
        let card = RateCard::multiplier();
        let state = CalculatorState::new(&card);

        assert_eq!(state.input().space_type, "living");
        assert_eq!(state.input().package, "basic");
        assert_eq!(state.input().area, 1000);
        assert!(state.input().add_ons.is_empty());
        // 75 * 1000 * 1.0
        assert_eq!(state.result().total, dec!(75000));
        assert_eq!(state.result().monthly_payment, dec!(6250));
    }

    #[test]
    fn flat_card_default_estimate() {
        let card = RateCard::flat_rate();
        let state = CalculatorState::new(&card);

        assert_eq!(state.result().total, dec!(10000));
        assert_eq!(state.result().monthly_payment, dec!(833));
    }

    #[test]
    fn states_do_not_share_input() {
        let card = RateCard::multiplier();
        let mut first = CalculatorState::new(&card);
        let second = CalculatorState::new(&card);

        first.set_area(2000);

        assert_eq!(second.input().area, 1000);
    }

    // =========================================================================
    // recomputation
    // =========================================================================

    #[test]
    fn setters_recompute_result() {
        let card = RateCard::multiplier();
        let mut state = CalculatorState::new(&card);

        state.select_package("standard");
        state.set_add_on("furniture", true);
        state.set_add_on("accessories", true);
        state.set_add_on("painting", true);

        assert_eq!(state.result().total, dec!(152500));
        assert_eq!(state.result().monthly_payment, dec!(12708));

        state.set_add_on("furniture", false);
        assert_eq!(state.result().total, dec!(127500));

        state.select_space_type("kitchen");
        // 120 * 1000 * 1.5 + 1000 * 15
        assert_eq!(state.result().total, dec!(195000));
    }

    #[test]
    fn unknown_package_gives_zero_result() {
        let card = RateCard::multiplier();
        let mut state = CalculatorState::new(&card);

        state.select_package("platinum");

        assert!(state.result().is_zero());
        assert!(state.breakdown().is_none());
    }

    #[test]
    fn set_area_snaps_and_clamps() {
        let card = RateCard::flat_rate();
        let mut state = CalculatorState::new(&card);

        assert_eq!(state.set_area(1024), 1000);
        assert_eq!(state.set_area(1025), 1050);
        assert_eq!(state.set_area(10), 100);
        assert_eq!(state.set_area(9000), 3000);
        assert_eq!(state.result().total, dec!(30000));
    }

    #[test]
    fn set_area_text_parses_and_snaps() {
        let card = RateCard::flat_rate();
        let mut state = CalculatorState::new(&card);

        assert_eq!(state.set_area_text("1,520").unwrap(), 1500);
        assert_eq!(state.set_area_text("").unwrap(), 100);
    }

    #[test]
    fn set_area_text_error_leaves_state_unchanged() {
        let card = RateCard::flat_rate();
        let mut state = CalculatorState::new(&card);
        let before = state.result();

        assert!(state.set_area_text("lots").is_err());
        assert_eq!(state.input().area, 1000);
        assert_eq!(state.result(), before);
    }

    #[test]
    fn reset_restores_defaults() {
        let card = RateCard::multiplier();
        let mut state = CalculatorState::new(&card);
        state.select_space_type("office");
        state.set_area(2500);
        state.set_add_on("painting", true);

        state.reset();

        assert_eq!(state.input(), CalculatorState::new(&card).input());
        assert_eq!(state.result().total, dec!(75000));
    }

    // =========================================================================
    // summary
    // =========================================================================

    #[test]
    fn summary_uses_display_names() {
        let card = RateCard::multiplier();
        let mut state = CalculatorState::new(&card);
        state.select_package("standard");
        state.set_add_on("painting", true);
        state.set_add_on("furniture", true);
        state.set_add_on("landscaping", true);

        let summary = state.summary(&inr());

        assert_eq!(summary.space_type, "Living Room");
        assert_eq!(summary.package, "Standard");
        assert_eq!(summary.add_ons, vec!["Furniture Selection", "Painting"]);
        // 112500 + 1000 * (25 + 5)
        assert_eq!(summary.total, "₹1,42,500");
        assert_eq!(summary.monthly, "₹11,875/mo");
    }

    #[test]
    fn summary_display_lists_fields() {
        let card = RateCard::flat_rate();
        let state = CalculatorState::new(&card);

        let text = state.summary(&inr()).to_string();

        assert!(text.contains("Area:       1000 sq ft"));
        assert!(text.contains("Add-ons:    None"));
        assert!(text.ends_with("Monthly:    ₹833/mo"));
    }
}
