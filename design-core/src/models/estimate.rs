use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The user's current selections on the cost calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateInput {
    pub space_type: String,
    pub area: u32,
    pub package: String,
    #[serde(default)]
    pub add_ons: BTreeSet<String>,
}

impl EstimateInput {
    pub fn new(
        space_type: impl Into<String>,
        area: u32,
        package: impl Into<String>,
    ) -> Self {
        Self {
            space_type: space_type.into(),
            area,
            package: package.into(),
            add_ons: BTreeSet::new(),
        }
    }

    /// Adds an enabled add-on, builder style.
    pub fn with_add_on(
        mut self,
        add_on: impl Into<String>,
    ) -> Self {
        self.add_ons.insert(add_on.into());
        self
    }
}

/// Derived figures shown next to the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Estimated project cost in whole currency units.
    pub total: Decimal,

    /// `total` spread over the financing term, in whole currency units.
    pub monthly_payment: Decimal,
}

impl EstimateResult {
    pub const ZERO: Self = Self {
        total: Decimal::ZERO,
        monthly_payment: Decimal::ZERO,
    };

    pub fn is_zero(&self) -> bool {
        self.total.is_zero()
    }
}

impl Default for EstimateResult {
    fn default() -> Self {
        Self::ZERO
    }
}

/// One priced add-on line of a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnLine {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
}

/// Unrounded components of an estimate, for itemized display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateBreakdown {
    /// Area actually priced, after clamping into the card's range.
    pub area: u32,

    /// Package rate applied to the area.
    pub design_cost: Decimal,

    pub add_ons: Vec<AddOnLine>,
}

impl EstimateBreakdown {
    fn checked_add_on_cost(&self) -> Option<Decimal> {
        self.add_ons
            .iter()
            .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line.amount))
    }

    /// Design cost plus add-ons, or `None` if the sum overflows.
    pub fn checked_subtotal(&self) -> Option<Decimal> {
        self.design_cost.checked_add(self.checked_add_on_cost()?)
    }

    /// Sum of the add-on lines. Saturates at `Decimal::MAX`, which a
    /// breakdown built by the estimator never reaches.
    pub fn add_on_cost(&self) -> Decimal {
        self.checked_add_on_cost().unwrap_or(Decimal::MAX)
    }

    /// Design cost plus add-ons. Saturates like [`Self::add_on_cost`].
    pub fn subtotal(&self) -> Decimal {
        self.checked_subtotal().unwrap_or(Decimal::MAX)
    }
}
