use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a design package turns an area into a design cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackagePricing {
    /// Flat rate per unit area, looked up by space type id.
    PerSpaceRate(BTreeMap<String, Decimal>),

    /// Factor applied to the space type's base rate.
    Multiplier(Decimal),
}

/// A service tier (basic, standard, premium, luxury).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignPackage {
    pub id: String,
    pub name: String,
    pub pricing: PackagePricing,
}

impl DesignPackage {
    /// Creates a package priced as a multiple of the space type base rate.
    pub fn with_multiplier(
        id: impl Into<String>,
        name: impl Into<String>,
        multiplier: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pricing: PackagePricing::Multiplier(multiplier),
        }
    }

    /// Creates a package with a flat rate for each listed space type.
    pub fn with_rates<I, K>(
        id: impl Into<String>,
        name: impl Into<String>,
        rates: I,
    ) -> Self
    where
        I: IntoIterator<Item = (K, Decimal)>,
        K: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            pricing: PackagePricing::PerSpaceRate(
                rates.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            ),
        }
    }

    /// Returns the per-unit design rate this package charges for `space_type_id`,
    /// given that space type's base rate.
    ///
    /// `None` when the package has flat rates and none is listed for the space
    /// type, or the multiplied rate overflows.
    pub fn unit_rate(
        &self,
        space_type_id: &str,
        base_rate: Decimal,
    ) -> Option<Decimal> {
        match &self.pricing {
            PackagePricing::PerSpaceRate(rates) => rates.get(space_type_id).copied(),
            PackagePricing::Multiplier(multiplier) => base_rate.checked_mul(*multiplier),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn unit_rate_uses_listed_flat_rate() {
        let package = DesignPackage::with_rates(
            "basic",
            "Basic",
            [("residential", dec!(10)), ("commercial", dec!(15))],
        );

        assert_eq!(package.unit_rate("commercial", dec!(99)), Some(dec!(15)));
    }

    #[test]
    fn unit_rate_is_none_for_unlisted_space_type() {
        let package = DesignPackage::with_rates("basic", "Basic", [("residential", dec!(10))]);

        assert_eq!(package.unit_rate("kitchen", dec!(99)), None);
    }

    #[test]
    fn unit_rate_scales_base_rate_by_multiplier() {
        let package = DesignPackage::with_multiplier("standard", "Standard", dec!(1.5));

        assert_eq!(package.unit_rate("living", dec!(75)), Some(dec!(112.5)));
    }

    #[test]
    fn unit_rate_is_none_when_multiplied_rate_overflows() {
        let package = DesignPackage::with_multiplier("luxury", "Luxury", dec!(1000000000000000));

        assert_eq!(package.unit_rate("living", dec!(1000000000000000)), None);
    }
}
