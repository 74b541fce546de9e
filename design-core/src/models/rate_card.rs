//! Static pricing tables the cost estimator prices against.
//!
//! A [`RateCard`] is built once (from a preset or a loaded file), validated,
//! and then only shared by reference. Two presets ship with the crate because
//! the studio has run two different calculators:
//!
//! | Preset | Pricing | Add-ons |
//! |--------|---------|---------|
//! | [`RateCard::flat_rate`] | flat rate per space type | none |
//! | [`RateCard::multiplier`] | base rate × package multiplier | furniture, accessories, painting |

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{AddOn, AreaRange, DesignPackage, PackagePricing, SpaceType};

/// Reasons a rate card is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateCardError {
    #[error("rate card has no space types")]
    NoSpaceTypes,

    #[error("rate card has no design packages")]
    NoPackages,

    #[error("duplicate {table} id '{id}'")]
    DuplicateId { table: &'static str, id: String },

    #[error("negative rate {rate} for {table} '{id}'")]
    NegativeRate {
        table: &'static str,
        id: String,
        rate: Decimal,
    },

    #[error("package '{package}' has no rate for space type '{space_type}'")]
    MissingPackageRate { package: String, space_type: String },

    #[error("package '{package}' prices unknown space type '{space_type}'")]
    UnknownSpaceType { package: String, space_type: String },

    #[error("invalid area range {min}..={max} step {step} default {default}")]
    InvalidAreaRange {
        min: u32,
        max: u32,
        step: u32,
        default: u32,
    },
}

/// Immutable pricing configuration for one calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    /// Currency code shown with amounts (e.g. `INR`).
    pub currency: String,
    pub area: AreaRange,
    pub space_types: Vec<SpaceType>,
    pub packages: Vec<DesignPackage>,
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
}

impl RateCard {
    /// Builds a rate card and validates it.
    pub fn new(
        currency: impl Into<String>,
        area: AreaRange,
        space_types: Vec<SpaceType>,
        packages: Vec<DesignPackage>,
        add_ons: Vec<AddOn>,
    ) -> Result<Self, RateCardError> {
        let card = Self {
            currency: currency.into(),
            area,
            space_types,
            packages,
            add_ons,
        };
        card.validate()?;
        Ok(card)
    }

    /// Residential and commercial spaces with a flat rate per package tier.
    pub fn flat_rate() -> Self {
        let rate = |r: i64, c: i64| {
            [
                ("residential", Decimal::from(r)),
                ("commercial", Decimal::from(c)),
            ]
        };

        Self {
            currency: "INR".to_string(),
            area: AreaRange::default(),
            space_types: vec![
                SpaceType::new("residential", "Residential", Decimal::from(10)),
                SpaceType::new("commercial", "Commercial", Decimal::from(15)),
            ],
            packages: vec![
                DesignPackage::with_rates("basic", "Basic", rate(10, 15)),
                DesignPackage::with_rates("standard", "Standard", rate(20, 25)),
                DesignPackage::with_rates("premium", "Premium", rate(30, 35)),
                DesignPackage::with_rates("luxury", "Luxury", rate(40, 45)),
            ],
            add_ons: Vec::new(),
        }
    }

    /// Room-level base rates scaled by package multipliers, with add-ons.
    pub fn multiplier() -> Self {
        Self {
            currency: "INR".to_string(),
            area: AreaRange::default(),
            space_types: vec![
                SpaceType::new("living", "Living Room", Decimal::from(75)),
                SpaceType::new("bedroom", "Bedroom", Decimal::from(65)),
                SpaceType::new("kitchen", "Kitchen", Decimal::from(120)),
                SpaceType::new("bathroom", "Bathroom", Decimal::from(100)),
                SpaceType::new("office", "Home Office", Decimal::from(85)),
            ],
            packages: vec![
                DesignPackage::with_multiplier("basic", "Basic", Decimal::ONE),
                DesignPackage::with_multiplier("standard", "Standard", Decimal::new(15, 1)),
                DesignPackage::with_multiplier("premium", "Premium", Decimal::TWO),
                DesignPackage::with_multiplier("luxury", "Luxury", Decimal::from(3)),
            ],
            add_ons: vec![
                AddOn::new("furniture", "Furniture Selection", Decimal::from(25)),
                AddOn::new("accessories", "Accessories & Decor", Decimal::from(10)),
                AddOn::new("painting", "Painting", Decimal::from(5)),
            ],
        }
    }

    pub fn space_type(
        &self,
        id: &str,
    ) -> Option<&SpaceType> {
        self.space_types.iter().find(|s| s.id == id)
    }

    pub fn package(
        &self,
        id: &str,
    ) -> Option<&DesignPackage> {
        self.packages.iter().find(|p| p.id == id)
    }

    pub fn add_on(
        &self,
        id: &str,
    ) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == id)
    }

    /// Checks the invariants every estimator relies on.
    ///
    /// # Errors
    ///
    /// Returns the first [`RateCardError`] found.
    pub fn validate(&self) -> Result<(), RateCardError> {
        self.validate_area()?;

        if self.space_types.is_empty() {
            return Err(RateCardError::NoSpaceTypes);
        }
        if self.packages.is_empty() {
            return Err(RateCardError::NoPackages);
        }

        unique_ids("space type", self.space_types.iter().map(|s| s.id.as_str()))?;
        unique_ids("package", self.packages.iter().map(|p| p.id.as_str()))?;
        unique_ids("add-on", self.add_ons.iter().map(|a| a.id.as_str()))?;

        for space in &self.space_types {
            non_negative("space type", &space.id, space.base_rate)?;
        }
        for add_on in &self.add_ons {
            non_negative("add-on", &add_on.id, add_on.per_unit_rate)?;
        }
        for package in &self.packages {
            self.validate_package(package)?;
        }

        Ok(())
    }

    fn validate_area(&self) -> Result<(), RateCardError> {
        let AreaRange {
            min,
            max,
            step,
            default,
        } = self.area;

        if min > max || step == 0 || !self.area.contains(default) {
            return Err(RateCardError::InvalidAreaRange {
                min,
                max,
                step,
                default,
            });
        }
        Ok(())
    }

    fn validate_package(
        &self,
        package: &DesignPackage,
    ) -> Result<(), RateCardError> {
        match &package.pricing {
            PackagePricing::Multiplier(multiplier) => {
                non_negative("package", &package.id, *multiplier)
            }
            PackagePricing::PerSpaceRate(rates) => {
                for (space_type, rate) in rates {
                    if self.space_type(space_type).is_none() {
                        return Err(RateCardError::UnknownSpaceType {
                            package: package.id.clone(),
                            space_type: space_type.clone(),
                        });
                    }
                    non_negative("package", &package.id, *rate)?;
                }
                if let Some(missing) = self
                    .space_types
                    .iter()
                    .find(|s| !rates.contains_key(&s.id))
                {
                    return Err(RateCardError::MissingPackageRate {
                        package: package.id.clone(),
                        space_type: missing.id.clone(),
                    });
                }
                Ok(())
            }
        }
    }
}

fn unique_ids<'a>(
    table: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), RateCardError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(RateCardError::DuplicateId {
                table,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn non_negative(
    table: &'static str,
    id: &str,
    rate: Decimal,
) -> Result<(), RateCardError> {
    if rate < Decimal::ZERO {
        return Err(RateCardError::NegativeRate {
            table,
            id: id.to_string(),
            rate,
        });
    }
    Ok(())
}
