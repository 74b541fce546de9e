use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use design_core::{
    AddOn, AreaRange, DesignPackage, PackagePricing, RateCard, RateCardError, SpaceType,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading rate card data.
#[derive(Debug, Error)]
pub enum RateCardLoaderError {
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("package '{0}' must set exactly one of 'multiplier' or 'rates'")]
    AmbiguousPricing(String),

    #[error("package '{0}' has an empty name")]
    EmptyPackageName(String),

    #[error("package '{package}' lists more than one rate for space type '{space_type}'")]
    DuplicatePackageRate { package: String, space_type: String },

    #[error("invalid rate card: {0}")]
    InvalidCard(#[from] RateCardError),
}

impl From<csv::Error> for RateCardLoaderError {
    fn from(err: csv::Error) -> Self {
        RateCardLoaderError::CsvParse(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// TOML document layout
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RateCardDocument {
    currency: String,
    #[serde(default)]
    area: AreaRange,
    space_types: Vec<SpaceType>,
    packages: Vec<PackageDocument>,
    #[serde(default)]
    add_ons: Vec<AddOn>,
}

#[derive(Debug, Deserialize)]
struct PackageDocument {
    id: String,
    name: String,
    multiplier: Option<Decimal>,
    #[serde(default)]
    rates: BTreeMap<String, Decimal>,
}

impl PackageDocument {
    fn into_package(self) -> Result<DesignPackage, RateCardLoaderError> {
        let pricing = match (self.multiplier, self.rates.is_empty()) {
            (Some(multiplier), true) => PackagePricing::Multiplier(multiplier),
            (None, false) => PackagePricing::PerSpaceRate(self.rates),
            _ => return Err(RateCardLoaderError::AmbiguousPricing(self.id)),
        };

        Ok(DesignPackage {
            id: self.id,
            name: self.name,
            pricing,
        })
    }
}

/// A single record from a package rates CSV file.
///
/// - `package`: The design package id (e.g. `basic`)
/// - `package_name`: Display name used when the package is not on the card yet
/// - `space_type`: The space type id the rate applies to
/// - `rate`: Flat rate per unit area
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PackageRateRecord {
    pub package: String,
    pub package_name: String,
    pub space_type: String,
    pub rate: Decimal,
}

/// Loader for rate cards from TOML documents and CSV rate matrices.
///
/// A TOML document describes a whole card:
///
/// ```toml
/// currency = "INR"
///
/// [area]
/// min = 100
/// max = 3000
/// step = 50
/// default = 1000
///
/// [[space_types]]
/// id = "living"
/// name = "Living Room"
/// base_rate = 75
///
/// [[packages]]
/// id = "standard"
/// name = "Standard"
/// multiplier = 1.5
///
/// [[add_ons]]
/// id = "painting"
/// name = "Painting"
/// per_unit_rate = 5
/// ```
///
/// A package priced per space type uses a `rates` table instead of
/// `multiplier`. The `[area]` table may be omitted to use the default range.
pub struct RateCardLoader;

impl RateCardLoader {
    /// Parse and validate a rate card from TOML text.
    pub fn parse_toml(input: &str) -> Result<RateCard, RateCardLoaderError> {
        let document: RateCardDocument = toml::from_str(input)?;

        let packages = document
            .packages
            .into_iter()
            .map(PackageDocument::into_package)
            .collect::<Result<Vec<_>, _>>()?;

        let card = RateCard::new(
            document.currency,
            document.area,
            document.space_types,
            packages,
            document.add_ons,
        )?;

        debug!(
            space_types = card.space_types.len(),
            packages = card.packages.len(),
            add_ons = card.add_ons.len(),
            "rate card parsed"
        );

        Ok(card)
    }

    /// Read, parse and validate a rate card TOML file.
    pub fn load_toml_file(path: &Path) -> Result<RateCard, RateCardLoaderError> {
        let text = fs::read_to_string(path).map_err(|source| RateCardLoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let card = Self::parse_toml(&text)?;
        info!(path = %path.display(), currency = %card.currency, "rate card loaded");
        Ok(card)
    }

    /// Parse package rate records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or a
    /// byte slice.
    pub fn parse_package_rates<R: Read>(
        reader: R
    ) -> Result<Vec<PackageRateRecord>, RateCardLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: PackageRateRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Apply package rate records to a rate card.
    ///
    /// For each package id in the records, this method will:
    /// 1. Collect all of its rates into a per-space rate table
    /// 2. Replace the pricing of the existing package with that table, or
    ///    append a new package when the card does not list it yet
    ///
    /// A package listing the same space type twice is rejected. The card is
    /// re-validated afterwards and left untouched on error.
    /// Applying the same records twice yields the same card.
    pub fn apply_package_rates(
        card: &mut RateCard,
        records: &[PackageRateRecord],
    ) -> Result<usize, RateCardLoaderError> {
        let mut groups: BTreeMap<&str, Vec<&PackageRateRecord>> = BTreeMap::new();
        for record in records {
            groups.entry(record.package.as_str()).or_default().push(record);
        }

        let mut updated = card.clone();
        let mut applied = 0;

        for (package_id, group_records) in groups {
            let mut rates: BTreeMap<String, Decimal> = BTreeMap::new();
            for record in &group_records {
                if rates.insert(record.space_type.clone(), record.rate).is_some() {
                    return Err(RateCardLoaderError::DuplicatePackageRate {
                        package: package_id.to_string(),
                        space_type: record.space_type.clone(),
                    });
                }
            }
            applied += rates.len();

            match updated.packages.iter_mut().find(|p| p.id == package_id) {
                Some(package) => package.pricing = PackagePricing::PerSpaceRate(rates),
                None => {
                    let name = group_records
                        .iter()
                        .map(|r| r.package_name.trim())
                        .find(|n| !n.is_empty())
                        .ok_or_else(|| {
                            RateCardLoaderError::EmptyPackageName(package_id.to_string())
                        })?;
                    updated.packages.push(DesignPackage {
                        id: package_id.to_string(),
                        name: name.to_string(),
                        pricing: PackagePricing::PerSpaceRate(rates),
                    });
                }
            }
        }

        updated.validate()?;
        *card = updated;

        Ok(applied)
    }
}
