//! Integration tests that load the rate card fixtures shipped in `test-data/`
//! and price estimates against the result.

use std::path::{Path, PathBuf};

use design_core::{CostEstimator, EstimateInput, PackagePricing};
use design_data::{RateCardLoader, RateCardLoaderError};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const PACKAGE_RATES_CSV: &str = include_str!("../test-data/package_rates.csv");

fn card_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join("studio_card.toml")
}

#[test]
fn test_load_card_file() {
    let card = RateCardLoader::load_toml_file(&card_path()).expect("Failed to load card");

    assert_eq!(card.currency, "INR");
    assert_eq!(card.space_types.len(), 3);
    assert_eq!(card.packages.len(), 3);
    assert_eq!(card.add_ons.len(), 3);
}

#[test]
fn test_loaded_card_prices_reference_scenario() {
    let card = RateCardLoader::load_toml_file(&card_path()).unwrap();
    let estimator = CostEstimator::new(&card);

    let input = EstimateInput::new("living", 1000, "standard")
        .with_add_on("furniture")
        .with_add_on("accessories")
        .with_add_on("painting");
    let result = estimator.estimate(&input);

    assert_eq!(result.total, dec!(152500));
    assert_eq!(result.monthly_payment, dec!(12708));
}

#[test]
fn test_missing_file_reports_path() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join("does_not_exist.toml");

    let err = RateCardLoader::load_toml_file(&path).expect_err("Should fail for missing file");

    let RateCardLoaderError::Io { path: reported, .. } = err else {
        panic!("Expected Io error, got: {:?}", err);
    };
    assert_eq!(reported, path);
}

#[test]
fn test_apply_rate_matrix_to_loaded_card() {
    let mut card = RateCardLoader::load_toml_file(&card_path()).unwrap();
    let records = RateCardLoader::parse_package_rates(PACKAGE_RATES_CSV.as_bytes())
        .expect("Failed to parse CSV");

    let applied = RateCardLoader::apply_package_rates(&mut card, &records)
        .expect("Failed to apply rates");

    assert_eq!(applied, 6);
    assert_eq!(card.packages.len(), 4);
    assert!(matches!(
        card.package("premium").map(|p| &p.pricing),
        Some(PackagePricing::PerSpaceRate(_))
    ));
    assert!(matches!(
        card.package("standard").map(|p| &p.pricing),
        Some(PackagePricing::Multiplier(_))
    ));
}

#[test]
fn test_flat_rate_package_with_add_on_after_matrix() {
    let mut card = RateCardLoader::load_toml_file(&card_path()).unwrap();
    let records = RateCardLoader::parse_package_rates(PACKAGE_RATES_CSV.as_bytes()).unwrap();
    RateCardLoader::apply_package_rates(&mut card, &records).unwrap();
    let estimator = CostEstimator::new(&card);

    let input = EstimateInput::new("kitchen", 200, "atelier").with_add_on("painting");
    let result = estimator.estimate(&input);

    // 420 * 200 + 5 * 200 = 85000
    assert_eq!(result.total, dec!(85000));
    assert_eq!(result.monthly_payment, dec!(7083));
}
