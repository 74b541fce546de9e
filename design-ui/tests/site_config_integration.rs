//! Loads the site configuration fixtures in `tests/fixtures/` and drives a
//! calculator and the banner carousel from the result.

use std::path::{Path, PathBuf};
use std::time::Duration;

use design_ui::widgets::Carousel;
use design_ui::{CalculatorState, ConfigError, DigitGrouping, SiteConfig};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_site_config() {
    let config = SiteConfig::load_from_file(&fixture("site.toml")).expect("Failed to load config");

    assert_eq!(config.currency.grouping, DigitGrouping::Indian);
    assert_eq!(config.carousel.banner_interval(), Duration::from_secs(4));
    assert_eq!(config.carousel.transition(), Duration::from_millis(500));
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.stdout);
}

#[test]
fn test_relative_paths_resolve_against_config_dir() {
    let config = SiteConfig::load_from_file(&fixture("site.toml")).unwrap();

    let rate_card = config.calculator.rate_card.as_deref().unwrap();
    let package_rates = config.calculator.package_rates.as_deref().unwrap();

    assert_eq!(rate_card, fixture("cards/boutique.toml"));
    assert!(rate_card.is_file());
    assert!(package_rates.is_file());
}

#[test]
fn test_rate_card_applies_package_matrix() {
    let config = SiteConfig::load_from_file(&fixture("site.toml")).unwrap();

    let card = config.rate_card().expect("Failed to build rate card");

    let ids: Vec<&str> = card.packages.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["basic", "standard", "signature"]);
}

#[test]
fn test_calculator_end_to_end() {
    let config = SiteConfig::load_from_file(&fixture("site.toml")).unwrap();
    let card = config.rate_card().unwrap();
    let mut state = CalculatorState::new(&card);

    // 80 * 1000
    assert_eq!(state.result().total, dec!(80000));

    state.select_package("signature");
    state.set_area(1500);
    state.set_add_on("painting", true);

    // 200 * 1500 + 5 * 1500
    assert_eq!(state.result().total, dec!(307500));
    assert_eq!(state.result().monthly_payment, dec!(25625));

    let summary = state.summary(&config.currency);
    assert_eq!(summary.package, "Signature");
    assert_eq!(summary.total, "₹3,07,500");
    assert_eq!(summary.monthly, "₹25,625/mo");
}

#[test]
fn test_banner_uses_configured_interval() {
    let config = SiteConfig::load_from_file(&fixture("site.toml")).unwrap();
    let mut banner = Carousel::new(3, config.carousel.banner_interval());

    assert!(banner.tick(Duration::from_secs(4)));
    assert_eq!(banner.index(), 1);
}

#[test]
fn test_missing_config_file() {
    let path = fixture("missing.toml");

    let err = SiteConfig::load_from_file(&path).expect_err("Should fail for missing file");

    let ConfigError::Io { path: reported, .. } = err else {
        panic!("Expected Io error, got: {:?}", err);
    };
    assert_eq!(reported, path);
}
