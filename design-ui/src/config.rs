//! Site configuration read from a TOML file.
//!
//! Every section and key is optional; a missing key keeps its default.
//!
//! ```toml
//! [calculator]
//! preset = "multiplier"            # or "flat"
//! rate_card = "cards/studio.toml"  # overrides the preset when set
//! package_rates = "cards/rates.csv"
//!
//! [currency]
//! symbol = "₹"
//! grouping = "indian"              # or "western"
//!
//! [carousel]
//! banner_interval_ms = 5000
//! testimonial_interval_ms = 8000
//! transition_ms = 500
//!
//! [video]
//! controls_hide_ms = 3000
//!
//! [contact]
//! submit_delay_ms = 1500
//!
//! [logging]
//! level = "info"
//! stdout = true
//! file = "studio.log"
//! ```

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

use design_core::RateCard;
use design_data::{RateCardLoader, RateCardLoaderError};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::utils::CurrencyFormat;

/// Errors that can occur while reading site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rate card error: {0}")]
    RateCard(#[from] RateCardLoaderError),
}

/// Built-in rate card to use when no rate card file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatePreset {
    #[default]
    Flat,
    Multiplier,
}

impl RatePreset {
    pub fn card(self) -> RateCard {
        match self {
            RatePreset::Flat => RateCard::flat_rate(),
            RatePreset::Multiplier => RateCard::multiplier(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub preset: RatePreset,
    pub rate_card: Option<PathBuf>,
    pub package_rates: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub banner_interval_ms: u64,
    pub testimonial_interval_ms: u64,
    pub transition_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            banner_interval_ms: 5000,
            testimonial_interval_ms: 8000,
            transition_ms: 500,
        }
    }
}

impl CarouselConfig {
    pub fn banner_interval(&self) -> Duration {
        Duration::from_millis(self.banner_interval_ms)
    }

    pub fn testimonial_interval(&self) -> Duration {
        Duration::from_millis(self.testimonial_interval_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub controls_hide_ms: u64,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            controls_hide_ms: 3000,
        }
    }
}

impl VideoConfig {
    pub fn controls_hide_after(&self) -> Duration {
        Duration::from_millis(self.controls_hide_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub submit_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
        }
    }
}

impl ContactConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Bare level or full `EnvFilter` directive. `RUST_LOG` takes precedence.
    pub level: String,
    pub stdout: bool,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            stdout: true,
            file: None,
        }
    }
}

/// Top-level site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub calculator: CalculatorConfig,
    pub currency: CurrencyFormat,
    pub carousel: CarouselConfig,
    pub video: VideoConfig,
    pub contact: ContactConfig,
    pub logging: LoggingConfig,
}

impl SiteConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Reads configuration from `path`. Relative rate card paths inside the
    /// file are resolved against the file's directory.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;

        if let Some(base) = path.parent() {
            let calculator = &mut config.calculator;
            calculator.rate_card = calculator.rate_card.take().map(|p| base.join(p));
            calculator.package_rates = calculator.package_rates.take().map(|p| base.join(p));
        }

        info!(path = %path.display(), "site config loaded");
        Ok(config)
    }

    /// Builds the rate card the calculator prices against: the configured
    /// file or preset, with any package rate matrix applied on top.
    pub fn rate_card(&self) -> Result<RateCard, ConfigError> {
        let mut card = match &self.calculator.rate_card {
            Some(path) => RateCardLoader::load_toml_file(path)?,
            None => self.calculator.preset.card(),
        };

        if let Some(path) = &self.calculator.package_rates {
            let file = File::open(path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            let records = RateCardLoader::parse_package_rates(file)?;
            let applied = RateCardLoader::apply_package_rates(&mut card, &records)?;
            info!(path = %path.display(), applied, "package rates applied");
        }

        Ok(card)
    }
}
