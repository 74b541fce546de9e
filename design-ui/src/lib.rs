pub mod config;
pub mod logging;
pub mod state;
pub mod utils;
pub mod widgets;

pub use config::{ConfigError, RatePreset, SiteConfig};
pub use state::{CalculatorState, EstimateSummary};
pub use utils::{CurrencyFormat, DigitGrouping, format_currency};
