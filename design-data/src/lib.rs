//! Loading rate cards from static configuration files.

mod loader;

pub use loader::{PackageRateRecord, RateCardLoader, RateCardLoaderError};
