pub mod calculations;
pub mod models;

pub use calculations::CostEstimator;
pub use models::*;
