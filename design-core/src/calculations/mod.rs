//! Cost calculations for the design estimate.
//!
//! [`CostEstimator`] prices an [`EstimateInput`](crate::EstimateInput) against a
//! borrowed [`RateCard`](crate::RateCard); [`common`] holds the rounding rules.

pub mod common;
pub mod estimator;

pub use estimator::CostEstimator;
