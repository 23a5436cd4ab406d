//! Linear acceleration engine for Stillpoint
//!
//! Estimates the linear (non-gravitational) component of acceleration from
//! a raw 3-axis accelerometer stream, with no gyroscope or magnetometer.
//! Designed for edge devices with limited resources.
//!
//! Key constraints:
//! - O(1) work per sample, no heap allocation in the hot path
//! - Rate-agnostic: no timestamp dependency anywhere in the pipeline
//! - Single logical sample stream; `&mut self` enforces exclusive access
//!
//! ```no_run
//! use stillpoint_core::{GravityEstimator, EstimatorConfig, Vector3};
//!
//! let config = EstimatorConfig::default();
//! let mut estimator = GravityEstimator::new(config).unwrap();
//!
//! // Feed raw accelerometer readings in m/s^2, get linear acceleration
//! // in gravity-normalized units ("g").
//! let linear = estimator.add_sample(Vector3::new(0.02, -0.01, 9.79));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod errors;
pub mod estimator;
pub mod filter;
pub mod stats;
pub mod vector;

// Public API
pub use errors::{ConfigError, ConfigResult};
pub use estimator::{EstimatorConfig, GravityEstimator};
pub use filter::{LowPassFilter, MeanFilter};
pub use stats::RunningVariance;
pub use vector::Vector3;

/// Crate version string, from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
