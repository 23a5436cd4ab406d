//! Signal-Conditioning Filters for the Acceleration Stream
//!
//! ## Overview
//!
//! Raw accelerometer streams are noisy. Before the estimator measures
//! magnitude variance and subtracts gravity, the sample can optionally be
//! conditioned by one or both of:
//!
//! - [`LowPassFilter`] - exponential smoothing with a configurable
//!   coefficient; cheap, responsive, frequency-domain behavior
//! - [`MeanFilter`] - sliding-window arithmetic mean; stronger noise
//!   suppression at the cost of `window - 1` samples of lag
//!
//! Both stages are independent and independently toggleable. Each filter
//! keeps its own state across samples; the estimator owns one instance of
//! each and never shares them.
//!
//! ```text
//! raw ──→ [LowPassFilter] ──→ [MeanFilter] ──→ conditioned
//!              (optional)         (optional)
//! ```

pub mod lowpass;
pub mod mean;

pub use lowpass::LowPassFilter;
pub use mean::MeanFilter;
