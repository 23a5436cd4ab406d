//! Running Variance over a Scalar Sample Stream
//!
//! ## Overview
//!
//! The stability gate needs the variance of the gravity-normalized
//! magnitude series, updated once per sample with no re-scan of history.
//! This module provides a single-pass (Welford) estimator: constant time,
//! constant memory, and numerically stable where the naive
//! `E[x²] - E[x]²` form suffers catastrophic cancellation.
//!
//! ## Update Rule
//!
//! ```text
//! n     += 1
//! delta  = x - mean
//! mean  += delta / n
//! m2    += delta * (x - mean)
//!
//! variance = m2 / n        (population)
//! ```
//!
//! Variance is over the entire history since construction (or the last
//! `reset()`). There is no window or decay: the gate's semantics were
//! calibrated against full-history variance, and a decaying estimator
//! changes how quickly the gate re-opens after motion.
//!
//! Non-finite inputs are not screened; they poison the moments exactly as
//! they would any running sum. Sanitizing is the caller's responsibility.

/// Single-pass running variance estimator (Welford's method)
///
/// Maintains the count, mean, and sum of squared deviations of every
/// sample seen so far. All operations are O(1) with no allocation.
#[derive(Debug, Clone, Default)]
pub struct RunningVariance {
    /// Samples seen since construction or last reset
    count: u32,
    /// Running mean
    mean: f32,
    /// Running sum of squared deviations from the mean
    m2: f32,
}

impl RunningVariance {
    /// Create an empty estimator
    pub const fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Incorporate one sample and return the current population variance
    ///
    /// The variance of a single sample is 0 by definition, so the first
    /// call always returns 0.0.
    pub fn add_sample(&mut self, x: f32) -> f32 {
        self.count += 1;
        let n = self.count as f32;

        let delta = x - self.mean;
        self.mean += delta / n;
        self.m2 += delta * (x - self.mean);

        self.m2 / n
    }

    /// Number of samples seen
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Running mean, or 0.0 before the first sample
    pub fn mean(&self) -> f32 {
        self.mean
    }

    /// Current population variance, or 0.0 before the first sample
    pub fn variance(&self) -> f32 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f32
        }
    }

    /// Current population standard deviation
    ///
    /// Useful as an RMS-noise readout for display; equals the RMS of a
    /// zero-centered series.
    pub fn std_dev(&self) -> f32 {
        libm::sqrtf(self.variance())
    }

    /// Discard all accumulated state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
