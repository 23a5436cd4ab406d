//! Exponential Low-Pass Filter over the Vector Stream
//!
//! Per-axis exponential moving average:
//!
//! ```text
//! out[i] += alpha * (input[i] - out[i])
//! ```
//!
//! The first sample primes the filter and passes through unchanged.
//! `alpha = 1` disables smoothing entirely; `alpha = 0` freezes the output
//! at the priming sample.
//!
//! The smoothing coefficient is either a caller-set constant (static
//! mode) or [`DEFAULT_LPF_ALPHA`] otherwise. The non-static mode is a
//! hook for a dynamically computed coefficient; until one is specified
//! it resolves to the fixed default rather than a guessed adaptive
//! formula.

use crate::{
    constants::DEFAULT_LPF_ALPHA,
    errors::{ConfigError, ConfigResult},
    vector::Vector3,
};

/// Exponential smoothing filter for 3-axis acceleration samples
#[derive(Debug, Clone)]
pub struct LowPassFilter {
    /// Caller-set smoothing coefficient, used in static mode
    alpha: f32,

    /// When true, `alpha` is used as-is; otherwise the default applies
    static_alpha: bool,

    /// Previous filtered value; `None` until the first sample primes it
    output: Option<Vector3>,
}

impl Default for LowPassFilter {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_LPF_ALPHA,
            static_alpha: false,
            output: None,
        }
    }
}

impl LowPassFilter {
    /// Create a filter in non-static mode with the default coefficient
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one sample and return the filtered value
    ///
    /// The first call returns the input unchanged and seeds the filter
    /// state with it.
    pub fn add_sample(&mut self, input: Vector3) -> Vector3 {
        let filtered = match self.output {
            None => input,
            Some(prev) => prev + (input - prev) * self.effective_alpha(),
        };

        self.output = Some(filtered);
        filtered
    }

    /// Set the static smoothing coefficient
    ///
    /// Rejects values outside `[0, 1]` (including NaN) without touching
    /// filter state. Only takes effect while static mode is on.
    pub fn set_alpha(&mut self, alpha: f32) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ConfigError::AlphaOutOfRange { alpha });
        }
        self.alpha = alpha;
        Ok(())
    }

    /// Switch between the static coefficient and the default
    pub fn set_static_alpha(&mut self, static_alpha: bool) {
        self.static_alpha = static_alpha;
    }

    /// Coefficient currently applied to incoming samples
    pub fn effective_alpha(&self) -> f32 {
        if self.static_alpha {
            self.alpha
        } else {
            DEFAULT_LPF_ALPHA
        }
    }

    /// Drop filter state; the next sample re-primes the filter
    pub fn reset(&mut self) {
        self.output = None;
    }
}
