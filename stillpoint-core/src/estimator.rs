//! Variance-Gated Gravity Estimation
//!
//! ## Overview
//!
//! This module implements the core of the engine: separating the gravity
//! component from raw accelerometer readings using nothing but the
//! accelerometer itself.
//!
//! The idea: when the device is stationary, the accelerometer measures
//! exactly gravity, so a near-static reading *is* the gravity vector in
//! device coordinates. Stationarity is detected from the running variance
//! of the gravity-normalized magnitude series. While the variance sits
//! below [`STABILITY_VARIANCE_THRESHOLD`], every conditioned reading
//! replaces the held gravity estimate; once motion raises the variance,
//! the last stable estimate is held and subtracted from subsequent
//! readings, yielding tilt-compensated linear acceleration.
//!
//! ## Per-Sample Data Flow
//!
//! ```text
//! raw ─→ [LPF?] ─→ [mean?] ─→ |·|/g ─→ variance ─→ gate ─→ subtract ─→ out
//!                     │                              │
//!                     └── conditioned ───────────────┴── held gravity
//! ```
//!
//! The gravity update is a full replacement, never a blend. Blending
//! would smear convergence across the gate boundary; snapping keeps the
//! estimate exactly equal to a known-stable reading.
//!
//! ## Units
//!
//! Input is m/s²; output is gravity-normalized ("g") units. The 0.05 gate
//! threshold is calibrated against normalized magnitudes, so the
//! normalization is part of the algorithm, not a presentation choice.

use crate::{
    constants::{
        DEFAULT_LPF_ALPHA, DEFAULT_MEAN_WINDOW, MEAN_WINDOW_CAP,
        STABILITY_VARIANCE_THRESHOLD, STANDARD_GRAVITY,
    },
    errors::{ConfigError, ConfigResult},
    filter::{LowPassFilter, MeanFilter},
    stats::RunningVariance,
    vector::Vector3,
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Configuration for [`GravityEstimator`]
///
/// Mirrors the settings surface an embedding application exposes: two
/// filter toggles plus each filter's tuning parameter. Values are
/// validated when the estimator is built, not when the struct is
/// assembled, so a config can be staged field by field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimatorConfig {
    /// Condition samples through the low-pass filter
    pub lpf_active: bool,
    /// Static low-pass smoothing coefficient, `[0, 1]`
    pub lpf_alpha: f32,
    /// Use `lpf_alpha` as-is instead of the built-in default
    pub lpf_static_alpha: bool,
    /// Condition samples through the sliding mean filter
    pub mean_filter_active: bool,
    /// Mean filter window, `1..=MEAN_WINDOW_CAP` samples
    pub mean_filter_window: usize,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            lpf_active: false,
            lpf_alpha: DEFAULT_LPF_ALPHA,
            lpf_static_alpha: false,
            mean_filter_active: false,
            mean_filter_window: DEFAULT_MEAN_WINDOW,
        }
    }
}

impl EstimatorConfig {
    /// Enable or disable the low-pass stage
    pub fn with_lpf_active(mut self, active: bool) -> Self {
        self.lpf_active = active;
        self
    }

    /// Set the static low-pass smoothing coefficient
    pub fn with_lpf_alpha(mut self, alpha: f32) -> Self {
        self.lpf_alpha = alpha;
        self
    }

    /// Use the static coefficient instead of the built-in default
    pub fn with_lpf_static_alpha(mut self, static_alpha: bool) -> Self {
        self.lpf_static_alpha = static_alpha;
        self
    }

    /// Enable or disable the mean filter stage
    pub fn with_mean_filter_active(mut self, active: bool) -> Self {
        self.mean_filter_active = active;
        self
    }

    /// Set the mean filter window size
    pub fn with_mean_filter_window(mut self, window: usize) -> Self {
        self.mean_filter_window = window;
        self
    }

    /// Check every parameter, returning the first violation
    pub fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.lpf_alpha) {
            return Err(ConfigError::AlphaOutOfRange { alpha: self.lpf_alpha });
        }
        if self.mean_filter_window == 0 {
            return Err(ConfigError::WindowTooSmall);
        }
        if self.mean_filter_window > MEAN_WINDOW_CAP {
            return Err(ConfigError::WindowTooLarge {
                requested: self.mean_filter_window,
                max: MEAN_WINDOW_CAP,
            });
        }
        Ok(())
    }
}

/// Accelerometer-only linear acceleration estimator
///
/// Owns its conditioning filters and variance state outright; the
/// embedding application communicates through the config surface and the
/// per-sample call, never through shared references into the internals.
///
/// All mutating operations take `&mut self`, so exclusive access per
/// sample stream is enforced by the borrow checker. Hosts that deliver
/// samples from a hardware-event thread wrap the estimator in their own
/// mutex together with any reconfiguration calls.
#[derive(Debug, Clone)]
pub struct GravityEstimator {
    lpf_active: bool,
    mean_filter_active: bool,
    lpf: LowPassFilter,
    mean_filter: MeanFilter,
    magnitude_variance: RunningVariance,
    /// Last accepted gravity estimate in device coordinates (m/s²)
    held_gravity: Vector3,
}

impl GravityEstimator {
    /// Build an estimator from a validated configuration
    ///
    /// Fails fast on invalid parameters; no state is constructed on error.
    pub fn new(config: EstimatorConfig) -> ConfigResult<Self> {
        config.validate()?;

        let mut lpf = LowPassFilter::new();
        lpf.set_alpha(config.lpf_alpha)?;
        lpf.set_static_alpha(config.lpf_static_alpha);

        let mean_filter = MeanFilter::with_window_size(config.mean_filter_window)?;

        Ok(Self {
            lpf_active: config.lpf_active,
            mean_filter_active: config.mean_filter_active,
            lpf,
            mean_filter,
            magnitude_variance: RunningVariance::new(),
            held_gravity: Vector3::ZERO,
        })
    }

    /// Process one raw accelerometer sample (m/s²)
    ///
    /// Returns the estimated linear acceleration in gravity-normalized
    /// units. Non-finite inputs propagate to the output; screen with
    /// [`Vector3::is_finite`] if the sensor driver cannot be trusted.
    pub fn add_sample(&mut self, raw: Vector3) -> Vector3 {
        let mut conditioned = raw;

        if self.lpf_active {
            conditioned = self.lpf.add_sample(conditioned);
        }
        if self.mean_filter_active {
            conditioned = self.mean_filter.filter(conditioned);
        }

        let magnitude = conditioned.magnitude() / STANDARD_GRAVITY;
        let variance = self.magnitude_variance.add_sample(magnitude);

        // Near-static reading: the conditioned sample is itself the best
        // available gravity estimate. Replace, never blend.
        if variance < STABILITY_VARIANCE_THRESHOLD {
            self.held_gravity = conditioned;
        }

        (conditioned - self.held_gravity) / STANDARD_GRAVITY
    }

    /// Toggle the low-pass stage
    ///
    /// Switching a stage off bypasses it without clearing its state; the
    /// filter resumes from its accumulated history when re-enabled.
    pub fn set_lpf_active(&mut self, active: bool) {
        log_debug!("low-pass stage {}", if active { "enabled" } else { "bypassed" });
        self.lpf_active = active;
    }

    /// Toggle the mean filter stage
    ///
    /// Same bypass semantics as [`set_lpf_active`](Self::set_lpf_active):
    /// buffered window contents survive the toggle.
    pub fn set_mean_filter_active(&mut self, active: bool) {
        log_debug!("mean filter stage {}", if active { "enabled" } else { "bypassed" });
        self.mean_filter_active = active;
    }

    /// Set the static low-pass smoothing coefficient
    pub fn set_lpf_alpha(&mut self, alpha: f32) -> ConfigResult<()> {
        self.lpf.set_alpha(alpha)?;
        log_debug!("low-pass alpha set to {}", alpha);
        Ok(())
    }

    /// Switch the low-pass filter between static and default coefficient
    pub fn set_lpf_static_alpha(&mut self, static_alpha: bool) {
        self.lpf.set_static_alpha(static_alpha);
    }

    /// Resize the mean filter window
    ///
    /// Shrinking truncates buffered history immediately; see
    /// [`MeanFilter::set_window_size`].
    pub fn set_mean_filter_window(&mut self, window: usize) -> ConfigResult<()> {
        self.mean_filter.set_window_size(window)?;
        log_debug!("mean filter window set to {}", window);
        Ok(())
    }

    /// Last accepted gravity estimate in device coordinates (m/s²)
    pub fn held_gravity(&self) -> Vector3 {
        self.held_gravity
    }

    /// Samples processed since construction
    pub fn sample_count(&self) -> u32 {
        self.magnitude_variance.count()
    }

    /// Current variance of the normalized magnitude series
    ///
    /// The value the stability gate compares against the threshold; also
    /// usable as an RMS-noise readout via its square root.
    pub fn magnitude_variance(&self) -> f32 {
        self.magnitude_variance.variance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAVITY_UP: Vector3 = Vector3::new(0.0, 0.0, STANDARD_GRAVITY);

    fn assert_near_zero(v: Vector3) {
        assert!(v.magnitude() < 1e-4, "expected ~zero, got {:?}", v);
    }

    #[test]
    fn stationary_device_reads_zero() {
        let mut estimator = GravityEstimator::new(EstimatorConfig::default()).unwrap();

        for _ in 0..20 {
            let out = estimator.add_sample(GRAVITY_UP);
            assert_near_zero(out);
        }
        assert_eq!(estimator.held_gravity(), GRAVITY_UP);
    }

    #[test]
    fn tilted_device_reads_zero_once_stable() {
        // Device resting on an incline: gravity split across two axes
        let tilted = Vector3::new(4.0, 0.0, 8.57);
        let mut estimator = GravityEstimator::new(EstimatorConfig::default()).unwrap();

        let mut out = Vector3::ZERO;
        for _ in 0..20 {
            out = estimator.add_sample(tilted);
        }
        assert_near_zero(out);
        assert_eq!(estimator.held_gravity(), tilted);
    }

    #[test]
    fn gate_holds_gravity_through_sudden_motion() {
        let mut estimator = GravityEstimator::new(EstimatorConfig::default()).unwrap();

        // Short stable period, then a hard lateral shove. The magnitude
        // jump must push the full-history variance past the gate.
        for _ in 0..5 {
            estimator.add_sample(GRAVITY_UP);
        }
        let shove = Vector3::new(15.0, 0.0, STANDARD_GRAVITY);
        let out = estimator.add_sample(shove);

        // Gravity estimate did not track the motion
        assert_eq!(estimator.held_gravity(), GRAVITY_UP);
        assert!(estimator.magnitude_variance() >= STABILITY_VARIANCE_THRESHOLD);

        // Output is the shove minus held gravity, in g units
        assert!((out.x - 15.0 / STANDARD_GRAVITY).abs() < 1e-5);
        assert!(out.y.abs() < 1e-5);
        assert!(out.z.abs() < 1e-5);
    }

    #[test]
    fn gate_reopens_once_new_magnitude_dominates() {
        let mut estimator = GravityEstimator::new(EstimatorConfig::default()).unwrap();

        for _ in 0..5 {
            estimator.add_sample(GRAVITY_UP);
        }
        // Sustained push, e.g. constant acceleration in a vehicle
        let push = Vector3::new(15.0, 0.0, STANDARD_GRAVITY);
        let mut out = estimator.add_sample(push);
        assert!(out.magnitude() > 0.5);

        // Full-history variance decays as the new magnitude dominates,
        // and the estimator eventually adopts the push as "gravity"
        for _ in 0..2000 {
            out = estimator.add_sample(push);
        }
        assert_near_zero(out);
        assert_eq!(estimator.held_gravity(), push);
    }

    #[test]
    fn constant_magnitude_rotation_is_invisible_to_the_gate() {
        // The gate watches magnitude variance only: a slow re-orientation
        // at 1 g refreshes the estimate instantly. Inherent to an
        // accelerometer-only design, and relied on for tilt compensation.
        let mut estimator = GravityEstimator::new(EstimatorConfig::default()).unwrap();

        for _ in 0..5 {
            estimator.add_sample(GRAVITY_UP);
        }
        let on_side = Vector3::new(0.0, STANDARD_GRAVITY, 0.0);
        let out = estimator.add_sample(on_side);

        assert_near_zero(out);
        assert_eq!(estimator.held_gravity(), on_side);
    }

    #[test]
    fn invalid_configs_rejected_at_construction() {
        let bad_alpha = EstimatorConfig::default()
            .with_lpf_alpha(1.5)
            .with_lpf_static_alpha(true);
        assert!(matches!(
            GravityEstimator::new(bad_alpha),
            Err(ConfigError::AlphaOutOfRange { .. })
        ));

        let bad_window = EstimatorConfig::default().with_mean_filter_window(0);
        assert_eq!(
            GravityEstimator::new(bad_window).unwrap_err(),
            ConfigError::WindowTooSmall
        );

        let oversized = EstimatorConfig::default().with_mean_filter_window(MEAN_WINDOW_CAP + 1);
        assert!(matches!(
            GravityEstimator::new(oversized),
            Err(ConfigError::WindowTooLarge { .. })
        ));
    }

    #[test]
    fn bypassed_mean_filter_keeps_its_window() {
        let config = EstimatorConfig::default()
            .with_mean_filter_active(true)
            .with_mean_filter_window(2);
        let mut estimator = GravityEstimator::new(config).unwrap();

        // Buffered while active
        estimator.add_sample(GRAVITY_UP);

        // Bypassed: this sample must not enter the window
        estimator.set_mean_filter_active(false);
        estimator.add_sample(Vector3::new(8.0, 8.0, 8.0));

        // Re-enabled: window is [GRAVITY_UP, next], not [next] alone
        estimator.set_mean_filter_active(true);
        estimator.add_sample(Vector3::new(4.0, 0.0, STANDARD_GRAVITY));

        let expected = Vector3::new(2.0, 0.0, STANDARD_GRAVITY);
        let held = estimator.held_gravity();
        assert!((held - expected).magnitude() < 1e-5);
    }

    #[test]
    fn runtime_setters_mirror_config_validation() {
        let mut estimator = GravityEstimator::new(EstimatorConfig::default()).unwrap();

        assert!(estimator.set_lpf_alpha(0.25).is_ok());
        assert!(estimator.set_lpf_alpha(-0.5).is_err());
        assert!(estimator.set_mean_filter_window(32).is_ok());
        assert!(estimator.set_mean_filter_window(0).is_err());
    }

    #[test]
    fn conditioning_stages_apply_in_order() {
        // LPF primes on the first sample, so with both stages active the
        // first output must equal the raw sample exactly.
        let config = EstimatorConfig::default()
            .with_lpf_active(true)
            .with_lpf_alpha(0.5)
            .with_lpf_static_alpha(true)
            .with_mean_filter_active(true)
            .with_mean_filter_window(4);
        let mut estimator = GravityEstimator::new(config).unwrap();

        let out = estimator.add_sample(GRAVITY_UP);
        assert_near_zero(out);
        assert_eq!(estimator.held_gravity(), GRAVITY_UP);

        // Second sample: LPF output = g + 0.5*(x - g), mean over both
        let second = estimator.add_sample(Vector3::new(2.0, 0.0, STANDARD_GRAVITY));
        // LPF: (1.0, 0, g); mean of [(0,0,g), (1,0,g)] = (0.5, 0, g)
        let conditioned_x = 0.5;
        assert_eq!(estimator.held_gravity().x, conditioned_x);
        // Gate fired (tiny variance), so output is zero again
        assert_near_zero(second);
    }

    #[test]
    fn identical_streams_produce_identical_outputs() {
        let config = EstimatorConfig::default()
            .with_lpf_active(true)
            .with_mean_filter_active(true)
            .with_mean_filter_window(5);

        let mut a = GravityEstimator::new(config).unwrap();
        let mut b = GravityEstimator::new(config).unwrap();

        // Deterministic xorshift-style jitter around rest
        let mut state = 0x2545_F491u32;
        for _ in 0..200 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let noise = (state as f32 / u32::MAX as f32 - 0.5) * 0.2;
            let sample = Vector3::new(noise, -noise, STANDARD_GRAVITY + noise);

            assert_eq!(a.add_sample(sample), b.add_sample(sample));
        }
    }
}
