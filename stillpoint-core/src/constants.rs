//! Physical and Tuning Constants for Stillpoint
//!
//! This module defines the physical constants and pipeline tuning values
//! used throughout the linear acceleration engine. Tuning values were
//! calibrated against handheld-device accelerometer streams and should be
//! changed together, not individually.

// ===== PHYSICAL CONSTANTS =====

/// Standard gravity (m/s²).
///
/// Conventional value for gravitational acceleration at Earth's surface,
/// used to normalize accelerometer magnitudes so a stationary device reads
/// a magnitude of ~1.0 regardless of orientation.
///
/// Source: ISO 80000-3 (standard acceleration of free fall)
pub const STANDARD_GRAVITY: f32 = 9.80665;

// ===== STABILITY GATE =====

/// Variance threshold for the stability gate (dimensionless).
///
/// The gate compares the running population variance of the
/// gravity-normalized magnitude series against this value. Below it the
/// device is assumed stationary and the held gravity estimate is refreshed
/// from the current conditioned reading.
///
/// Calibrated against normalized magnitudes; re-scaling the pipeline's
/// units requires re-tuning this value.
pub const STABILITY_VARIANCE_THRESHOLD: f32 = 0.05;

// ===== FILTER DEFAULTS =====

/// Default low-pass smoothing coefficient.
///
/// Used when the filter is not configured with a static coefficient.
/// 0.4 weights the incoming sample at 40%, a balance between noise
/// rejection and response lag at typical accelerometer rates (~50-200 Hz).
pub const DEFAULT_LPF_ALPHA: f32 = 0.4;

/// Default mean filter window (samples).
///
/// Ten samples of history smooth sensor noise without introducing
/// noticeable lag at typical delivery rates.
pub const DEFAULT_MEAN_WINDOW: usize = 10;

/// Maximum mean filter window (samples).
///
/// Compile-time capacity of the mean filter's backing buffer. The window
/// size is runtime-configurable up to this bound; larger requests are a
/// configuration error, not a silent clamp.
///
/// 64 vectors × 12 bytes = 768 bytes, affordable on 32KB-class targets.
pub const MEAN_WINDOW_CAP: usize = 64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_within_configured_bounds() {
        assert!(DEFAULT_MEAN_WINDOW >= 1);
        assert!(DEFAULT_MEAN_WINDOW <= MEAN_WINDOW_CAP);
        assert!(DEFAULT_LPF_ALPHA >= 0.0 && DEFAULT_LPF_ALPHA <= 1.0);
    }
}
