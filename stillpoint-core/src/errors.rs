//! Error Types for Pipeline Configuration Failures
//!
//! ## Design Philosophy
//!
//! Stillpoint's error system follows the same rules as the rest of the
//! crate: errors are small, `Copy`, and carry all their data inline - no
//! `String`, no heap. The pipeline itself cannot fail per sample (it is a
//! pure synchronous transform), so the only fallible surface is
//! configuration: setting a smoothing coefficient or resizing the mean
//! filter window.
//!
//! A rejected configuration call never mutates state. Callers can surface
//! the diagnostic and keep running with the previous settings.
//!
//! ## Error Categories
//!
//! - `AlphaOutOfRange`: low-pass smoothing coefficient outside `[0, 1]`
//!   (or not a finite number)
//! - `WindowTooSmall`: mean filter window of zero samples requested
//! - `WindowTooLarge`: mean filter window above the compile-time capacity

use thiserror_no_std::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Smoothing coefficient outside the valid range
    #[error("Smoothing coefficient {alpha} outside [0, 1]")]
    AlphaOutOfRange {
        /// The rejected coefficient
        alpha: f32,
    },

    /// Mean filter window must hold at least one sample
    #[error("Mean filter window must hold at least one sample")]
    WindowTooSmall,

    /// Mean filter window exceeds the fixed backing capacity
    #[error("Mean filter window {requested} exceeds capacity {max}")]
    WindowTooLarge {
        /// The rejected window size
        requested: usize,
        /// Maximum supported window size
        max: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::AlphaOutOfRange { alpha } =>
                defmt::write!(fmt, "Alpha {} outside [0, 1]", alpha),
            Self::WindowTooSmall =>
                defmt::write!(fmt, "Window must hold at least one sample"),
            Self::WindowTooLarge { requested, max } =>
                defmt::write!(fmt, "Window {} exceeds capacity {}", requested, max),
        }
    }
}
