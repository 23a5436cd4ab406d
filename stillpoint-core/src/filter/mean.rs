//! Sliding-Window Mean Filter over the Vector Stream
//!
//! ## Overview
//!
//! Holds the most recent `window_size` samples in a bounded FIFO and
//! returns their per-axis arithmetic mean. Until the window fills, the
//! mean is over however many samples have arrived - partial windows are
//! expected behavior, not an error.
//!
//! The window size is runtime-configurable between 1 and
//! [`MEAN_WINDOW_CAP`]. The backing store is a `heapless::Deque` sized at
//! compile time, so resizing never allocates; shrinking simply truncates
//! history from the oldest end.
//!
//! The mean is recomputed by summing the window on each call. A running
//! sum would save the loop but accumulates float drift over long
//! sessions; with the window bounded at 64 samples the loop is cheap
//! enough not to matter.

use heapless::Deque;

use crate::{
    constants::{DEFAULT_MEAN_WINDOW, MEAN_WINDOW_CAP},
    errors::{ConfigError, ConfigResult},
    vector::Vector3,
};

/// Sliding arithmetic-mean filter for 3-axis acceleration samples
#[derive(Debug, Clone)]
pub struct MeanFilter {
    /// Most recent samples, oldest at the front
    ///
    /// Invariant: `buf.len() <= window_size` at all times.
    buf: Deque<Vector3, MEAN_WINDOW_CAP>,

    /// Number of samples the window may hold, `1..=MEAN_WINDOW_CAP`
    window_size: usize,
}

impl Default for MeanFilter {
    fn default() -> Self {
        Self {
            buf: Deque::new(),
            window_size: DEFAULT_MEAN_WINDOW,
        }
    }
}

impl MeanFilter {
    /// Create a filter with the default window size
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter with a specific window size
    pub fn with_window_size(window_size: usize) -> ConfigResult<Self> {
        let mut filter = Self::new();
        filter.set_window_size(window_size)?;
        Ok(filter)
    }

    /// Feed one sample and return the mean of the current window
    pub fn filter(&mut self, input: Vector3) -> Vector3 {
        while self.buf.len() >= self.window_size {
            self.buf.pop_front();
        }
        // len < window_size <= MEAN_WINDOW_CAP here, so the push cannot fail
        let _ = self.buf.push_back(input);

        let mut sum = Vector3::ZERO;
        for sample in self.buf.iter() {
            sum = sum + *sample;
        }
        sum / self.buf.len() as f32
    }

    /// Change the window size for future samples
    ///
    /// A window of zero is rejected, as is anything above the backing
    /// capacity. Shrinking immediately evicts the oldest buffered samples
    /// so the length invariant holds before the next `filter` call.
    /// A rejected call leaves both the window size and the buffer intact.
    pub fn set_window_size(&mut self, window_size: usize) -> ConfigResult<()> {
        if window_size == 0 {
            return Err(ConfigError::WindowTooSmall);
        }
        if window_size > MEAN_WINDOW_CAP {
            return Err(ConfigError::WindowTooLarge {
                requested: window_size,
                max: MEAN_WINDOW_CAP,
            });
        }

        self.window_size = window_size;
        while self.buf.len() > window_size {
            self.buf.pop_front();
        }
        Ok(())
    }

    /// Configured window size
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Number of samples currently buffered
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True when no samples are buffered
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Drop all buffered samples, keeping the window size
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}
