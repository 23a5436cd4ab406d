//! Motion Gate Example
//!
//! Demonstrates the stability gate holding the gravity estimate through
//! motion, and the effect of the conditioning stages on a noisy stream.
//!
//! The scenario: the device rests on a desk, gets shoved hard sideways,
//! then rests again. During the shove the gate variance rises above the
//! threshold, so the gravity estimate stays frozen at its last stable
//! value and the output reports genuine linear acceleration.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_motion_gate
//! ```

use stillpoint_core::{
    constants::{STABILITY_VARIANCE_THRESHOLD, STANDARD_GRAVITY},
    EstimatorConfig, GravityEstimator, Vector3,
};

/// Tiny deterministic generator for repeatable sensor noise
struct Noise(u32);

impl Noise {
    fn next(&mut self) -> f32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0 as f32 / u32::MAX as f32 - 0.5
    }
}

fn main() {
    println!("Stillpoint Motion Gate Example");
    println!("==============================\n");

    // Both conditioning stages on, full pipeline
    let config = EstimatorConfig::default()
        .with_lpf_active(true)
        .with_lpf_alpha(0.4)
        .with_lpf_static_alpha(true)
        .with_mean_filter_active(true)
        .with_mean_filter_window(10);
    let mut estimator = GravityEstimator::new(config).expect("config is valid");
    let mut noise = Noise(0xBEEF);

    // Phase 1: at rest, let the estimator settle
    for _ in 0..40 {
        let raw = Vector3::new(
            noise.next() * 0.1,
            noise.next() * 0.1,
            STANDARD_GRAVITY + noise.next() * 0.1,
        );
        estimator.add_sample(raw);
    }
    println!("After 40 resting samples:");
    report(&estimator);

    // Phase 2: a hard sideways shove, strong enough that even the
    // smoothed magnitude pushes the variance past the gate
    println!("\nShoving the device sideways (25 samples):");
    let mut peak = 0.0f32;
    for _ in 0..25 {
        let raw = Vector3::new(
            18.0 + noise.next() * 2.0,
            noise.next() * 2.0,
            STANDARD_GRAVITY + noise.next() * 2.0,
        );
        let linear = estimator.add_sample(raw);
        peak = peak.max(linear.magnitude());
    }
    report(&estimator);
    println!("  peak linear acceleration: {:.3} g", peak);

    // Phase 3: back at rest; the full-history variance decays slowly,
    // so the gate takes a while to reopen
    let mut settled = None;
    for i in 0..5000 {
        let raw = Vector3::new(
            noise.next() * 0.1,
            noise.next() * 0.1,
            STANDARD_GRAVITY + noise.next() * 0.1,
        );
        estimator.add_sample(raw);
        if settled.is_none() && estimator.magnitude_variance() < STABILITY_VARIANCE_THRESHOLD {
            settled = Some(i);
        }
    }
    println!("\nBack at rest:");
    report(&estimator);
    match settled {
        Some(i) => println!("  gate reopened after {} resting samples", i + 1),
        None => println!("  gate never reopened (variance still elevated)"),
    }
}

fn report(estimator: &GravityEstimator) {
    let g = estimator.held_gravity();
    println!(
        "  held gravity = ({:+7.3}, {:+7.3}, {:+7.3}) m/s², gate variance = {:.5} ({})",
        g.x,
        g.y,
        g.z,
        estimator.magnitude_variance(),
        if estimator.magnitude_variance() < STABILITY_VARIANCE_THRESHOLD {
            "open"
        } else {
            "holding"
        }
    );
}
