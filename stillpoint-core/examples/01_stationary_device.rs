//! Stationary Device Example
//!
//! This example demonstrates the simplest use of Stillpoint: feeding a
//! resting device's accelerometer stream through the estimator and
//! watching the linear acceleration output collapse to zero.
//!
//! ## What You'll Learn
//!
//! - Building an estimator from a configuration
//! - Feeding raw samples and reading the output
//! - Inspecting the held gravity estimate and gate variance
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_stationary_device
//! ```

use stillpoint_core::{
    constants::STANDARD_GRAVITY,
    EstimatorConfig, GravityEstimator, Vector3,
};

fn main() {
    println!("Stillpoint Stationary Device Example");
    println!("====================================\n");

    let config = EstimatorConfig::default();
    let mut estimator = GravityEstimator::new(config).expect("default config is valid");

    // A device lying flat on a desk: gravity entirely on the z axis,
    // plus a little deterministic sensor noise
    println!("Feeding 10 samples from a device at rest:\n");
    for i in 0..10 {
        let noise = ((i * 7) % 5) as f32 * 0.004 - 0.008;
        let raw = Vector3::new(noise, -noise, STANDARD_GRAVITY + noise);

        let linear = estimator.add_sample(raw);
        println!(
            "  sample {:2}: raw z = {:7.4} m/s²  →  linear = ({:+.4}, {:+.4}, {:+.4}) g",
            i, raw.z, linear.x, linear.y, linear.z
        );
    }

    let gravity = estimator.held_gravity();
    println!("\nHeld gravity estimate: ({:.4}, {:.4}, {:.4}) m/s²", gravity.x, gravity.y, gravity.z);
    println!("Gate variance:         {:.6}", estimator.magnitude_variance());
    println!("Samples processed:     {}", estimator.sample_count());
}
