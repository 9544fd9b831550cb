//! Derived sweep statistics.

use crate::range::SamplingRange;

/// Step count, sample count, and expected duration for one sweep test.
///
/// Recomputed synchronously after every accepted mutation, so these are
/// never stale relative to the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SweepStats {
    pub num_steps: u32,
    pub total_samples: u64,
    pub test_duration_secs: f64,
}

impl SweepStats {
    /// Pure derivation:
    /// `num_steps = round(span / step_size)`,
    /// `total_samples = num_steps * iteration_count`,
    /// `test_duration_secs = total_samples * settling_time`.
    pub fn derive(
        range: SamplingRange,
        step_size: f64,
        iteration_count: u32,
        settling_time: f64,
    ) -> Self {
        // Inputs are already quantized: span <= 1 and step_size >= 0.001,
        // so num_steps fits comfortably in u32.
        debug_assert!(step_size > 0.0);
        let num_steps = (range.span() / step_size).round() as u32;
        let total_samples = u64::from(num_steps) * u64::from(iteration_count);
        let test_duration_secs = total_samples as f64 * settling_time;
        Self {
            num_steps,
            total_samples,
            test_duration_secs,
        }
    }
}
