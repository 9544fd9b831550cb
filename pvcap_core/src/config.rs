//! Runtime sweep-test configuration aggregate.
//!
//! Fields are only mutated by the configuration engine, which re-derives the
//! statistics after every accepted change; readers can never observe a
//! half-updated state.

use crate::device::DeviceType;
use crate::range::SamplingRange;
use crate::stats::SweepStats;

/// Everything the sweep test needs: device type, validated range (plus its
/// text form), quantized parameters, and derived statistics. No persistence.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub(crate) device_type: DeviceType,
    pub(crate) range: SamplingRange,
    pub(crate) range_text: String,
    pub(crate) iteration_count: u32,
    pub(crate) step_size: f64,
    pub(crate) settling_time: f64,
    pub(crate) stats: SweepStats,
}

impl SweepConfig {
    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }

    pub fn range(&self) -> SamplingRange {
        self.range
    }

    /// The `"lower:upper"` rendering of the current range.
    pub fn range_text(&self) -> &str {
        &self.range_text
    }

    pub fn iteration_count(&self) -> u32 {
        self.iteration_count
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Per-step settling time in seconds.
    pub fn settling_time(&self) -> f64 {
        self.settling_time
    }

    pub fn stats(&self) -> SweepStats {
        self.stats
    }

    pub(crate) fn recompute_stats(&mut self) {
        self.stats = SweepStats::derive(
            self.range,
            self.step_size,
            self.iteration_count,
            self.settling_time,
        );
    }
}

impl Default for SweepConfig {
    /// The Array entry of the defaults table, fully derived.
    fn default() -> Self {
        let defaults = DeviceType::Array.defaults();
        let mut config = Self {
            device_type: DeviceType::Array,
            range: defaults.range,
            range_text: defaults.range.to_string(),
            iteration_count: defaults.iteration_count.unwrap_or(1),
            step_size: defaults.step_size.unwrap_or(crate::quantize::STEP_SIZE_MIN),
            settling_time: defaults
                .settling_time
                .unwrap_or(crate::quantize::SETTLING_TIME_MIN),
            stats: SweepStats::default(),
        };
        config.recompute_stats();
        config
    }
}
