//! Configuration engine: reacts to device selection and field edits.
//!
//! A state machine over one `SweepConfig`. Events are processed strictly in
//! the order the UI emits them; every accepted mutation re-derives the
//! statistics before the next event is looked at.

use crate::config::SweepConfig;
use crate::device::DeviceType;
use crate::notify::Notifier;
use crate::quantize;
use crate::range::SamplingRange;

/// Numeric fields a user can edit directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepField {
    StepSize,
    SettlingTime,
    IterationCount,
}

impl SweepField {
    pub const fn name(self) -> &'static str {
        match self {
            Self::StepSize => "step size",
            Self::SettlingTime => "settling time",
            Self::IterationCount => "iteration count",
        }
    }
}

/// Typed input to the engine, one per UI interaction.
#[derive(Debug, Clone)]
pub enum ConfigEvent {
    DeviceChanged(DeviceType),
    RangeEdited(String),
    FieldEdited(SweepField, f64),
}

/// Live for the lifetime of the configuration view; accepts edits
/// indefinitely, there is no terminal state.
pub struct ConfigEngine {
    config: SweepConfig,
    notify: Notifier,
    quiet: bool,
}

impl ConfigEngine {
    /// Start with the Array defaults applied.
    pub fn new(notify: Notifier) -> Self {
        Self {
            config: SweepConfig::default(),
            notify,
            quiet: false,
        }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Suppress diagnostic notifications for normalized field edits.
    /// Warnings and device-change notices are always emitted.
    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    pub fn handle(&mut self, event: ConfigEvent) {
        match event {
            ConfigEvent::DeviceChanged(device) => self.select_device(device),
            ConfigEvent::RangeEdited(expr) => self.edit_range(&expr),
            ConfigEvent::FieldEdited(field, raw) => self.edit_field(field, raw),
        }
    }

    /// Apply the device's defaults; fields the device type does not override
    /// keep their previous values.
    pub fn select_device(&mut self, device: DeviceType) {
        let defaults = device.defaults();
        self.config.device_type = device;
        self.config.range_text = defaults.range.to_string();
        if let Some(n) = defaults.iteration_count {
            self.config.iteration_count = n;
        }
        if let Some(s) = defaults.step_size {
            self.config.step_size = s;
        }
        if let Some(t) = defaults.settling_time {
            self.config.settling_time = t;
        }
        // The default range goes through the same validator as a user edit;
        // the table entries are valid by construction, so a failure here
        // keeps the previous pair just like any rejected edit.
        match SamplingRange::parse(&self.config.range_text) {
            Ok(range) => self.config.range = range,
            Err(e) => {
                self.config.range_text = self.config.range.to_string();
                self.notify.push(format!("Default range rejected: {e}"));
            }
        }
        self.config.recompute_stats();
        self.notify
            .push(format!("Device type set to {}", device.name()));
    }

    /// Validate a raw range expression; on failure the previous valid pair
    /// is retained and only a warning is emitted.
    pub fn edit_range(&mut self, expr: &str) {
        match SamplingRange::parse(expr) {
            Ok(range) => {
                self.config.range = range;
                self.config.range_text = range.to_string();
                self.config.recompute_stats();
            }
            Err(e) => {
                tracing::warn!(expr, error = %e, "range edit rejected");
                self.notify
                    .push(format!("Ignoring sample range {expr:?}: {e}"));
            }
        }
    }

    /// Normalize and store a numeric field edit.
    ///
    /// Zero, NaN, and infinities are not edits, and neither is a raw value
    /// equal to what is already stored; both cases are silent no-ops with no
    /// recompute.
    #[allow(clippy::float_cmp)]
    pub fn edit_field(&mut self, field: SweepField, raw: f64) {
        if !raw.is_finite() || raw == 0.0 {
            return;
        }
        let (old, new) = match field {
            SweepField::StepSize => {
                if raw == self.config.step_size {
                    return;
                }
                let old = self.config.step_size;
                self.config.step_size = quantize::step_size(raw);
                (old, self.config.step_size)
            }
            SweepField::SettlingTime => {
                if raw == self.config.settling_time {
                    return;
                }
                let old = self.config.settling_time;
                self.config.settling_time = quantize::settling_time(raw);
                (old, self.config.settling_time)
            }
            SweepField::IterationCount => {
                if raw == f64::from(self.config.iteration_count) {
                    return;
                }
                let old = f64::from(self.config.iteration_count);
                self.config.iteration_count = quantize::iteration_count(raw);
                (old, f64::from(self.config.iteration_count))
            }
        };
        self.config.recompute_stats();
        if !self.quiet {
            self.notify
                .push(format!("{} adjusted from {old} to {new}", field.name()));
        }
    }
}
