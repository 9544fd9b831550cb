//! PV device types under test and their default sweep parameters.
//!
//! A fixed enum-to-struct mapping: one entry per device type, no lookup by
//! display label.

use crate::range::SamplingRange;

/// Category of PV unit under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceType {
    #[default]
    Array,
    Module,
    Cell,
}

/// Partial configuration applied when a device type is selected.
///
/// `None` fields leave the previously held value in place.
#[derive(Debug, Clone, Copy)]
pub struct DeviceDefaults {
    pub range: SamplingRange,
    pub iteration_count: Option<u32>,
    pub step_size: Option<f64>,
    pub settling_time: Option<f64>,
}

impl DeviceType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Array => "Array",
            Self::Module => "Module",
            Self::Cell => "Cell",
        }
    }

    pub const fn defaults(self) -> DeviceDefaults {
        match self {
            Self::Array => DeviceDefaults {
                range: SamplingRange::from_bounds_unchecked(0.1, 0.9),
                iteration_count: Some(25),
                step_size: Some(0.001),
                settling_time: Some(2.0),
            },
            Self::Module => DeviceDefaults {
                range: SamplingRange::from_bounds_unchecked(0.2, 0.7),
                iteration_count: None,
                step_size: None,
                settling_time: None,
            },
            Self::Cell => DeviceDefaults {
                range: SamplingRange::from_bounds_unchecked(0.3, 0.45),
                iteration_count: None,
                step_size: None,
                settling_time: None,
            },
        }
    }
}
