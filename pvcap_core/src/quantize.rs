//! Discrete-grid quantization for user-entered sweep parameters.
//!
//! Pure, total functions: snap to the grid, then clamp. Zero and NaN never
//! reach these; the engine's no-op guard filters them first, and non-finite
//! input still maps to the lower clamp bound rather than panicking.

/// Grid and bounds for the per-step voltage increment.
pub const STEP_SIZE_GRID: f64 = 0.001;
pub const STEP_SIZE_MIN: f64 = 0.001;
pub const STEP_SIZE_MAX: f64 = 0.1;

/// Grid and bounds for the per-step settling time in seconds.
pub const SETTLING_TIME_GRID: f64 = 0.1;
pub const SETTLING_TIME_MIN: f64 = 0.1;
pub const SETTLING_TIME_MAX: f64 = 10.0;

/// Snap to the nearest multiple of 0.001, clamped to [0.001, 0.1].
#[inline]
pub fn step_size(raw: f64) -> f64 {
    snap(raw, STEP_SIZE_GRID).clamp(STEP_SIZE_MIN, STEP_SIZE_MAX)
}

/// Snap to the nearest multiple of 0.1, clamped to [0.1, 10].
#[inline]
pub fn settling_time(raw: f64) -> f64 {
    snap(raw, SETTLING_TIME_GRID).clamp(SETTLING_TIME_MIN, SETTLING_TIME_MAX)
}

/// Floor to an integer, clamped to at least 1.
#[inline]
pub fn iteration_count(raw: f64) -> u32 {
    if !raw.is_finite() {
        return 1;
    }
    raw.floor().clamp(1.0, f64::from(u32::MAX)) as u32
}

#[inline]
fn snap(raw: f64, grid: f64) -> f64 {
    if !raw.is_finite() {
        return 0.0;
    }
    (raw / grid).round() * grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn step_size_snaps_and_clamps() {
        assert!(close(step_size(0.0523), 0.052));
        assert!(close(step_size(0.0004), 0.001)); // below grid, clamped up
        assert!(close(step_size(0.5), 0.1));
        assert!(close(step_size(-3.0), 0.001));
    }

    #[test]
    fn settling_time_snaps_and_clamps() {
        assert!(close(settling_time(2.34), 2.3));
        assert!(close(settling_time(0.01), 0.1));
        assert!(close(settling_time(99.0), 10.0));
    }

    #[test]
    fn iteration_count_floors_and_clamps() {
        assert_eq!(iteration_count(10.9), 10);
        assert_eq!(iteration_count(0.2), 1);
        assert_eq!(iteration_count(-5.0), 1);
        assert_eq!(iteration_count(f64::NAN), 1);
        assert_eq!(iteration_count(f64::INFINITY), 1);
        assert_eq!(iteration_count(1e20), u32::MAX);
    }

    #[test]
    fn non_finite_maps_to_lower_bound() {
        assert!(close(step_size(f64::NAN), STEP_SIZE_MIN));
        assert!(close(settling_time(f64::NEG_INFINITY), SETTLING_TIME_MIN));
    }
}
