//! Sampling-range expression parsing and bounds checks.
//!
//! The UI hands over the raw text of the range field; the parsed pair only
//! replaces the stored one on success, so a bad edit never leaves the
//! configuration half-updated.

use crate::error::RangeError;
use std::fmt;

/// Fraction-of-sweep bounds, both in [0, 1] with `lower <= upper`.
///
/// Construction always goes through validation; the pair is immutable
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingRange {
    lower: f64,
    upper: f64,
}

impl SamplingRange {
    pub fn new(lower: f64, upper: f64) -> Result<Self, RangeError> {
        for bound in [lower, upper] {
            if !bound.is_finite() || !(0.0..=1.0).contains(&bound) {
                return Err(RangeError::OutOfBounds(bound));
            }
        }
        if lower > upper {
            return Err(RangeError::Inverted { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Parse a `"lower:upper"` expression.
    ///
    /// Whitespace and the `[`/`]` brackets some frontends wrap the pair in
    /// are tolerated; anything else must be exactly two finite numbers on a
    /// single `:` separator.
    pub fn parse(expr: &str) -> Result<Self, RangeError> {
        let body = expr.trim().trim_start_matches('[').trim_end_matches(']');
        let mut parts = body.split(':');
        let (Some(lo), Some(hi), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(RangeError::Malformed(expr.to_string()));
        };
        let lower = parse_finite(lo).ok_or_else(|| RangeError::Malformed(expr.to_string()))?;
        let upper = parse_finite(hi).ok_or_else(|| RangeError::Malformed(expr.to_string()))?;
        Self::new(lower, upper)
    }

    /// Constructor for compile-time-known defaults; bypasses the bounds
    /// checks, which the defaults table guarantees by inspection.
    pub(crate) const fn from_bounds_unchecked(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Width of the sweep, `upper - lower`.
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }
}

impl fmt::Display for SamplingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.lower, self.upper)
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
