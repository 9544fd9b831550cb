//! Summary figures for the I-V / P-V display.
//!
//! Data shape only; chart rendering lives entirely in the UI.

use pvcap_traits::MeasurementSample;

/// Headline numbers of a captured curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSummary {
    /// Open-circuit voltage: highest voltage seen.
    pub v_oc: f64,
    /// Short-circuit current: highest current seen.
    pub i_sc: f64,
    /// Voltage at the maximum power point.
    pub v_mpp: f64,
    /// Current at the maximum power point.
    pub i_mpp: f64,
    /// Power at the maximum power point.
    pub p_mpp: f64,
    /// `p_mpp / (v_oc * i_sc)`; 0 when the denominator degenerates.
    pub fill_factor: f64,
}

/// Derive the summary from a sample buffer; `None` when it is empty.
pub fn summarize(samples: &[MeasurementSample]) -> Option<CurveSummary> {
    let first = samples.first()?;
    let mut v_oc = first.voltage_v;
    let mut i_sc = first.current_a;
    let mut mpp = (first.voltage_v, first.current_a);
    for s in &samples[1..] {
        v_oc = v_oc.max(s.voltage_v);
        i_sc = i_sc.max(s.current_a);
        if s.voltage_v * s.current_a > mpp.0 * mpp.1 {
            mpp = (s.voltage_v, s.current_a);
        }
    }
    let p_mpp = mpp.0 * mpp.1;
    let denom = v_oc * i_sc;
    let fill_factor = if denom > 0.0 && denom.is_finite() {
        p_mpp / denom
    } else {
        0.0
    };
    Some(CurveSummary {
        v_oc,
        i_sc,
        v_mpp: mpp.0,
        i_mpp: mpp.1,
        p_mpp,
        fill_factor,
    })
}
