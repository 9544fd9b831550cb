#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Simulated link implementations for demos and integration tests.
//!
//! Nothing here touches real hardware; the scripted transport records what
//! the session does to it, and the sample generator emits a plausible sweep.

use pvcap_traits::{MeasurementSample, PortDirectory, Transport};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything a `SimLink` has been asked to do, for assertions.
#[derive(Debug, Default)]
pub struct LinkLog {
    pub opens: Vec<String>,
    pub sent: Vec<String>,
    pub closes: u32,
}

/// Scripted in-memory transport.
pub struct SimLink {
    log: Rc<RefCell<LinkLog>>,
    fail_open: bool,
    fail_send: bool,
}

impl SimLink {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(LinkLog::default())),
            fail_open: false,
            fail_send: false,
        }
    }

    /// A link whose next `open` fails.
    pub fn failing_open() -> Self {
        Self {
            fail_open: true,
            ..Self::new()
        }
    }

    /// A link that opens fine but rejects every `send`.
    pub fn failing_send() -> Self {
        Self {
            fail_send: true,
            ..Self::new()
        }
    }

    /// Shared handle to the operation log; stays valid after the link is
    /// moved into a session.
    pub fn log(&self) -> Rc<RefCell<LinkLog>> {
        Rc::clone(&self.log)
    }
}

impl Default for SimLink {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for SimLink {
    fn open(&mut self, endpoint: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.fail_open {
            return Err(Box::new(std::io::Error::other("simulated open failure")));
        }
        tracing::debug!(endpoint, "sim link open");
        self.log.borrow_mut().opens.push(endpoint.to_string());
        Ok(())
    }

    fn send(&mut self, token: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.fail_send {
            return Err(Box::new(std::io::Error::other("simulated send failure")));
        }
        tracing::debug!(token, "sim link send");
        self.log.borrow_mut().sent.push(token.to_string());
        Ok(())
    }

    fn close(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::debug!("sim link close");
        self.log.borrow_mut().closes += 1;
        Ok(())
    }
}

/// Canned port directory; set `fail` to simulate a lookup outage.
#[derive(Debug, Default)]
pub struct SimPortDirectory {
    pub ports: Vec<String>,
    pub fail: bool,
}

impl SimPortDirectory {
    pub fn with_ports<I, S>(ports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ports: ports.into_iter().map(Into::into).collect(),
            fail: false,
        }
    }
}

impl PortDirectory for SimPortDirectory {
    fn list_ports(&mut self) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        if self.fail {
            return Err(Box::new(std::io::Error::other("simulated directory outage")));
        }
        Ok(self.ports.clone())
    }
}

/// Generate one sweep's worth of samples across `[lower, upper]` at
/// `step_size` volts per step, `settle_ms` apart, with a simple convex I-V
/// shape (current collapses quadratically toward the upper bound).
pub fn sweep_samples(lower: f64, upper: f64, step_size: f64, settle_ms: u64) -> Vec<MeasurementSample> {
    const I_SC: f64 = 3.0;
    let steps = ((upper - lower) / step_size).round() as u64;
    let mut samples = Vec::with_capacity(steps as usize);
    for n in 0..steps {
        let voltage_v = lower + n as f64 * step_size;
        let frac = if upper > lower {
            (voltage_v - lower) / (upper - lower)
        } else {
            0.0
        };
        samples.push(MeasurementSample {
            voltage_v,
            current_a: I_SC * (1.0 - frac * frac),
            timestamp_ms: n * settle_ms,
        });
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn sim_link_records_operations() {
        let mut link = SimLink::new();
        let log = link.log();
        link.open("COM3").unwrap();
        link.send("Start").unwrap();
        link.close().unwrap();
        let log = log.borrow();
        assert_eq!(log.opens, ["COM3"]);
        assert_eq!(log.sent, ["Start"]);
        assert_eq!(log.closes, 1);
    }

    #[test]
    fn failing_variants_reject_their_operation() {
        assert!(SimLink::failing_open().open("COM3").is_err());
        let mut link = SimLink::failing_send();
        link.open("COM3").unwrap();
        assert!(link.send("Start").is_err());
    }

    #[rstest]
    #[case(0.1, 0.9, 0.001, 800)]
    #[case(0.2, 0.7, 0.001, 500)]
    #[case(0.5, 0.5, 0.001, 0)]
    fn sweep_sample_count_matches_step_count(
        #[case] lower: f64,
        #[case] upper: f64,
        #[case] step: f64,
        #[case] want: usize,
    ) {
        assert_eq!(sweep_samples(lower, upper, step, 2_000).len(), want);
    }

    #[test]
    fn sweep_timestamps_are_monotonic_and_current_decays() {
        let samples = sweep_samples(0.1, 0.9, 0.01, 100);
        for pair in samples.windows(2) {
            assert!(pair[1].timestamp_ms > pair[0].timestamp_ms);
            assert!(pair[1].current_a <= pair[0].current_a);
        }
    }
}
