//! Streaming measurement session over a caller-supplied transport.
//!
//! One logical connection per session, owned exclusively. Inbound traffic is
//! delivered as `StreamEvent`s by whatever drives the I/O, so the session
//! itself never blocks; samples are buffered strictly in arrival order.

use crate::error::{Report, Result, SessionError};
use pvcap_traits::{MeasurementSample, Transport};

/// Control token sent to the remote endpoint once the connection opens.
pub const START_TOKEN: &str = "Start";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Connecting,
    Open,
    Closed,
    Errored,
}

/// Inbound event from the transport driver.
#[derive(Debug, Clone)]
pub enum StreamEvent {
    Sample(MeasurementSample),
    RemoteClosed,
    Error(String),
}

pub struct StreamSession<T: Transport> {
    transport: T,
    endpoint: Option<String>,
    state: SessionState,
    samples: Vec<MeasurementSample>,
}

impl<T: Transport> StreamSession<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            endpoint: None,
            state: SessionState::Idle,
            samples: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Read-only view of the buffered samples, in arrival order.
    pub fn samples(&self) -> &[MeasurementSample] {
        &self.samples
    }

    /// Open the transport and send the start-of-test token once.
    ///
    /// Idempotent while `Connecting` or `Open`: the second caller observes
    /// the in-flight state and no new connection is made. A connect from a
    /// terminal state begins a fresh logical session with an empty buffer.
    /// No automatic retry and no built-in timeout; that is the caller's
    /// policy.
    pub fn connect(&mut self, endpoint: &str) -> Result<()> {
        if matches!(self.state, SessionState::Connecting | SessionState::Open) {
            tracing::debug!(endpoint, state = ?self.state, "connect ignored; session already active");
            return Ok(());
        }
        self.state = SessionState::Connecting;
        self.samples.clear();
        if let Err(e) = self.transport.open(endpoint) {
            self.state = SessionState::Errored;
            tracing::error!(endpoint, error = %e, "transport open failed");
            return Err(Report::new(SessionError::Transport(e.to_string())));
        }
        if let Err(e) = self.transport.send(START_TOKEN) {
            self.state = SessionState::Errored;
            tracing::error!(endpoint, error = %e, "start token send failed");
            return Err(Report::new(SessionError::Transport(e.to_string())));
        }
        self.endpoint = Some(endpoint.to_string());
        self.state = SessionState::Open;
        tracing::debug!(endpoint, "session open");
        Ok(())
    }

    /// Feed one inbound event. Samples are only accepted while `Open`; the
    /// buffer is never touched in any other state.
    pub fn handle_event(&mut self, event: StreamEvent) {
        match event {
            StreamEvent::Sample(sample) => {
                if self.state == SessionState::Open {
                    self.samples.push(sample);
                } else {
                    tracing::warn!(state = ?self.state, "sample dropped; session not open");
                }
            }
            StreamEvent::RemoteClosed => match self.state {
                SessionState::Connecting | SessionState::Open => {
                    self.state = SessionState::Closed;
                    tracing::debug!("remote closed the stream");
                }
                _ => tracing::debug!(state = ?self.state, "remote close ignored"),
            },
            StreamEvent::Error(message) => match self.state {
                SessionState::Connecting | SessionState::Open => {
                    self.state = SessionState::Errored;
                    tracing::error!(%message, "stream errored");
                }
                _ => tracing::debug!(state = ?self.state, %message, "stream error ignored"),
            },
        }
    }

    /// Caller-initiated termination: release the connection and move to
    /// `Closed` from any state but `Idle`, where it is a no-op. Buffered
    /// samples stay readable.
    pub fn close(&mut self) {
        if self.state == SessionState::Idle {
            return;
        }
        if let Err(e) = self.transport.close() {
            tracing::warn!(error = %e, "transport close failed");
        }
        self.state = SessionState::Closed;
        tracing::debug!("session closed");
    }
}
