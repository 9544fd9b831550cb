//! Test and helper mocks for pvcap_core

use pvcap_traits::Transport;

/// A transport that rejects every operation; useful for exercising the
/// session's error paths without any live link.
pub struct NoopTransport;

impl Transport for NoopTransport {
    fn open(&mut self, _endpoint: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("noop transport")))
    }

    fn send(&mut self, _token: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("noop transport")))
    }

    fn close(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }
}
