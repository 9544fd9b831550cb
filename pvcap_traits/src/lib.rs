/// One measurement record received from the curve tracer during a sweep.
///
/// The payload is opaque to the core; arrival order is what matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementSample {
    pub voltage_v: f64,
    pub current_a: f64,
    pub timestamp_ms: u64,
}

/// Outbound half of the bidirectional message channel to the measurement
/// endpoint. Inbound traffic is delivered to the session as events by
/// whatever drives the I/O.
pub trait Transport {
    fn open(&mut self, endpoint: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn send(&mut self, token: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn close(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Directory of reachable measurement endpoints.
pub trait PortDirectory {
    fn list_ports(&mut self) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;
}
