//! Endpoint discovery via the external port directory.

use pvcap_traits::PortDirectory;

/// Query the directory for reachable endpoints.
///
/// A lookup failure is logged and yields an empty list; the configuration
/// view still comes up with nothing to select.
pub fn available_ports<D: PortDirectory>(directory: &mut D) -> Vec<String> {
    match directory.list_ports() {
        Ok(ports) => {
            tracing::debug!(count = ports.len(), "port lookup ok");
            ports
        }
        Err(e) => {
            tracing::error!(error = %e, "port lookup failed");
            Vec::new()
        }
    }
}
