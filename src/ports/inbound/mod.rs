/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI or a
/// renderer) use to drive the application core.
pub mod graph_session_port;

pub use graph_session_port::GraphSessionPort;
