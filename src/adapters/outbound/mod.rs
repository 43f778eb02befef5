/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod network;
pub mod parsers;
mod routing_loader;

pub use routing_loader::RoutingDocumentLoader;
