pub mod component_id;
pub mod dependency_graph;
pub mod graph_diff;
pub mod history_log;
pub mod sbom_document;
pub mod viewport;

pub use component_id::ComponentId;
pub use dependency_graph::DependencyGraph;
pub use graph_diff::{EdgeRef, GraphDiff};
pub use history_log::{HistoryEntry, HistoryLog, HistoryState};
pub use sbom_document::{
    DependencyEdge, DocumentSummary, MergeMode, SbomDocument, SbomDocumentBuilder,
};
pub use viewport::Viewport;
