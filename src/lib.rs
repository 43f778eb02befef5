//! sbom-merge-graph - incremental SBOM dependency-graph merging
//!
//! This library walks a sequence of CycloneDX documents, merging each into a
//! single dependency graph under a regular (append) or force (replace)
//! policy, keeps a navigable history of graph snapshots, and lays the graph
//! out level by level for rendering.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_merge`): graph, documents, history, admission
//!   policy, merge and layout services
//! - **Application Layer** (`application`): the session, the walk use case,
//!   DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use sbom_merge_graph::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut session = GraphSession::new(Viewport::new(300.0, 300.0, 0.0)?);
//!
//! let stage_one = SbomDocument::builder("stage-1", "A")
//!     .edge("A", ["B"])
//!     .edge("B", ["C"])
//!     .build()?;
//! assert!(session.apply_document(stage_one).is_merged());
//!
//! let layout = session.layout();
//! assert_eq!(layout.level_of("C"), Some(2));
//! assert_eq!(layout.position_of("B").map(|p| p.x), Some(150.0));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod graph_merge;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemDocumentLoader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonGraphFormatter, MarkdownGraphFormatter};
    pub use crate::adapters::outbound::network::HttpDocumentLoader;
    pub use crate::adapters::outbound::parsers::CycloneDxParser;
    pub use crate::adapters::outbound::RoutingDocumentLoader;
    pub use crate::application::dto::{
        DocumentRecord, DocumentRequest, DocumentStatus, MergeOutcome, NodeDetails, OutputFormat,
        WalkRequest, WalkResponse,
    };
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::read_models::{GraphReadModel, GraphReadModelBuilder, NodeView};
    pub use crate::application::use_cases::{GraphSession, WalkDocumentsUseCase};
    pub use crate::graph_merge::domain::{
        ComponentId, DependencyEdge, DependencyGraph, DocumentSummary, EdgeRef, GraphDiff,
        HistoryLog, HistoryState, MergeMode, SbomDocument, Viewport,
    };
    pub use crate::graph_merge::policies::{Admission, AdmissionConflict, AdmissionPolicy};
    pub use crate::graph_merge::services::{GraphLayout, LayoutEngine, MergeEngine, NodePosition};
    pub use crate::ports::inbound::GraphSessionPort;
    pub use crate::ports::outbound::{
        DocumentLoader, DocumentSource, GraphFormatter, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::{DocumentLoadError, LoadFailureKind};
    pub use crate::shared::Result;
}
