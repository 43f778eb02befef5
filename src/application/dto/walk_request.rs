use crate::graph_merge::domain::{MergeMode, Viewport};
use crate::ports::outbound::DocumentSource;
use crate::shared::error::GraphMergeError;
use crate::shared::Result;

/// One document to walk through, with the mode it is merged in
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRequest {
    pub source: DocumentSource,
    pub mode: MergeMode,
}

impl DocumentRequest {
    pub fn new(source: DocumentSource, mode: MergeMode) -> Self {
        Self { source, mode }
    }

    pub fn regular(source: DocumentSource) -> Self {
        Self::new(source, MergeMode::Regular)
    }

    pub fn force(source: DocumentSource) -> Self {
        Self::new(source, MergeMode::Force)
    }
}

/// WalkRequest - Request DTO for the walk-documents use case
#[derive(Debug, Clone)]
pub struct WalkRequest {
    /// Documents in merge order
    pub documents: Vec<DocumentRequest>,
    /// Drawing area for the final layout
    pub viewport: Viewport,
    /// History entries to step back after the last merge
    pub steps_back: usize,
    /// Node ids to highlight in the displayed state
    pub highlights: Vec<String>,
}

impl WalkRequest {
    pub fn builder() -> WalkRequestBuilder {
        WalkRequestBuilder::default()
    }
}

/// Builder for WalkRequest
#[derive(Debug, Default)]
pub struct WalkRequestBuilder {
    documents: Vec<DocumentRequest>,
    viewport: Option<Viewport>,
    steps_back: usize,
    highlights: Vec<String>,
}

impl WalkRequestBuilder {
    pub fn document(mut self, document: DocumentRequest) -> Self {
        self.documents.push(document);
        self
    }

    pub fn documents(mut self, documents: impl IntoIterator<Item = DocumentRequest>) -> Self {
        self.documents.extend(documents);
        self
    }

    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn steps_back(mut self, steps: usize) -> Self {
        self.steps_back = steps;
        self
    }

    pub fn highlight(mut self, id: impl Into<String>) -> Self {
        self.highlights.push(id.into());
        self
    }

    pub fn highlights(mut self, ids: impl IntoIterator<Item = String>) -> Self {
        self.highlights.extend(ids);
        self
    }

    pub fn build(self) -> Result<WalkRequest> {
        if self.documents.is_empty() {
            return Err(GraphMergeError::Validation {
                message: "at least one document is required".to_string(),
            }
            .into());
        }

        Ok(WalkRequest {
            documents: self.documents,
            viewport: self.viewport.unwrap_or_default(),
            steps_back: self.steps_back,
            highlights: self.highlights,
        })
    }
}
