use crate::application::dto::{DocumentRecord, MergeOutcome, NodeDetails};
use crate::graph_merge::domain::{
    ComponentId, DependencyGraph, GraphDiff, HistoryLog, HistoryState, MergeMode, SbomDocument,
    Viewport,
};
use crate::graph_merge::policies::AdmissionPolicy;
use crate::graph_merge::services::{GraphLayout, LayoutEngine, MergeEngine};
use crate::ports::inbound::GraphSessionPort;
use crate::shared::error::{DocumentLoadError, GraphMergeError};
use crate::shared::Result;
use indexmap::IndexSet;
use uuid::Uuid;

/// GraphSession - the single owner of graph, history and highlight state
///
/// The authoritative graph is always the history entry under the cursor, so
/// applying a document while viewing the past branches from that state and
/// discards the entries after it.
#[derive(Debug, Clone)]
pub struct GraphSession {
    id: Uuid,
    history: HistoryLog,
    highlights: IndexSet<ComponentId>,
    documents: Vec<DocumentRecord>,
    viewport: Viewport,
}

impl GraphSession {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            id: Uuid::new_v4(),
            history: HistoryLog::new(),
            highlights: IndexSet::new(),
            documents: Vec::new(),
            viewport,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The graph under the history cursor
    pub fn graph(&self) -> &DependencyGraph {
        self.history.current_entry().graph()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Highlighted nodes that exist in the displayed graph
    pub fn highlighted(&self) -> Vec<&ComponentId> {
        let graph = self.graph();
        self.highlights
            .iter()
            .filter(|id| graph.contains_node(id.as_str()))
            .collect()
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlights.contains(id) && self.graph().contains_node(id)
    }
}

impl Default for GraphSession {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl GraphSessionPort for GraphSession {
    fn apply_document(&mut self, document: SbomDocument) -> MergeOutcome {
        let current = self.history.current();

        if document.mode() == MergeMode::Regular {
            let admission = AdmissionPolicy::evaluate(current.graph, &document);
            if let Some(reason) = admission.reason() {
                tracing::info!(document = document.name(), "document rejected");
                self.documents
                    .push(DocumentRecord::rejected(document.summary(), reason));
                return MergeOutcome::Rejected(admission);
            }
        }

        let mut graph = current.graph.clone();
        let document_count = current.document_count + 1;
        if self.history.is_viewing_past() {
            tracing::info!(
                position = current.position,
                discarded = current.total_entries - current.position - 1,
                "merging from a past state, later history entries are discarded"
            );
        }

        let diff = MergeEngine::merge(&mut graph, &document);
        self.history.snapshot(&graph, document_count);
        self.documents
            .push(DocumentRecord::merged(document.summary(), document_count));

        MergeOutcome::Merged {
            diff,
            document_count,
        }
    }

    fn record_load_failure(&mut self, error: &DocumentLoadError) {
        tracing::info!(document = error.document(), kind = %error.kind(), "document failed to load");
        self.documents.push(DocumentRecord::load_failed(error));
    }

    fn step_backward(&mut self) -> bool {
        self.history.step_backward()
    }

    fn step_forward(&mut self) -> bool {
        self.history.step_forward()
    }

    fn history_state(&self) -> HistoryState<'_> {
        self.history.current()
    }

    fn layout(&self) -> GraphLayout {
        LayoutEngine::compute(self.graph(), &self.viewport)
    }

    fn current_diff(&self) -> GraphDiff {
        self.history.current_diff()
    }

    fn highlight(&mut self, id: &str) -> Result<bool> {
        if !self.graph().contains_node(id) {
            return Err(GraphMergeError::Validation {
                message: format!("cannot highlight '{}': node is not in the graph", id),
            }
            .into());
        }
        Ok(self.highlights.insert(ComponentId::new(id)?))
    }

    fn unhighlight(&mut self, id: &str) -> bool {
        self.highlights.shift_remove(id)
    }

    fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    fn node_details(&self, id: &str) -> Option<NodeDetails> {
        let graph = self.graph();
        let node = graph.nodes().into_iter().find(|node| node.as_str() == id)?;
        let dependencies = graph.dependencies_of(id).unwrap_or_default().to_vec();
        let dependents: Vec<ComponentId> = graph.dependents_of(id).into_iter().cloned().collect();

        Some(NodeDetails {
            id: node.clone(),
            is_root: dependents.is_empty(),
            is_leaf: dependencies.is_empty(),
            dependencies,
            dependents,
            highlighted: self.is_highlighted(id),
        })
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}
