use crate::graph_merge::domain::{ComponentId, GraphDiff};
use crate::graph_merge::policies::Admission;

/// Result of handing one document to the session
#[derive(Debug, Clone, PartialEq)]
pub enum MergeOutcome {
    /// Merged and snapshotted; `diff` is what the merge changed
    Merged { diff: GraphDiff, document_count: usize },
    /// Refused by the admission policy; nothing changed
    Rejected(Admission),
}

impl MergeOutcome {
    pub fn is_merged(&self) -> bool {
        matches!(self, MergeOutcome::Merged { .. })
    }

    pub fn rejection_reason(&self) -> Option<String> {
        match self {
            MergeOutcome::Merged { .. } => None,
            MergeOutcome::Rejected(admission) => admission.reason(),
        }
    }
}

/// Neighbourhood of one node, for detail popups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDetails {
    pub id: ComponentId,
    pub dependencies: Vec<ComponentId>,
    pub dependents: Vec<ComponentId>,
    pub is_root: bool,
    pub is_leaf: bool,
    pub highlighted: bool,
}
