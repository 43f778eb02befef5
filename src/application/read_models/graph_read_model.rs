//! Query-side view of a merge session
//!
//! Everything a renderer needs to draw the displayed state, denormalized
//! and serializable. Field names are camelCase in serialized output.

use crate::application::dto::DocumentRecord;
use crate::graph_merge::domain::{DependencyGraph, EdgeRef, GraphDiff};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphReadModel {
    pub metadata: ReportMetadataView,
    pub viewport: ViewportView,
    pub history: HistoryView,
    /// Raw `id -> [dependency ids]` mapping of the displayed state
    pub graph: DependencyGraph,
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeRef>,
    pub documents: Vec<DocumentRecord>,
    pub changes: GraphDiff,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadataView {
    pub generated_at: String,
    pub session_id: String,
    pub tool_name: String,
    pub tool_version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportView {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryView {
    pub position: usize,
    pub total_entries: usize,
    pub document_count: usize,
    pub is_at_tip: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeView {
    pub id: String,
    pub level: usize,
    pub x: f64,
    pub y: f64,
    pub is_root: bool,
    pub is_leaf: bool,
    pub highlighted: bool,
    pub dependency_count: usize,
    pub dependent_count: usize,
}

impl GraphReadModel {
    pub fn node(&self, id: &str) -> Option<&NodeView> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn root_ids(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|node| node.is_root)
            .map(|node| node.id.as_str())
            .collect()
    }

    pub fn leaf_ids(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|node| node.is_leaf)
            .map(|node| node.id.as_str())
            .collect()
    }
}
