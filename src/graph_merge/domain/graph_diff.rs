use super::{ComponentId, DependencyGraph};
use serde::Serialize;
use std::collections::HashSet;

/// A directed `(from, to)` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EdgeRef {
    pub from: ComponentId,
    pub to: ComponentId,
}

impl EdgeRef {
    pub fn new(from: ComponentId, to: ComponentId) -> Self {
        Self { from, to }
    }
}

/// Nodes and edges that appeared or disappeared between two graph states
///
/// Renderers use it to animate what is new in a step; order follows the
/// stable iteration order of the graph that contains the item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDiff {
    added_nodes: Vec<ComponentId>,
    removed_nodes: Vec<ComponentId>,
    added_edges: Vec<EdgeRef>,
    removed_edges: Vec<EdgeRef>,
}

impl GraphDiff {
    pub fn between(before: &DependencyGraph, after: &DependencyGraph) -> Self {
        let before_nodes: HashSet<&ComponentId> = before.nodes().into_iter().collect();
        let after_nodes: HashSet<&ComponentId> = after.nodes().into_iter().collect();
        let before_edges: HashSet<(&ComponentId, &ComponentId)> = before.edges().collect();
        let after_edges: HashSet<(&ComponentId, &ComponentId)> = after.edges().collect();

        Self {
            added_nodes: after
                .nodes()
                .into_iter()
                .filter(|id| !before_nodes.contains(id))
                .cloned()
                .collect(),
            removed_nodes: before
                .nodes()
                .into_iter()
                .filter(|id| !after_nodes.contains(id))
                .cloned()
                .collect(),
            added_edges: after
                .edges()
                .filter(|edge| !before_edges.contains(edge))
                .map(|(from, to)| EdgeRef::new(from.clone(), to.clone()))
                .collect(),
            removed_edges: before
                .edges()
                .filter(|edge| !after_edges.contains(edge))
                .map(|(from, to)| EdgeRef::new(from.clone(), to.clone()))
                .collect(),
        }
    }

    pub fn added_nodes(&self) -> &[ComponentId] {
        &self.added_nodes
    }

    pub fn removed_nodes(&self) -> &[ComponentId] {
        &self.removed_nodes
    }

    pub fn added_edges(&self) -> &[EdgeRef] {
        &self.added_edges
    }

    pub fn removed_edges(&self) -> &[EdgeRef] {
        &self.removed_edges
    }

    pub fn is_empty(&self) -> bool {
        self.added_nodes.is_empty()
            && self.removed_nodes.is_empty()
            && self.added_edges.is_empty()
            && self.removed_edges.is_empty()
    }
}
