use super::ComponentId;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::collections::HashSet;

/// DependencyGraph aggregate: node identifier -> ordered direct dependencies
///
/// Keys keep the order in which sources were first merged. A node becomes a
/// key only by being the `fromId` of a merged edge; pure leaves exist only
/// inside dependency lists. Mutation is reserved to the merge engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    adjacency: IndexMap<ComponentId, Vec<ComponentId>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of keys (nodes that were the source of a merged edge)
    pub fn source_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn contains_source(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn dependencies_of(&self, id: &str) -> Option<&[ComponentId]> {
        self.adjacency.get(id).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ComponentId, &[ComponentId])> {
        self.adjacency.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// All `(from, to)` pairs, in key order then dependency order
    pub fn edges(&self) -> impl Iterator<Item = (&ComponentId, &ComponentId)> {
        self.adjacency
            .iter()
            .flat_map(|(from, deps)| deps.iter().map(move |to| (from, to)))
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// The node universe: every key and every dependency value
    ///
    /// Order is stable: each key in insertion order, immediately followed by
    /// those of its dependencies not seen before.
    pub fn nodes(&self) -> Vec<&ComponentId> {
        let mut seen: IndexSet<&ComponentId> = IndexSet::new();
        for (from, deps) in &self.adjacency {
            seen.insert(from);
            seen.extend(deps.iter());
        }
        seen.into_iter().collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.contains_source(id) || self.adjacency.values().flatten().any(|d| d.as_str() == id)
    }

    /// Nodes that never appear as anyone's dependency
    pub fn roots(&self) -> Vec<&ComponentId> {
        let targets = self.dependency_targets();
        self.nodes()
            .into_iter()
            .filter(|id| !targets.contains(id.as_str()))
            .collect()
    }

    /// Nodes with no recorded outgoing dependencies
    pub fn leaves(&self) -> Vec<&ComponentId> {
        self.nodes()
            .into_iter()
            .filter(|id| self.adjacency.get(id.as_str()).map_or(true, Vec::is_empty))
            .collect()
    }

    /// Direct dependents of `id`, in key order
    pub fn dependents_of(&self, id: &str) -> Vec<&ComponentId> {
        self.adjacency
            .iter()
            .filter(|(_, deps)| deps.iter().any(|d| d.as_str() == id))
            .map(|(from, _)| from)
            .collect()
    }

    fn dependency_targets(&self) -> HashSet<&str> {
        self.adjacency
            .values()
            .flatten()
            .map(ComponentId::as_str)
            .collect()
    }

    /// Appends ids not already present, creating the key if needed
    pub(crate) fn append_dependencies(&mut self, from: &ComponentId, to: &[ComponentId]) {
        let deps = self.adjacency.entry(from.clone()).or_default();
        for id in to {
            if !deps.contains(id) {
                deps.push(id.clone());
            }
        }
    }

    /// Replaces the whole dependency list of `from`, creating the key if needed
    pub(crate) fn replace_dependencies(&mut self, from: &ComponentId, to: &[ComponentId]) {
        *self.adjacency.entry(from.clone()).or_default() = to.to_vec();
    }
}
