use super::ComponentId;
use crate::shared::Result;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Merge policy a document is applied with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMode {
    /// Append new dependencies, never remove or reorder existing ones
    #[default]
    Regular,
    /// Replace the dependency list of every `fromId` in the document
    Force,
}

impl MergeMode {
    pub fn from_force_flag(force: bool) -> Self {
        if force {
            MergeMode::Force
        } else {
            MergeMode::Regular
        }
    }

    pub fn is_force(self) -> bool {
        matches!(self, MergeMode::Force)
    }
}

impl std::fmt::Display for MergeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MergeMode::Regular => write!(f, "regular"),
            MergeMode::Force => write!(f, "force"),
        }
    }
}

/// One `fromId -> [toIds]` entry of a document
///
/// `to` is de-duplicated on construction, keeping first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    from: ComponentId,
    to: Vec<ComponentId>,
}

impl DependencyEdge {
    pub fn new(from: ComponentId, to: Vec<ComponentId>) -> Self {
        let unique: IndexSet<ComponentId> = to.into_iter().collect();
        Self {
            from,
            to: unique.into_iter().collect(),
        }
    }

    pub fn from(&self) -> &ComponentId {
        &self.from
    }

    pub fn to(&self) -> &[ComponentId] {
        &self.to
    }
}

/// Summary of a document for list and preview views
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub name: String,
    pub root_id: ComponentId,
    pub component_count: usize,
    pub edge_count: usize,
    pub mode: MergeMode,
}

/// SbomDocument aggregate: one ingested SBOM, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomDocument {
    name: String,
    root_id: ComponentId,
    component_ids: IndexSet<ComponentId>,
    edges: Vec<DependencyEdge>,
    mode: MergeMode,
}

impl SbomDocument {
    /// Creates a document, rejecting a `fromId` that appears in more than one edge
    pub fn new(
        name: impl Into<String>,
        root_id: ComponentId,
        component_ids: Vec<ComponentId>,
        edges: Vec<DependencyEdge>,
        mode: MergeMode,
    ) -> Result<Self> {
        let mut sources = HashSet::new();
        for edge in &edges {
            if !sources.insert(edge.from().as_str()) {
                anyhow::bail!(
                    "Dependency source '{}' appears in more than one edge",
                    edge.from()
                );
            }
        }

        Ok(Self {
            name: name.into(),
            root_id,
            component_ids: component_ids.into_iter().collect(),
            edges,
            mode,
        })
    }

    pub fn builder(name: impl Into<String>, root_id: impl Into<String>) -> SbomDocumentBuilder {
        SbomDocumentBuilder::new(name, root_id)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root_id(&self) -> &ComponentId {
        &self.root_id
    }

    pub fn component_ids(&self) -> &IndexSet<ComponentId> {
        &self.component_ids
    }

    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    pub fn mode(&self) -> MergeMode {
        self.mode
    }

    pub fn component_count(&self) -> usize {
        self.component_ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the same document applied under a different merge policy
    pub fn with_mode(mut self, mode: MergeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            name: self.name.clone(),
            root_id: self.root_id.clone(),
            component_count: self.component_count(),
            edge_count: self.edge_count(),
            mode: self.mode,
        }
    }
}

/// Builder for SbomDocument working on plain strings
///
/// Identifier validation is deferred to `build()`.
#[derive(Debug, Clone)]
pub struct SbomDocumentBuilder {
    name: String,
    root_id: String,
    component_ids: Vec<String>,
    edges: Vec<(String, Vec<String>)>,
    mode: MergeMode,
}

impl SbomDocumentBuilder {
    fn new(name: impl Into<String>, root_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root_id: root_id.into(),
            component_ids: Vec::new(),
            edges: Vec::new(),
            mode: MergeMode::Regular,
        }
    }

    pub fn component(mut self, id: impl Into<String>) -> Self {
        self.component_ids.push(id.into());
        self
    }

    pub fn edge<I, S>(mut self, from: impl Into<String>, to: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.edges
            .push((from.into(), to.into_iter().map(Into::into).collect()));
        self
    }

    pub fn mode(mut self, mode: MergeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn force(self) -> Self {
        self.mode(MergeMode::Force)
    }

    pub fn build(self) -> Result<SbomDocument> {
        let root_id = ComponentId::new(self.root_id)?;
        let component_ids = self
            .component_ids
            .into_iter()
            .map(ComponentId::new)
            .collect::<Result<Vec<_>>>()?;
        let edges = self
            .edges
            .into_iter()
            .map(|(from, to)| {
                let from = ComponentId::new(from)?;
                let to = to
                    .into_iter()
                    .map(ComponentId::new)
                    .collect::<Result<Vec<_>>>()?;
                Ok(DependencyEdge::new(from, to))
            })
            .collect::<Result<Vec<_>>>()?;

        SbomDocument::new(self.name, root_id, component_ids, edges, self.mode)
    }
}
