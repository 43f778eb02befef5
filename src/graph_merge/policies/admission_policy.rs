use crate::graph_merge::domain::{ComponentId, DependencyGraph, SbomDocument};

/// A `fromId` whose dependency list a regular merge would rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionConflict {
    source: ComponentId,
    existing: Vec<ComponentId>,
    proposed: Vec<ComponentId>,
}

impl AdmissionConflict {
    pub fn source(&self) -> &ComponentId {
        &self.source
    }

    pub fn existing(&self) -> &[ComponentId] {
        &self.existing
    }

    pub fn proposed(&self) -> &[ComponentId] {
        &self.proposed
    }

    fn describe(&self) -> String {
        format!(
            "dependencies of '{}' would change from [{}] ({}) to [{}] ({})",
            self.source,
            join(&self.existing),
            self.existing.len(),
            join(&self.proposed),
            self.proposed.len()
        )
    }
}

fn join(ids: &[ComponentId]) -> String {
    ids.iter()
        .map(ComponentId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of the admission check for a regular-mode merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Admissible,
    Inadmissible { conflicts: Vec<AdmissionConflict> },
}

impl Admission {
    pub fn is_admissible(&self) -> bool {
        matches!(self, Admission::Admissible)
    }

    pub fn conflicts(&self) -> &[AdmissionConflict] {
        match self {
            Admission::Admissible => &[],
            Admission::Inadmissible { conflicts } => conflicts,
        }
    }

    /// Human-readable reason naming every offending identifier
    pub fn reason(&self) -> Option<String> {
        match self {
            Admission::Admissible => None,
            Admission::Inadmissible { conflicts } => Some(format!(
                "Merge would modify existing edges: {}. Use force mode to overwrite.",
                conflicts
                    .iter()
                    .map(AdmissionConflict::describe)
                    .collect::<Vec<_>>()
                    .join("; ")
            )),
        }
    }
}

/// AdmissionPolicy: the "no silent edge modification" rule
///
/// A regular merge may add nodes and new sources freely, but every `fromId`
/// that is already a key must come with exactly the same dependency set and
/// count. Force-mode documents bypass this policy entirely; callers must not
/// consult it for them.
pub struct AdmissionPolicy;

impl AdmissionPolicy {
    pub fn evaluate(graph: &DependencyGraph, document: &SbomDocument) -> Admission {
        // Bootstrap: anything goes into an empty graph
        if graph.is_empty() {
            return Admission::Admissible;
        }

        let conflicts: Vec<AdmissionConflict> = document
            .edges()
            .iter()
            .filter_map(|edge| {
                let existing = graph.dependencies_of(edge.from().as_str())?;
                if Self::same_dependencies(existing, edge.to()) {
                    None
                } else {
                    Some(AdmissionConflict {
                        source: edge.from().clone(),
                        existing: existing.to_vec(),
                        proposed: edge.to().to_vec(),
                    })
                }
            })
            .collect();

        if conflicts.is_empty() {
            Admission::Admissible
        } else {
            tracing::debug!(
                document = document.name(),
                conflicts = conflicts.len(),
                "regular merge rejected"
            );
            Admission::Inadmissible { conflicts }
        }
    }

    /// Equal as sets and in cardinality (both lists are duplicate-free)
    fn same_dependencies(existing: &[ComponentId], proposed: &[ComponentId]) -> bool {
        existing.len() == proposed.len() && proposed.iter().all(|id| existing.contains(id))
    }
}
