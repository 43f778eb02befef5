use crate::graph_merge::domain::{DependencyGraph, GraphDiff, MergeMode, SbomDocument};

/// MergeEngine service applying one document to the dependency graph
///
/// Edges are processed in document order. Regular mode appends unseen
/// dependencies; force mode replaces the list of every `fromId` named in the
/// document and leaves all other keys alone. Merging never fails: documents
/// are validated before they get here.
pub struct MergeEngine;

impl MergeEngine {
    /// Merges `document` into `graph` in place and returns what changed
    pub fn merge(graph: &mut DependencyGraph, document: &SbomDocument) -> GraphDiff {
        let before = graph.clone();

        for edge in document.edges() {
            match document.mode() {
                MergeMode::Regular => graph.append_dependencies(edge.from(), edge.to()),
                MergeMode::Force => graph.replace_dependencies(edge.from(), edge.to()),
            }
        }

        let diff = GraphDiff::between(&before, graph);
        tracing::debug!(
            document = document.name(),
            mode = %document.mode(),
            added_nodes = diff.added_nodes().len(),
            added_edges = diff.added_edges().len(),
            removed_edges = diff.removed_edges().len(),
            "document merged"
        );
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_merge::domain::dependency_graph::tests::{graph_of, ids};

    fn stage_one() -> SbomDocument {
        SbomDocument::builder("stage-1", "111")
            .component("222")
            .component("333")
            .component("444")
            .edge("111", ["222", "333"])
            .edge("222", ["444"])
            .build()
            .unwrap()
    }

    fn merged(document: &SbomDocument) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        MergeEngine::merge(&mut graph, document);
        graph
    }

    #[test]
    fn test_regular_merge_into_empty_graph() {
        let graph = merged(&stage_one());

        assert_eq!(graph, graph_of(&[("111", &["222", "333"]), ("222", &["444"])]));
        let roots: Vec<&str> = graph.roots().iter().map(|id| id.as_str()).collect();
        let leaves: Vec<&str> = graph.leaves().iter().map(|id| id.as_str()).collect();
        assert_eq!(roots, vec!["111"]);
        assert_eq!(leaves, vec!["333", "444"]);
    }

    #[test]
    fn test_force_merge_replaces_only_named_sources() {
        let mut graph = merged(&stage_one());
        let force = SbomDocument::builder("stage-3", "111")
            .edge("111", ["222", "999"])
            .force()
            .build()
            .unwrap();

        let diff = MergeEngine::merge(&mut graph, &force);

        assert_eq!(graph, graph_of(&[("111", &["222", "999"]), ("222", &["444"])]));
        assert_eq!(diff.removed_nodes(), ids(&["333"]).as_slice());
        assert_eq!(diff.added_nodes(), ids(&["999"]).as_slice());
    }

    #[test]
    fn test_force_merge_uses_given_order() {
        let mut graph = graph_of(&[("a", &["b", "c"])]);
        let force = SbomDocument::builder("reorder", "a")
            .edge("a", ["c", "b"])
            .force()
            .build()
            .unwrap();
        MergeEngine::merge(&mut graph, &force);
        assert_eq!(graph.dependencies_of("a").unwrap(), ids(&["c", "b"]).as_slice());
    }

    #[test]
    fn test_force_merge_can_empty_a_list() {
        let mut graph = graph_of(&[("a", &["b"])]);
        let force = SbomDocument::builder("prune", "a")
            .edge("a", [] as [&str; 0])
            .force()
            .build()
            .unwrap();
        MergeEngine::merge(&mut graph, &force);
        assert!(graph.contains_source("a"));
        assert!(graph.dependencies_of("a").unwrap().is_empty());
    }

    #[test]
    fn test_regular_merge_appends_without_reordering() {
        let mut graph = graph_of(&[("a", &["b", "c"])]);
        let doc = SbomDocument::builder("more", "x")
            .edge("x", ["a"])
            .edge("c", ["d"])
            .build()
            .unwrap();
        MergeEngine::merge(&mut graph, &doc);

        assert_eq!(graph.dependencies_of("a").unwrap(), ids(&["b", "c"]).as_slice());
        let keys: Vec<&str> = graph.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "x", "c"]);
    }

    #[test]
    fn test_empty_document_is_a_no_op() {
        let mut graph = merged(&stage_one());
        let before = graph.clone();
        let empty = SbomDocument::builder("empty", "111").build().unwrap();

        let diff = MergeEngine::merge(&mut graph, &empty);

        assert_eq!(graph, before);
        assert!(diff.is_empty());
    }

    #[test]
    fn test_merging_same_regular_document_twice_is_idempotent() {
        let mut graph = merged(&stage_one());
        let once = graph.clone();

        let diff = MergeEngine::merge(&mut graph, &stage_one());

        assert_eq!(graph, once);
        assert!(diff.is_empty());
    }

    #[test]
    fn test_regular_edge_with_no_targets_creates_key() {
        let doc = SbomDocument::builder("lonely", "solo")
            .edge("solo", [] as [&str; 0])
            .build()
            .unwrap();
        let graph = merged(&doc);
        assert!(graph.contains_source("solo"));
        assert_eq!(graph.node_count(), 1);
    }
}
