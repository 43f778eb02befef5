//! Builder for constructing GraphReadModel from a session

use super::graph_read_model::{
    GraphReadModel, HistoryView, NodeView, ReportMetadataView, ViewportView,
};
use crate::application::use_cases::GraphSession;
use crate::graph_merge::domain::{DependencyGraph, EdgeRef};
use crate::graph_merge::services::GraphLayout;
use crate::ports::inbound::GraphSessionPort;
use chrono::Utc;

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Transforms the session's displayed state into a read model
pub struct GraphReadModelBuilder;

impl GraphReadModelBuilder {
    pub fn build(session: &GraphSession) -> GraphReadModel {
        let state = session.history_state();
        let layout = session.layout();
        let viewport = session.viewport();

        GraphReadModel {
            metadata: ReportMetadataView {
                generated_at: Utc::now().to_rfc3339(),
                session_id: session.id().to_string(),
                tool_name: TOOL_NAME.to_string(),
                tool_version: TOOL_VERSION.to_string(),
            },
            viewport: ViewportView {
                width: viewport.width(),
                height: viewport.height(),
                margin: viewport.margin(),
            },
            history: HistoryView {
                position: state.position,
                total_entries: state.total_entries,
                document_count: state.document_count,
                is_at_tip: state.is_at_tip,
            },
            graph: state.graph.clone(),
            nodes: Self::build_nodes(session, state.graph, &layout),
            edges: state
                .graph
                .edges()
                .map(|(from, to)| EdgeRef::new(from.clone(), to.clone()))
                .collect(),
            documents: session.documents().to_vec(),
            changes: session.current_diff(),
        }
    }

    /// One view per node, in layout order (level by level, left to right)
    fn build_nodes(
        session: &GraphSession,
        graph: &DependencyGraph,
        layout: &GraphLayout,
    ) -> Vec<NodeView> {
        let mut nodes: Vec<NodeView> = layout
            .iter()
            .map(|(id, position)| {
                let dependency_count = graph.dependencies_of(id.as_str()).map_or(0, <[_]>::len);
                let dependent_count = graph.dependents_of(id.as_str()).len();
                NodeView {
                    id: id.to_string(),
                    level: position.level,
                    x: position.x,
                    y: position.y,
                    is_root: dependent_count == 0,
                    is_leaf: dependency_count == 0,
                    highlighted: session.is_highlighted(id.as_str()),
                    dependency_count,
                    dependent_count,
                }
            })
            .collect();
        nodes.sort_by_key(|node| node.level);
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_merge::domain::{SbomDocument, Viewport};

    fn session() -> GraphSession {
        let mut session = GraphSession::new(Viewport::new(300.0, 300.0, 0.0).unwrap());
        let doc = SbomDocument::builder("stage-1", "111")
            .edge("111", ["222", "333"])
            .edge("222", ["444"])
            .build()
            .unwrap();
        session.apply_document(doc);
        session
    }

    #[test]
    fn test_build_roots_and_leaves() {
        let model = GraphReadModelBuilder::build(&session());

        assert_eq!(model.root_ids(), vec!["111"]);
        assert_eq!(model.leaf_ids(), vec!["333", "444"]);
        assert_eq!(model.nodes.len(), 4);
        assert_eq!(model.edges.len(), 3);
    }

    #[test]
    fn test_build_history_and_metadata() {
        let model = GraphReadModelBuilder::build(&session());

        assert_eq!(model.history.position, 1);
        assert_eq!(model.history.total_entries, 2);
        assert_eq!(model.history.document_count, 1);
        assert!(model.history.is_at_tip);
        assert_eq!(model.metadata.tool_name, "sbom-merge-graph");
        assert_eq!(model.changes.added_nodes().len(), 4);
    }

    #[test]
    fn test_build_node_view_counts_and_position() {
        let model = GraphReadModelBuilder::build(&session());
        let node = model.node("222").unwrap();

        assert_eq!(node.level, 1);
        assert_eq!(node.dependency_count, 1);
        assert_eq!(node.dependent_count, 1);
        assert_eq!(model.node("111").unwrap().x, 150.0);
    }

    #[test]
    fn test_build_marks_highlights() {
        let mut session = session();
        session.highlight("333").unwrap();

        let model = GraphReadModelBuilder::build(&session);

        assert!(model.node("333").unwrap().highlighted);
        assert!(!model.node("111").unwrap().highlighted);
    }

    #[test]
    fn test_serialized_field_names_are_camel_case() {
        let json = serde_json::to_value(GraphReadModelBuilder::build(&session())).unwrap();

        assert_eq!(json["history"]["isAtTip"], true);
        assert_eq!(json["history"]["totalEntries"], 2);
        assert_eq!(json["graph"]["111"][1], "333");
        assert_eq!(json["nodes"][0]["isRoot"], true);
        assert!(json["changes"]["addedNodes"].is_array());
        assert_eq!(json["documents"][0]["status"], "merged");
        assert_eq!(json["documents"][0]["summary"]["rootId"], "111");
    }
}
