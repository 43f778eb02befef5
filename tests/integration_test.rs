/// Integration tests for the application layer
mod test_utilities;

use sbom_merge_graph::prelude::*;
use std::path::PathBuf;
use test_utilities::mocks::*;

const STAGE_1: &str = include_str!("fixtures/stage-1.json");
const STAGE_2: &str = include_str!("fixtures/stage-2.json");
const STAGE_3: &str = include_str!("fixtures/stage-3.json");
const EXTENSION: &str = include_str!("fixtures/extension.json");
const CHAIN: &str = include_str!("fixtures/chain.json");

fn staged_loader() -> MockDocumentLoader {
    MockDocumentLoader::new()
        .with_document("stage-1.json", STAGE_1)
        .with_document("stage-2.json", STAGE_2)
        .with_document("stage-3.json", STAGE_3)
        .with_document("extension.json", EXTENSION)
        .with_document("chain.json", CHAIN)
}

fn regular(name: &str) -> DocumentRequest {
    DocumentRequest::regular(DocumentSource::parse(name))
}

fn force(name: &str) -> DocumentRequest {
    DocumentRequest::force(DocumentSource::parse(name))
}

fn deps<'a>(model: &'a GraphReadModel, id: &str) -> Vec<&'a str> {
    model
        .graph
        .dependencies_of(id)
        .unwrap_or_default()
        .iter()
        .map(|id| id.as_str())
        .collect()
}

fn parse(name: &str, json: &str, mode: MergeMode) -> SbomDocument {
    CycloneDxParser::parse(name, json.as_bytes(), mode).unwrap()
}

#[tokio::test]
async fn test_walk_single_document_happy_path() {
    let reporter = MockProgressReporter::new();
    let use_case = WalkDocumentsUseCase::new(staged_loader(), reporter.clone());

    let request = WalkRequest::builder()
        .document(regular("stage-1.json"))
        .build()
        .unwrap();
    let response = use_case.execute(request).await.unwrap();
    let model = &response.read_model;

    assert!(response.all_merged());
    assert_eq!(response.merged_count, 1);
    assert_eq!(deps(model, "111"), vec!["222", "333"]);
    assert_eq!(deps(model, "222"), vec!["444"]);
    assert_eq!(model.root_ids(), vec!["111"]);
    assert_eq!(model.leaf_ids(), vec!["333", "444"]);
    assert_eq!(model.history.position, 1);
    assert_eq!(model.history.document_count, 1);
    assert!(model.history.is_at_tip);

    let messages = reporter.get_messages();
    assert!(messages.iter().any(|m| m.contains("Merged stage-1.json")));
    assert!(reporter.errors().is_empty());
}

#[tokio::test]
async fn test_regular_document_that_drops_a_dependency_is_rejected() {
    let reporter = MockProgressReporter::new();
    let use_case = WalkDocumentsUseCase::new(staged_loader(), reporter.clone());

    let request = WalkRequest::builder()
        .document(regular("stage-1.json"))
        .document(regular("stage-2.json"))
        .build()
        .unwrap();
    let response = use_case.execute(request).await.unwrap();
    let model = &response.read_model;

    assert!(!response.all_merged());
    assert_eq!(response.merged_count, 1);
    assert_eq!(response.rejected_count, 1);
    assert_eq!(deps(model, "111"), vec!["222", "333"]);
    assert_eq!(model.history.total_entries, 2);
    assert_eq!(model.history.document_count, 1);

    let rejected = &model.documents[1];
    assert_eq!(rejected.name, "stage-2.json");
    match &rejected.status {
        DocumentStatus::Rejected { reason } => {
            assert!(reason.contains("'111'"));
            assert!(reason.contains("force"));
        }
        other => panic!("expected a rejection, got {:?}", other),
    }
    assert!(reporter
        .errors()
        .iter()
        .any(|m| m.contains("Rejected stage-2.json")));
}

#[tokio::test]
async fn test_force_document_replaces_named_sources_only() {
    let use_case = WalkDocumentsUseCase::new(staged_loader(), MockProgressReporter::new());

    let request = WalkRequest::builder()
        .document(regular("stage-1.json"))
        .document(force("stage-3.json"))
        .build()
        .unwrap();
    let response = use_case.execute(request).await.unwrap();
    let model = &response.read_model;

    assert!(response.all_merged());
    assert_eq!(deps(model, "111"), vec!["222", "999"]);
    assert_eq!(deps(model, "222"), vec!["444"]);
    assert!(model.node("333").is_none());
    assert!(model.node("999").is_some());
    assert_eq!(model.changes.added_nodes().len(), 1);
    assert_eq!(model.changes.removed_nodes().len(), 1);
    assert_eq!(model.history.document_count, 2);
}

#[tokio::test]
async fn test_regular_extension_adds_new_sources() {
    let use_case = WalkDocumentsUseCase::new(staged_loader(), MockProgressReporter::new());

    let request = WalkRequest::builder()
        .document(regular("stage-1.json"))
        .document(regular("extension.json"))
        .build()
        .unwrap();
    let response = use_case.execute(request).await.unwrap();
    let model = &response.read_model;

    assert!(response.all_merged());
    assert_eq!(deps(model, "111"), vec!["222", "333"]);
    assert_eq!(deps(model, "555"), vec!["111", "pkg:npm/epsilon@1.2.3"]);
    assert_eq!(deps(model, "333"), vec!["777"]);
    assert_eq!(model.root_ids(), vec!["555"]);
    assert_eq!(model.node("555").map(|n| n.level), Some(0));
    assert_eq!(model.node("111").map(|n| n.level), Some(1));
    assert_eq!(model.node("777").map(|n| n.level), Some(3));
}

#[tokio::test]
async fn test_load_failures_do_not_stop_the_walk() {
    let reporter = MockProgressReporter::new();
    let loader = staged_loader().with_document("broken.json", "{ not json");
    let use_case = WalkDocumentsUseCase::new(loader, reporter.clone());

    let request = WalkRequest::builder()
        .document(regular("missing.json"))
        .document(regular("broken.json"))
        .document(regular("stage-1.json"))
        .build()
        .unwrap();
    let response = use_case.execute(request).await.unwrap();
    let model = &response.read_model;

    assert_eq!(response.failed_count, 2);
    assert_eq!(response.merged_count, 1);
    assert_eq!(model.graph.node_count(), 4);
    assert_eq!(model.documents.len(), 3);
    assert!(matches!(
        model.documents[0].status,
        DocumentStatus::LoadFailed {
            kind: LoadFailureKind::NotFetchable,
            ..
        }
    ));
    assert!(matches!(
        model.documents[1].status,
        DocumentStatus::LoadFailed {
            kind: LoadFailureKind::NotParseable,
            ..
        }
    ));
    assert_eq!(reporter.errors().len(), 2);
}

#[tokio::test]
async fn test_steps_back_and_highlights_shape_the_displayed_state() {
    let reporter = MockProgressReporter::new();
    let use_case = WalkDocumentsUseCase::new(staged_loader(), reporter.clone());

    let request = WalkRequest::builder()
        .document(regular("stage-1.json"))
        .document(regular("extension.json"))
        .steps_back(1)
        .highlight("222")
        .highlight("555")
        .build()
        .unwrap();
    let response = use_case.execute(request).await.unwrap();
    let model = &response.read_model;

    assert_eq!(model.history.position, 1);
    assert!(!model.history.is_at_tip);
    assert!(model.node("555").is_none());
    assert_eq!(model.node("222").map(|n| n.highlighted), Some(true));
    assert!(reporter
        .errors()
        .iter()
        .any(|m| m.contains("Ignoring highlight") && m.contains("'555'")));
}

#[tokio::test]
async fn test_stepping_back_past_the_start_is_reported() {
    let reporter = MockProgressReporter::new();
    let use_case = WalkDocumentsUseCase::new(staged_loader(), reporter.clone());

    let request = WalkRequest::builder()
        .document(regular("stage-1.json"))
        .steps_back(5)
        .build()
        .unwrap();
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.read_model.history.position, 0);
    assert!(response.read_model.graph.is_empty());
    assert!(response.read_model.nodes.is_empty());
    assert!(reporter
        .errors()
        .iter()
        .any(|m| m.contains("after 1 of 5")));
}

#[tokio::test]
async fn test_chain_layout_through_use_case() {
    let use_case = WalkDocumentsUseCase::new(staged_loader(), MockProgressReporter::new());

    let request = WalkRequest::builder()
        .document(regular("chain.json"))
        .viewport(Viewport::new(300.0, 300.0, 0.0).unwrap())
        .build()
        .unwrap();
    let response = use_case.execute(request).await.unwrap();
    let model = &response.read_model;

    for (id, level, y) in [("A", 0, 0.0), ("B", 1, 100.0), ("C", 2, 200.0)] {
        let node = model.node(id).unwrap();
        assert_eq!(node.level, level);
        assert_eq!(node.x, 150.0);
        assert_eq!(node.y, y);
    }
}

#[tokio::test]
async fn test_filesystem_loader_reads_fixtures() {
    let use_case =
        WalkDocumentsUseCase::new(FileSystemDocumentLoader::new(), MockProgressReporter::new());
    let fixtures = PathBuf::from("tests/fixtures");

    let request = WalkRequest::builder()
        .document(DocumentRequest::regular(DocumentSource::Path(
            fixtures.join("stage-1.json"),
        )))
        .document(DocumentRequest::regular(DocumentSource::Path(
            fixtures.join("malformed.json"),
        )))
        .build()
        .unwrap();
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.merged_count, 1);
    assert_eq!(response.failed_count, 1);
    assert!(matches!(
        response.read_model.documents[1].status,
        DocumentStatus::LoadFailed {
            kind: LoadFailureKind::MalformedShape,
            ..
        }
    ));
}

#[test]
fn test_session_merge_from_past_state_discards_future() {
    let mut session = GraphSession::default();
    assert!(session
        .apply_document(parse("stage-1.json", STAGE_1, MergeMode::Regular))
        .is_merged());
    assert!(session
        .apply_document(parse("extension.json", EXTENSION, MergeMode::Regular))
        .is_merged());
    assert_eq!(session.history_state().total_entries, 3);

    assert!(session.step_backward());
    assert!(session
        .apply_document(parse("stage-3.json", STAGE_3, MergeMode::Force))
        .is_merged());

    let state = session.history_state();
    assert_eq!(state.total_entries, 3);
    assert!(state.is_at_tip);
    assert_eq!(state.document_count, 2);
    assert!(!state.graph.contains_node("555"));
    assert!(!session.step_forward());
}

#[test]
fn test_session_rejection_keeps_history_and_graph() {
    let mut session = GraphSession::default();
    session.apply_document(parse("stage-1.json", STAGE_1, MergeMode::Regular));
    let before = session.graph().clone();

    let outcome = session.apply_document(parse("stage-2.json", STAGE_2, MergeMode::Regular));

    assert!(!outcome.is_merged());
    assert!(outcome.rejection_reason().unwrap().contains("'111'"));
    assert_eq!(session.graph(), &before);
    assert_eq!(session.history_state().total_entries, 2);
    assert_eq!(session.documents().len(), 2);
}

#[test]
fn test_session_node_details_and_highlights() {
    let mut session = GraphSession::default();
    session.apply_document(parse("stage-1.json", STAGE_1, MergeMode::Regular));

    assert!(session.highlight("222").unwrap());
    assert!(!session.highlight("222").unwrap());
    assert!(session.highlight("nope").is_err());

    let details = session.node_details("222").unwrap();
    assert_eq!(details.dependencies.len(), 1);
    assert_eq!(details.dependents.len(), 1);
    assert!(!details.is_root);
    assert!(details.highlighted);

    assert!(session.unhighlight("222"));
    session.clear_highlights();
    assert!(session.highlighted().is_empty());
}

#[test]
fn test_read_model_renders_in_both_formats() {
    let mut session = GraphSession::default();
    session.apply_document(parse("stage-1.json", STAGE_1, MergeMode::Regular));
    let model = GraphReadModelBuilder::build(&session);

    let json = FormatterFactory::create(OutputFormat::Json)
        .format(&model)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["graph"]["111"][1], "333");
    assert_eq!(value["history"]["documentCount"], 1);
    assert_eq!(value["metadata"]["toolName"], "sbom-merge-graph");

    let markdown = FormatterFactory::create(OutputFormat::Markdown)
        .format(&model)
        .unwrap();
    assert!(markdown.contains("# SBOM Dependency Graph"));
    assert!(markdown.contains("stage-1.json"));
}
