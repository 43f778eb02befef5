use crate::application::dto::{MergeOutcome, WalkRequest, WalkResponse};
use crate::application::read_models::GraphReadModelBuilder;
use crate::application::use_cases::GraphSession;
use crate::graph_merge::domain::SbomDocument;
use crate::ports::inbound::GraphSessionPort;
use crate::ports::outbound::{DocumentLoader, ProgressReporter};
use crate::shared::error::DocumentLoadError;
use crate::shared::Result;
use futures::stream::{self, StreamExt};

/// Maximum number of documents fetched at the same time
const MAX_CONCURRENT_LOADS: usize = 8;

/// WalkDocumentsUseCase - loads a sequence of SBOMs and merges them in order
///
/// Loading is the only asynchronous step and may overlap; merging is strictly
/// sequential in request order. A document that fails to load or is rejected
/// is recorded and the walk moves on to the next one.
///
/// # Type Parameters
/// * `DL` - DocumentLoader implementation
/// * `PR` - ProgressReporter implementation
pub struct WalkDocumentsUseCase<DL, PR> {
    document_loader: DL,
    progress_reporter: PR,
}

impl<DL, PR> WalkDocumentsUseCase<DL, PR>
where
    DL: DocumentLoader,
    PR: ProgressReporter,
{
    /// Creates a new WalkDocumentsUseCase with injected dependencies
    pub fn new(document_loader: DL, progress_reporter: PR) -> Self {
        Self {
            document_loader,
            progress_reporter,
        }
    }

    /// Executes the walk and returns the read model of the displayed state
    ///
    /// Load failures, rejections and unknown highlight ids are reported
    /// through the progress reporter and counted in the response.
    pub async fn execute(&self, request: WalkRequest) -> Result<WalkResponse> {
        let loaded = self.load_documents(&request).await;

        let mut session = GraphSession::new(request.viewport);
        let (mut merged, mut rejected, mut failed) = (0, 0, 0);

        for result in loaded {
            match result {
                Ok(document) => {
                    if self.apply_and_report(&mut session, document) {
                        merged += 1;
                    } else {
                        rejected += 1;
                    }
                }
                Err(error) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Skipping {} ({}): {}",
                        error.document(),
                        error.kind(),
                        error.details()
                    ));
                    session.record_load_failure(&error);
                    failed += 1;
                }
            }
        }

        self.step_back(&mut session, request.steps_back);
        self.apply_highlights(&mut session, &request.highlights);

        let state = session.history_state();
        self.progress_reporter.report_completion(&format!(
            "✅ Merged {} of {} document(s); showing entry {}/{} with {} node(s)",
            merged,
            request.documents.len(),
            state.position,
            state.total_entries - 1,
            state.graph.node_count()
        ));

        Ok(WalkResponse {
            read_model: GraphReadModelBuilder::build(&session),
            merged_count: merged,
            rejected_count: rejected,
            failed_count: failed,
        })
    }

    /// Loads every requested document, keeping results in request order
    async fn load_documents(
        &self,
        request: &WalkRequest,
    ) -> Vec<std::result::Result<SbomDocument, DocumentLoadError>> {
        let total = request.documents.len();
        self.progress_reporter
            .report(&format!("📥 Loading {} SBOM document(s)...", total));

        let mut results = Vec::with_capacity(total);
        let mut loads = stream::iter(request.documents.iter())
            .map(|document| self.document_loader.load(&document.source, document.mode))
            .buffered(MAX_CONCURRENT_LOADS);

        while let Some(result) = loads.next().await {
            let name = match &result {
                Ok(document) => document.name().to_string(),
                Err(error) => error.document().to_string(),
            };
            results.push(result);
            self.progress_reporter
                .report_progress(results.len(), total, Some(&name));
        }

        results
    }

    /// Applies one document; returns whether it was merged
    fn apply_and_report(&self, session: &mut GraphSession, document: SbomDocument) -> bool {
        let name = document.name().to_string();
        let mode = document.mode();

        match session.apply_document(document) {
            MergeOutcome::Merged {
                diff,
                document_count,
            } => {
                self.progress_reporter.report(&format!(
                    "🔗 Merged {} ({} mode) as document #{}: +{} node(s), +{} edge(s), -{} edge(s)",
                    name,
                    mode,
                    document_count,
                    diff.added_nodes().len(),
                    diff.added_edges().len(),
                    diff.removed_edges().len()
                ));
                true
            }
            MergeOutcome::Rejected(admission) => {
                self.progress_reporter.report_error(&format!(
                    "⛔ Rejected {}: {}",
                    name,
                    admission.reason().unwrap_or_default()
                ));
                false
            }
        }
    }

    fn step_back(&self, session: &mut GraphSession, steps: usize) {
        for taken in 0..steps {
            if !session.step_backward() {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Reached the initial state after {} of {} step(s) back",
                    taken, steps
                ));
                break;
            }
        }
    }

    fn apply_highlights(&self, session: &mut GraphSession, ids: &[String]) {
        for id in ids {
            if let Err(error) = session.highlight(id) {
                self.progress_reporter
                    .report_error(&format!("⚠️  Ignoring highlight: {}", error));
            }
        }
    }
}
