use crate::application::dto::{MergeOutcome, NodeDetails};
use crate::graph_merge::domain::{GraphDiff, HistoryState, SbomDocument, Viewport};
use crate::graph_merge::services::GraphLayout;
use crate::shared::error::DocumentLoadError;
use crate::shared::Result;

/// GraphSessionPort - Inbound port for driving an interactive merge session
///
/// A renderer calls these operations in response to user events and redraws
/// from whatever state they return. All operations run to completion
/// synchronously; the session is the only owner of graph and history.
pub trait GraphSessionPort {
    /// Validates (regular mode only) and merges a document
    ///
    /// # Returns
    /// `MergeOutcome::Merged` with the step diff, or `MergeOutcome::Rejected`
    /// carrying the admission result. A rejection leaves graph and history as
    /// they were.
    fn apply_document(&mut self, document: SbomDocument) -> MergeOutcome;

    /// Records a document that never made it past loading
    fn record_load_failure(&mut self, error: &DocumentLoadError);

    /// Moves the history cursor back one entry; false at the initial state
    fn step_backward(&mut self) -> bool;

    /// Moves the history cursor forward one entry; false at the tip
    fn step_forward(&mut self) -> bool;

    /// Graph, document count and cursor information for the displayed state
    fn history_state(&self) -> HistoryState<'_>;

    /// Node coordinates for the displayed graph
    fn layout(&self) -> GraphLayout;

    /// What the displayed entry changed compared to the one before it
    fn current_diff(&self) -> GraphDiff;

    /// Marks a node as highlighted
    ///
    /// # Returns
    /// `true` if newly highlighted, `false` if it already was
    ///
    /// # Errors
    /// Returns an error if the node is not in the displayed graph
    fn highlight(&mut self, id: &str) -> Result<bool>;

    /// Removes a highlight; returns whether the node was highlighted
    fn unhighlight(&mut self, id: &str) -> bool;

    /// Removes every highlight
    fn clear_highlights(&mut self);

    /// Direct dependencies and dependents of a node in the displayed graph
    fn node_details(&self, id: &str) -> Option<NodeDetails>;

    /// Changes the drawing area used by `layout`
    fn set_viewport(&mut self, viewport: Viewport);
}
