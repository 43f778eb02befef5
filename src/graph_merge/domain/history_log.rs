use super::{DependencyGraph, GraphDiff};

/// Immutable copy of the graph after a successful merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    graph: DependencyGraph,
    document_count: usize,
}

impl HistoryEntry {
    fn new(graph: DependencyGraph, document_count: usize) -> Self {
        Self {
            graph,
            document_count,
        }
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn document_count(&self) -> usize {
        self.document_count
    }
}

/// What the history cursor currently points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryState<'a> {
    pub graph: &'a DependencyGraph,
    pub document_count: usize,
    pub position: usize,
    pub total_entries: usize,
    pub is_at_tip: bool,
}

/// HistoryLog: linear undo stack of graph snapshots with a cursor
///
/// Always holds at least the initial empty entry. Snapshotting while the
/// cursor is behind the tip drops every later entry for good.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::new(DependencyGraph::new(), 0)],
            cursor: 0,
        }
    }

    /// Records a copy of `graph` after the cursor and moves the cursor onto it
    pub fn snapshot(&mut self, graph: &DependencyGraph, document_count: usize) {
        self.entries.truncate(self.cursor + 1);
        self.entries
            .push(HistoryEntry::new(graph.clone(), document_count));
        self.cursor = self.entries.len() - 1;
    }

    /// Moves one entry back; returns false when already at the start
    pub fn step_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves one entry forward; returns false when already at the tip
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_tip() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn current(&self) -> HistoryState<'_> {
        let entry = self.current_entry();
        HistoryState {
            graph: entry.graph(),
            document_count: entry.document_count(),
            position: self.cursor,
            total_entries: self.entries.len(),
            is_at_tip: self.is_at_tip(),
        }
    }

    pub fn current_entry(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// Changes introduced by the entry under the cursor
    pub fn current_diff(&self) -> GraphDiff {
        let current = self.current_entry().graph();
        match self.cursor.checked_sub(1) {
            Some(previous) => GraphDiff::between(self.entries[previous].graph(), current),
            None => GraphDiff::default(),
        }
    }

    pub fn is_at_tip(&self) -> bool {
        self.cursor + 1 == self.entries.len()
    }

    /// True while the cursor shows a past state
    pub fn is_viewing_past(&self) -> bool {
        !self.is_at_tip()
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
