use crate::graph_merge::domain::DocumentSummary;
use crate::shared::error::{DocumentLoadError, LoadFailureKind};
use serde::Serialize;

/// What happened to one document handed to the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DocumentStatus {
    #[serde(rename_all = "camelCase")]
    Merged { document_count: usize },
    Rejected { reason: String },
    #[serde(rename_all = "camelCase")]
    LoadFailed { kind: LoadFailureKind, reason: String },
}

/// Per-document log entry kept by the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<DocumentSummary>,
    #[serde(flatten)]
    pub status: DocumentStatus,
}

impl DocumentRecord {
    pub fn merged(summary: DocumentSummary, document_count: usize) -> Self {
        Self {
            name: summary.name.clone(),
            summary: Some(summary),
            status: DocumentStatus::Merged { document_count },
        }
    }

    pub fn rejected(summary: DocumentSummary, reason: String) -> Self {
        Self {
            name: summary.name.clone(),
            summary: Some(summary),
            status: DocumentStatus::Rejected { reason },
        }
    }

    pub fn load_failed(error: &DocumentLoadError) -> Self {
        Self {
            name: error.document().to_string(),
            summary: None,
            status: DocumentStatus::LoadFailed {
                kind: error.kind(),
                reason: error.details().to_string(),
            },
        }
    }

    pub fn is_merged(&self) -> bool {
        matches!(self.status, DocumentStatus::Merged { .. })
    }
}
