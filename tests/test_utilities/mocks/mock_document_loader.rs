use async_trait::async_trait;
use sbom_merge_graph::prelude::*;
use std::collections::HashMap;

/// Mock DocumentLoader serving CycloneDX JSON from memory
///
/// Documents are keyed by the display name of their source. Unknown sources
/// fail with `NotFetchable`, like a missing file would.
#[derive(Default)]
pub struct MockDocumentLoader {
    documents: HashMap<String, String>,
}

impl MockDocumentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, name: &str, json: impl Into<String>) -> Self {
        self.documents.insert(name.to_string(), json.into());
        self
    }
}

#[async_trait]
impl DocumentLoader for MockDocumentLoader {
    async fn load(
        &self,
        source: &DocumentSource,
        mode: MergeMode,
    ) -> std::result::Result<SbomDocument, DocumentLoadError> {
        let name = source.display_name();
        match self.documents.get(&name) {
            Some(json) => CycloneDxParser::parse(&name, json.as_bytes(), mode),
            None => Err(DocumentLoadError::NotFetchable {
                document: name,
                details: "not registered with the mock loader".to_string(),
            }),
        }
    }
}
