use crate::adapters::outbound::filesystem::FileSystemDocumentLoader;
use crate::adapters::outbound::network::HttpDocumentLoader;
use crate::graph_merge::domain::{MergeMode, SbomDocument};
use crate::ports::outbound::{DocumentLoader, DocumentSource};
use crate::shared::error::DocumentLoadError;
use async_trait::async_trait;

/// RoutingDocumentLoader dispatches each source to the loader that handles it
///
/// Paths and uploaded bytes go to the filesystem loader, URLs to the HTTP
/// loader.
pub struct RoutingDocumentLoader {
    filesystem: FileSystemDocumentLoader,
    http: HttpDocumentLoader,
}

impl RoutingDocumentLoader {
    pub fn new() -> crate::shared::Result<Self> {
        Ok(Self {
            filesystem: FileSystemDocumentLoader::new(),
            http: HttpDocumentLoader::new()?,
        })
    }
}

#[async_trait]
impl DocumentLoader for RoutingDocumentLoader {
    async fn load(
        &self,
        source: &DocumentSource,
        mode: MergeMode,
    ) -> Result<SbomDocument, DocumentLoadError> {
        match source {
            DocumentSource::Url(_) => self.http.load(source, mode).await,
            DocumentSource::Path(_) | DocumentSource::Bytes { .. } => {
                self.filesystem.load(source, mode).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::LoadFailureKind;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_paths_go_to_filesystem() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.json");
        std::fs::write(&path, r#"{"metadata":{"component":{"bom-ref":"root"}}}"#).unwrap();

        let loader = RoutingDocumentLoader::new().unwrap();
        let document = loader
            .load(&DocumentSource::Path(path), MergeMode::Regular)
            .await
            .unwrap();

        assert_eq!(document.root_id().as_str(), "root");
    }

    #[tokio::test]
    async fn test_urls_go_to_http() {
        let loader = RoutingDocumentLoader::new().unwrap();
        let error = loader
            .load(
                &DocumentSource::Url("ftp://example.com/a.json".to_string()),
                MergeMode::Regular,
            )
            .await
            .unwrap_err();

        assert_eq!(error.kind(), LoadFailureKind::NotFetchable);
        assert!(error.details().contains("unsupported URL scheme"));
    }
}
