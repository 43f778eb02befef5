use crate::adapters::outbound::parsers::CycloneDxParser;
use crate::graph_merge::domain::{MergeMode, SbomDocument};
use crate::ports::outbound::{DocumentLoader, DocumentSource};
use crate::shared::error::DocumentLoadError;
use crate::shared::security::{validate_document_metadata, validate_file_size, MAX_FILE_SIZE};
use async_trait::async_trait;
use std::path::Path;

/// FileSystemDocumentLoader adapter for local files and uploaded bytes
///
/// Security checks run on non-following metadata before any byte is read:
/// symbolic links, non-regular files and oversized files are refused.
pub struct FileSystemDocumentLoader;

impl FileSystemDocumentLoader {
    pub fn new() -> Self {
        Self
    }

    async fn read(&self, path: &Path, name: &str) -> Result<Vec<u8>, DocumentLoadError> {
        let metadata = tokio::fs::symlink_metadata(path)
            .await
            .map_err(|e| DocumentLoadError::not_fetchable(name, e))?;
        validate_document_metadata(&metadata, path)
            .map_err(|e| DocumentLoadError::not_fetchable(name, e))?;

        tokio::fs::read(path)
            .await
            .map_err(|e| DocumentLoadError::not_fetchable(name, e))
    }
}

impl Default for FileSystemDocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentLoader for FileSystemDocumentLoader {
    async fn load(
        &self,
        source: &DocumentSource,
        mode: MergeMode,
    ) -> Result<SbomDocument, DocumentLoadError> {
        let name = source.display_name();
        match source {
            DocumentSource::Path(path) => {
                let bytes = self.read(path, &name).await?;
                CycloneDxParser::parse(&name, &bytes, mode)
            }
            DocumentSource::Bytes { content, .. } => {
                validate_file_size(content.len() as u64, Path::new(&name), MAX_FILE_SIZE)
                    .map_err(|e| DocumentLoadError::not_fetchable(&name, e))?;
                CycloneDxParser::parse(&name, content, mode)
            }
            DocumentSource::Url(_) => Err(DocumentLoadError::not_fetchable(
                name,
                "URLs are not handled by the filesystem loader",
            )),
        }
    }
}
