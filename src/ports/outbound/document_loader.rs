use crate::graph_merge::domain::{MergeMode, SbomDocument};
use crate::shared::error::DocumentLoadError;
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;

/// Where a document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A file on the local filesystem
    Path(PathBuf),
    /// An `http://` or `https://` location
    Url(String),
    /// Raw uploaded bytes with a display name
    Bytes { name: String, content: Vec<u8> },
}

impl DocumentSource {
    /// Classifies a user-supplied string as a URL or a filesystem path
    pub fn parse(value: &str) -> Self {
        let lower = value.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DocumentSource::Url(value.to_string())
        } else {
            DocumentSource::Path(PathBuf::from(value))
        }
    }

    /// Name used in progress messages and document records
    pub fn display_name(&self) -> String {
        match self {
            DocumentSource::Path(path) => path.display().to_string(),
            DocumentSource::Url(url) => url.clone(),
            DocumentSource::Bytes { name, .. } => name.clone(),
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// DocumentLoader port for turning a source into a typed document
///
/// This port abstracts fetching (file, network, upload) and parsing so the
/// session only ever sees fully validated documents or a classified failure.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Loads and parses one document
    ///
    /// # Arguments
    /// * `source` - Where to read the document from
    /// * `mode` - Merge mode to stamp onto the produced document
    ///
    /// # Returns
    /// The parsed document
    ///
    /// # Errors
    /// Returns a `DocumentLoadError` when the source cannot be fetched, is not
    /// valid JSON, or lacks the expected CycloneDX shape
    async fn load(
        &self,
        source: &DocumentSource,
        mode: MergeMode,
    ) -> Result<SbomDocument, DocumentLoadError>;
}
