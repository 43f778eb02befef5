use crate::adapters::outbound::parsers::CycloneDxParser;
use crate::graph_merge::domain::{MergeMode, SbomDocument};
use crate::ports::outbound::{DocumentLoader, DocumentSource};
use crate::shared::error::DocumentLoadError;
use crate::shared::security::MAX_FILE_SIZE;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HttpDocumentLoader adapter fetching SBOM documents over HTTP(S)
///
/// Failures are returned once; there is no retry. Only `http` and `https`
/// URLs are accepted and bodies larger than the document size limit are
/// refused.
pub struct HttpDocumentLoader {
    client: reqwest::Client,
}

impl HttpDocumentLoader {
    pub fn new() -> crate::shared::Result<Self> {
        let client = Self::client_builder().build()?;
        Ok(Self { client })
    }

    fn client_builder() -> reqwest::ClientBuilder {
        let user_agent = format!("sbom-merge-graph/{}", env!("CARGO_PKG_VERSION"));
        reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
    }

    fn validate_url(raw: &str) -> Result<Url, DocumentLoadError> {
        let url = Url::parse(raw).map_err(|e| DocumentLoadError::not_fetchable(raw, e))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(DocumentLoadError::not_fetchable(
                raw,
                format!("unsupported URL scheme '{}'", scheme),
            )),
        }
    }

    async fn fetch(&self, raw: &str) -> Result<Vec<u8>, DocumentLoadError> {
        let url = Self::validate_url(raw)?;
        tracing::debug!(url = %url, "fetching document");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DocumentLoadError::not_fetchable(raw, e))?;

        if !response.status().is_success() {
            return Err(DocumentLoadError::not_fetchable(
                raw,
                format!("server returned status {}", response.status()),
            ));
        }
        if response.content_length().is_some_and(|len| len > MAX_FILE_SIZE) {
            return Err(Self::too_large(raw));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DocumentLoadError::not_fetchable(raw, e))?;
        if body.len() as u64 > MAX_FILE_SIZE {
            return Err(Self::too_large(raw));
        }
        Ok(body.to_vec())
    }

    fn too_large(raw: &str) -> DocumentLoadError {
        DocumentLoadError::not_fetchable(
            raw,
            format!("response exceeds the maximum of {} bytes", MAX_FILE_SIZE),
        )
    }
}

#[async_trait]
impl DocumentLoader for HttpDocumentLoader {
    async fn load(
        &self,
        source: &DocumentSource,
        mode: MergeMode,
    ) -> Result<SbomDocument, DocumentLoadError> {
        match source {
            DocumentSource::Url(url) => {
                let bytes = self.fetch(url).await?;
                CycloneDxParser::parse(url, &bytes, mode)
            }
            other => Err(DocumentLoadError::not_fetchable(
                other.display_name(),
                "only URLs are handled by the HTTP loader",
            )),
        }
    }
}
