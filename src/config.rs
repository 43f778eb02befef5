//! Configuration file support for sbom-merge-graph.
//!
//! A YAML `sbom-merge-graph.config.yml` file describes a walk: which
//! documents to merge and in which mode, plus output and viewport settings.

use anyhow::{bail, Context};
use sbom_merge_graph::application::dto::DocumentRequest;
use sbom_merge_graph::graph_merge::domain::MergeMode;
use sbom_merge_graph::ports::outbound::DocumentSource;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use sbom_merge_graph::shared::error::GraphMergeError;
use sbom_merge_graph::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-merge-graph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub viewport: Option<ViewportConfig>,
    pub documents: Option<Vec<DocumentEntry>>,
    pub highlight: Option<Vec<String>>,
    /// Directory relative document paths are resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Viewport overrides; unset fields keep their defaults.
#[derive(Debug, Deserialize, Default, Clone, Copy)]
pub struct ViewportConfig {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin: Option<f64>,
}

/// One document of the walk, given by exactly one of `path` or `url`.
#[derive(Debug, Deserialize)]
pub struct DocumentEntry {
    pub path: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub force: bool,
}

impl ConfigFile {
    /// Document requests in file order, with paths resolved against `base_dir`.
    pub fn document_requests(&self) -> Vec<DocumentRequest> {
        self.documents
            .iter()
            .flatten()
            .filter_map(|entry| {
                let source = match (&entry.path, &entry.url) {
                    (Some(path), None) => {
                        let path = Path::new(path);
                        if path.is_absolute() {
                            DocumentSource::Path(path.to_path_buf())
                        } else {
                            DocumentSource::Path(self.base_dir.join(path))
                        }
                    }
                    (None, Some(url)) => DocumentSource::Url(url.clone()),
                    _ => return None,
                };
                Some(DocumentRequest::new(
                    source,
                    MergeMode::from_force_flag(entry.force),
                ))
            })
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| GraphMergeError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    config.base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = config.format.as_deref() {
        if let Err(reason) = format.parse::<sbom_merge_graph::application::dto::OutputFormat>() {
            bail!("Invalid config: format: {}", reason);
        }
    }

    if let Some(viewport) = config.viewport {
        for (field, value) in [
            ("width", viewport.width),
            ("height", viewport.height),
        ] {
            if let Some(value) = value {
                if !(value.is_finite() && value > 0.0) {
                    bail!(
                        "Invalid config: viewport.{} must be a positive number (got {}).",
                        field,
                        value
                    );
                }
            }
        }
        if let Some(margin) = viewport.margin {
            if !(margin.is_finite() && margin >= 0.0) {
                bail!(
                    "Invalid config: viewport.margin must not be negative (got {}).",
                    margin
                );
            }
        }
    }

    for (i, entry) in config.documents.iter().flatten().enumerate() {
        let target = match (&entry.path, &entry.url) {
            (Some(path), None) => path,
            (None, Some(url)) => url,
            _ => bail!(
                "Invalid config: documents[{}] must have exactly one of 'path' or 'url'.\n\n\
                 💡 Hint: Use `- path: stage-1.json` or `- url: https://example.com/bom.json`.",
                i
            ),
        };
        if target.trim().is_empty() {
            bail!(
                "Invalid config: documents[{}] must not have an empty path or url.",
                i
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
    }
}
