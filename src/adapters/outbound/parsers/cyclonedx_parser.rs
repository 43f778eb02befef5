use crate::graph_merge::domain::{ComponentId, DependencyEdge, MergeMode, SbomDocument};
use crate::shared::error::DocumentLoadError;
use serde::Deserialize;

const CYCLONEDX_BOM_FORMAT: &str = "CycloneDX";

#[derive(Debug, Deserialize)]
struct CdxBom {
    #[serde(rename = "bomFormat")]
    bom_format: Option<String>,
    metadata: CdxMetadata,
    #[serde(default)]
    components: Vec<CdxComponent>,
    #[serde(default)]
    dependencies: Vec<CdxDependency>,
}

#[derive(Debug, Deserialize)]
struct CdxMetadata {
    component: CdxComponent,
}

#[derive(Debug, Deserialize)]
struct CdxComponent {
    #[serde(rename = "bom-ref")]
    bom_ref: Option<String>,
    purl: Option<String>,
    name: Option<String>,
}

impl CdxComponent {
    /// `bom-ref` when present, otherwise `purl`
    fn identity(&self) -> Option<&str> {
        self.bom_ref.as_deref().or(self.purl.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct CdxDependency {
    #[serde(rename = "ref")]
    reference: String,
    #[serde(rename = "dependsOn", default)]
    depends_on: Vec<String>,
}

/// CycloneDxParser turns CycloneDX JSON bytes into an `SbomDocument`
///
/// Only the parts the merge engine needs are read: the root component
/// identity, component identities and the dependency list. Everything else
/// in the BOM is ignored.
pub struct CycloneDxParser;

impl CycloneDxParser {
    pub fn parse(
        name: &str,
        bytes: &[u8],
        mode: MergeMode,
    ) -> Result<SbomDocument, DocumentLoadError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| DocumentLoadError::not_parseable(name, e))?;
        let bom: CdxBom = serde_json::from_value(value)
            .map_err(|e| DocumentLoadError::malformed(name, e))?;

        if let Some(format) = bom.bom_format.as_deref() {
            if format != CYCLONEDX_BOM_FORMAT {
                return Err(DocumentLoadError::malformed(
                    name,
                    format!("unsupported bomFormat '{}'", format),
                ));
            }
        }

        let root_id = Self::component_id(name, &bom.metadata.component, "metadata.component")?;

        let component_ids = bom
            .components
            .iter()
            .enumerate()
            .map(|(i, component)| {
                Self::component_id(name, component, &format!("components[{}]", i))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let edges = bom
            .dependencies
            .into_iter()
            .map(|dependency| {
                let from = Self::id(name, dependency.reference)?;
                let to = dependency
                    .depends_on
                    .into_iter()
                    .map(|id| Self::id(name, id))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok::<_, DocumentLoadError>(DependencyEdge::new(from, to))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let document = SbomDocument::new(name, root_id, component_ids, edges, mode)
            .map_err(|e| DocumentLoadError::malformed(name, e))?;

        tracing::debug!(
            document = name,
            root = %document.root_id(),
            components = document.component_count(),
            edges = document.edge_count(),
            "parsed CycloneDX document"
        );
        Ok(document)
    }

    fn component_id(
        name: &str,
        component: &CdxComponent,
        location: &str,
    ) -> Result<ComponentId, DocumentLoadError> {
        let identity = component.identity().ok_or_else(|| {
            DocumentLoadError::malformed(
                name,
                format!(
                    "{} ({}) has neither 'bom-ref' nor 'purl'",
                    location,
                    component.name.as_deref().unwrap_or("unnamed")
                ),
            )
        })?;
        Self::id(name, identity)
    }

    fn id(name: &str, value: impl Into<String>) -> Result<ComponentId, DocumentLoadError> {
        ComponentId::new(value).map_err(|e| DocumentLoadError::malformed(name, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::LoadFailureKind;

    const STAGE_ONE: &str = r#"{
        "bomFormat": "CycloneDX",
        "specVersion": "1.5",
        "metadata": { "component": { "bom-ref": "111", "name": "app" } },
        "components": [
            { "bom-ref": "222", "name": "lib-a" },
            { "purl": "pkg:npm/lib-b@1.0.0", "name": "lib-b" }
        ],
        "dependencies": [
            { "ref": "111", "dependsOn": ["222", "333", "222"] },
            { "ref": "222", "dependsOn": ["444"] },
            { "ref": "444" }
        ]
    }"#;

    fn parse(json: &str) -> Result<SbomDocument, DocumentLoadError> {
        CycloneDxParser::parse("doc.json", json.as_bytes(), MergeMode::Regular)
    }

    fn kind_of(json: &str) -> LoadFailureKind {
        parse(json).unwrap_err().kind()
    }

    #[test]
    fn test_parse_stage_document() {
        let document = parse(STAGE_ONE).unwrap();

        assert_eq!(document.name(), "doc.json");
        assert_eq!(document.root_id().as_str(), "111");
        assert_eq!(document.component_count(), 2);
        assert!(document.component_ids().contains("pkg:npm/lib-b@1.0.0"));
        assert_eq!(document.edge_count(), 3);
        assert_eq!(document.mode(), MergeMode::Regular);
    }

    #[test]
    fn test_parse_deduplicates_depends_on_and_defaults_to_empty() {
        let document = parse(STAGE_ONE).unwrap();
        let to: Vec<&str> = document.edges()[0].to().iter().map(|id| id.as_str()).collect();

        assert_eq!(to, vec!["222", "333"]);
        assert!(document.edges()[2].to().is_empty());
    }

    #[test]
    fn test_parse_stamps_requested_mode() {
        let document =
            CycloneDxParser::parse("doc.json", STAGE_ONE.as_bytes(), MergeMode::Force).unwrap();
        assert!(document.mode().is_force());
    }

    #[test]
    fn test_parse_purl_fallback_for_root() {
        let document = parse(r#"{"metadata":{"component":{"purl":"pkg:cargo/app@1"}}}"#).unwrap();
        assert_eq!(document.root_id().as_str(), "pkg:cargo/app@1");
        assert_eq!(document.edge_count(), 0);
    }

    #[test]
    fn test_invalid_json_is_not_parseable() {
        assert_eq!(kind_of("{ not json"), LoadFailureKind::NotParseable);
        assert_eq!(kind_of(""), LoadFailureKind::NotParseable);
    }

    #[test]
    fn test_missing_metadata_is_malformed() {
        assert_eq!(kind_of(r#"{"components": []}"#), LoadFailureKind::MalformedShape);
        assert_eq!(kind_of("[]"), LoadFailureKind::MalformedShape);
    }

    #[test]
    fn test_component_without_identity_is_malformed() {
        let error = parse(
            r#"{"metadata":{"component":{"bom-ref":"a"}},"components":[{"name":"anon"}]}"#,
        )
        .unwrap_err();

        assert_eq!(error.kind(), LoadFailureKind::MalformedShape);
        assert!(error.details().contains("components[0]"));
        assert!(error.details().contains("anon"));
    }

    #[test]
    fn test_wrong_bom_format_is_malformed() {
        let error = parse(r#"{"bomFormat":"SPDX","metadata":{"component":{"bom-ref":"a"}}}"#)
            .unwrap_err();
        assert_eq!(error.kind(), LoadFailureKind::MalformedShape);
        assert!(error.details().contains("SPDX"));
    }

    #[test]
    fn test_duplicate_dependency_ref_is_malformed() {
        let error = parse(
            r#"{"metadata":{"component":{"bom-ref":"a"}},
                "dependencies":[{"ref":"a","dependsOn":["b"]},{"ref":"a","dependsOn":["c"]}]}"#,
        )
        .unwrap_err();
        assert_eq!(error.kind(), LoadFailureKind::MalformedShape);
        assert!(error.details().contains("'a'"));
    }

    #[test]
    fn test_empty_identifier_is_malformed() {
        assert_eq!(
            kind_of(r#"{"metadata":{"component":{"bom-ref":"a"}},"dependencies":[{"ref":""}]}"#),
            LoadFailureKind::MalformedShape
        );
    }

    #[test]
    fn test_unusual_identifiers_are_kept_verbatim() {
        let long_id = "x".repeat(3000);
        let json = serde_json::json!({
            "metadata": { "component": { "bom-ref": " " } },
            "components": [ { "bom-ref": "a\tb" }, { "purl": long_id.as_str() } ],
            "dependencies": [ { "ref": " ", "dependsOn": ["a\tb", long_id.as_str()] } ]
        });

        let document =
            CycloneDxParser::parse("odd.json", json.to_string().as_bytes(), MergeMode::Regular)
                .unwrap();

        assert_eq!(document.root_id().as_str(), " ");
        assert_eq!(document.component_count(), 2);
        assert_eq!(document.edges()[0].to()[0].as_str(), "a\tb");
        assert_eq!(document.edges()[0].to()[1].as_str(), long_id);
    }

    #[test]
    fn test_missing_ref_is_malformed() {
        assert_eq!(
            kind_of(r#"{"metadata":{"component":{"bom-ref":"a"}},"dependencies":[{"dependsOn":[]}]}"#),
            LoadFailureKind::MalformedShape
        );
    }
}
