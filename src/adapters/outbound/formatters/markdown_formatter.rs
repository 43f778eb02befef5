use crate::application::dto::DocumentStatus;
use crate::application::read_models::GraphReadModel;
use crate::graph_merge::domain::EdgeRef;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use std::fmt::Write;

const DOCUMENT_TABLE_HEADER: &str =
    "| # | Document | Root | Components | Edges | Mode | Status |\n|---|----------|------|------------|-------|------|--------|\n";
const NODE_TABLE_HEADER: &str =
    "| Node | Level | X | Y | Dependencies | Dependents | Role |\n|------|-------|---|---|--------------|------------|------|\n";

/// MarkdownGraphFormatter adapter producing a human-readable graph report
pub struct MarkdownGraphFormatter;

impl MarkdownGraphFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and line breaks for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|")
            .replace("\r\n", " ")
            .replace(['\r', '\n'], " ")
    }

    /// Wraps an identifier in a code span that survives backticks in the text
    ///
    /// The fence is one backtick longer than the longest run inside `text`;
    /// a leading or trailing backtick gets a padding space.
    fn code_span(text: &str) -> String {
        let longest_run = text
            .split(|c| c != '`')
            .map(str::len)
            .max()
            .unwrap_or(0);
        let fence = "`".repeat(longest_run + 1);
        let text = text.replace(['\r', '\n'], " ");
        if text.starts_with('`') || text.ends_with('`') {
            format!("{} {} {}", fence, text, fence)
        } else {
            format!("{}{}{}", fence, text, fence)
        }
    }

    fn write_history(out: &mut String, model: &GraphReadModel) -> std::fmt::Result {
        let history = &model.history;
        writeln!(out, "## History\n")?;
        writeln!(
            out,
            "- Entry: {} of {}",
            history.position,
            history.total_entries.saturating_sub(1)
        )?;
        writeln!(out, "- Documents merged: {}", history.document_count)?;
        if history.is_at_tip {
            writeln!(out, "- Showing the latest state")?;
        } else {
            writeln!(out, "- Viewing a past state")?;
        }
        writeln!(out)
    }

    fn write_documents(out: &mut String, model: &GraphReadModel) -> std::fmt::Result {
        writeln!(out, "## Documents\n")?;
        if model.documents.is_empty() {
            return writeln!(out, "No documents were processed.\n");
        }

        out.push_str(DOCUMENT_TABLE_HEADER);
        for (i, record) in model.documents.iter().enumerate() {
            let (root, components, edges, mode) = match &record.summary {
                Some(summary) => (
                    Self::escape_cell(summary.root_id.as_str()),
                    summary.component_count.to_string(),
                    summary.edge_count.to_string(),
                    summary.mode.to_string(),
                ),
                None => ("-".into(), "-".into(), "-".into(), "-".into()),
            };
            let status = match &record.status {
                DocumentStatus::Merged { document_count } => {
                    format!("merged (#{})", document_count)
                }
                DocumentStatus::Rejected { reason } => {
                    format!("rejected: {}", Self::escape_cell(reason))
                }
                DocumentStatus::LoadFailed { kind, reason } => {
                    format!("{}: {}", kind, Self::escape_cell(reason))
                }
            };
            writeln!(
                out,
                "| {} | {} | {} | {} | {} | {} | {} |",
                i + 1,
                Self::escape_cell(&record.name),
                root,
                components,
                edges,
                mode,
                status
            )?;
        }
        writeln!(out)
    }

    fn write_nodes(out: &mut String, model: &GraphReadModel) -> std::fmt::Result {
        writeln!(out, "## Nodes\n")?;
        if model.nodes.is_empty() {
            return writeln!(out, "The graph is empty.\n");
        }

        out.push_str(NODE_TABLE_HEADER);
        for node in &model.nodes {
            let mut roles = Vec::new();
            if node.is_root {
                roles.push("root");
            }
            if node.is_leaf {
                roles.push("leaf");
            }
            if node.highlighted {
                roles.push("highlighted");
            }
            writeln!(
                out,
                "| {} | {} | {:.1} | {:.1} | {} | {} | {} |",
                Self::escape_cell(&node.id),
                node.level,
                node.x,
                node.y,
                node.dependency_count,
                node.dependent_count,
                roles.join(", ")
            )?;
        }
        writeln!(out)
    }

    fn write_edges(out: &mut String, title: &str, edges: &[EdgeRef]) -> std::fmt::Result {
        if edges.is_empty() {
            return Ok(());
        }
        writeln!(out, "{}\n", title)?;
        for edge in edges {
            writeln!(
                out,
                "- {} → {}",
                Self::code_span(edge.from.as_str()),
                Self::code_span(edge.to.as_str())
            )?;
        }
        writeln!(out)
    }

    fn write_changes(out: &mut String, model: &GraphReadModel) -> std::fmt::Result {
        let changes = &model.changes;
        writeln!(out, "## Changes in this step\n")?;
        if changes.is_empty() {
            return writeln!(out, "No changes.\n");
        }
        for (label, ids) in [
            ("Added nodes", changes.added_nodes()),
            ("Removed nodes", changes.removed_nodes()),
        ] {
            if !ids.is_empty() {
                let list: Vec<String> =
                    ids.iter().map(|id| Self::code_span(id.as_str())).collect();
                writeln!(out, "- {}: {}", label, list.join(", "))?;
            }
        }
        writeln!(out)?;
        Self::write_edges(out, "### Added edges", changes.added_edges())?;
        Self::write_edges(out, "### Removed edges", changes.removed_edges())
    }

    fn render(model: &GraphReadModel) -> std::result::Result<String, std::fmt::Error> {
        let mut out = String::new();
        writeln!(out, "# SBOM Dependency Graph\n")?;
        writeln!(
            out,
            "Generated by {} {} at {}\n",
            model.metadata.tool_name, model.metadata.tool_version, model.metadata.generated_at
        )?;
        Self::write_history(&mut out, model)?;
        Self::write_documents(&mut out, model)?;
        Self::write_nodes(&mut out, model)?;
        Self::write_edges(&mut out, "## Edges", &model.edges)?;
        Self::write_changes(&mut out, model)?;
        Ok(out)
    }
}

impl Default for MarkdownGraphFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for MarkdownGraphFormatter {
    fn format(&self, model: &GraphReadModel) -> Result<String> {
        Ok(Self::render(model)?)
    }
}
