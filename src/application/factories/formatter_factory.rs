use crate::adapters::outbound::formatters::{JsonGraphFormatter, MarkdownGraphFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::GraphFormatter;

/// Factory for creating graph report formatters
///
/// Selecting the adapter for an output format is an application concern, so
/// the factory lives here rather than in the CLI.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use sbom_merge_graph::application::dto::OutputFormat;
    /// use sbom_merge_graph::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn GraphFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonGraphFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownGraphFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering graph as JSON...",
            OutputFormat::Markdown => "📝 Rendering graph as Markdown...",
        }
    }
}
