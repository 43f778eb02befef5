use crate::application::read_models::GraphReadModel;
use crate::shared::Result;

/// GraphFormatter port for rendering the session read model
///
/// This port abstracts the output format so the CLI can switch between
/// machine-readable JSON and a human-readable Markdown report.
pub trait GraphFormatter {
    /// Formats the read model into a string
    ///
    /// # Arguments
    /// * `model` - The read model to render
    ///
    /// # Returns
    /// The formatted document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &GraphReadModel) -> Result<String>;
}
