/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod document_loader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use document_loader::{DocumentLoader, DocumentSource};
pub use formatter::GraphFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
