/// Mock implementations for testing
mod mock_document_loader;
mod mock_progress_reporter;

pub use mock_document_loader::MockDocumentLoader;
pub use mock_progress_reporter::MockProgressReporter;
