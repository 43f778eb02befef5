/// Filesystem adapters for document loading and report output
mod document_loader;
mod file_writer;

pub use document_loader::FileSystemDocumentLoader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
