/// Network adapters for fetching remote documents
mod http_document_loader;

pub use http_document_loader::HttpDocumentLoader;
