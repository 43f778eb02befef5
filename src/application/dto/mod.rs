/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod document_record;
mod merge_outcome;
mod output_format;
mod walk_request;
mod walk_response;

pub use document_record::{DocumentRecord, DocumentStatus};
pub use merge_outcome::{MergeOutcome, NodeDetails};
pub use output_format::OutputFormat;
pub use walk_request::{DocumentRequest, WalkRequest, WalkRequestBuilder};
pub use walk_response::WalkResponse;
