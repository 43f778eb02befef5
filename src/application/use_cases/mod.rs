/// Use cases module containing application business logic orchestration
mod graph_session;
mod walk_documents;

pub use graph_session::GraphSession;
pub use walk_documents::WalkDocumentsUseCase;
