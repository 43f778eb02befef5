use crate::application::read_models::GraphReadModel;

/// WalkResponse - Response DTO from the walk-documents use case
#[derive(Debug, Clone)]
pub struct WalkResponse {
    /// Read model of the displayed state
    pub read_model: GraphReadModel,
    pub merged_count: usize,
    pub rejected_count: usize,
    pub failed_count: usize,
}

impl WalkResponse {
    /// True when every requested document was merged
    pub fn all_merged(&self) -> bool {
        self.rejected_count == 0 && self.failed_count == 0
    }
}
