use crate::application::read_models::GraphReadModel;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// JsonGraphFormatter adapter emitting the read model as pretty-printed JSON
pub struct JsonGraphFormatter;

impl JsonGraphFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonGraphFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for JsonGraphFormatter {
    fn format(&self, model: &GraphReadModel) -> Result<String> {
        let mut json = serde_json::to_string_pretty(model)?;
        json.push('\n');
        Ok(json)
    }
}
