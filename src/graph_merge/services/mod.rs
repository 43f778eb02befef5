mod layout_engine;
mod merge_engine;

pub use layout_engine::{GraphLayout, LayoutEngine, NodePosition};
pub use merge_engine::MergeEngine;
