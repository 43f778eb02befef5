//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of the session state for renderers.

mod graph_read_model;
mod graph_read_model_builder;

pub use graph_read_model::{
    GraphReadModel, HistoryView, NodeView, ReportMetadataView, ViewportView,
};
pub use graph_read_model_builder::GraphReadModelBuilder;
