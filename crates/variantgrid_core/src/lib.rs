//! Core domain library for VariantGrid (table model, drag gestures, config).

/// Configuration loading and defaults.
pub mod config;
/// Owner of the table and its id/label counters.
pub mod editor;
/// Error types for table operations and configuration.
pub mod error;
/// Drag-to-reorder gesture state.
pub mod gesture;
/// Row and id types shared by the editor and the UI.
pub mod models;

pub use config::Config;
pub use editor::TableEditor;
pub use error::GridError;
pub use gesture::{DragGesture, RowMove};
pub use models::row::{state_name, variant_label, Row, RowId};
