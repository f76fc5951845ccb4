//! Data models for the editable table.

/// Row (state) model and its stable identifier.
pub mod row;
