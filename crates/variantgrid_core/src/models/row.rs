//! Row model: one state with its ordered variant cells.

use std::fmt;

/// Stable row identifier, assigned once and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One state in the table.
///
/// Identity is `id`; the row's position in the table is tracked by the
/// owning [`crate::TableEditor`], not stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RowId,
    pub name: String,
    pub variants: Vec<String>,
}

impl Row {
    /// Create a row named after its id (`"State {id}"`).
    pub fn new(id: RowId, variants: Vec<String>) -> Self {
        Self {
            id,
            name: state_name(id),
            variants,
        }
    }
}

/// Display name assigned to a freshly created row.
pub fn state_name(id: RowId) -> String {
    format!("State {}", id)
}

/// Label written into every cell of a freshly added column.
pub fn variant_label(n: u64) -> String {
    format!("Variant {}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_row_is_named_after_its_id() {
        let row = Row::new(RowId(7), vec![variant_label(1)]);
        assert_eq!(row.name, "State 7");
        assert_eq!(row.variants, vec!["Variant 1".to_string()]);
    }

    #[test]
    fn row_id_displays_bare_number() {
        assert_eq!(RowId(42).to_string(), "42");
    }
}
