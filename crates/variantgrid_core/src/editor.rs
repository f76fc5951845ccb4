//! In-memory table owner: rows, column operations, and reordering.

use crate::error::GridError;
use crate::models::row::{variant_label, Row, RowId};
use tracing::debug;

/// Owns the ordered rows plus the counters that seed new ids and labels.
///
/// Every mutation goes through the methods below, so all rows keep the same
/// number of variant cells after each call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEditor {
    rows: Vec<Row>,
    next_row_id: u64,
    next_variant_id: u64,
}

impl Default for TableEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TableEditor {
    /// Create the initial table: one row (`State 1`) with one `Variant 1` cell.
    pub fn new() -> Self {
        Self {
            rows: vec![Row::new(RowId(1), vec![variant_label(1)])],
            next_row_id: 2,
            next_variant_id: 2,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Current position of the row with `id`, if present.
    pub fn index_of(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns, taken from the first row (0 for an empty table).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|row| row.variants.len()).unwrap_or(0)
    }

    /// Positional header labels: `Variant 1..=column_count`.
    pub fn column_headers(&self) -> Vec<String> {
        (1..=self.column_count() as u64).map(variant_label).collect()
    }

    pub fn next_row_id(&self) -> RowId {
        RowId(self.next_row_id)
    }

    pub fn next_variant_id(&self) -> u64 {
        self.next_variant_id
    }

    /// Append a new row with a fresh id.
    ///
    /// The new row copies the first row's cell labels so every column reads
    /// the same in all rows. An empty table gets the initial `Variant 1` cell.
    ///
    /// # Returns
    /// The id assigned to the new row.
    pub fn add_row(&mut self) -> RowId {
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;
        let variants = match self.rows.first() {
            Some(first) => first.variants.clone(),
            None => vec![variant_label(1)],
        };
        debug!(row_id = id.0, columns = variants.len(), "added row");
        self.rows.push(Row::new(id, variants));
        id
    }

    /// Remove the row with `id`.
    ///
    /// # Returns
    /// The removed row, or `None` when no row has that id (a no-op).
    pub fn delete_row(&mut self, id: RowId) -> Option<Row> {
        let index = self.index_of(id)?;
        let removed = self.rows.remove(index);
        debug!(row_id = id.0, index, "deleted row");
        Some(removed)
    }

    /// Append one `Variant {n}` cell to every row, `n` taken from the counter.
    ///
    /// The counter advances once per call, even for an empty table.
    ///
    /// # Returns
    /// The label written into the new column.
    pub fn add_column(&mut self) -> String {
        let label = variant_label(self.next_variant_id);
        self.next_variant_id += 1;
        for row in &mut self.rows {
            row.variants.push(label.clone());
        }
        debug!(label = %label, rows = self.rows.len(), "added column");
        label
    }

    /// Drop the last cell of every row. Rows that are already empty stay empty.
    ///
    /// # Returns
    /// How many rows actually lost a cell.
    pub fn delete_column(&mut self) -> usize {
        let removed = self
            .rows
            .iter_mut()
            .filter_map(|row| row.variants.pop())
            .count();
        debug!(rows_trimmed = removed, "deleted last column");
        removed
    }

    /// Move the row at `source` so it ends up at `target`; rows in between shift.
    ///
    /// # Errors
    /// Returns [`GridError::RowIndexOutOfBounds`] when either index is not a
    /// current row position. The table is left untouched in that case.
    pub fn move_row(&mut self, source: usize, target: usize) -> Result<(), GridError> {
        let len = self.rows.len();
        for index in [source, target] {
            if index >= len {
                return Err(GridError::RowIndexOutOfBounds { index, len });
            }
        }
        if source == target {
            return Ok(());
        }
        let row = self.rows.remove(source);
        debug!(row_id = row.id.0, source, target, "moved row");
        self.rows.insert(target, row);
        Ok(())
    }
}
