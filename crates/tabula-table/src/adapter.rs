//! Capability traits implemented by table hosts.
//!
//! The engine is written once against [`TableAdapter`]. A host only has to
//! hand out its columns, its resize state and its content width; width
//! write-back, leaf listing and the feedback-loop guard are provided.

use crate::column::{Column, ColumnSet};
use crate::column_id::ColumnId;
use crate::event::TableEvent;
use crate::state::TableState;

/// A table whose columns can be sized by the
/// [`ResizeEngine`](crate::ResizeEngine).
///
/// # Example
/// ```
/// use tabula_table::{Column, FlatTable, TableAdapter, Viewport};
///
/// let mut table: FlatTable<String> =
///     FlatTable::new([Column::new("A"), Column::new("B")]).unwrap();
/// table.set_viewport(Viewport::new(300.0, 200.0));
///
/// assert_eq!(table.content_columns().len(), 2);
/// assert_eq!(table.content_width(), 300.0);
/// ```
pub trait TableAdapter {
    /// Get the column set.
    fn columns(&self) -> &ColumnSet;

    /// Get the column set mutably.
    fn columns_mut(&mut self) -> &mut ColumnSet;

    /// Get the resize state.
    fn state(&self) -> &TableState;

    /// Get the resize state mutably.
    fn state_mut(&mut self) -> &mut TableState;

    /// Borrow the column set and the resize state at the same time.
    fn parts_mut(&mut self) -> (&mut ColumnSet, &mut TableState);

    /// Horizontal space available for the columns.
    fn content_width(&self) -> f64;

    /// IDs of the leaf columns in display order.
    fn content_columns(&self) -> Vec<ColumnId> {
        self.columns().leaf_ids()
    }

    /// Find a column by ID.
    fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns().get(id)
    }

    /// Check if an engine invocation is running on this table.
    fn is_resizing(&self) -> bool {
        self.state().is_resizing()
    }

    /// Write a column width back, clamped to the column's bounds.
    ///
    /// Outside a resize, a change is recorded as
    /// [`TableEvent::ColumnWidthChanged`] so an attached installer can fold
    /// it into the column's delta. Returns the applied width, or `None` if
    /// the column does not exist.
    fn set_column_width(&mut self, id: ColumnId, width: f64) -> Option<f64> {
        let (columns, state) = self.parts_mut();
        let column = columns.get_mut(id)?;
        let old = column.width();
        let new = column.set_width(width);
        if new != old && !state.is_resizing() {
            state.record(TableEvent::ColumnWidthChanged {
                column: id,
                old,
                new,
            });
        }
        Some(new)
    }

    /// Re-measure the natural width of the given content-fit columns,
    /// looking at no more than `max_rows` rows.
    ///
    /// Hosts without a content measurer keep the default no-op.
    fn refresh_content_widths(&mut self, ids: &[ColumnId], max_rows: usize) {
        let _ = (ids, max_rows);
    }
}

/// Measures the natural width of header and cell content.
///
/// Text shaping lives outside this crate; hosts plug in whatever measures
/// their rendered cells.
pub trait ContentMeasurer<R> {
    /// Width of the column header in pixels.
    fn measure_header(&self, column: &Column) -> f64;

    /// Width of one cell of `row` in pixels.
    fn measure_cell(&self, column: &Column, row: &R) -> f64;
}
