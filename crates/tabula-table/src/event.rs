//! Structural change events recorded by table hosts.

use crate::column_id::ColumnId;

/// A change on a table that may require re-running the column layout.
///
/// Tables record these only while a resize installer is attached. Width
/// changes made by the engine itself are never recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// Columns were added or removed.
    ColumnsChanged {
        added: Vec<ColumnId>,
        removed: Vec<ColumnId>,
    },
    /// The table's content width changed.
    WidthChanged { old: f64, new: f64 },
    /// The backing item collection was replaced or modified.
    ItemsChanged,
    /// Natural content widths were re-measured.
    ContentChanged,
    /// A column width was changed from outside the engine.
    ColumnWidthChanged { column: ColumnId, old: f64, new: f64 },
}
