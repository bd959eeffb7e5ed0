//! Error and rejection types.

use crate::column_id::ColumnId;

/// Errors from structural changes to a table's column set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A column with this ID already exists in the table.
    DuplicateColumn(ColumnId),
    /// No column with this ID exists in the table.
    ColumnNotFound(ColumnId),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::DuplicateColumn(id) => write!(f, "Duplicate column {}", id),
            TableError::ColumnNotFound(id) => write!(f, "Column {} not found", id),
        }
    }
}

impl std::error::Error for TableError {}

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Why a single-column drag was rejected.
///
/// A rejected drag never changes any width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeRejection {
    /// The table is already inside a resize.
    Reentrant,
    /// The column is not part of the table.
    UnknownColumn(ColumnId),
    /// The column is a group; only leaf columns can be dragged.
    NotALeaf(ColumnId),
    /// The column has a fixed width.
    NotResizable(ColumnId),
    /// The requested width is outside the column's bounds.
    IllegalWidth {
        column: ColumnId,
        target: f64,
        min: f64,
        max: f64,
    },
    /// No resizable column to the right can absorb the opposite delta.
    NoNeighbor(ColumnId),
}

impl std::fmt::Display for ResizeRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResizeRejection::Reentrant => write!(f, "Table is already resizing"),
            ResizeRejection::UnknownColumn(id) => write!(f, "Column {} not found", id),
            ResizeRejection::NotALeaf(id) => write!(f, "Column {} is a group", id),
            ResizeRejection::NotResizable(id) => write!(f, "Column {} has a fixed width", id),
            ResizeRejection::IllegalWidth {
                column,
                target,
                min,
                max,
            } => write!(
                f,
                "Width {} for column {} is outside {}..={}",
                target, column, min, max
            ),
            ResizeRejection::NoNeighbor(id) => {
                write!(f, "No resizable column right of {} can absorb the change", id)
            }
        }
    }
}

impl std::error::Error for ResizeRejection {}
