//! Concrete table hosts.
//!
//! [`FlatTable`] holds a list of rows, [`TreeTable`] a tree of expandable
//! items. Both implement [`TableAdapter`](crate::TableAdapter) and record the
//! same [`TableEvent`]s, so the engine and installer treat them alike.

mod flat;
mod tree;

pub use flat::FlatTable;
pub use tree::{DEFAULT_INDENT, TreeItem, TreeTable};

use tabula_core::alloc::HashSet;

use crate::column::{Column, ColumnSet};
use crate::column_id::ColumnId;
use crate::error::TableResult;
use crate::event::TableEvent;
use crate::state::TableState;

fn column_and_children(column: &Column) -> Vec<ColumnId> {
    std::iter::once(column.id())
        .chain(column.children().iter().map(Column::id))
        .collect()
}

pub(crate) fn add_column(
    columns: &mut ColumnSet,
    state: &mut TableState,
    column: Column,
) -> TableResult<()> {
    let added = column_and_children(&column);
    columns.push(column)?;
    tracing::debug!(columns = added.len(), "Added column");
    state.record(TableEvent::ColumnsChanged {
        added,
        removed: Vec::new(),
    });
    Ok(())
}

/// Remove a column and prune the deltas and queued width changes of
/// everything that left with it.
pub(crate) fn remove_column(
    columns: &mut ColumnSet,
    state: &mut TableState,
    id: ColumnId,
) -> TableResult<Column> {
    let column = columns.remove(id)?;
    let removed = column_and_children(&column);
    state.forget_columns(&removed.iter().copied().collect::<HashSet<_>>());
    tracing::debug!(columns = removed.len(), "Removed column");
    state.record(TableEvent::ColumnsChanged {
        added: Vec::new(),
        removed,
    });
    Ok(column)
}

pub(crate) fn record_width_change(state: &mut TableState, old: f64, new: f64) {
    if old != new {
        state.record(TableEvent::WidthChanged { old, new });
    }
}
