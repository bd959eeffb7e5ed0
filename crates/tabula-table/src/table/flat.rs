use crate::adapter::{ContentMeasurer, TableAdapter};
use crate::column::{Column, ColumnSet};
use crate::column_id::ColumnId;
use crate::error::TableResult;
use crate::event::TableEvent;
use crate::fit::{self, VisibleRow};
use crate::state::TableState;
use crate::viewport::Viewport;

/// A table over a flat list of rows.
///
/// # Example
/// ```
/// use tabula_table::{Column, FlatTable, ResizeEngine, TableAdapter, Viewport};
///
/// let mut table: FlatTable<&str> = FlatTable::new([
///     Column::new("Id").fixed_width(40.0),
///     Column::new("Name").remaining_width(),
/// ])
/// .unwrap()
/// .with_viewport(Viewport::new(400.0, 300.0));
///
/// assert!(ResizeEngine::default().resize_all(&mut table));
/// assert_eq!(table.columns().total_width(), 400.0);
/// ```
pub struct FlatTable<R> {
    columns: ColumnSet,
    state: TableState,
    items: Vec<R>,
    viewport: Viewport,
    measurer: Option<Box<dyn ContentMeasurer<R>>>,
}

impl<R> FlatTable<R> {
    /// Create an empty table with the given columns.
    pub fn new(columns: impl IntoIterator<Item = Column>) -> TableResult<Self> {
        Ok(Self {
            columns: ColumnSet::from_columns(columns)?,
            state: TableState::new(),
            items: Vec::new(),
            viewport: Viewport::default(),
            measurer: None,
        })
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = R>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    pub fn with_measurer(mut self, measurer: impl ContentMeasurer<R> + 'static) -> Self {
        self.measurer = Some(Box::new(measurer));
        self
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replace the viewport, recording a width change if the content width
    /// moved.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.track_width(|table| table.viewport = viewport);
    }

    /// Resize the viewport horizontally.
    pub fn set_width(&mut self, width: f64) {
        let viewport = Viewport {
            width,
            ..self.viewport
        };
        self.set_viewport(viewport);
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Replace all rows.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = R>) {
        self.track_width(|table| table.items = items.into_iter().collect());
        self.state.record(TableEvent::ItemsChanged);
    }

    /// Append one row.
    pub fn push_item(&mut self, item: R) {
        self.track_width(|table| table.items.push(item));
        self.state.record(TableEvent::ItemsChanged);
    }

    /// Append a top-level column (or group).
    pub fn add_column(&mut self, column: Column) -> TableResult<()> {
        super::add_column(&mut self.columns, &mut self.state, column)
    }

    /// Remove a column, pruning its drag delta.
    pub fn remove_column(&mut self, id: ColumnId) -> TableResult<Column> {
        super::remove_column(&mut self.columns, &mut self.state, id)
    }

    pub fn set_measurer(&mut self, measurer: impl ContentMeasurer<R> + 'static) {
        self.measurer = Some(Box::new(measurer));
    }

    /// Measure the given content-fit columns over at most `max_rows` rows
    /// and request a recompute.
    ///
    /// Returns the number of columns re-measured; zero without a measurer.
    pub fn fit_columns_to_content(&mut self, ids: &[ColumnId], max_rows: usize) -> usize {
        let reported = self.measure(ids, max_rows);
        if reported > 0 {
            self.state.record(TableEvent::ContentChanged);
        }
        reported
    }

    fn measure(&mut self, ids: &[ColumnId], max_rows: usize) -> usize {
        let Some(measurer) = self.measurer.as_deref() else {
            return 0;
        };
        let rows: Vec<VisibleRow<'_, R>> =
            self.items.iter().take(max_rows).map(|row| (0, row)).collect();
        fit::fit_columns(&mut self.columns, measurer, ids, &rows, 0.0)
    }

    fn track_width(&mut self, mutate: impl FnOnce(&mut Self)) {
        let old = self.content_width();
        mutate(self);
        let new = self.content_width();
        super::record_width_change(&mut self.state, old, new);
    }
}

impl<R> TableAdapter for FlatTable<R> {
    fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    fn columns_mut(&mut self) -> &mut ColumnSet {
        &mut self.columns
    }

    fn state(&self) -> &TableState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TableState {
        &mut self.state
    }

    fn parts_mut(&mut self) -> (&mut ColumnSet, &mut TableState) {
        (&mut self.columns, &mut self.state)
    }

    fn content_width(&self) -> f64 {
        self.viewport.content_width(self.items.len())
    }

    fn refresh_content_widths(&mut self, ids: &[ColumnId], max_rows: usize) {
        self.measure(ids, max_rows);
    }
}
