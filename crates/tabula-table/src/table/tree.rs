use crate::adapter::{ContentMeasurer, TableAdapter};
use crate::column::{Column, ColumnSet};
use crate::column_id::ColumnId;
use crate::error::TableResult;
use crate::event::TableEvent;
use crate::fit::{self, VisibleRow};
use crate::state::TableState;
use crate::viewport::Viewport;

/// Default horizontal indent per tree level in pixels.
pub const DEFAULT_INDENT: f64 = 18.0;

/// A node of a [`TreeTable`].
///
/// Items start collapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeItem<R> {
    value: R,
    children: Vec<TreeItem<R>>,
    expanded: bool,
}

impl<R> TreeItem<R> {
    pub fn new(value: R) -> Self {
        Self {
            value,
            children: Vec::new(),
            expanded: false,
        }
    }

    pub fn child(mut self, child: TreeItem<R>) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeItem<R>>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn value(&self) -> &R {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut R {
        &mut self.value
    }

    pub fn children(&self) -> &[TreeItem<R>] {
        &self.children
    }

    pub fn push_child(&mut self, child: TreeItem<R>) {
        self.children.push(child);
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Follow child indices down from this item.
    pub fn descendant_mut(&mut self, path: &[usize]) -> Option<&mut TreeItem<R>> {
        match path.split_first() {
            None => Some(self),
            Some((&index, rest)) => self.children.get_mut(index)?.descendant_mut(rest),
        }
    }

    /// Number of rows this item shows: itself plus its visible descendants.
    fn visible_count(&self) -> usize {
        1 + self.visible_children_count()
    }

    fn visible_children_count(&self) -> usize {
        if self.expanded {
            self.children.iter().map(TreeItem::visible_count).sum()
        } else {
            0
        }
    }

    fn collect_visible<'a>(&'a self, depth: usize, limit: usize, out: &mut Vec<VisibleRow<'a, R>>) {
        if out.len() >= limit {
            return;
        }
        out.push((depth, &self.value));
        if self.expanded {
            for child in &self.children {
                child.collect_visible(depth + 1, limit, out);
            }
        }
    }
}

/// A table over a tree of expandable items.
///
/// Only expanded items contribute rows: the visible row count decides
/// whether the vertical scrollbar eats into the content width, and content
/// measurement only looks at visible rows. The first leaf column is
/// indented by `indent` pixels per level.
///
/// With the root hidden, its children are shown as top-level rows.
pub struct TreeTable<R> {
    columns: ColumnSet,
    state: TableState,
    root: Option<TreeItem<R>>,
    show_root: bool,
    indent: f64,
    viewport: Viewport,
    measurer: Option<Box<dyn ContentMeasurer<R>>>,
}

impl<R> TreeTable<R> {
    /// Create a table without a root item.
    pub fn new(columns: impl IntoIterator<Item = Column>) -> TableResult<Self> {
        Ok(Self {
            columns: ColumnSet::from_columns(columns)?,
            state: TableState::new(),
            root: None,
            show_root: true,
            indent: DEFAULT_INDENT,
            viewport: Viewport::default(),
            measurer: None,
        })
    }

    pub fn with_root(mut self, root: TreeItem<R>) -> Self {
        self.root = Some(root);
        self
    }

    pub fn with_show_root(mut self, show_root: bool) -> Self {
        self.show_root = show_root;
        self
    }

    pub fn with_indent(mut self, indent: f64) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_measurer(mut self, measurer: impl ContentMeasurer<R> + 'static) -> Self {
        self.measurer = Some(Box::new(measurer));
        self
    }

    pub fn root(&self) -> Option<&TreeItem<R>> {
        self.root.as_ref()
    }

    /// Replace the root item.
    pub fn set_root(&mut self, root: Option<TreeItem<R>>) {
        self.track_width(|table| table.root = root);
        self.state.record(TableEvent::ItemsChanged);
    }

    pub fn show_root(&self) -> bool {
        self.show_root
    }

    pub fn set_show_root(&mut self, show_root: bool) {
        if self.show_root == show_root {
            return;
        }
        self.track_width(|table| table.show_root = show_root);
        self.state.record(TableEvent::ItemsChanged);
    }

    pub fn indent(&self) -> f64 {
        self.indent
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

    /// Expand or collapse the item at `path` (child indices below the root).
    ///
    /// Returns `false` if no item lives at `path`.
    pub fn set_expanded(&mut self, path: &[usize], expanded: bool) -> bool {
        let Some(item) = self
            .root
            .as_mut()
            .and_then(|root| root.descendant_mut(path))
        else {
            return false;
        };
        if item.expanded == expanded {
            return true;
        }
        self.track_width(|table| {
            if let Some(item) = table.root.as_mut().and_then(|root| root.descendant_mut(path)) {
                item.expanded = expanded;
            }
        });
        self.state.record(TableEvent::ItemsChanged);
        true
    }

    /// Mutate the item tree in place.
    ///
    /// Returns `false` if the table has no root.
    pub fn update_root(&mut self, update: impl FnOnce(&mut TreeItem<R>)) -> bool {
        if self.root.is_none() {
            return false;
        }
        self.track_width(|table| {
            if let Some(root) = table.root.as_mut() {
                update(root);
            }
        });
        self.state.record(TableEvent::ItemsChanged);
        true
    }

    /// Number of rows currently shown.
    pub fn visible_row_count(&self) -> usize {
        match &self.root {
            None => 0,
            Some(root) if self.show_root => root.visible_count(),
            Some(root) => root.children.iter().map(TreeItem::visible_count).sum(),
        }
    }

    /// The first `limit` visible rows with their depth, in display order.
    pub fn visible_rows(&self, limit: usize) -> Vec<(usize, &R)> {
        let mut rows = Vec::new();
        match &self.root {
            None => {}
            Some(root) if self.show_root => root.collect_visible(0, limit, &mut rows),
            Some(root) => {
                for child in &root.children {
                    child.collect_visible(0, limit, &mut rows);
                }
            }
        }
        rows
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

    /// Measure the given content-fit columns over at most `max_rows` visible
    /// rows and request a recompute.
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
        let mut rows = Vec::new();
        match &self.root {
            None => {}
            Some(root) if self.show_root => root.collect_visible(0, max_rows, &mut rows),
            Some(root) => {
                for child in &root.children {
                    child.collect_visible(0, max_rows, &mut rows);
                }
            }
        }
        fit::fit_columns(&mut self.columns, measurer, ids, &rows, self.indent)
    }

    fn track_width(&mut self, mutate: impl FnOnce(&mut Self)) {
        let old = self.content_width();
        mutate(self);
        let new = self.content_width();
        super::record_width_change(&mut self.state, old, new);
    }
}

impl<R> TableAdapter for TreeTable<R> {
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
        self.viewport.content_width(self.visible_row_count())
    }

    fn refresh_content_widths(&mut self, ids: &[ColumnId], max_rows: usize) {
        self.measure(ids, max_rows);
    }
}
