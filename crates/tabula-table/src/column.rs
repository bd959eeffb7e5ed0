//! Column model: width bounds, sizing policy and column groups.

use indexmap::IndexMap;

use crate::column_id::ColumnId;
use crate::error::{TableError, TableResult};
use crate::policy::{ContentFit, PolicyKind, ResizePolicy, sanitize};

/// Width a column gets before anything has sized it.
pub const DEFAULT_COLUMN_WIDTH: f64 = 80.0;

/// Default minimum column width in pixels.
pub const DEFAULT_MIN_WIDTH: f64 = 10.0;

/// Default maximum column width in pixels.
pub const DEFAULT_MAX_WIDTH: f64 = 5000.0;

/// A table column.
///
/// `min_width <= width <= max_width` holds at all times: every width write
/// is clamped, and moving one bound past the other drags it along.
///
/// A column with children is a column group. Groups are flattened one level
/// deep when the table lists its leaf columns.
///
/// # Example
/// ```
/// use tabula_table::Column;
///
/// let name = Column::new("Name").weighted_width(2.0, 0.0, false).min_width(60.0);
/// let id = Column::new("Id").fixed_width(48.0);
///
/// assert!(name.is_resizable());
/// assert!(!id.is_resizable());
/// assert_eq!(id.width(), 48.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    id: ColumnId,
    title: String,
    width: f64,
    min_width: f64,
    max_width: f64,
    policy: ResizePolicy,
    children: Vec<Column>,
}

impl Column {
    /// Create a column with the default (content-fit) policy.
    ///
    /// The column ID is derived from the title.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: ColumnId::new(&title),
            title,
            width: DEFAULT_COLUMN_WIDTH,
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            policy: ResizePolicy::default(),
            children: Vec::new(),
        }
    }

    /// Create a column with a preferred width.
    pub fn preferred(title: impl Into<String>, width: f64) -> Self {
        Self::new(title).pref_width(width)
    }

    /// Create a column group holding the given children.
    pub fn group(title: impl Into<String>, children: impl IntoIterator<Item = Column>) -> Self {
        let mut group = Self::new(title);
        group.children.extend(children);
        group
    }

    // Builder API

    /// Override the key the column ID is derived from.
    pub fn with_id(mut self, key: &str) -> Self {
        self.id = ColumnId::new(key);
        self
    }

    /// Pin the column to an exact width.
    ///
    /// Sets min, max and current width to `width`.
    pub fn fixed_width(mut self, width: f64) -> Self {
        let width = sanitize(width, self.width).max(0.0);
        self.min_width = width;
        self.max_width = width;
        self.width = width;
        self.policy = ResizePolicy::Fixed { width };
        self
    }

    /// Size the column at a preferred width, adjusted by dragging.
    pub fn pref_width(mut self, width: f64) -> Self {
        let width = sanitize(width, self.width);
        self.policy = ResizePolicy::Preferred { width };
        self.set_width(width);
        self
    }

    /// Share the leftover space by weight.
    pub fn weighted_width(mut self, weight: f64, padding: f64, pin_min_to_content: bool) -> Self {
        self.policy = ResizePolicy::weighted(weight, padding, pin_min_to_content);
        self
    }

    /// Take a percentage of the table's content width.
    pub fn pct_width(mut self, pct: f64) -> Self {
        self.policy = ResizePolicy::percentage(pct);
        self
    }

    /// Fit the measured content plus `padding`, optionally latching the first
    /// real measurement as the minimum and/or maximum width.
    pub fn content_width(mut self, padding: f64, use_as_min: bool, use_as_max: bool) -> Self {
        self.policy = ResizePolicy::content(padding, use_as_min, use_as_max);
        self
    }

    /// Take an equal share of whatever space is left.
    pub fn remaining_width(mut self) -> Self {
        self.policy = ResizePolicy::Remaining;
        self
    }

    /// Set the minimum width.
    pub fn min_width(mut self, width: f64) -> Self {
        self.set_min_width(width);
        self
    }

    /// Set the maximum width.
    pub fn max_width(mut self, width: f64) -> Self {
        self.set_max_width(width);
        self
    }

    /// Add a child column, turning this column into a group.
    pub fn child(mut self, column: Column) -> Self {
        self.children.push(column);
        self
    }

    // Accessors

    /// Get the column ID.
    pub fn id(&self) -> ColumnId {
        self.id
    }

    /// Get the column title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the current width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Get the minimum width.
    pub fn min_width_value(&self) -> f64 {
        self.min_width
    }

    /// Get the maximum width.
    pub fn max_width_value(&self) -> f64 {
        self.max_width
    }

    /// Get the sizing policy.
    pub fn policy(&self) -> &ResizePolicy {
        &self.policy
    }

    /// Get the sizing policy mutably.
    ///
    /// Used by the engine to latch recorded bounds.
    pub fn policy_mut(&mut self) -> &mut ResizePolicy {
        &mut self.policy
    }

    /// Get the child columns (empty for a leaf).
    pub fn children(&self) -> &[Column] {
        &self.children
    }

    /// Check if this column is a group with children.
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check if the column may be resized.
    #[inline]
    pub fn is_resizable(&self) -> bool {
        self.policy.is_resizable()
    }

    /// Check if `width` lies within the column's bounds.
    #[inline]
    pub fn is_legal_width(&self, width: f64) -> bool {
        width >= self.min_width && width <= self.max_width
    }

    /// Room left to shrink before hitting the minimum width.
    #[inline]
    pub fn slack(&self) -> f64 {
        self.width - self.min_width
    }

    // Mutation

    /// Set the width, clamped to the column's bounds.
    ///
    /// Non-finite values are ignored. Returns the width actually applied.
    pub fn set_width(&mut self, width: f64) -> f64 {
        if width.is_finite() {
            self.width = width.clamp(self.min_width, self.max_width);
        }
        self.width
    }

    /// Set the minimum width, raising the maximum and current width if needed.
    ///
    /// Ignored on a fixed column, whose bounds stay pinned to its width.
    pub fn set_min_width(&mut self, width: f64) {
        if self.policy.kind() == PolicyKind::Fixed {
            return;
        }
        let width = sanitize(width, self.min_width).max(0.0);
        self.min_width = width;
        self.max_width = self.max_width.max(width);
        self.width = self.width.clamp(self.min_width, self.max_width);
    }

    /// Set the maximum width, lowering the minimum and current width if needed.
    ///
    /// Ignored on a fixed column, whose bounds stay pinned to its width.
    pub fn set_max_width(&mut self, width: f64) {
        if self.policy.kind() == PolicyKind::Fixed {
            return;
        }
        let width = sanitize(width, self.max_width).max(0.0);
        self.max_width = width;
        self.min_width = self.min_width.min(width);
        self.width = self.width.clamp(self.min_width, self.max_width);
    }

    /// Record a content-measured natural width on a content-fit column.
    ///
    /// Returns `false` (and changes nothing) for other policies.
    pub fn report_content_width(&mut self, natural: f64) -> bool {
        match &mut self.policy {
            ResizePolicy::Content(ContentFit { natural: slot, .. }) if natural.is_finite() => {
                *slot = Some(natural.max(0.0));
                true
            }
            _ => false,
        }
    }
}

/// Ordered set of top-level columns.
///
/// Column IDs are unique across the whole set, children of groups included.
#[derive(Debug, Clone, Default)]
pub struct ColumnSet {
    columns: IndexMap<ColumnId, Column>,
}

impl ColumnSet {
    /// Create an empty column set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a column set, rejecting duplicate IDs.
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> TableResult<Self> {
        let mut set = Self::new();
        for column in columns {
            set.push(column)?;
        }
        Ok(set)
    }

    /// Append a top-level column (or group).
    pub fn push(&mut self, column: Column) -> TableResult<()> {
        if let Some(dup) = std::iter::once(&column)
            .chain(column.children.iter())
            .map(Column::id)
            .find(|id| self.contains(*id))
        {
            return Err(TableError::DuplicateColumn(dup));
        }
        let mut seen = Vec::with_capacity(column.children.len());
        for child in &column.children {
            if child.id == column.id || seen.contains(&child.id) {
                return Err(TableError::DuplicateColumn(child.id));
            }
            seen.push(child.id);
        }

        self.columns.insert(column.id, column);
        Ok(())
    }

    /// Remove a column (top-level or a group's child), keeping the order of
    /// the remaining columns.
    ///
    /// Removing a group removes its children too.
    pub fn remove(&mut self, id: ColumnId) -> TableResult<Column> {
        if let Some(column) = self.columns.shift_remove(&id) {
            return Ok(column);
        }
        for group in self.columns.values_mut() {
            if let Some(pos) = group.children.iter().position(|c| c.id == id) {
                return Ok(group.children.remove(pos));
            }
        }
        Err(TableError::ColumnNotFound(id))
    }

    /// Check if a column with this ID exists anywhere in the set.
    pub fn contains(&self, id: ColumnId) -> bool {
        self.get(id).is_some()
    }

    /// Find a column by ID (top-level or a group's child).
    pub fn get(&self, id: ColumnId) -> Option<&Column> {
        self.columns.get(&id).or_else(|| {
            self.columns
                .values()
                .flat_map(|group| group.children.iter())
                .find(|c| c.id == id)
        })
    }

    /// Find a column by ID mutably.
    pub fn get_mut(&mut self, id: ColumnId) -> Option<&mut Column> {
        if self.columns.contains_key(&id) {
            return self.columns.get_mut(&id);
        }
        self.columns
            .values_mut()
            .flat_map(|group| group.children.iter_mut())
            .find(|c| c.id == id)
    }

    /// Iterate top-level columns in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    /// Iterate leaf columns in display order.
    ///
    /// A group is replaced by its direct children; a childless group is a
    /// leaf itself.
    pub fn leaves(&self) -> impl Iterator<Item = &Column> {
        self.columns.values().flat_map(|column| {
            if column.children.is_empty() {
                std::slice::from_ref(column).iter()
            } else {
                column.children.iter()
            }
        })
    }

    /// IDs of the leaf columns in display order.
    pub fn leaf_ids(&self) -> Vec<ColumnId> {
        self.leaves().map(Column::id).collect()
    }

    /// IDs of every column in the set, groups and children included.
    pub fn all_ids(&self) -> Vec<ColumnId> {
        self.columns
            .values()
            .flat_map(|c| std::iter::once(c.id).chain(c.children.iter().map(Column::id)))
            .collect()
    }

    /// Check if `id` names a leaf column.
    pub fn is_leaf(&self, id: ColumnId) -> bool {
        self.leaves().any(|c| c.id == id)
    }

    /// Sum of the leaf widths.
    pub fn total_width(&self) -> f64 {
        self.leaves().map(Column::width).sum()
    }

    /// Get the number of top-level columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the set has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let column = Column::new("Name");
        assert_eq!(column.width(), DEFAULT_COLUMN_WIDTH);
        assert_eq!(column.min_width_value(), DEFAULT_MIN_WIDTH);
        assert_eq!(column.max_width_value(), DEFAULT_MAX_WIDTH);
        assert_eq!(column.id(), ColumnId::new("Name"));
        assert!(column.is_resizable());
    }

    #[test]
    fn test_fixed_width_pins_bounds() {
        let column = Column::new("Id").fixed_width(120.0);
        assert_eq!(column.width(), 120.0);
        assert_eq!(column.min_width_value(), 120.0);
        assert_eq!(column.max_width_value(), 120.0);
        assert_eq!(column.policy(), &ResizePolicy::Fixed { width: 120.0 });
    }

    #[test]
    fn test_bounds_do_not_move_fixed_column() {
        let raised = Column::new("F").fixed_width(50.0).min_width(60.0);
        assert_eq!(raised.width(), 50.0);
        assert_eq!(raised.min_width_value(), 50.0);
        assert_eq!(raised.max_width_value(), 50.0);

        let lowered = Column::new("G").fixed_width(120.0).max_width(100.0);
        assert_eq!(lowered.width(), 120.0);
        assert_eq!(lowered.policy(), &ResizePolicy::Fixed { width: 120.0 });

        // Declaring bounds first and then pinning still ends on the pinned width.
        let pinned = Column::new("H").min_width(60.0).max_width(70.0).fixed_width(30.0);
        assert_eq!(pinned.width(), 30.0);
        assert_eq!(pinned.min_width_value(), 30.0);
        assert_eq!(pinned.max_width_value(), 30.0);
    }

    #[test]
    fn test_set_width_clamps() {
        let mut column = Column::new("A").min_width(50.0).max_width(200.0);
        assert_eq!(column.set_width(10.0), 50.0);
        assert_eq!(column.set_width(500.0), 200.0);
        assert_eq!(column.set_width(f64::NAN), 200.0);
        assert!(column.is_legal_width(120.0));
        assert!(!column.is_legal_width(201.0));
    }

    #[test]
    fn test_bounds_drag_each_other() {
        let mut column = Column::new("A").max_width(100.0);
        column.set_min_width(150.0);
        assert_eq!(column.max_width_value(), 150.0);
        assert_eq!(column.width(), 150.0);

        column.set_max_width(20.0);
        assert_eq!(column.min_width_value(), 20.0);
        assert_eq!(column.width(), 20.0);
    }

    #[test]
    fn test_report_content_width_only_for_content_policy() {
        let mut content = Column::new("A");
        assert!(content.report_content_width(42.0));
        match content.policy() {
            ResizePolicy::Content(fit) => assert_eq!(fit.natural, Some(42.0)),
            other => panic!("Expected content policy, got {:?}", other),
        }

        let mut weighted = Column::new("B").weighted_width(1.0, 0.0, false);
        assert!(!weighted.report_content_width(42.0));
    }

    #[test]
    fn test_leaves_flatten_one_level() {
        let set = ColumnSet::from_columns([
            Column::new("A"),
            Column::group("Address", [Column::new("Street"), Column::new("City")]),
            Column::new("Empty group"),
        ])
        .unwrap();

        let titles: Vec<&str> = set.leaves().map(Column::title).collect();
        assert_eq!(titles, ["A", "Street", "City", "Empty group"]);
        assert!(set.is_leaf(ColumnId::new("City")));
        assert!(!set.is_leaf(ColumnId::new("Address")));
        assert_eq!(set.all_ids().len(), 5);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut set = ColumnSet::new();
        set.push(Column::new("A")).unwrap();
        assert_eq!(
            set.push(Column::new("A")),
            Err(TableError::DuplicateColumn(ColumnId::new("A")))
        );
        assert_eq!(
            set.push(Column::group("G", [Column::new("A")])),
            Err(TableError::DuplicateColumn(ColumnId::new("A")))
        );
        assert_eq!(
            set.push(Column::group("H", [Column::new("x"), Column::new("x")])),
            Err(TableError::DuplicateColumn(ColumnId::new("x")))
        );
    }

    #[test]
    fn test_remove_child_and_top_level() {
        let mut set = ColumnSet::from_columns([
            Column::new("A"),
            Column::group("G", [Column::new("B"), Column::new("C")]),
            Column::new("D"),
        ])
        .unwrap();

        assert_eq!(set.remove(ColumnId::new("B")).unwrap().title(), "B");
        assert_eq!(set.remove(ColumnId::new("A")).unwrap().title(), "A");
        assert!(set.remove(ColumnId::new("A")).is_err());

        let titles: Vec<&str> = set.leaves().map(Column::title).collect();
        assert_eq!(titles, ["C", "D"]);
    }
}
