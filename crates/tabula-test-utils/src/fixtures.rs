//! Table fixtures and width assertions.

use tabula_table::{Column, FlatTable, TableAdapter, TreeItem, TreeTable, Viewport};

/// Tolerance used by the width assertions.
pub const WIDTH_TOLERANCE: f64 = 1e-6;

/// A flat table with no rows and a viewport of the given width.
pub fn flat_table(width: f64, columns: impl IntoIterator<Item = Column>) -> FlatTable<String> {
    FlatTable::new(columns)
        .expect("fixture columns must be unique")
        .with_viewport(Viewport::new(width, 480.0))
}

/// A tree table showing [`sample_tree`] with a viewport of the given width.
pub fn tree_table(width: f64, columns: impl IntoIterator<Item = Column>) -> TreeTable<String> {
    TreeTable::new(columns)
        .expect("fixture columns must be unique")
        .with_root(sample_tree())
        .with_viewport(Viewport::new(width, 480.0))
}

/// A small file tree, expanded at the root only.
///
/// ```text
/// root
/// ├── src
/// │   ├── lib.rs
/// │   └── engine
/// │       └── allocation.rs
/// └── Cargo.toml
/// ```
pub fn sample_tree() -> TreeItem<String> {
    TreeItem::new("root".to_string())
        .expanded(true)
        .child(
            TreeItem::new("src".to_string())
                .child(TreeItem::new("lib.rs".to_string()))
                .child(
                    TreeItem::new("engine".to_string())
                        .child(TreeItem::new("allocation.rs".to_string())),
                ),
        )
        .child(TreeItem::new("Cargo.toml".to_string()))
}

/// `count` rows named `row 0`, `row 1`, ...
pub fn rows(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("row {i}")).collect()
}

/// A wide mix of every policy, for stress tests and benchmarks.
pub fn mixed_columns(count: usize) -> Vec<Column> {
    (0..count)
        .map(|i| {
            let column = Column::new(format!("col {i}"));
            match i % 6 {
                0 => column.fixed_width(40.0),
                1 => column.pref_width(60.0 + i as f64),
                2 => column.weighted_width(1.0 + (i % 3) as f64, 2.0, false),
                3 => column.pct_width(2.0),
                4 => column.content_width(4.0, false, false),
                _ => column.remaining_width(),
            }
        })
        .collect()
}

/// Widths of the leaf columns in display order.
pub fn leaf_widths<T: TableAdapter + ?Sized>(table: &T) -> Vec<f64> {
    table.columns().leaves().map(Column::width).collect()
}

/// Assert the leaf widths match `expected` within [`WIDTH_TOLERANCE`].
#[track_caller]
pub fn assert_widths<T: TableAdapter + ?Sized>(table: &T, expected: &[f64]) {
    let actual = leaf_widths(table);
    assert_eq!(
        actual.len(),
        expected.len(),
        "leaf count differs: {:?} vs {:?}",
        actual,
        expected
    );
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            (a - e).abs() <= WIDTH_TOLERANCE,
            "widths differ: {:?} vs {:?}",
            actual,
            expected
        );
    }
}

/// Assert every leaf width lies within its column's bounds.
#[track_caller]
pub fn assert_bounds<T: TableAdapter + ?Sized>(table: &T) {
    for column in table.columns().leaves() {
        assert!(
            column.is_legal_width(column.width()),
            "column {} has width {} outside {}..={}",
            column.title(),
            column.width(),
            column.min_width_value(),
            column.max_width_value()
        );
    }
}

/// Assert the leaf widths add up to the table's content width.
#[track_caller]
pub fn assert_fills<T: TableAdapter + ?Sized>(table: &T) {
    let total = table.columns().total_width();
    let content = table.content_width();
    assert!(
        (total - content).abs() <= WIDTH_TOLERANCE * 1000.0,
        "columns add up to {} but content width is {}",
        total,
        content
    );
}
