//! Integration tests for the change-trigger installer and content fitting.

use tabula_table::{
    Column, ColumnId, ResizeConfig, ResizeTriggers, SmartResize, TableAdapter, TableEvent,
};
use tabula_test_utils::{MockMeasurer, assert_fills, assert_widths, flat_table, rows};

fn id(key: &str) -> ColumnId {
    ColumnId::new(key)
}

#[test]
fn test_install_requests_initial_layout() {
    let mut table = flat_table(
        300.0,
        [
            Column::new("A").pref_width(100.0),
            Column::new("B").remaining_width(),
        ],
    );
    let mut resize = SmartResize::new();
    resize.install(&mut table);

    assert!(resize.is_installed(&table));
    assert!(resize.pending().contains(ResizeTriggers::REQUESTED));
    assert!(resize.tick(&mut table));
    assert_widths(&table, &[100.0, 200.0]);
    assert_eq!(table.state().layout_version(), 1);

    assert!(!resize.tick(&mut table));
    assert_eq!(table.state().layout_version(), 1);
}

#[test]
fn test_burst_of_changes_is_one_recompute() {
    let mut table = flat_table(
        300.0,
        [
            Column::new("A").pref_width(100.0),
            Column::new("B").remaining_width(),
        ],
    );
    let mut resize = SmartResize::new();
    resize.install(&mut table);
    resize.tick(&mut table);

    table.set_width(500.0);
    table.push_item("one".to_string());
    table.push_item("two".to_string());
    table
        .add_column(Column::new("C").fixed_width(50.0))
        .unwrap();
    table.set_width(700.0);

    assert!(resize.tick(&mut table));
    assert_eq!(table.state().layout_version(), 2);
    assert_widths(&table, &[100.0, 550.0, 50.0]);
    assert!(!table.state().has_pending_events());
}

#[test]
fn test_engine_writes_do_not_retrigger() {
    let mut table = flat_table(
        300.0,
        [
            Column::new("A").pref_width(100.0),
            Column::new("B").remaining_width(),
        ],
    );
    let mut resize = SmartResize::new();
    resize.install(&mut table);
    resize.tick(&mut table);

    assert!(resize.drag(&mut table, id("A"), 10.0));
    assert!(!table.state().has_pending_events());
    assert!(!resize.tick(&mut table));
    assert_widths(&table, &[110.0, 190.0]);
}

#[test]
fn test_programmatic_width_becomes_delta() {
    let mut table = flat_table(
        300.0,
        [
            Column::new("A").pref_width(100.0),
            Column::new("B").remaining_width(),
        ],
    );
    let mut resize = SmartResize::new();
    resize.install(&mut table);
    resize.tick(&mut table);

    table.set_column_width(id("A"), 60.0);
    assert_eq!(
        table.state().deltas().get(id("A")),
        0.0,
        "deltas only change on tick"
    );

    assert!(resize.tick(&mut table));
    assert_eq!(table.state().deltas().get(id("A")), -40.0);
    assert_widths(&table, &[60.0, 240.0]);

    table.set_width(400.0);
    resize.tick(&mut table);
    assert_widths(&table, &[60.0, 340.0]);
}

#[test]
fn test_removed_column_delta_is_pruned() {
    let mut table = flat_table(
        300.0,
        [
            Column::new("A").pref_width(100.0),
            Column::new("B").pref_width(100.0),
            Column::new("R").remaining_width(),
        ],
    );
    let mut resize = SmartResize::new();
    resize.install(&mut table);
    resize.tick(&mut table);
    resize.drag(&mut table, id("A"), 20.0);

    table.remove_column(id("B")).unwrap();
    assert_eq!(table.state().deltas().get(id("B")), 0.0);

    assert!(resize.tick(&mut table));
    assert_widths(&table, &[120.0, 180.0]);
}

#[test]
fn test_redeclared_column_does_not_inherit_removed_width_change() {
    let mut table = flat_table(
        300.0,
        [
            Column::new("A").pref_width(100.0),
            Column::new("R").remaining_width(),
        ],
    );
    let mut resize = SmartResize::new();
    resize.install(&mut table);
    resize.tick(&mut table);

    table.set_column_width(id("A"), 130.0);
    table.remove_column(id("A")).unwrap();
    assert!(resize.tick(&mut table));
    assert_eq!(table.state().deltas().get(id("A")), 0.0);

    table.add_column(Column::new("A").pref_width(100.0)).unwrap();
    assert!(resize.tick(&mut table));
    assert_eq!(table.state().deltas().get(id("A")), 0.0);
    assert_widths(&table, &[200.0, 100.0]);
}

#[test]
fn test_uninstall_stops_listening() {
    let mut table = flat_table(300.0, [Column::new("A").remaining_width()]);
    let mut resize = SmartResize::new();
    resize.install(&mut table);
    resize.tick(&mut table);
    resize.uninstall(&mut table);

    table.set_width(800.0);
    assert!(!table.state().has_pending_events());
    assert!(!resize.tick(&mut table));
    assert_widths(&table, &[300.0]);

    resize.install(&mut table);
    assert!(resize.tick(&mut table));
    assert_widths(&table, &[800.0]);
}

#[test]
fn test_request_resize() {
    let mut table = flat_table(300.0, [Column::new("A").remaining_width()]);
    let mut resize = SmartResize::new();
    resize.install(&mut table);
    resize.tick(&mut table);

    resize.request_resize();
    assert!(resize.tick(&mut table));
    assert_eq!(table.state().layout_version(), 2);
}

#[test]
fn test_content_column_fits_widest_row() {
    let measurer = MockMeasurer::new(10.0);
    let mut table = flat_table(
        400.0,
        [
            Column::new("Name").content_width(6.0, false, false),
            Column::new("Rest").remaining_width(),
        ],
    )
    .with_items(["a", "abcdef", "abc"].map(String::from))
    .with_measurer(measurer.clone());

    let mut resize = SmartResize::new();
    resize.install(&mut table);
    resize.tick(&mut table);

    assert_widths(&table, &[66.0, 334.0]);
    assert_eq!(measurer.count_header_measures(), 1);
    assert_eq!(measurer.count_cells_for(id("Name")), 3);
    assert_eq!(measurer.count_cells_for(id("Rest")), 0);
}

#[test]
fn test_new_items_refit_content() {
    let measurer = MockMeasurer::new(10.0);
    let mut table = flat_table(
        400.0,
        [
            Column::new("Name"),
            Column::new("Rest").remaining_width(),
        ],
    )
    .with_measurer(measurer);

    let mut resize = SmartResize::new();
    resize.install(&mut table);
    resize.tick(&mut table);
    // Only the header "Name" has been measured.
    assert_widths(&table, &[40.0, 360.0]);

    table.push_item("a much longer name".to_string());
    assert!(resize.tick(&mut table));
    assert_widths(&table, &[180.0, 220.0]);
}

#[test]
fn test_measurement_capped_at_fit_max_rows() {
    let measurer = MockMeasurer::new(8.0);
    let mut table = flat_table(
        800.0,
        [
            Column::new("Name"),
            Column::new("Rest").remaining_width(),
        ],
    )
    .with_items(rows(120))
    .with_measurer(measurer.clone());

    let mut resize = SmartResize::new();
    resize.install(&mut table);
    resize.tick(&mut table);
    assert_eq!(measurer.count_cells_for(id("Name")), 50);

    let mut small = SmartResize::with_config(ResizeConfig::default().with_fit_max_rows(10));
    measurer.clear_calls();
    small.install(&mut table);
    small.tick(&mut table);
    assert_eq!(measurer.count_cells_for(id("Name")), 10);
}

#[test]
fn test_fit_columns_to_content_requests_resize() {
    let measurer = MockMeasurer::new(10.0);
    let mut table = flat_table(
        400.0,
        [
            Column::new("Name").content_width(0.0, true, false),
            Column::new("Rest").remaining_width(),
        ],
    )
    .with_items(["abcdefgh".to_string()]);

    let mut resize = SmartResize::new();
    resize.install(&mut table);
    resize.tick(&mut table);
    assert_widths(&table, &[80.0, 320.0]);

    table.set_measurer(measurer);
    let ids = [id("Name")];
    assert_eq!(table.fit_columns_to_content(&ids, 50), 1);
    assert!(
        table.state().has_pending_events(),
        "fitting records a content change"
    );
    assert!(resize.tick(&mut table));
    // The natural width equals the placeholder, so the minimum stays put.
    assert_eq!(table.column(id("Name")).unwrap().min_width_value(), 10.0);

    table.set_items(["abcdefghijkl".to_string()]);
    resize.tick(&mut table);
    assert_eq!(table.column(id("Name")).unwrap().min_width_value(), 120.0);
    assert_fills(&table);
}

#[test]
fn test_recorded_events() {
    let mut table = flat_table(300.0, [Column::new("A").remaining_width()]);
    let mut resize = SmartResize::new();
    resize.install(&mut table);

    table.add_column(Column::group("G", [Column::new("x"), Column::new("y")])).unwrap();
    assert_eq!(
        table.state_mut().take_events(),
        vec![TableEvent::ColumnsChanged {
            added: vec![id("G"), id("x"), id("y")],
            removed: Vec::new(),
        }]
    );
}
