//! Lays out a file browser table, then resizes, drags and re-measures it.
//!
//! Run with `RUST_LOG=tabula_table=trace` to see every phase, and with
//! `TABULA_PROFILE=1` to serve puffin data to `puffin_viewer`.

use tabula_core::logging;
use tabula_core::profiling::{self, ProfilingBackend};
use tabula_table::{
    Column, ColumnId, ContentMeasurer, SmartResize, TableAdapter, TreeItem, TreeTable, Viewport,
};

/// Pretends every character is 7px wide.
struct MonospaceMeasurer;

impl ContentMeasurer<(String, u64)> for MonospaceMeasurer {
    fn measure_header(&self, column: &Column) -> f64 {
        column.title().len() as f64 * 7.0 + 16.0
    }

    fn measure_cell(&self, column: &Column, row: &(String, u64)) -> f64 {
        let text = match column.title() {
            "Name" => row.0.clone(),
            _ => row.1.to_string(),
        };
        text.len() as f64 * 7.0
    }
}

fn file(name: &str, size: u64) -> TreeItem<(String, u64)> {
    TreeItem::new((name.to_string(), size))
}

fn print_widths(label: &str, table: &impl TableAdapter) {
    let widths: Vec<String> = table
        .columns()
        .leaves()
        .map(|c| format!("{}={:.1}", c.title(), c.width()))
        .collect();
    println!("{label:>12}: {}", widths.join("  "));
}

fn tick(resize: &mut SmartResize, table: &mut impl TableAdapter) {
    profiling::new_frame();
    resize.tick(table);
}

fn main() {
    logging::init();
    if std::env::var_os("TABULA_PROFILE").is_some() {
        profiling::init_profiling(ProfilingBackend::PuffinHttp);
    }

    let root = file("project", 0).expanded(true).with_children([
        file("src", 0)
            .expanded(true)
            .child(file("lib.rs", 1_204))
            .child(file("engine.rs", 18_771)),
        file("Cargo.toml", 912),
    ]);

    let mut table = TreeTable::new([
        Column::new("Name").content_width(12.0, true, false),
        Column::new("Size").content_width(8.0, false, false),
        Column::new("Kind").pct_width(15.0),
        Column::new("Notes").remaining_width().min_width(60.0),
    ])
    .expect("column titles are unique")
    .with_root(root)
    .with_viewport(Viewport::new(640.0, 480.0))
    .with_measurer(MonospaceMeasurer);

    let mut resize = SmartResize::new();
    resize.install(&mut table);
    tick(&mut resize, &mut table);
    print_widths("initial", &table);

    table.set_width(900.0);
    tick(&mut resize, &mut table);
    print_widths("wider", &table);

    resize.drag(&mut table, ColumnId::new("Kind"), 40.0);
    print_widths("dragged", &table);

    table.update_root(|root| root.push_child(file("a_rather_long_file_name.md", 3)));
    tick(&mut resize, &mut table);
    print_widths("new file", &table);

    table.set_width(300.0);
    tick(&mut resize, &mut table);
    print_widths("narrow", &table);
}
