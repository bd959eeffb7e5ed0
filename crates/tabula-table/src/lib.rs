//! Tabula Table - adaptive column widths for flat and tree tables
//!
//! This crate sizes table columns to fill the space a table has:
//! - Per-column sizing policies (fixed, preferred, weighted, percentage,
//!   content-fit, remaining)
//! - Width bounds that always hold
//! - Drag resizing that keeps the total width unchanged
//! - Event coalescing so a burst of changes costs one recompute
//!
//! ## Quick Start
//!
//! ```rust
//! use tabula_table::{Column, ColumnId, FlatTable, SmartResize, TableAdapter, Viewport};
//!
//! let mut table: FlatTable<(u32, &str)> = FlatTable::new([
//!     Column::new("Id").fixed_width(50.0),
//!     Column::new("Name").weighted_width(1.0, 0.0, false),
//!     Column::new("Email").weighted_width(1.0, 0.0, false),
//! ])
//! .unwrap()
//! .with_viewport(Viewport::new(250.0, 400.0));
//!
//! let mut resize = SmartResize::new();
//! resize.install(&mut table);
//! resize.tick(&mut table);
//!
//! let widths: Vec<f64> = table.columns().leaves().map(|c| c.width()).collect();
//! assert_eq!(widths, [50.0, 100.0, 100.0]);
//!
//! // Dragging moves pixels to the right neighbour.
//! assert!(resize.drag(&mut table, ColumnId::new("Name"), 20.0));
//! assert_eq!(table.columns().total_width(), 250.0);
//! ```

pub mod adapter;
pub mod column;
pub mod column_id;
pub mod config;
pub mod delta;
pub mod engine;
pub mod error;
pub mod event;
mod fit;
pub mod installer;
pub mod policy;
pub mod state;
pub mod table;
pub mod triggers;
pub mod viewport;

pub use adapter::{ContentMeasurer, TableAdapter};
pub use column::{
    Column, ColumnSet, DEFAULT_COLUMN_WIDTH, DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH,
};
pub use column_id::ColumnId;
pub use config::ResizeConfig;
pub use delta::DeltaMap;
pub use engine::ResizeEngine;
pub use error::{ResizeRejection, TableError, TableResult};
pub use event::TableEvent;
pub use installer::SmartResize;
pub use policy::{ContentFit, PolicyKind, ResizePolicy, Weighted};
pub use state::{ResizePhase, TableState};
pub use table::{DEFAULT_INDENT, FlatTable, TreeItem, TreeTable};
pub use triggers::ResizeTriggers;
pub use viewport::Viewport;
