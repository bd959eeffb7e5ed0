//! Change-trigger installer.
//!
//! [`SmartResize`] keeps a table's columns laid out while the host mutates
//! it. The host calls [`SmartResize::tick`] once per pass of its event loop;
//! everything recorded since the previous tick is served by a single
//! [`ResizeEngine::resize_all`].

use tabula_core::profiling::profile_function;

use crate::adapter::TableAdapter;
use crate::column_id::ColumnId;
use crate::config::ResizeConfig;
use crate::engine::ResizeEngine;
use crate::event::TableEvent;
use crate::triggers::ResizeTriggers;

/// Drives the resize engine from the events a table records.
///
/// One installer drives one table.
///
/// # Example
/// ```
/// use tabula_table::{Column, FlatTable, SmartResize, TableAdapter, Viewport};
///
/// let mut table: FlatTable<&str> = FlatTable::new([
///     Column::new("Id").fixed_width(40.0),
///     Column::new("Name").remaining_width(),
/// ])
/// .unwrap()
/// .with_viewport(Viewport::new(400.0, 300.0));
///
/// let mut resize = SmartResize::new();
/// resize.install(&mut table);
/// assert!(resize.tick(&mut table));
/// assert_eq!(table.columns().total_width(), 400.0);
///
/// table.set_width(600.0);
/// assert!(resize.tick(&mut table));
/// assert_eq!(table.columns().total_width(), 600.0);
///
/// // Nothing changed since the last tick.
/// assert!(!resize.tick(&mut table));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SmartResize {
    engine: ResizeEngine,
    pending: ResizeTriggers,
}

impl SmartResize {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ResizeConfig) -> Self {
        Self {
            engine: ResizeEngine::new(config),
            pending: ResizeTriggers::NONE,
        }
    }

    pub fn engine(&self) -> &ResizeEngine {
        &self.engine
    }

    /// Start listening to the table and request an initial recompute.
    pub fn install<T: TableAdapter + ?Sized>(&mut self, table: &mut T) {
        table.state_mut().set_installed(true);
        self.pending |= ResizeTriggers::REQUESTED;
        tracing::debug!("Installed smart resize");
    }

    /// Stop listening to the table, dropping anything pending.
    ///
    /// Column widths and deltas are left as they are.
    pub fn uninstall<T: TableAdapter + ?Sized>(&mut self, table: &mut T) {
        table.state_mut().set_installed(false);
        self.pending = ResizeTriggers::NONE;
        tracing::debug!("Uninstalled smart resize");
    }

    pub fn is_installed<T: TableAdapter + ?Sized>(&self, table: &T) -> bool {
        table.state().is_installed()
    }

    /// Request a recompute on the next tick.
    pub fn request_resize(&mut self) {
        self.pending |= ResizeTriggers::REQUESTED;
    }

    /// Triggers folded so far and not yet served.
    pub fn pending(&self) -> ResizeTriggers {
        self.pending
    }

    /// Drain the table's events and recompute once if anything asked for it.
    ///
    /// Width changes made outside the engine are folded into the column's
    /// delta first, so the recompute keeps them. Returns `true` if the
    /// columns were recomputed.
    pub fn tick<T: TableAdapter + ?Sized>(&mut self, table: &mut T) -> bool {
        profile_function!();

        if !table.state().is_installed() {
            return false;
        }

        let events = table.state_mut().take_events();
        for event in &events {
            if let TableEvent::ColumnWidthChanged { column, old, new } = event
                && table.columns().contains(*column)
            {
                table.state_mut().deltas_mut().add(*column, new - old);
            }
            self.pending |= ResizeTriggers::from_event(event);
        }

        if !self.pending.needs_resize() {
            return false;
        }

        let triggers = std::mem::take(&mut self.pending);
        tracing::debug!(?triggers, events = events.len(), "Coalesced resize");
        self.engine.resize_all(table)
    }

    /// Drag a column by `delta` pixels against its right neighbour.
    pub fn drag<T: TableAdapter + ?Sized>(&self, table: &mut T, column: ColumnId, delta: f64) -> bool {
        self.engine.resize_one(table, column, delta)
    }
}
