//! Per-table resize state: phase, deltas and the pending event queue.

use tabula_core::alloc::HashSet;

use crate::column_id::ColumnId;
use crate::delta::DeltaMap;
use crate::event::TableEvent;

/// Whether the engine is currently writing column widths.
///
/// The phase only moves `Idle -> Resizing -> Idle`, and only one engine
/// invocation can hold `Resizing` at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizePhase {
    /// No engine invocation is running.
    #[default]
    Idle,
    /// An engine invocation is writing widths.
    Resizing,
}

/// Runtime resize state owned by each table host.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    phase: ResizePhase,
    deltas: DeltaMap,
    installed: bool,
    events: Vec<TableEvent>,
    layout_version: u64,
}

impl TableState {
    /// Create a fresh idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current phase.
    pub fn phase(&self) -> ResizePhase {
        self.phase
    }

    /// Check if an engine invocation is running.
    #[inline]
    pub fn is_resizing(&self) -> bool {
        self.phase == ResizePhase::Resizing
    }

    /// Move from `Idle` to `Resizing`.
    ///
    /// Returns `false` if a resize is already running.
    pub fn begin_resize(&mut self) -> bool {
        match self.phase {
            ResizePhase::Idle => {
                self.phase = ResizePhase::Resizing;
                true
            }
            ResizePhase::Resizing => false,
        }
    }

    /// Move back to `Idle`.
    pub fn end_resize(&mut self) {
        self.phase = ResizePhase::Idle;
    }

    /// Get the drag deltas.
    pub fn deltas(&self) -> &DeltaMap {
        &self.deltas
    }

    /// Get the drag deltas mutably.
    pub fn deltas_mut(&mut self) -> &mut DeltaMap {
        &mut self.deltas
    }

    /// Check if a resize installer is attached.
    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// Attach or detach the resize installer.
    ///
    /// Detaching drops any queued events.
    pub fn set_installed(&mut self, installed: bool) {
        self.installed = installed;
        if !installed {
            self.events.clear();
        }
    }

    /// Queue an event for the installer.
    ///
    /// Ignored while no installer is attached.
    pub fn record(&mut self, event: TableEvent) {
        if self.installed {
            self.events.push(event);
        }
    }

    /// Take all queued events.
    pub fn take_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drop queued width changes of columns that left the table.
    pub(crate) fn forget_columns(&mut self, removed: &HashSet<ColumnId>) {
        self.deltas.retain(|id| !removed.contains(&id));
        self.events.retain(|event| match event {
            TableEvent::ColumnWidthChanged { column, .. } => !removed.contains(column),
            _ => true,
        });
    }

    /// Check if events are queued.
    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Number of completed full recomputes.
    pub fn layout_version(&self) -> u64 {
        self.layout_version
    }

    /// Bump the layout version after a full recompute.
    pub(crate) fn bump_layout_version(&mut self) {
        self.layout_version = self.layout_version.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_transitions() {
        let mut state = TableState::new();
        assert_eq!(state.phase(), ResizePhase::Idle);

        assert!(state.begin_resize());
        assert!(state.is_resizing());
        assert!(!state.begin_resize());

        state.end_resize();
        assert!(!state.is_resizing());
        assert!(state.begin_resize());
    }

    #[test]
    fn test_events_only_recorded_when_installed() {
        let mut state = TableState::new();
        state.record(TableEvent::ItemsChanged);
        assert!(!state.has_pending_events());

        state.set_installed(true);
        state.record(TableEvent::ItemsChanged);
        state.record(TableEvent::ContentChanged);
        assert_eq!(state.take_events().len(), 2);
        assert!(!state.has_pending_events());

        state.record(TableEvent::ItemsChanged);
        state.set_installed(false);
        assert!(!state.has_pending_events());
    }

    #[test]
    fn test_forget_columns_drops_deltas_and_width_changes() {
        let a = ColumnId::new("a");
        let b = ColumnId::new("b");
        let mut state = TableState::new();
        state.set_installed(true);
        state.deltas_mut().add(a, 5.0);
        state.deltas_mut().add(b, -5.0);
        state.record(TableEvent::ColumnWidthChanged { column: a, old: 100.0, new: 130.0 });
        state.record(TableEvent::ColumnWidthChanged { column: b, old: 100.0, new: 90.0 });
        state.record(TableEvent::ItemsChanged);

        state.forget_columns(&HashSet::from_iter([a]));

        assert_eq!(state.deltas().get(a), 0.0);
        assert_eq!(state.deltas().get(b), -5.0);
        let events = state.take_events();
        assert_eq!(events.len(), 2);
        assert!(!events.iter().any(|e| matches!(
            e,
            TableEvent::ColumnWidthChanged { column, .. } if *column == a
        )));
    }
}
