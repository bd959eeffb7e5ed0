//! Coalesced resize triggers.

use bitflags::bitflags;

use crate::event::TableEvent;

bitflags! {
    /// Reasons a full column recompute is pending.
    ///
    /// Any number of events within one tick fold into a single set of flags,
    /// and the whole set is served by one recompute.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResizeTriggers: u8 {
        /// Nothing pending
        const NONE          = 0;

        /// Column list changed.
        const COLUMNS       = 1 << 0;

        /// Table content width changed.
        const TABLE_WIDTH   = 1 << 1;

        /// Item collection changed (content widths may differ).
        const ITEMS         = 1 << 2;

        /// Content was re-measured.
        const CONTENT       = 1 << 3;

        /// A column width was changed from outside the engine.
        const COLUMN_WIDTH  = 1 << 4;

        /// Explicit request (install, `request_resize`).
        const REQUESTED     = 1 << 5;
    }
}

impl ResizeTriggers {
    /// Map a recorded event to its trigger.
    pub fn from_event(event: &TableEvent) -> Self {
        match event {
            TableEvent::ColumnsChanged { .. } => Self::COLUMNS,
            TableEvent::WidthChanged { .. } => Self::TABLE_WIDTH,
            TableEvent::ItemsChanged => Self::ITEMS,
            TableEvent::ContentChanged => Self::CONTENT,
            TableEvent::ColumnWidthChanged { .. } => Self::COLUMN_WIDTH,
        }
    }

    /// Returns true if a recompute is pending.
    #[inline]
    pub fn needs_resize(&self) -> bool {
        !self.is_empty()
    }
}

impl Default for ResizeTriggers {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColumnId;

    #[test]
    fn test_from_event() {
        assert_eq!(
            ResizeTriggers::from_event(&TableEvent::WidthChanged { old: 0.0, new: 10.0 }),
            ResizeTriggers::TABLE_WIDTH
        );
        assert_eq!(
            ResizeTriggers::from_event(&TableEvent::ColumnWidthChanged {
                column: ColumnId::new("a"),
                old: 1.0,
                new: 2.0,
            }),
            ResizeTriggers::COLUMN_WIDTH
        );
    }

    #[test]
    fn test_needs_resize() {
        assert!(!ResizeTriggers::NONE.needs_resize());
        assert!(ResizeTriggers::REQUESTED.needs_resize());
    }
}
