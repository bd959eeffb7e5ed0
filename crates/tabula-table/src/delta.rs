//! Per-column drag deltas.
//!
//! The net manual adjustment of every column is kept here, keyed by column
//! ID, separate from the declared policy. Resetting or snapshotting the
//! runtime adjustments never touches the column declarations.

use tabula_core::alloc::HashMap;

use crate::column_id::ColumnId;

/// Accumulated drag deltas keyed by column.
///
/// Columns without an entry have a delta of zero.
///
/// # Example
/// ```
/// use tabula_table::{ColumnId, DeltaMap};
///
/// let a = ColumnId::new("a");
/// let b = ColumnId::new("b");
///
/// let mut deltas = DeltaMap::new();
/// deltas.add(a, 20.0);
/// deltas.add(b, -20.0);
///
/// assert_eq!(deltas.get(a), 20.0);
/// assert_eq!(deltas.total(), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeltaMap {
    deltas: HashMap<ColumnId, f64>,
}

impl DeltaMap {
    /// Create an empty delta map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the delta of a column (zero if none was recorded).
    #[inline]
    pub fn get(&self, id: ColumnId) -> f64 {
        self.deltas.get(&id).copied().unwrap_or(0.0)
    }

    /// Add to the delta of a column.
    pub fn add(&mut self, id: ColumnId, delta: f64) {
        if delta == 0.0 || !delta.is_finite() {
            return;
        }
        *self.deltas.entry(id).or_insert(0.0) += delta;
    }

    /// Keep only the entries whose column satisfies `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(ColumnId) -> bool) {
        self.deltas.retain(|id, _| keep(*id));
    }

    /// Reset every delta to zero.
    pub fn clear(&mut self) {
        self.deltas.clear();
    }

    /// Sum of all deltas.
    ///
    /// Drags hand every pixel from one column to another, so this stays at
    /// zero unless widths were changed from outside the engine.
    pub fn total(&self) -> f64 {
        self.deltas.values().sum()
    }

    /// Get the number of columns with a recorded delta.
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// Check if no delta has been recorded.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }
}
