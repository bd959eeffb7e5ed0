//! Recording content measurer.

use std::sync::Arc;

use parking_lot::Mutex;
use tabula_table::{Column, ColumnId, ContentMeasurer};

/// Records a measurement call for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeasureCall {
    Header { column: ColumnId },
    Cell { column: ColumnId, text: String },
}

/// Measures text as `chars * char_width` and records every call.
///
/// Clones share the same call log, so a test can hand one clone to a table
/// and inspect the other.
///
/// # Example
///
/// ```rust
/// use tabula_table::{Column, ContentMeasurer};
/// use tabula_test_utils::MockMeasurer;
///
/// let mock = MockMeasurer::new(7.0);
/// let column = Column::new("Size");
///
/// let header = <MockMeasurer as ContentMeasurer<&str>>::measure_header(&mock, &column);
/// assert_eq!(header, 28.0);
/// assert_eq!(mock.measure_cell(&column, &"12"), 14.0);
/// assert_eq!(mock.calls().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockMeasurer {
    char_width: f64,
    header_padding: f64,
    calls: Arc<Mutex<Vec<MeasureCall>>>,
}

impl MockMeasurer {
    /// Create a measurer with a fixed width per character.
    pub fn new(char_width: f64) -> Self {
        Self {
            char_width,
            header_padding: 0.0,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add extra pixels to every header measurement (sort arrows and such).
    pub fn with_header_padding(mut self, padding: f64) -> Self {
        self.header_padding = padding;
        self
    }

    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }

    /// Get all recorded calls.
    pub fn calls(&self) -> Vec<MeasureCall> {
        self.calls.lock().clone()
    }

    /// Clear recorded calls.
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    pub fn count_header_measures(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, MeasureCall::Header { .. }))
            .count()
    }

    pub fn count_cell_measures(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, MeasureCall::Cell { .. }))
            .count()
    }

    /// Number of cells measured for one column.
    pub fn count_cells_for(&self, column: ColumnId) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, MeasureCall::Cell { column: id, .. } if *id == column))
            .count()
    }
}

impl<R: AsRef<str>> ContentMeasurer<R> for MockMeasurer {
    fn measure_header(&self, column: &Column) -> f64 {
        self.calls.lock().push(MeasureCall::Header {
            column: column.id(),
        });
        self.text_width(column.title()) + self.header_padding
    }

    fn measure_cell(&self, column: &Column, row: &R) -> f64 {
        let text = row.as_ref();
        self.calls.lock().push(MeasureCall::Cell {
            column: column.id(),
            text: text.to_string(),
        });
        self.text_width(text)
    }
}
