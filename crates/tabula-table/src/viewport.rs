//! Visible area of a table host.

/// Default height of one table row in pixels.
pub const DEFAULT_ROW_HEIGHT: f64 = 24.0;

/// Default width of the vertical scrollbar in pixels.
pub const DEFAULT_SCROLLBAR_WIDTH: f64 = 12.0;

/// Size of the area a table draws its columns and rows into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub row_height: f64,
    pub scrollbar_width: f64,
}

impl Viewport {
    /// Create a viewport with the default row height and scrollbar width.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            row_height: DEFAULT_ROW_HEIGHT,
            scrollbar_width: DEFAULT_SCROLLBAR_WIDTH,
        }
    }

    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_scrollbar_width(mut self, scrollbar_width: f64) -> Self {
        self.scrollbar_width = scrollbar_width;
        self
    }

    /// Check if `rows` rows overflow the viewport height.
    pub fn needs_scrollbar(&self, rows: usize) -> bool {
        rows as f64 * self.row_height > self.height
    }

    /// Horizontal space left for columns when `rows` rows are visible.
    ///
    /// The vertical scrollbar is subtracted once the rows overflow. Never
    /// negative; non-finite widths yield zero.
    pub fn content_width(&self, rows: usize) -> f64 {
        if !self.width.is_finite() {
            return 0.0;
        }
        let scrollbar = if self.needs_scrollbar(rows) {
            self.scrollbar_width
        } else {
            0.0
        };
        (self.width - scrollbar).max(0.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrollbar_only_on_overflow() {
        let viewport = Viewport::new(400.0, 240.0);
        assert_eq!(viewport.content_width(10), 400.0);
        assert_eq!(viewport.content_width(11), 388.0);
    }

    #[test]
    fn test_custom_rows_and_scrollbar() {
        let viewport = Viewport::new(400.0, 100.0)
            .with_row_height(50.0)
            .with_scrollbar_width(20.0);
        assert!(!viewport.needs_scrollbar(2));
        assert_eq!(viewport.content_width(3), 380.0);
    }

    #[test]
    fn test_content_width_floors_at_zero() {
        let viewport = Viewport::new(5.0, 0.0);
        assert_eq!(viewport.content_width(1), 0.0);
        assert_eq!(Viewport::new(f64::NAN, 10.0).content_width(0), 0.0);
    }
}
