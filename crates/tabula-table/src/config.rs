//! Tuning knobs for the resize engine.

/// Configuration for the [`ResizeEngine`](crate::ResizeEngine).
///
/// # Example
/// ```
/// use tabula_table::ResizeConfig;
///
/// let config = ResizeConfig::default().with_reclaim_step(2.0);
/// assert_eq!(config.placeholder_width, 80.0);
/// assert_eq!(config.reclaim_step, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeConfig {
    /// Natural width assumed for content columns that were never measured.
    pub placeholder_width: f64,
    /// Pixels taken back per step while reclaiming overflow.
    pub reclaim_step: f64,
    /// Maximum number of rows measured when fitting content columns.
    pub fit_max_rows: usize,
    /// Tolerance below which leftover or overflow is treated as zero.
    pub epsilon: f64,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            placeholder_width: 80.0,
            reclaim_step: 1.0,
            fit_max_rows: 50,
            epsilon: 1e-6,
        }
    }
}

impl ResizeConfig {
    pub fn with_placeholder_width(mut self, width: f64) -> Self {
        if width.is_finite() && width >= 0.0 {
            self.placeholder_width = width;
        }
        self
    }

    /// Set the reclaim step. Non-positive values are ignored.
    pub fn with_reclaim_step(mut self, step: f64) -> Self {
        if step.is_finite() && step > 0.0 {
            self.reclaim_step = step;
        }
        self
    }

    pub fn with_fit_max_rows(mut self, rows: usize) -> Self {
        self.fit_max_rows = rows;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        if epsilon.is_finite() && epsilon >= 0.0 {
            self.epsilon = epsilon;
        }
        self
    }
}
