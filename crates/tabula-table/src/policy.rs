//! Column sizing policies.
//!
//! A [`ResizePolicy`] is declarative data attached to a column. All of the
//! width arithmetic lives in [`ResizeEngine`](crate::ResizeEngine), grouped by
//! policy kind, so the allocation algorithm can be read in one place.

use std::fmt;

/// Sizing strategy of a single column.
///
/// # Examples
/// ```
/// use tabula_table::{PolicyKind, ResizePolicy};
///
/// let fixed = ResizePolicy::Fixed { width: 120.0 };
/// assert!(!fixed.is_resizable());
///
/// let weighted = ResizePolicy::weighted(2.0, 0.0, false);
/// assert_eq!(weighted.kind(), PolicyKind::Weighted);
/// assert!(weighted.is_resizable());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ResizePolicy {
    /// Immutable width, never touched by the distribution phases.
    Fixed {
        /// The width in pixels.
        width: f64,
    },
    /// Desired width, adjusted by the accumulated drag delta.
    Preferred {
        /// The width in pixels.
        width: f64,
    },
    /// Share of the leftover space proportional to `weight`.
    Weighted(Weighted),
    /// Share of the total content width.
    Percentage {
        /// Percentage in `0.0..=100.0`.
        pct: f64,
    },
    /// Width of the measured content plus padding.
    Content(ContentFit),
    /// Equal share of the leftover space (weight 1 in the weighted pool).
    Remaining,
}

/// Payload of [`ResizePolicy::Weighted`].
#[derive(Debug, Clone, PartialEq)]
pub struct Weighted {
    /// Relative weight, never negative.
    pub weight: f64,
    /// Extra pixels added on top of the weighted share.
    pub padding: f64,
    /// Pin the minimum width to the current width (plus padding) once.
    pub pin_min_to_content: bool,
    /// Set after the minimum width has been pinned.
    pub min_pinned: bool,
}

/// Payload of [`ResizePolicy::Content`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentFit {
    /// Extra pixels added on top of the content width.
    pub padding: f64,
    /// Latch the first real content width as the minimum width.
    pub use_as_min: bool,
    /// Latch the first real content width as the maximum width.
    pub use_as_max: bool,
    /// Set after the minimum width has been latched.
    pub min_recorded: bool,
    /// Set after the maximum width has been latched.
    pub max_recorded: bool,
    /// Natural width last reported by the host's content measurement.
    ///
    /// `None` until the host has measured the column at least once.
    pub natural: Option<f64>,
}

/// Discriminant of a [`ResizePolicy`], used to partition columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fixed,
    Preferred,
    Weighted,
    Percentage,
    Content,
    Remaining,
}

impl ResizePolicy {
    /// Weighted policy with a sanitized (non-negative, finite) weight.
    pub fn weighted(weight: f64, padding: f64, pin_min_to_content: bool) -> Self {
        Self::Weighted(Weighted {
            weight: sanitize(weight, 0.0).max(0.0),
            padding: sanitize(padding, 0.0),
            pin_min_to_content,
            min_pinned: false,
        })
    }

    /// Percentage policy clamped to `0.0..=100.0`.
    pub fn percentage(pct: f64) -> Self {
        Self::Percentage {
            pct: sanitize(pct, 0.0).clamp(0.0, 100.0),
        }
    }

    /// Content-fit policy.
    pub fn content(padding: f64, use_as_min: bool, use_as_max: bool) -> Self {
        Self::Content(ContentFit {
            padding: sanitize(padding, 0.0),
            use_as_min,
            use_as_max,
            ..ContentFit::default()
        })
    }

    /// Get the policy kind.
    pub fn kind(&self) -> PolicyKind {
        match self {
            ResizePolicy::Fixed { .. } => PolicyKind::Fixed,
            ResizePolicy::Preferred { .. } => PolicyKind::Preferred,
            ResizePolicy::Weighted(_) => PolicyKind::Weighted,
            ResizePolicy::Percentage { .. } => PolicyKind::Percentage,
            ResizePolicy::Content(_) => PolicyKind::Content,
            ResizePolicy::Remaining => PolicyKind::Remaining,
        }
    }

    /// Whether the engine (or the user) may change the column's width.
    #[inline]
    pub fn is_resizable(&self) -> bool {
        !matches!(self, ResizePolicy::Fixed { .. })
    }

    /// Weight of the column inside the weighted pool, if it takes part in it.
    ///
    /// `Remaining` columns count as weight 1.
    pub fn pool_weight(&self) -> Option<f64> {
        match self {
            ResizePolicy::Weighted(w) => Some(w.weight),
            ResizePolicy::Remaining => Some(1.0),
            _ => None,
        }
    }
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self::Content(ContentFit::default())
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::Fixed => "fixed",
            PolicyKind::Preferred => "preferred",
            PolicyKind::Weighted => "weighted",
            PolicyKind::Percentage => "percentage",
            PolicyKind::Content => "content",
            PolicyKind::Remaining => "remaining",
        };
        f.write_str(name)
    }
}

/// Replace NaN and infinities with `fallback`.
#[inline]
pub(crate) fn sanitize(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}
