//! The column-width allocation algorithm.
//!
//! [`ResizeEngine::resize_all`] recomputes every leaf width from the column
//! policies and the table's content width:
//!
//! 1. Fixed, preferred, content-fit and percentage columns take their width.
//! 2. Whatever is left is shared by the weighted pool (`Weighted` columns by
//!    weight, `Remaining` columns as weight 1).
//! 3. Leftover pixels go to the right-most resizable column with room.
//! 4. Overflow is reclaimed step by step from the column with the most slack.
//!
//! [`ResizeEngine::resize_one`] moves pixels between a dragged column and its
//! first resizable neighbour to the right, keeping the total unchanged.

use std::ops::{Deref, DerefMut};

use tabula_core::profiling::{profile_function, profile_scope};

use crate::adapter::TableAdapter;
use crate::column::Column;
use crate::column_id::ColumnId;
use crate::config::ResizeConfig;
use crate::error::ResizeRejection;
use crate::policy::{PolicyKind, ResizePolicy};

/// Holds the table in the `Resizing` phase and returns it to `Idle` on drop.
struct ResizeGuard<'a, T: TableAdapter + ?Sized> {
    table: &'a mut T,
}

impl<'a, T: TableAdapter + ?Sized> ResizeGuard<'a, T> {
    /// Enter the resize phase, or `None` if the table is already resizing.
    fn enter(table: &'a mut T) -> Option<Self> {
        if table.state_mut().begin_resize() {
            Some(Self { table })
        } else {
            None
        }
    }
}

impl<T: TableAdapter + ?Sized> Deref for ResizeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.table
    }
}

impl<T: TableAdapter + ?Sized> DerefMut for ResizeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.table
    }
}

impl<T: TableAdapter + ?Sized> Drop for ResizeGuard<'_, T> {
    fn drop(&mut self) {
        self.table.state_mut().end_resize();
    }
}

/// Leaf columns grouped by the phase that sizes them, in display order.
#[derive(Default)]
struct Partition {
    fixed: Vec<ColumnId>,
    preferred: Vec<ColumnId>,
    content: Vec<ColumnId>,
    percentage: Vec<ColumnId>,
    pool: Vec<ColumnId>,
}

impl Partition {
    fn of<T: TableAdapter + ?Sized>(table: &T, leaves: &[ColumnId]) -> Self {
        let mut partition = Self::default();
        for &id in leaves {
            let Some(column) = table.column(id) else {
                continue;
            };
            let bucket = match column.policy().kind() {
                PolicyKind::Fixed => &mut partition.fixed,
                PolicyKind::Preferred => &mut partition.preferred,
                PolicyKind::Content => &mut partition.content,
                PolicyKind::Percentage => &mut partition.percentage,
                PolicyKind::Weighted | PolicyKind::Remaining => &mut partition.pool,
            };
            bucket.push(id);
        }
        partition
    }
}

fn policy_of<T: TableAdapter + ?Sized>(table: &T, id: ColumnId) -> Option<ResizePolicy> {
    table.column(id).map(|c| c.policy().clone())
}

fn apply<T: TableAdapter + ?Sized>(table: &mut T, id: ColumnId, width: f64) -> f64 {
    table.set_column_width(id, width).unwrap_or(0.0)
}

/// Computes column widths for any [`TableAdapter`].
///
/// The engine keeps no per-table state; everything it mutates lives in the
/// table (widths, bounds, deltas, resize phase).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResizeEngine {
    config: ResizeConfig,
}

impl ResizeEngine {
    pub fn new(config: ResizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// Recompute all leaf column widths.
    ///
    /// Returns `false` without touching anything when the content width is
    /// not positive or the table is already resizing.
    pub fn resize_all<T: TableAdapter + ?Sized>(&self, table: &mut T) -> bool {
        profile_function!();

        let total = table.content_width();
        if !total.is_finite() || total <= 0.0 {
            tracing::debug!(content_width = total, "Skipping resize without content width");
            return false;
        }

        let Some(mut table) = ResizeGuard::enter(table) else {
            tracing::debug!("Skipping reentrant resize");
            return false;
        };

        let leaves = table.content_columns();
        let partition = Partition::of(&*table, &leaves);

        if !partition.content.is_empty() {
            table.refresh_content_widths(&partition.content, self.config.fit_max_rows);
        }

        let mut claimed = 0.0;
        claimed += self.size_fixed(&mut *table, &partition.fixed);
        claimed += self.size_preferred(&mut *table, &partition.preferred);
        claimed += self.size_content(&mut *table, &partition.content);
        claimed += self.size_percentage(&mut *table, &partition.percentage, total);

        let remaining = total - claimed;
        let pooled = self.size_pool(&mut *table, &partition.pool, remaining);
        let leftover = remaining - pooled;

        if leftover > self.config.epsilon {
            let unplaced = self.distribute_leftover(&mut *table, &leaves, leftover);
            if unplaced > self.config.epsilon {
                tracing::debug!(unplaced, "Every resizable column is at its maximum width");
            }
        } else if leftover < -self.config.epsilon {
            let unabsorbed = self.reclaim_overflow(&mut *table, &leaves, -leftover);
            if unabsorbed > self.config.epsilon {
                tracing::warn!(
                    overflow = unabsorbed,
                    "Columns overflow the table and no column has slack left"
                );
            }
        }

        table.state_mut().bump_layout_version();
        tracing::trace!(
            content_width = total,
            claimed,
            remaining,
            leftover,
            "Resized all columns"
        );
        true
    }

    fn size_fixed<T: TableAdapter + ?Sized>(&self, table: &mut T, ids: &[ColumnId]) -> f64 {
        let mut used = 0.0;
        for &id in ids {
            if let Some(ResizePolicy::Fixed { width }) = policy_of(table, id) {
                used += apply(table, id, width);
            }
        }
        used
    }

    fn size_preferred<T: TableAdapter + ?Sized>(&self, table: &mut T, ids: &[ColumnId]) -> f64 {
        let mut used = 0.0;
        for &id in ids {
            if let Some(ResizePolicy::Preferred { width }) = policy_of(table, id) {
                let delta = table.state().deltas().get(id);
                used += apply(table, id, width + delta);
            }
        }
        used
    }

    fn size_content<T: TableAdapter + ?Sized>(&self, table: &mut T, ids: &[ColumnId]) -> f64 {
        let placeholder = self.config.placeholder_width;
        let mut used = 0.0;
        for &id in ids {
            let Some(ResizePolicy::Content(fit)) = policy_of(table, id) else {
                continue;
            };
            let delta = table.state().deltas().get(id);
            let natural = fit.natural.unwrap_or(placeholder);
            let width = apply(table, id, natural + delta + fit.padding);
            used += width;

            // Bounds latch from real measurements only.
            let measured = fit.natural.is_some_and(|n| n != placeholder);
            let wants_min = fit.use_as_min && !fit.min_recorded;
            let wants_max = fit.use_as_max && !fit.max_recorded;
            if measured && (wants_min || wants_max) {
                if let Some(column) = table.columns_mut().get_mut(id) {
                    latch_content_bounds(column, width);
                }
            }
        }
        used
    }

    fn size_percentage<T: TableAdapter + ?Sized>(
        &self,
        table: &mut T,
        ids: &[ColumnId],
        total: f64,
    ) -> f64 {
        let mut used = 0.0;
        for &id in ids {
            if let Some(ResizePolicy::Percentage { pct }) = policy_of(table, id) {
                let delta = table.state().deltas().get(id);
                used += apply(table, id, total / 100.0 * pct + delta);
            }
        }
        used
    }

    /// Share `remaining` across weighted and remaining columns.
    ///
    /// Returns the width the pool ends up occupying.
    fn size_pool<T: TableAdapter + ?Sized>(
        &self,
        table: &mut T,
        ids: &[ColumnId],
        remaining: f64,
    ) -> f64 {
        let total_weight: f64 = ids
            .iter()
            .filter_map(|&id| table.column(id))
            .filter_map(|c| c.policy().pool_weight())
            .sum();

        if total_weight <= 0.0 {
            return ids
                .iter()
                .filter_map(|&id| table.column(id))
                .map(Column::width)
                .sum();
        }

        let per_weight = remaining / total_weight;
        let mut used = 0.0;
        for &id in ids {
            let delta = table.state().deltas().get(id);
            let target = match policy_of(table, id) {
                Some(ResizePolicy::Weighted(weighted)) => {
                    if weighted.pin_min_to_content && !weighted.min_pinned {
                        if let Some(column) = table.columns_mut().get_mut(id) {
                            pin_weighted_min(column, weighted.padding);
                        }
                    }
                    per_weight * weighted.weight + delta + weighted.padding
                }
                Some(ResizePolicy::Remaining) => per_weight + delta,
                _ => continue,
            };
            let min = table.column(id).map_or(0.0, Column::min_width_value);
            used += apply(table, id, target.max(min));
        }

        tracing::trace!(total_weight, per_weight, used, "Sized weighted pool");
        used
    }

    /// Hand positive leftover to resizable columns from the right.
    ///
    /// Returns what could not be placed.
    fn distribute_leftover<T: TableAdapter + ?Sized>(
        &self,
        table: &mut T,
        leaves: &[ColumnId],
        mut leftover: f64,
    ) -> f64 {
        for &id in leaves.iter().rev() {
            if leftover <= self.config.epsilon {
                break;
            }
            let Some(column) = table.column(id) else {
                continue;
            };
            if !column.is_resizable() {
                continue;
            }
            let old = column.width();
            let room = column.max_width_value() - old;
            if room <= self.config.epsilon {
                continue;
            }
            let new = apply(table, id, old + leftover.min(room));
            leftover -= new - old;
        }
        leftover
    }

    /// Take back `deficit` pixels, one step at a time, always from the
    /// resizable column with the most slack.
    ///
    /// Returns what could not be absorbed.
    fn reclaim_overflow<T: TableAdapter + ?Sized>(
        &self,
        table: &mut T,
        leaves: &[ColumnId],
        mut deficit: f64,
    ) -> f64 {
        profile_scope!("reclaim_overflow");

        let epsilon = self.config.epsilon;
        while deficit > epsilon {
            let candidate = leaves
                .iter()
                .filter_map(|&id| table.column(id))
                .filter(|c| c.is_resizable() && c.slack() > epsilon)
                .fold(None::<&Column>, |best, c| match best {
                    Some(b) if b.slack() >= c.slack() => Some(b),
                    _ => Some(c),
                })
                .map(|c| (c.id(), c.width(), c.slack()));

            let Some((id, width, slack)) = candidate else {
                break;
            };
            let step = self.config.reclaim_step.min(deficit).min(slack);
            let applied = apply(table, id, width - step);
            if applied >= width {
                break;
            }
            deficit -= width - applied;
        }
        deficit
    }

    /// Drag a column by `delta` pixels, taking the opposite change from the
    /// first resizable column to its right.
    ///
    /// Returns `false` and changes nothing when the drag is rejected; see
    /// [`try_resize_one`](Self::try_resize_one) for the reason.
    pub fn resize_one<T: TableAdapter + ?Sized>(
        &self,
        table: &mut T,
        column: ColumnId,
        delta: f64,
    ) -> bool {
        match self.try_resize_one(table, column, delta) {
            Ok(()) => true,
            Err(rejection) => {
                tracing::debug!(%rejection, "Rejected column drag");
                false
            }
        }
    }

    /// Like [`resize_one`](Self::resize_one), but reports why a drag was
    /// rejected.
    pub fn try_resize_one<T: TableAdapter + ?Sized>(
        &self,
        table: &mut T,
        id: ColumnId,
        delta: f64,
    ) -> Result<(), ResizeRejection> {
        profile_function!();

        if table.is_resizing() {
            return Err(ResizeRejection::Reentrant);
        }
        let column = table.column(id).ok_or(ResizeRejection::UnknownColumn(id))?;
        let leaves = table.content_columns();
        let Some(position) = leaves.iter().position(|leaf| *leaf == id) else {
            return Err(ResizeRejection::NotALeaf(id));
        };
        if !column.is_resizable() {
            return Err(ResizeRejection::NotResizable(id));
        }

        let target = column.width() + delta;
        if !target.is_finite() || !column.is_legal_width(target) {
            return Err(ResizeRejection::IllegalWidth {
                column: id,
                target,
                min: column.min_width_value(),
                max: column.max_width_value(),
            });
        }

        let (neighbor, neighbor_target) = leaves[position + 1..]
            .iter()
            .filter_map(|&leaf| table.column(leaf))
            .find(|c| c.is_resizable() && c.is_legal_width(c.width() - delta))
            .map(|c| (c.id(), c.width() - delta))
            .ok_or(ResizeRejection::NoNeighbor(id))?;

        let mut table = ResizeGuard::enter(table).ok_or(ResizeRejection::Reentrant)?;
        apply(&mut *table, id, target);
        apply(&mut *table, neighbor, neighbor_target);

        let deltas = table.state_mut().deltas_mut();
        deltas.add(id, delta);
        deltas.add(neighbor, -delta);

        tracing::trace!(%id, %neighbor, delta, "Dragged column");
        Ok(())
    }
}

fn latch_content_bounds(column: &mut Column, width: f64) {
    let (latch_min, latch_max) = match column.policy_mut() {
        ResizePolicy::Content(fit) => {
            let min = fit.use_as_min && !fit.min_recorded;
            let max = fit.use_as_max && !fit.max_recorded;
            fit.min_recorded |= min;
            fit.max_recorded |= max;
            (min, max)
        }
        _ => return,
    };
    if latch_min {
        column.set_min_width(width);
    }
    if latch_max {
        column.set_max_width(width);
    }
    tracing::trace!(id = %column.id(), width, latch_min, latch_max, "Latched content bounds");
}

fn pin_weighted_min(column: &mut Column, padding: f64) {
    let min = column.width() + padding;
    column.set_min_width(min);
    if let ResizePolicy::Weighted(weighted) = column.policy_mut() {
        weighted.min_pinned = true;
    }
    tracing::trace!(id = %column.id(), min, "Pinned weighted minimum");
}
