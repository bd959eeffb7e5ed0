//! Content measurement shared by the table hosts.

use crate::adapter::ContentMeasurer;
use crate::column::ColumnSet;
use crate::column_id::ColumnId;

/// A visible row together with its depth in the tree (0 for flat tables).
pub(crate) type VisibleRow<'a, R> = (usize, &'a R);

/// Measure and report the natural width of each content-fit column in `ids`.
///
/// The natural width is the widest of the header and the cells of `rows`.
/// Cells of the first leaf column are widened by `depth * indent`. Returns
/// the number of columns whose natural width was reported.
pub(crate) fn fit_columns<R>(
    columns: &mut ColumnSet,
    measurer: &dyn ContentMeasurer<R>,
    ids: &[ColumnId],
    rows: &[VisibleRow<'_, R>],
    indent: f64,
) -> usize {
    let first_leaf = columns.leaves().next().map(|c| c.id());
    let mut reported = 0;

    for &id in ids {
        if !columns.is_leaf(id) {
            continue;
        }
        let Some(column) = columns.get(id) else {
            continue;
        };
        let indent = if first_leaf == Some(id) { indent } else { 0.0 };

        let natural = rows
            .iter()
            .map(|(depth, row)| measurer.measure_cell(column, row) + *depth as f64 * indent)
            .filter(|w| w.is_finite())
            .fold(measurer.measure_header(column), f64::max);

        if let Some(column) = columns.get_mut(id) {
            if column.report_content_width(natural) {
                reported += 1;
            }
        }
    }

    tracing::trace!(reported, rows = rows.len(), "Measured content widths");
    reported
}
