use std::collections::BTreeSet;

use super::model::NumericMatrix;

// ---------------------------------------------------------------------------
// Column visibility
// ---------------------------------------------------------------------------

/// Columns the user has unchecked. Empty means every column is shown.
pub type ColumnFilter = BTreeSet<usize>;

/// Return the indices of the columns to draw, in ascending order.
pub fn visible_columns(matrix: &NumericMatrix, hidden: &ColumnFilter) -> Vec<usize> {
    (0..matrix.column_count())
        .filter(|c| !hidden.contains(c))
        .collect()
}
