// ---------------------------------------------------------------------------
// NumericMatrix – the parsed input file
// ---------------------------------------------------------------------------

/// Rows of floating-point values, one row per input line.
///
/// Rows may have different lengths. A blank line is kept as an empty row so
/// the row index stays aligned with the line number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericMatrix {
    rows: Vec<Vec<f64>>,
}

impl NumericMatrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        NumericMatrix { rows }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Zero-based row index, shared x axis of every column.
    pub fn index(&self) -> Vec<usize> {
        (0..self.rows.len()).collect()
    }

    /// Width of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether rows differ in length.
    pub fn is_ragged(&self) -> bool {
        match self.rows.first() {
            Some(first) => self.rows.iter().any(|r| r.len() != first.len()),
            None => false,
        }
    }

    /// `[row index, value]` points for one column.
    ///
    /// Rows too short to have `column` are skipped, so a ragged column is
    /// drawn only over the rows that define it.
    pub fn column_series(&self, column: usize) -> Vec<[f64; 2]> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| row.get(column).map(|&v| [i as f64, v]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NumericMatrix {
        NumericMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])
    }

    #[test]
    fn index_matches_row_count() {
        let m = sample();
        assert_eq!(m.index(), vec![0, 1, 2]);
        assert_eq!(m.len(), 3);
        assert_eq!(m.column_count(), 2);
        assert!(!m.is_ragged());
    }

    #[test]
    fn column_series_pairs_index_with_values() {
        let m = sample();
        assert_eq!(m.column_series(0), vec![[0.0, 1.0], [1.0, 3.0], [2.0, 5.0]]);
        assert_eq!(m.column_series(1), vec![[0.0, 2.0], [1.0, 4.0], [2.0, 6.0]]);
        assert!(m.column_series(2).is_empty());
    }

    #[test]
    fn ragged_rows_skip_missing_cells() {
        let m = NumericMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0], vec![], vec![5.0, 6.0]]);
        assert!(m.is_ragged());
        assert_eq!(m.column_count(), 3);
        assert_eq!(m.column_series(1), vec![[0.0, 2.0], [3.0, 6.0]]);
        assert_eq!(m.column_series(2), vec![[0.0, 3.0]]);
        assert_eq!(m.index().len(), 4);
    }

    #[test]
    fn empty_matrix() {
        let m = NumericMatrix::default();
        assert!(m.is_empty());
        assert!(m.index().is_empty());
        assert_eq!(m.column_count(), 0);
        assert!(!m.is_ragged());
    }
}
