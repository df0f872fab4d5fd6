//! Completed-line detection and clearing.
//!
//! Rows and columns are checked independently over the current occupancy, so
//! a single placement can complete both. Clearing never shifts cells; cleared
//! lines are simply emptied.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::{Board, Cell};
use crate::core::BoardError;

/// A set of row indices and a set of column indices.
///
/// Both sets are kept sorted and free of duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSet {
    rows: SmallVec<[usize; 8]>,
    cols: SmallVec<[usize; 8]>,
}

impl LineSet {
    /// Create an empty line set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a line set from arbitrary indices; duplicates collapse.
    #[must_use]
    pub fn from_indices(
        rows: impl IntoIterator<Item = usize>,
        cols: impl IntoIterator<Item = usize>,
    ) -> Self {
        let mut set = Self::new();
        for row in rows {
            set.insert_row(row);
        }
        for col in cols {
            set.insert_col(col);
        }
        set
    }

    /// Add a row. Returns false if it was already present.
    pub fn insert_row(&mut self, row: usize) -> bool {
        insert_sorted(&mut self.rows, row)
    }

    /// Add a column. Returns false if it was already present.
    pub fn insert_col(&mut self, col: usize) -> bool {
        insert_sorted(&mut self.cols, col)
    }

    /// Row indices, ascending.
    #[must_use]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Column indices, ascending.
    #[must_use]
    pub fn cols(&self) -> &[usize] {
        &self.cols
    }

    #[must_use]
    pub fn contains_row(&self, row: usize) -> bool {
        self.rows.binary_search(&row).is_ok()
    }

    #[must_use]
    pub fn contains_col(&self, col: usize) -> bool {
        self.cols.binary_search(&col).is_ok()
    }

    /// Number of distinct lines: rows plus columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len() + self.cols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }

    /// Whether `(row, col)` lies on any line of the set.
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.contains_row(row) || self.contains_col(col)
    }
}

fn insert_sorted(indices: &mut SmallVec<[usize; 8]>, value: usize) -> bool {
    match indices.binary_search(&value) {
        Ok(_) => false,
        Err(pos) => {
            indices.insert(pos, value);
            true
        }
    }
}

impl Board {
    /// Check if a row is completely filled. Out-of-range rows are not.
    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.size() {
            return false;
        }
        let start = row * self.size();
        self.cells()[start..start + self.size()]
            .iter()
            .all(|cell| cell.is_filled())
    }

    /// Check if a column is completely filled. Out-of-range columns are not.
    #[must_use]
    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= self.size() {
            return false;
        }
        self.cells()
            .iter()
            .skip(col)
            .step_by(self.size())
            .all(|cell| cell.is_filled())
    }

    /// Find every completed row and column.
    #[must_use]
    pub fn detect_completed_lines(&self) -> LineSet {
        let size = self.size();
        LineSet::from_indices(
            (0..size).filter(|&row| self.is_row_full(row)),
            (0..size).filter(|&col| self.is_col_full(col)),
        )
    }

    /// Empty every cell on the given rows and columns.
    ///
    /// Cells where a cleared row meets a cleared column are emptied once.
    /// Returns the number of distinct lines cleared. Indices are validated
    /// before anything is touched.
    pub fn clear_lines(&mut self, lines: &LineSet) -> Result<usize, BoardError> {
        let size = self.size();
        if let Some(&row) = lines.rows().iter().find(|&&r| r >= size) {
            return Err(BoardError::OutOfRange { row, col: 0, size });
        }
        if let Some(&col) = lines.cols().iter().find(|&&c| c >= size) {
            return Err(BoardError::OutOfRange { row: 0, col, size });
        }

        let cells = self.cells_mut();
        for &row in lines.rows() {
            cells[row * size..(row + 1) * size].fill(Cell::Empty);
        }
        for &col in lines.cols() {
            for row in 0..size {
                cells[row * size + col] = Cell::Empty;
            }
        }

        Ok(lines.len())
    }
}
