//! Placement preview - a read-only view for drag highlighting.
//!
//! A renderer asks "what happens if this shape is dropped here?" while the
//! player drags. The answer is derived from the board and never mutates it.

use serde::{Deserialize, Serialize};

use super::grid::Board;
use super::lines::LineSet;
use crate::shapes::ShapeMask;

/// Result of previewing a shape at an origin.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    /// Targeted cells that lie on the board, row-major.
    pub cells: Vec<(usize, usize)>,

    /// Targeted cells that are already filled.
    pub conflicts: Vec<(usize, usize)>,

    /// Whether the drop would be accepted.
    pub fits: bool,

    /// Rows and columns that would be full with the targeted cells filled.
    pub completes: LineSet,
}

impl Preview {
    /// Whether `(row, col)` should be highlighted as part of the drop.
    #[must_use]
    pub fn highlights(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col)) || self.completes.covers(row, col)
    }
}

impl Board {
    /// Cells `mask` would cover at the origin, clipped to the board.
    #[must_use]
    pub fn preview_cells(&self, mask: &ShapeMask, origin_row: usize, origin_col: usize) -> Vec<(usize, usize)> {
        mask.offsets()
            .filter_map(|(dr, dc)| {
                let row = origin_row.checked_add(dr)?;
                let col = origin_col.checked_add(dc)?;
                self.index(row, col).map(|_| (row, col))
            })
            .collect()
    }

    /// Whether `row` would be full if `cells` were filled as well.
    #[must_use]
    pub fn would_complete_row(&self, row: usize, cells: &[(usize, usize)]) -> bool {
        row < self.size()
            && (0..self.size()).all(|col| !self.is_free(row, col) || cells.contains(&(row, col)))
    }

    /// Whether `col` would be full if `cells` were filled as well.
    #[must_use]
    pub fn would_complete_col(&self, col: usize, cells: &[(usize, usize)]) -> bool {
        col < self.size()
            && (0..self.size()).all(|row| !self.is_free(row, col) || cells.contains(&(row, col)))
    }

    /// Preview dropping `mask` at the origin.
    ///
    /// Completed lines are reported for the rows and columns the shape
    /// touches, even when the drop itself would be rejected; `fits` tells the
    /// two cases apart.
    #[must_use]
    pub fn preview(&self, mask: &ShapeMask, origin_row: usize, origin_col: usize) -> Preview {
        let cells = self.preview_cells(mask, origin_row, origin_col);
        let conflicts = cells
            .iter()
            .copied()
            .filter(|&(row, col)| !self.is_free(row, col))
            .collect();

        let mut completes = LineSet::new();
        for &(row, col) in &cells {
            if !completes.contains_row(row) && self.would_complete_row(row, &cells) {
                completes.insert_row(row);
            }
            if !completes.contains_col(col) && self.would_complete_col(col, &cells) {
                completes.insert_col(col);
            }
        }

        Preview {
            fits: self.can_place(mask, origin_row, origin_col),
            cells,
            conflicts,
            completes,
        }
    }
}
