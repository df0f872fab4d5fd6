//! Board grid - cell occupancy and placement legality.
//!
//! The board is an N x N grid stored row-major in a flat vector. Coordinates
//! are `(row, col)` with `(0, 0)` in the top-left corner. A shape placed at an
//! origin covers `origin + offset` for every set cell of its mask.

use serde::{Deserialize, Serialize};

use crate::core::{BoardError, DEFAULT_GRID_SIZE};
use crate::shapes::{Color, ShapeMask};

/// Occupancy of one board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// Filled by a piece; the color is only kept for display.
    Filled(Color),
}

impl Cell {
    #[must_use]
    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Filled(color) => Some(color),
            Cell::Empty => None,
        }
    }
}

/// Square game board.
///
/// Deserialization checks that the stored cells form a full grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Build a board from row-major cells.
    ///
    /// Fails with `CellCount` unless there are exactly `size * size` cells.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, BoardError> {
        if size.checked_mul(size) != Some(cells.len()) {
            return Err(BoardError::CellCount {
                size,
                found: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Edge length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub(crate) fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        self.index(row, col).ok_or(BoardError::OutOfRange {
            row,
            col,
            size: self.size,
        })
    }

    /// Get the cell at `(row, col)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.checked_index(row, col).map(|i| self.cells[i])
    }

    /// Check whether `(row, col)` is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        self.cell_at(row, col).map(Cell::is_empty)
    }

    /// In-bounds and empty. Out-of-range positions are simply not free.
    #[inline]
    pub(crate) fn is_free(&self, row: usize, col: usize) -> bool {
        self.index(row, col)
            .is_some_and(|i| self.cells[i].is_empty())
    }

    /// Check whether `mask` fits with its top-left corner at the origin.
    ///
    /// Every set cell must land inside the board on an empty cell. A mask
    /// with no set cells always fits.
    #[must_use]
    pub fn can_place(&self, mask: &ShapeMask, origin_row: usize, origin_col: usize) -> bool {
        mask.offsets().all(|(dr, dc)| {
            match (origin_row.checked_add(dr), origin_col.checked_add(dc)) {
                (Some(row), Some(col)) => self.is_free(row, col),
                _ => false,
            }
        })
    }

    /// Place `mask` at the origin, filling its cells with `color`.
    ///
    /// All-or-nothing: if the shape does not fit, nothing changes and
    /// `PlacementRejected` is returned. Returns the number of cells filled.
    pub fn place(
        &mut self,
        mask: &ShapeMask,
        origin_row: usize,
        origin_col: usize,
        color: Color,
    ) -> Result<usize, BoardError> {
        if !self.can_place(mask, origin_row, origin_col) {
            return Err(BoardError::PlacementRejected {
                row: origin_row,
                col: origin_col,
            });
        }

        let mut filled = 0;
        for (dr, dc) in mask.offsets() {
            let idx = (origin_row + dr) * self.size + (origin_col + dc);
            self.cells[idx] = Cell::Filled(color);
            filled += 1;
        }
        Ok(filled)
    }

    /// First legal origin for `mask`, scanning origins row-major.
    #[must_use]
    pub fn first_legal_origin(&self, mask: &ShapeMask) -> Option<(usize, usize)> {
        self.origins().find(|&(row, col)| self.can_place(mask, row, col))
    }

    /// Every legal origin for `mask`, row-major.
    #[must_use]
    pub fn legal_origins(&self, mask: &ShapeMask) -> Vec<(usize, usize)> {
        self.origins()
            .filter(|&(row, col)| self.can_place(mask, row, col))
            .collect()
    }

    /// Check whether any of `masks` fits anywhere.
    ///
    /// Masks are tried in the given order and origins row-major; the scan
    /// stops at the first legal placement.
    pub fn any_placement_exists<'a, I>(&self, masks: I) -> bool
    where
        I: IntoIterator<Item = &'a ShapeMask>,
    {
        masks
            .into_iter()
            .any(|mask| self.first_legal_origin(mask).is_some())
    }

    fn origins(&self) -> impl Iterator<Item = (usize, usize)> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Get a reference to the internal cells array, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Iterate over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardData {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardData> for Board {
    type Error = BoardError;

    fn try_from(data: BoardData) -> Result<Self, Self::Error> {
        Board::from_cells(data.size, data.cells)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.is_filled() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
