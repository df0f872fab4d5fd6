//! Read-only snapshot of a session for renderers and save-state collaborators.

use serde::{Deserialize, Serialize};

use super::game::{GameSession, SessionStatus};
use crate::board::Cell;
use crate::shapes::{Color, ShapeId};
use crate::supply::PieceId;

/// One offered piece, by reference into the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferedPiece {
    pub id: PieceId,
    pub shape: ShapeId,
    pub key: String,
    pub color: Color,
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub grid_size: usize,
    /// Row-major cells.
    pub cells: Vec<Cell>,
    pub offered: Vec<OfferedPiece>,
    pub score: u64,
    pub level: u32,
    pub high_score: u64,
    pub status: SessionStatus,
}

impl SessionSnapshot {
    /// Cell at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.grid_size || col >= self.grid_size {
            return None;
        }
        self.cells.get(row * self.grid_size + col).copied()
    }
}

impl GameSession {
    /// Capture the observable state of the session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid_size: self.board().size(),
            cells: self.board().cells().to_vec(),
            offered: self
                .supply()
                .current()
                .iter()
                .map(|piece| OfferedPiece {
                    id: piece.id(),
                    shape: piece.shape_id(),
                    key: piece.shape().key.clone(),
                    color: piece.color(),
                })
                .collect(),
            score: self.score(),
            level: self.level(),
            high_score: self.high_score(),
            status: self.status(),
        }
    }
}
