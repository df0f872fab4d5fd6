//! Session events.
//!
//! Every accepted move pushes events describing what happened, in order. The
//! presentation layer drains them to drive flashes, banners, and sounds; the
//! engine itself never reads them back.

use serde::{Deserialize, Serialize};

use crate::board::LineSet;
use crate::shapes::ShapeId;
use crate::supply::PieceId;

/// Something observable that happened during a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A piece was placed at the given origin.
    PiecePlaced {
        piece: PieceId,
        shape: ShapeId,
        row: usize,
        col: usize,
        blocks: usize,
        points: u64,
    },

    /// Completed rows and columns were emptied.
    LinesCleared { lines: LineSet, points: u64 },

    /// The level went up. Cosmetic only.
    LevelUp { level: u32 },

    /// A new round of pieces was dealt.
    SupplyRefilled { pieces: Vec<PieceId> },

    /// The score passed the remembered high score.
    HighScore { score: u64 },

    /// No offered piece fits anywhere; the session is over.
    GameOver { final_score: u64 },
}

impl SessionEvent {
    /// Short name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            SessionEvent::PiecePlaced { .. } => "piece_placed",
            SessionEvent::LinesCleared { .. } => "lines_cleared",
            SessionEvent::LevelUp { .. } => "level_up",
            SessionEvent::SupplyRefilled { .. } => "supply_refilled",
            SessionEvent::HighScore { .. } => "high_score",
            SessionEvent::GameOver { .. } => "game_over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(SessionEvent::LevelUp { level: 2 }.kind(), "level_up");
        assert_eq!(SessionEvent::GameOver { final_score: 0 }.kind(), "game_over");
    }

    #[test]
    fn test_serde() {
        let event = SessionEvent::LinesCleared {
            lines: LineSet::from_indices([1], [4, 2]),
            points: 300,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: SessionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
