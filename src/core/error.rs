//! Error types for every layer of the engine.
//!
//! Two outcomes are expected during normal play and are meant to be shown to
//! the player: [`SessionError::PlacementRejected`] ("invalid move") and
//! [`SessionError::SessionEnded`] ("game over, restart?"). Everything else
//! signals a defect in the caller or in the configuration.

use thiserror::Error;

use crate::supply::PieceId;

/// Errors raised by [`Board`](crate::board::Board) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A coordinate lies outside the `size` x `size` grid.
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfRange { row: usize, col: usize, size: usize },

    /// The shape overlaps a filled cell or leaves the grid at this origin.
    #[error("shape does not fit at origin ({row}, {col})")]
    PlacementRejected { row: usize, col: usize },

    /// Stored cells do not form a `size` x `size` grid.
    #[error("{found} cells cannot form a {size}x{size} board")]
    CellCount { size: usize, found: usize },
}

/// Errors raised while building a shape mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape mask has no rows or no columns")]
    Empty,

    #[error("shape mask row {row} has {found} columns, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("shape mask is {rows}x{cols}, at most {max}x{max} is supported")]
    TooLarge { rows: usize, cols: usize, max: usize },
}

/// Errors raised by the [`PieceSupply`](crate::supply::PieceSupply).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SupplyError {
    #[error("cannot draw {requested} distinct shapes from a catalog of {available}")]
    CatalogExhausted { requested: usize, available: usize },

    #[error("{0} is not currently offered")]
    NotFound(PieceId),
}

/// Invalid [`SessionConfig`](crate::core::SessionConfig) values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    ZeroGridSize,

    #[error("grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: usize, max: usize },

    #[error("pieces per round must be at least 1")]
    ZeroPiecesPerRound,

    #[error("level threshold must be at least 1")]
    ZeroLevelThreshold,

    #[error("starting board is {found}x{found}, expected {expected}x{expected}")]
    BoardSizeMismatch { expected: usize, found: usize },

    #[error("{pieces_per_round} pieces per round needs a catalog of at least that many shapes, got {catalog_size}")]
    CatalogTooSmall {
        pieces_per_round: usize,
        catalog_size: usize,
    },
}

/// Errors returned across the [`GameSession`](crate::session::GameSession) boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session has ended; only `reset` is accepted.
    #[error("the session has ended")]
    SessionEnded,

    /// The piece id does not name an offered piece.
    #[error("{0} is not in the current supply")]
    UnknownPiece(PieceId),

    /// The piece does not fit at the requested origin. Nothing was changed.
    #[error("{piece} does not fit at ({row}, {col})")]
    PlacementRejected { piece: PieceId, row: usize, col: usize },

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Supply(#[from] SupplyError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl SessionError {
    /// Whether this is an expected gameplay outcome rather than a defect.
    ///
    /// Recoverable errors leave the session untouched and should be surfaced
    /// to the player; the rest point at a bug in the caller or the setup.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SessionError::PlacementRejected { .. } | SessionError::SessionEnded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_GRID_SIZE;

    #[test]
    fn test_messages() {
        let err = BoardError::OutOfRange { row: 9, col: 0, size: 8 };
        assert_eq!(err.to_string(), "cell (9, 0) is outside the 8x8 board");

        let err = BoardError::CellCount { size: 8, found: 1 };
        assert_eq!(err.to_string(), "1 cells cannot form a 8x8 board");

        let err = ConfigError::GridTooLarge { size: 300, max: MAX_GRID_SIZE };
        assert_eq!(err.to_string(), "grid size 300 exceeds the maximum of 256");

        let err = SupplyError::NotFound(PieceId::new(4));
        assert_eq!(err.to_string(), "Piece(4) is not currently offered");
    }

    #[test]
    fn test_from_conversions() {
        let err: SessionError = SupplyError::CatalogExhausted { requested: 3, available: 2 }.into();
        assert!(matches!(err, SessionError::Supply(_)));

        let err: SessionError = ConfigError::ZeroGridSize.into();
        assert_eq!(err.to_string(), "invalid configuration: grid size must be at least 1");
    }

    #[test]
    fn test_recoverable() {
        assert!(SessionError::SessionEnded.is_recoverable());
        assert!(SessionError::PlacementRejected { piece: PieceId::new(0), row: 1, col: 2 }.is_recoverable());
        assert!(!SessionError::UnknownPiece(PieceId::new(0)).is_recoverable());
        assert!(!SessionError::Board(BoardError::OutOfRange { row: 8, col: 8, size: 8 }).is_recoverable());
    }
}
