//! # block-blast
//!
//! Game-state engine for a single-player block placement puzzle.
//!
//! The player is offered a few polyomino pieces per round and drops them onto
//! a square grid. Full rows and columns are cleared for bonus points. The
//! game ends when none of the offered pieces fits anywhere.
//!
//! ## Design Principles
//!
//! 1. **Transactional Moves**: A placement is accepted or rejected as a whole.
//!    Scoring, clears, level, refill, and game-over detection happen inside
//!    the same call.
//!
//! 2. **Configuration Over Convention**: Grid size, pieces per round, level
//!    threshold, catalog, and seed are set through `SessionConfig` and
//!    `SessionBuilder`.
//!
//! 3. **Reproducible**: All randomness goes through a seedable `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG, scoring rules
//! - `shapes`: Shape masks, colors, and the catalog
//! - `board`: Cell grid, placement legality, line clears, previews
//! - `supply`: Pieces currently offered to the player
//! - `session`: The move pipeline, events, high score, snapshots

pub mod board;
pub mod core;
pub mod session;
pub mod shapes;
pub mod supply;

// Re-export commonly used types
pub use crate::core::{
    BoardError, ConfigError, GameRng, GameRngState, SessionConfig, SessionError, ShapeError,
    SupplyError,
};

pub use crate::shapes::{Color, Shape, ShapeCatalog, ShapeId, ShapeMask};

pub use crate::board::{Board, Cell, LineSet, Preview};

pub use crate::supply::{Piece, PieceId, PieceSupply};

pub use crate::session::{
    GameSession, HighScoreStore, MemoryHighScore, OfferedPiece, PlacementOutcome,
    SessionBuilder, SessionEvent, SessionSnapshot, SessionStatus,
};
