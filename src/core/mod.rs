//! Core engine types: RNG, configuration, scoring rules, errors.
//!
//! Nothing in here knows about the board or the pieces; the game modules
//! build on these.

pub mod config;
pub mod error;
pub mod rng;
pub mod scoring;

pub use config::{
    SessionConfig, DEFAULT_GRID_SIZE, DEFAULT_LEVEL_THRESHOLD, DEFAULT_PIECES_PER_ROUND,
    MAX_GRID_SIZE,
};
pub use error::{BoardError, ConfigError, SessionError, ShapeError, SupplyError};
pub use rng::{GameRng, GameRngState};
pub use scoring::{level_for_score, line_clear_points, placement_points, POINTS_PER_BLOCK, POINTS_PER_LINE};
