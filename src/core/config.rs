//! Session configuration.
//!
//! A session is configured once at construction. `reset` reuses the same
//! configuration, so a seeded config replays the same deal after a reset.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::shapes::ShapeCatalog;

/// Default board edge length.
pub const DEFAULT_GRID_SIZE: usize = 8;

/// Largest accepted board edge length.
pub const MAX_GRID_SIZE: usize = 256;

/// Default number of pieces offered per round.
pub const DEFAULT_PIECES_PER_ROUND: usize = 3;

/// Default points needed per level.
pub const DEFAULT_LEVEL_THRESHOLD: u64 = 1000;

/// Configuration for a [`GameSession`](crate::session::GameSession).
///
/// ## Example
///
/// ```
/// use block_blast::core::SessionConfig;
///
/// let config = SessionConfig::default()
///     .with_grid_size(10)
///     .with_seed(7);
///
/// assert_eq!(config.grid_size, 10);
/// assert_eq!(config.pieces_per_round, 3);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Edge length of the square board.
    pub grid_size: usize,

    /// Pieces drawn each time the supply runs out.
    pub pieces_per_round: usize,

    /// Points per level step.
    pub level_threshold: u64,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            pieces_per_round: DEFAULT_PIECES_PER_ROUND,
            level_threshold: DEFAULT_LEVEL_THRESHOLD,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create a configuration with the given dimensions and no fixed seed.
    #[must_use]
    pub fn new(grid_size: usize, pieces_per_round: usize, level_threshold: u64) -> Self {
        Self {
            grid_size,
            pieces_per_round,
            level_threshold,
            seed: None,
        }
    }

    /// Set the board edge length.
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the number of pieces per round.
    #[must_use]
    pub fn with_pieces_per_round(mut self, count: usize) -> Self {
        self.pieces_per_round = count;
        self
    }

    /// Set the points per level.
    #[must_use]
    pub fn with_level_threshold(mut self, threshold: u64) -> Self {
        self.level_threshold = threshold;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration against the catalog it will draw from.
    pub fn validate(&self, catalog: &ShapeCatalog) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        if self.pieces_per_round == 0 {
            return Err(ConfigError::ZeroPiecesPerRound);
        }
        if self.level_threshold == 0 {
            return Err(ConfigError::ZeroLevelThreshold);
        }
        if catalog.len() < self.pieces_per_round {
            return Err(ConfigError::CatalogTooSmall {
                pieces_per_round: self.pieces_per_round,
                catalog_size: catalog.len(),
            });
        }
        Ok(())
    }
}
