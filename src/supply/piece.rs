//! Offered pieces.
//!
//! A `Piece` is one offer of a catalog shape. Two pieces may share a shape but
//! never an id; ids are not reused within a supply.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::shapes::{Color, Shape, ShapeId, ShapeMask};

/// Identifier of an offered piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// A shape currently offered to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    shape: Arc<Shape>,
}

impl Piece {
    #[must_use]
    pub fn new(id: PieceId, shape: Arc<Shape>) -> Self {
        Self { id, shape }
    }

    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// The catalog shape this piece offers.
    #[must_use]
    pub fn shape(&self) -> &Arc<Shape> {
        &self.shape
    }

    #[must_use]
    pub fn shape_id(&self) -> ShapeId {
        self.shape.id
    }

    #[must_use]
    pub fn mask(&self) -> &ShapeMask {
        &self.shape.mask
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.shape.color
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.id, self.shape.key)
    }
}
