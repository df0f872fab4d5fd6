//! The piece supply - pieces currently offered to the player.
//!
//! Pieces are dealt in rounds. A round draws K distinct shapes from the
//! catalog; the next round is dealt only once every piece of the current one
//! has been placed.

use crate::core::{GameRng, SupplyError};
use crate::shapes::{ShapeCatalog, ShapeMask};

use super::piece::{Piece, PieceId};

/// Ordered collection of offered pieces.
///
/// ## Usage
///
/// ```
/// use block_blast::core::GameRng;
/// use block_blast::shapes::ShapeCatalog;
/// use block_blast::supply::PieceSupply;
///
/// let catalog = ShapeCatalog::standard();
/// let mut rng = GameRng::new(42);
/// let mut supply = PieceSupply::new();
///
/// assert!(supply.refill(&catalog, 3, &mut rng).unwrap());
/// assert_eq!(supply.len(), 3);
///
/// let first = supply.current()[0].id();
/// supply.consume(first).unwrap();
/// assert_eq!(supply.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PieceSupply {
    pieces: Vec<Piece>,
    next_id: u32,
}

impl PieceSupply {
    /// Create an empty supply.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The offered pieces, in display order.
    #[must_use]
    pub fn current(&self) -> &[Piece] {
        &self.pieces
    }

    /// Masks of the offered pieces, in display order.
    pub fn masks(&self) -> impl Iterator<Item = &ShapeMask> {
        self.pieces.iter().map(Piece::mask)
    }

    /// Draw `count` distinct shapes uniformly at random from `catalog`.
    ///
    /// The drawn pieces get fresh ids but are not added to the supply; see
    /// [`refill`](Self::refill).
    pub fn draw(
        &mut self,
        catalog: &ShapeCatalog,
        count: usize,
        rng: &mut GameRng,
    ) -> Result<Vec<Piece>, SupplyError> {
        let shapes = catalog.all_shapes();
        let picked = rng
            .sample_indices(shapes.len(), count)
            .ok_or(SupplyError::CatalogExhausted {
                requested: count,
                available: shapes.len(),
            })?;

        let pieces: Vec<Piece> = picked
            .into_iter()
            .map(|i| {
                let id = PieceId::new(self.next_id);
                self.next_id += 1;
                Piece::new(id, shapes[i].clone())
            })
            .collect();

        log::trace!(
            "drew {:?}",
            pieces.iter().map(|p| p.shape().key.as_str()).collect::<Vec<_>>()
        );
        Ok(pieces)
    }

    /// Deal a new round of `count` pieces if the supply is empty.
    ///
    /// Returns whether a round was dealt. On error the supply is unchanged.
    pub fn refill(
        &mut self,
        catalog: &ShapeCatalog,
        count: usize,
        rng: &mut GameRng,
    ) -> Result<bool, SupplyError> {
        if !self.pieces.is_empty() {
            return Ok(false);
        }
        self.pieces = self.draw(catalog, count, rng)?;
        Ok(true)
    }

    /// Remove an offered piece and return it.
    pub fn consume(&mut self, id: PieceId) -> Result<Piece, SupplyError> {
        let pos = self
            .pieces
            .iter()
            .position(|p| p.id() == id)
            .ok_or(SupplyError::NotFound(id))?;
        Ok(self.pieces.remove(pos))
    }

    /// Get an offered piece by id.
    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: PieceId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Drop every offered piece. Ids keep counting up.
    pub fn clear(&mut self) {
        self.pieces.clear();
    }
}
