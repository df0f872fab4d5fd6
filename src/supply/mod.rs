//! Piece supply: the shapes currently offered to the player.
//!
//! ## Key Types
//!
//! - `PieceId`: Identity of one offer (distinct from the shape it offers)
//! - `Piece`: An offered shape
//! - `PieceSupply`: Ordered offers, dealt in rounds from a `ShapeCatalog`

pub mod piece;
pub mod pool;

pub use piece::{Piece, PieceId};
pub use pool::PieceSupply;
