//! Board: cell occupancy, placement legality, line clears, previews.
//!
//! The board is passive. Its one invariant (every cell is either empty or
//! filled with a color) holds by construction because every mutator either
//! places a whole shape or clears whole lines.

pub mod grid;
pub mod lines;
pub mod preview;

pub use grid::{Board, Cell};
pub use lines::LineSet;
pub use preview::Preview;
