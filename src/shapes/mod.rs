//! Shape system: piece geometry, colors, and the catalog.
//!
//! ## Key Types
//!
//! - `ShapeId`: Identifier of a shape in a catalog
//! - `ShapeMask`: Rectangular occupancy mask
//! - `Color`: Display color carried into filled cells
//! - `Shape`: Static definition (mask, key, name, color)
//! - `ShapeCatalog`: Registry the piece supply draws from

pub mod catalog;
pub mod shape;

pub use catalog::ShapeCatalog;
pub use shape::{Color, Shape, ShapeId, ShapeMask, MAX_SHAPE_DIM};
