//! Shape catalog for definition lookup.
//!
//! The `ShapeCatalog` stores every shape a supply may offer, in registration
//! order. Shapes are shared as `Arc<Shape>` so offered pieces can hold on to
//! their geometry without borrowing the catalog.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::shape::{Color, Shape, ShapeId, ShapeMask};

/// The standard variants: key, name, mask rows, color.
const STANDARD_SHAPES: &[(&str, &str, &[&[u8]], u32)] = &[
    ("Square-0", "Square 2x2", &[&[1, 1], &[1, 1]], 0x00BCD4),
    ("Square-1", "Square 3x3", &[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]], 0xFFEB3B),
    ("Line-0", "Line 4", &[&[1, 1, 1, 1]], 0x8BC34A),
    ("Line-1", "Line 5", &[&[1, 1, 1, 1, 1]], 0x9C27B0),
    ("Line-2", "Line 4 (Vertical)", &[&[1], &[1], &[1], &[1]], 0xFF4081),
    ("Line-3", "Line 5 (Vertical)", &[&[1], &[1], &[1], &[1], &[1]], 0xE040FB),
    ("L-0", "L-shape", &[&[1, 1, 0], &[1, 1, 1]], 0xFF5252),
    ("L-1", "L-shape rotated 90", &[&[1, 0], &[1, 0], &[1, 1]], 0x4CAF50),
    ("L-2", "L-shape rotated 180", &[&[1, 1], &[0, 1], &[0, 1]], 0xFF9800),
    ("L-3", "L-shape rotated 270", &[&[0, 1], &[0, 1], &[1, 1]], 0x2196F3),
    ("T-0", "T-shape", &[&[1, 1, 1], &[0, 1, 0]], 0x9C27B0),
    ("T-1", "T-shape rotated 90", &[&[0, 1], &[1, 1], &[0, 1]], 0x00BCD4),
    ("T-2", "T-shape rotated 180", &[&[0, 1, 0], &[1, 1, 1]], 0xE91E63),
    ("T-3", "T-shape rotated 270", &[&[1, 0], &[1, 1], &[1, 0]], 0xFF4081),
    ("Z-0", "Z-shape", &[&[1, 1, 0], &[0, 1, 1]], 0x4CAF50),
    ("Z-1", "Z-shape rotated 90", &[&[0, 1], &[1, 1], &[1, 0]], 0xF44336),
    ("S-0", "S-shape", &[&[0, 1, 1], &[1, 1, 0]], 0x2E7D32),
    ("S-1", "S-shape rotated 90", &[&[1, 0], &[1, 1], &[0, 1]], 0x03A9F4),
    ("U-0", "U-shape", &[&[1, 0, 1], &[1, 1, 1]], 0xFFC107),
    ("U-1", "U-shape rotated", &[&[1, 1, 1], &[1, 0, 1]], 0x3F51B5),
    ("Diamond-0", "Diamond", &[&[0, 1, 0], &[1, 1, 1], &[0, 1, 0]], 0xE91E63),
    ("Stair-0", "Stair", &[&[1, 0, 0], &[1, 1, 0], &[1, 1, 1]], 0xFF9800),
];

/// Registry of shape definitions.
///
/// ## Example
///
/// ```
/// use block_blast::shapes::{Color, ShapeCatalog, ShapeMask};
///
/// let mut catalog = ShapeCatalog::new();
/// let id = catalog.register_auto(
///     "Dot-0",
///     "Dot",
///     ShapeMask::from_rows(&[[1u8]]).unwrap(),
///     Color::rgb(255, 0, 0),
/// );
///
/// assert_eq!(catalog.get(id).unwrap().key, "Dot-0");
/// assert_eq!(catalog.find_by_key("Dot-0").unwrap().id, id);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ShapeCatalog {
    shapes: Vec<Arc<Shape>>,
    by_id: FxHashMap<ShapeId, usize>,
    by_key: FxHashMap<String, usize>,
    next_id: u16,
}

impl ShapeCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog of pre-rotated variants.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for &(key, name, rows, color) in STANDARD_SHAPES {
            let mask = ShapeMask::from_rows(rows).expect("built-in shape masks are valid");
            catalog.register_auto(key, name, mask, Color(color));
        }
        catalog
    }

    /// Register a shape definition.
    ///
    /// Panics if a shape with the same ID or key already exists.
    pub fn register(&mut self, shape: Shape) {
        if self.by_id.contains_key(&shape.id) {
            panic!("Shape with ID {:?} already registered", shape.id);
        }
        if self.by_key.contains_key(&shape.key) {
            panic!("Shape with key {:?} already registered", shape.key);
        }

        let index = self.shapes.len();
        self.next_id = self.next_id.max(shape.id.raw().saturating_add(1));
        self.by_id.insert(shape.id, index);
        self.by_key.insert(shape.key.clone(), index);
        self.shapes.push(Arc::new(shape));
    }

    /// Register a shape with an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn register_auto(
        &mut self,
        key: impl Into<String>,
        name: impl Into<String>,
        mask: ShapeMask,
        color: Color,
    ) -> ShapeId {
        let id = ShapeId::new(self.next_id);
        self.register(Shape::new(id, key, name, mask, color));
        id
    }

    /// Every shape, in registration order.
    #[must_use]
    pub fn all_shapes(&self) -> &[Arc<Shape>] {
        &self.shapes
    }

    /// Get a shape by ID.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Arc<Shape>> {
        self.by_id.get(&id).map(|&i| &self.shapes[i])
    }

    /// Get a shape by its textual key.
    #[must_use]
    pub fn find_by_key(&self, key: &str) -> Option<&Arc<Shape>> {
        self.by_key.get(key).map(|&i| &self.shapes[i])
    }

    /// Check if a shape ID is registered.
    #[must_use]
    pub fn contains(&self, id: ShapeId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Get the number of registered shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterate over all shapes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Shape>> {
        self.shapes.iter()
    }
}
