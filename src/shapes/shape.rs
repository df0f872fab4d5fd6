//! Shape definitions - static piece geometry.
//!
//! A `Shape` is one pre-rotated variant ("L-shape rotated 90"). Pieces are
//! never rotated by the player, so every orientation is its own shape.

use serde::{Deserialize, Serialize};

use crate::core::ShapeError;

/// Largest supported mask edge.
pub const MAX_SHAPE_DIM: usize = 5;

/// Identifier for a shape in a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u16);

impl ShapeId {
    /// Create a new shape ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Shape({})", self.0)
    }
}

/// 24-bit RGB display color.
///
/// The engine only carries it from a shape to the cells it fills.
///
/// ```
/// use block_blast::shapes::Color;
///
/// let cyan = Color::from_hex("#00BCD4").unwrap();
/// assert_eq!(cyan, Color::rgb(0x00, 0xBC, 0xD4));
/// assert_eq!(cyan.to_string(), "#00BCD4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self)
    }

    #[must_use]
    pub const fn components(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

/// Rectangular occupancy mask of a shape, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeMask {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl ShapeMask {
    /// Build a mask from rows of 0/1 values.
    ///
    /// Any non-zero value marks a filled cell. Every row must have the same
    /// length; an all-zero mask is accepted.
    ///
    /// ```
    /// use block_blast::shapes::ShapeMask;
    ///
    /// let t = ShapeMask::from_rows(&[[1u8, 1, 1], [0, 1, 0]]).unwrap();
    /// assert_eq!((t.rows(), t.cols()), (2, 3));
    /// assert_eq!(t.block_count(), 4);
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if height == 0 || width == 0 {
            return Err(ShapeError::Empty);
        }
        if height > MAX_SHAPE_DIM || width > MAX_SHAPE_DIM {
            return Err(ShapeError::TooLarge { rows: height, cols: width, max: MAX_SHAPE_DIM });
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(ShapeError::Ragged { row, expected: width, found: values.len() });
            }
            cells.extend(values.iter().map(|&v| v != 0));
        }

        Ok(Self { rows: height, cols: width, cells })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell at `(row, col)` is part of the shape.
    ///
    /// Cells outside the mask are reported as not set.
    #[must_use]
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Offsets `(row, col)` of every set cell, row-major.
    pub fn offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &set)| set)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// Number of set cells.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.cells.iter().filter(|&&set| set).count()
    }
}

impl std::fmt::Display for ShapeMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                f.write_str(if self.is_set(row, col) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Static shape definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Catalog identifier.
    pub id: ShapeId,

    /// Stable textual key, e.g. `"L-0"`.
    pub key: String,

    /// Display name, e.g. `"L-shape"`.
    pub name: String,

    /// Occupancy mask.
    pub mask: ShapeMask,

    /// Color given to the cells this shape fills.
    pub color: Color,
}

impl Shape {
    /// Create a new shape definition.
    #[must_use]
    pub fn new(
        id: ShapeId,
        key: impl Into<String>,
        name: impl Into<String>,
        mask: ShapeMask,
        color: Color,
    ) -> Self {
        Self {
            id,
            key: key.into(),
            name: name.into(),
            mask,
            color,
        }
    }

    /// Number of cells this shape fills.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.mask.block_count()
    }
}
