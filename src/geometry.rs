//! Geometric primitives consumed by the rasterizers.
//!
//! Coordinates are already-projected screen coordinates: x grows to the
//! right and y grows downward.

use crate::color::Color;

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A positioned, colored vertex.
///
/// Vertices are plain inputs to a draw call; rasterizers never retain them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    /// Screen position.
    pub position: Point,
    /// Color at this vertex.
    pub color: Color,
}

impl Vertex {
    /// Create a vertex from a position and color.
    #[must_use]
    pub const fn new(position: Point, color: Color) -> Self {
        Self { position, color }
    }

    /// Create a vertex from raw coordinates and channels.
    #[must_use]
    pub const fn from_parts(x: f32, y: f32, r: f32, g: f32, b: f32) -> Self {
        Self::new(Point::new(x, y), Color::new(r, g, b))
    }

    /// X coordinate.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.position.x
    }

    /// Y coordinate.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.position.y
    }

    /// Integer pixel this vertex falls in (`floor` of both coordinates).
    #[inline]
    #[must_use]
    pub fn pixel(&self) -> (i32, i32) {
        (self.position.x.floor() as i32, self.position.y.floor() as i32)
    }
}
