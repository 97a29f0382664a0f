//! The write-only pixel capability the rasterizers draw into.

use crate::color::Color;

/// Destination for rasterized pixels.
///
/// Coordinates may be negative or beyond any storage bounds; what happens to
/// such writes is up to the implementation.
pub trait PixelSink {
    /// Store `color` at `(x, y)`, replacing whatever was there.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        (**self).set_pixel(x, y, color);
    }
}

/// A single recorded pixel write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelWrite {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Color written.
    pub color: Color,
}

/// A write log: every write is appended in order, unquantized and unclipped.
impl PixelSink for Vec<PixelWrite> {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.push(PixelWrite { x, y, color });
    }
}
