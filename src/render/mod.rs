//! Rasterization of color-interpolated primitives.
//!
//! Both rasterizers are free functions generic over a [`PixelSink`]. They
//! write pixels and never read them back, so the painter's algorithm applies:
//! later writes to the same pixel replace earlier ones.
//!
//! # Algorithms
//!
//! - **Lines**: slope-driven incremental walk (a DDA variant) with colors
//!   weighted by distance to each endpoint.
//! - **Triangles**: bounding-box scan with edge functions, the top-left fill
//!   rule for pixels exactly on an edge, and barycentric color interpolation.

mod line;
mod sink;
mod triangle;

pub use line::{draw_line, interpolate_color};
pub use sink::{PixelSink, PixelWrite};
pub use triangle::{barycentric, draw_triangle, Winding};
