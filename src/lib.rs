//! # trirast
//!
//! Software rasterizer core for color-interpolated primitives.
//!
//! Given already-projected screen-space vertices with floating-point colors,
//! trirast decides exactly which pixels a line segment or solid triangle
//! covers and what color each receives.
//!
//! ## Features
//!
//! - **Lines**: slope-driven incremental walk with distance-weighted color
//!   interpolation; endpoints always keep their exact colors
//! - **Triangles**: edge-function coverage with the top-left fill rule, so
//!   adjacent triangles tile without gaps or double writes
//! - **Barycentric shading** across triangle interiors
//! - **Pluggable output**: rasterizers draw into any [`PixelSink`]
//! - **Scene mini-language** and PNG output for end-to-end rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use trirast::prelude::*;
//!
//! let mut fb = Framebuffer::new(32, 32)?;
//! fb.clear(Rgba::BLACK);
//!
//! draw_triangle(
//!     &mut fb,
//!     Vertex::from_parts(2.0, 2.0, 1.0, 0.0, 0.0),
//!     Vertex::from_parts(28.0, 6.0, 0.0, 1.0, 0.0),
//!     Vertex::from_parts(10.0, 28.0, 0.0, 0.0, 1.0),
//! );
//! draw_line(
//!     &mut fb,
//!     Vertex::from_parts(0.0, 31.0, 1.0, 1.0, 1.0),
//!     Vertex::from_parts(31.0, 0.0, 1.0, 1.0, 0.0),
//! );
//!
//! let png = PngEncoder::to_bytes(&fb)?;
//! assert!(!png.is_empty());
//! # Ok::<(), trirast::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli`: the `trirast` command-line scene renderer

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Points and vertices.
pub mod geometry;

/// Line and triangle rasterization.
pub mod render;

// ============================================================================
// Collaborators
// ============================================================================

/// Pixel storage backend.
pub mod framebuffer;

/// Scene mini-language loader.
pub mod scene;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trirast operations.
pub mod error;

pub use error::{Error, Result};
pub use render::PixelSink;

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trirast::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Color, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Point, Vertex};
    pub use crate::output::PngEncoder;
    pub use crate::render::{draw_line, draw_triangle, PixelSink, PixelWrite, Winding};
    pub use crate::scene::{Command, Scene};
}
