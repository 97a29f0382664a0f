//! Solid triangle rasterization.
//!
//! Every integer pixel in the triangle's bounding box is classified with
//! three edge functions. Pixels strictly inside are drawn; pixels exactly on
//! an edge are drawn only when that edge is a *top* or *left* edge, so two
//! triangles sharing an edge never both claim (or both skip) its pixels.
//! Vertex pixels follow the same convention: a vertex is drawn, in its exact
//! source color, only when both of its edges are top or left.
//!
//! Edges are evaluated in the triangle's *canonical order*: the vertex
//! traversal in which the interior lies on the non-negative side of every
//! edge function. In that order a left edge is one that descends (its end
//! has the larger y), since y grows downward.

use super::PixelSink;
use crate::color::Color;
use crate::geometry::{Point, Vertex};

/// Vertex order of a triangle, from the sign of its signed area
/// `(x2-x1)(y3-y1) - (y2-y1)(x3-x1)`.
///
/// The names follow the usual y-up convention; on a y-down screen a
/// `CounterClockwise` triangle appears clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Negative signed area.
    Clockwise,
    /// Positive signed area.
    CounterClockwise,
}

impl Winding {
    /// Winding of `(p1, p2, p3)`, or `None` for a degenerate (zero-area or
    /// non-finite) triangle.
    #[must_use]
    pub fn of(p1: Point, p2: Point, p3: Point) -> Option<Self> {
        let area = (p2.x - p1.x) * (p3.y - p1.y) - (p2.y - p1.y) * (p3.x - p1.x);
        if area > 0.0 {
            Some(Self::CounterClockwise)
        } else if area < 0.0 {
            Some(Self::Clockwise)
        } else {
            None
        }
    }

    /// Reorder `(v1, v2, v3)` so the interior is on the non-negative side of
    /// each edge `a -> b`.
    fn canonical(self, v1: Vertex, v2: Vertex, v3: Vertex) -> [Vertex; 3] {
        match self {
            Self::Clockwise => [v1, v2, v3],
            Self::CounterClockwise => [v1, v3, v2],
        }
    }
}

/// Directed edge `a -> b` in canonical order, with the vertex opposite it.
#[derive(Debug, Clone, Copy)]
struct Edge {
    a: Point,
    b: Point,
    opposite: Point,
}

impl Edge {
    /// Edge function: zero on the edge line, positive on the interior side.
    #[inline]
    fn eval(&self, p: Point) -> f32 {
        (self.b.y - self.a.y) * (p.x - self.a.x) - (self.b.x - self.a.x) * (p.y - self.a.y)
    }

    /// Horizontal with the rest of the triangle below it.
    fn is_top(&self) -> bool {
        self.a.y == self.b.y && self.opposite.y > self.a.y
    }

    /// Descending in canonical order.
    fn is_left(&self) -> bool {
        self.b.y > self.a.y
    }

    /// Whether `p`, lying exactly on this edge, belongs to the triangle.
    fn owns(&self, p: Point) -> bool {
        if self.eval(p) != 0.0 {
            return false;
        }
        if self.is_top() {
            return strictly_between(p.x, self.a.x, self.b.x);
        }
        self.is_left() && strictly_between(p.y, self.a.y, self.b.y)
    }
}

#[inline]
fn strictly_between(t: f32, a: f32, b: f32) -> bool {
    (a < t && t < b) || (b < t && t < a)
}

/// Draw a solid triangle with barycentric color interpolation.
///
/// Degenerate triangles (collinear vertices, or any non-finite coordinate)
/// write nothing.
///
/// # Example
///
/// ```
/// use trirast::prelude::*;
///
/// let mut writes: Vec<PixelWrite> = Vec::new();
/// draw_triangle(
///     &mut writes,
///     Vertex::from_parts(0.0, 0.0, 1.0, 0.0, 0.0),
///     Vertex::from_parts(0.0, 10.0, 0.0, 1.0, 0.0),
///     Vertex::from_parts(10.0, 0.0, 0.0, 0.0, 1.0),
/// );
///
/// // Half-open coverage: the hypotenuse x + y = 10 belongs to a neighbour.
/// assert_eq!(writes.len(), 55);
/// assert!(writes.iter().all(|w| w.x + w.y <= 9));
/// ```
pub fn draw_triangle<S: PixelSink + ?Sized>(sink: &mut S, v1: Vertex, v2: Vertex, v3: Vertex) {
    let vertices = [v1, v2, v3];

    let finite = vertices
        .iter()
        .all(|v| v.x().is_finite() && v.y().is_finite());
    let winding = if finite {
        Winding::of(v1.position, v2.position, v3.position)
    } else {
        None
    };
    let Some(winding) = winding else {
        log::debug!(
            "skipping degenerate triangle ({}, {}) ({}, {}) ({}, {})",
            v1.x(),
            v1.y(),
            v2.x(),
            v2.y(),
            v3.x(),
            v3.y()
        );
        return;
    };

    log::trace!(
        "draw_triangle ({}, {}) ({}, {}) ({}, {}) {:?}",
        v1.x(),
        v1.y(),
        v2.x(),
        v2.y(),
        v3.x(),
        v3.y(),
        winding
    );

    let order = winding.canonical(v1, v2, v3);
    let edges: [Edge; 3] = std::array::from_fn(|k| Edge {
        a: order[k].position,
        b: order[(k + 1) % 3].position,
        opposite: order[(k + 2) % 3].position,
    });

    let min_x = v1.x().min(v2.x()).min(v3.x()).floor() as i32;
    let max_x = v1.x().max(v2.x()).max(v3.x()).ceil() as i32;
    let min_y = v1.y().min(v2.y()).min(v3.y()).floor() as i32;
    let max_y = v1.y().max(v2.y()).max(v3.y()).ceil() as i32;

    for j in min_y..=max_y {
        for i in min_x..=max_x {
            let p = Point::new(i as f32, j as f32);

            if vertices.iter().any(|v| v.position == p) {
                continue;
            }

            let w = edges.map(|e| e.eval(p));
            if w.iter().any(|&w| w < 0.0) {
                continue;
            }

            let on_edge = w.iter().any(|&w| w == 0.0);
            if on_edge && !edges.iter().any(|e| e.owns(p)) {
                continue;
            }

            if let Some(color) = shade(v1, v2, v3, p) {
                sink.set_pixel(i, j, color);
            }
        }
    }

    // A vertex belongs to the triangle when it ends an edge that descends
    // into it (or a horizontal top edge) and starts a descending edge.
    for k in 0..3 {
        let prev = order[(k + 2) % 3];
        let vertex = order[k];
        let next = order[(k + 1) % 3];

        if next.y() > vertex.y() && vertex.y() >= prev.y() {
            let (x, y) = vertex.pixel();
            sink.set_pixel(x, y, vertex.color);
        }
    }
}

/// Barycentric weights `(u, v, w)` of `p` with respect to `(p1, p2, p3)`.
///
/// Computed with `p3` as pivot; `w = 1 - u - v`. Returns `None` when the
/// triangle is degenerate.
///
/// # Example
///
/// ```
/// use trirast::geometry::Point;
/// use trirast::render::barycentric;
///
/// let (a, b, c) = (Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0));
/// let (u, v, w) = barycentric(a, b, c, Point::new(1.0, 1.0)).unwrap();
/// assert!((u - 0.5).abs() < 1e-6);
/// assert!((v - 0.25).abs() < 1e-6);
/// assert!((w - 0.25).abs() < 1e-6);
/// ```
#[must_use]
pub fn barycentric(p1: Point, p2: Point, p3: Point, p: Point) -> Option<(f32, f32, f32)> {
    let denom = (p2.y - p3.y) * (p1.x - p3.x) + (p3.x - p2.x) * (p1.y - p3.y);
    if denom == 0.0 {
        return None;
    }

    let u = ((p2.y - p3.y) * (p.x - p3.x) + (p3.x - p2.x) * (p.y - p3.y)) / denom;
    let v = ((p3.y - p1.y) * (p.x - p3.x) + (p1.x - p3.x) * (p.y - p3.y)) / denom;
    Some((u, v, 1.0 - u - v))
}

#[inline]
fn shade(v1: Vertex, v2: Vertex, v3: Vertex, p: Point) -> Option<Color> {
    let (u, v, w) = barycentric(v1.position, v2.position, v3.position, p)?;
    Some(u * v1.color + v * v2.color + w * v3.color)
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
