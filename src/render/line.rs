//! Line rasterization.
//!
//! A slope-driven incremental walk: one pixel per integer step along the
//! dominant axis, with the minor coordinate advanced by the slope (or its
//! inverse). Walked pixels are colored by [`interpolate_color`]; the two
//! endpoints are written last in their exact colors.

use super::PixelSink;
use crate::color::Color;
use crate::geometry::{Point, Vertex};

/// Draw a line segment from `v1` to `v2`.
///
/// # Stepping
///
/// - `x1 == x2`: step `y` through `min(y1, y2)..=max(y1, y2)`, holding `x`.
/// - `|m| > 1`: step `y` upward from the smaller `y`; `x` starts at that
///   endpoint and advances by `1/m` per step.
/// - otherwise: step `x` upward from the smaller `x`; `y` starts at that
///   endpoint and advances by `m` per step.
///
/// Every walked position is written at `(floor(x), floor(y))`. Afterwards
/// `v1` and then `v2` are written at their floored positions in their source
/// colors, so the endpoints always carry exact colors. A degenerate segment
/// (`v1 == v2`) therefore ends with `v2`'s color.
///
/// # Example
///
/// ```
/// use trirast::prelude::*;
///
/// let mut writes: Vec<PixelWrite> = Vec::new();
/// let a = Vertex::from_parts(0.0, 0.0, 0.0, 0.0, 0.0);
/// let b = Vertex::from_parts(4.0, 0.0, 1.0, 1.0, 1.0);
/// draw_line(&mut writes, a, b);
///
/// let mid = writes.iter().find(|w| (w.x, w.y) == (2, 0)).unwrap();
/// assert!((mid.color.r - 0.5).abs() < 1e-6);
/// ```
pub fn draw_line<S: PixelSink + ?Sized>(sink: &mut S, v1: Vertex, v2: Vertex) {
    let (x1, y1) = (v1.x(), v1.y());
    let (x2, y2) = (v2.x(), v2.y());

    if !(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()) {
        log::debug!("skipping line with non-finite endpoint ({x1}, {y1}) -> ({x2}, {y2})");
        return;
    }

    log::trace!("draw_line ({x1}, {y1}) -> ({x2}, {y2})");

    {
        let mut plot = |x: f32, y: f32| {
            let color = interpolate_color(v1, v2, Point::new(x, y));
            sink.set_pixel(x.floor() as i32, y.floor() as i32, color);
        };

        if x1 == x2 {
            let y_start = y1.min(y2);
            for k in 0..=step_count(y_start, y1.max(y2)) {
                plot(x1, y_start + k as f32);
            }
        } else {
            let m = (y2 - y1) / (x2 - x1);

            if m.abs() > 1.0 {
                let (x_start, y_start) = if y1 < y2 { (x1, y1) } else { (x2, y2) };
                for k in 0..=step_count(y_start, y1.max(y2)) {
                    let k = k as f32;
                    plot(x_start + k / m, y_start + k);
                }
            } else {
                let (x_start, y_start) = if x1 < x2 { (x1, y1) } else { (x2, y2) };
                for k in 0..=step_count(x_start, x1.max(x2)) {
                    let k = k as f32;
                    plot(x_start + k, y_start + k * m);
                }
            }
        }
    }

    let (px, py) = v1.pixel();
    sink.set_pixel(px, py, v1.color);
    let (px, py) = v2.pixel();
    sink.set_pixel(px, py, v2.color);
}

/// Number of whole unit steps from `start` that stay within `end`.
#[inline]
fn step_count(start: f32, end: f32) -> u32 {
    (end - start).floor() as u32
}

/// Interpolate the color at `point` between the endpoints of a segment.
///
/// Each endpoint's color is weighted by the *other* endpoint's share of the
/// total distance: `(d1 * c2 + d2 * c1) / (d1 + d2)` where `d1`, `d2` are
/// the distances from `point` to `v1`, `v2`. On the segment this equals
/// linear interpolation by position. When both distances are zero the result
/// is `v1`'s color.
///
/// # Example
///
/// ```
/// use trirast::prelude::*;
/// use trirast::render::interpolate_color;
///
/// let a = Vertex::from_parts(0.0, 0.0, 1.0, 0.0, 0.0);
/// let b = Vertex::from_parts(10.0, 0.0, 0.0, 0.0, 1.0);
/// let c = interpolate_color(a, b, Point::new(2.5, 0.0));
/// assert!((c.r - 0.75).abs() < 1e-6);
/// assert!((c.b - 0.25).abs() < 1e-6);
/// ```
#[must_use]
pub fn interpolate_color(v1: Vertex, v2: Vertex, point: Point) -> Color {
    let d1 = point.distance(v1.position);
    let d2 = point.distance(v2.position);
    let total = d1 + d2;

    if total == 0.0 {
        return v1.color;
    }

    (d1 / total) * v2.color + (d2 / total) * v1.color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PixelWrite;
    use approx::assert_relative_eq;
    use std::collections::{BTreeSet, HashMap};

    fn vertex(x: f32, y: f32, color: Color) -> Vertex {
        Vertex::new(Point::new(x, y), color)
    }

    fn covered(writes: &[PixelWrite]) -> BTreeSet<(i32, i32)> {
        writes.iter().map(|w| (w.x, w.y)).collect()
    }

    fn final_colors(writes: &[PixelWrite]) -> HashMap<(i32, i32), Color> {
        writes.iter().map(|w| ((w.x, w.y), w.color)).collect()
    }

    fn line(v1: Vertex, v2: Vertex) -> Vec<PixelWrite> {
        let mut writes = Vec::new();
        draw_line(&mut writes, v1, v2);
        writes
    }

    #[test]
    fn test_horizontal_line_covers_integer_points() {
        let writes = line(vertex(2.0, 5.0, Color::BLACK), vertex(6.0, 5.0, Color::WHITE));

        let expected: BTreeSet<_> = (2..=6).map(|x| (x, 5)).collect();
        assert_eq!(covered(&writes), expected);
    }

    #[test]
    fn test_vertical_line_covers_integer_points() {
        let writes = line(vertex(3.0, 4.0, Color::BLACK), vertex(3.0, 1.0, Color::WHITE));

        let expected: BTreeSet<_> = (1..=4).map(|y| (3, y)).collect();
        assert_eq!(covered(&writes), expected);
    }

    #[test]
    fn test_endpoints_written_last_in_source_colors() {
        let red = Color::new(1.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 1.0);
        let writes = line(vertex(1.0, 1.0, red), vertex(9.0, 4.0, blue));

        let n = writes.len();
        assert_eq!(writes[n - 2], PixelWrite { x: 1, y: 1, color: red });
        assert_eq!(writes[n - 1], PixelWrite { x: 9, y: 4, color: blue });

        let finals = final_colors(&writes);
        assert_eq!(finals[&(1, 1)], red);
        assert_eq!(finals[&(9, 4)], blue);
    }

    #[test]
    fn test_colors_interpolate_along_walk() {
        let writes = line(vertex(0.0, 0.0, Color::BLACK), vertex(4.0, 0.0, Color::WHITE));
        let finals = final_colors(&writes);

        assert_relative_eq!(finals[&(1, 0)].r, 0.25, epsilon = 1e-6);
        assert_relative_eq!(finals[&(2, 0)].g, 0.5, epsilon = 1e-6);
        assert_relative_eq!(finals[&(3, 0)].b, 0.75, epsilon = 1e-6);
    }

    #[test]
    fn test_steep_line_one_pixel_per_row() {
        let writes = line(vertex(0.0, 0.0, Color::BLACK), vertex(2.0, 6.0, Color::WHITE));

        let expected: BTreeSet<_> =
            [(0, 0), (0, 1), (0, 2), (1, 3), (1, 4), (1, 5), (2, 6)].into_iter().collect();
        assert_eq!(covered(&writes), expected);
    }

    #[test]
    fn test_steep_line_reversed_matches() {
        let forward = line(vertex(0.0, 0.0, Color::BLACK), vertex(2.0, 6.0, Color::WHITE));
        let backward = line(vertex(2.0, 6.0, Color::WHITE), vertex(0.0, 0.0, Color::BLACK));
        assert_eq!(covered(&forward), covered(&backward));
    }

    #[test]
    fn test_steep_negative_slope_starts_at_top() {
        let writes = line(vertex(0.0, 6.0, Color::BLACK), vertex(2.0, 0.0, Color::WHITE));

        let expected: BTreeSet<_> =
            [(2, 0), (1, 1), (1, 2), (1, 3), (0, 4), (0, 5), (0, 6)].into_iter().collect();
        assert_eq!(covered(&writes), expected);
    }

    #[test]
    fn test_unit_slope_walks_x() {
        let writes = line(vertex(0.0, 0.0, Color::BLACK), vertex(3.0, 3.0, Color::WHITE));

        let expected: BTreeSet<_> = (0..=3).map(|k| (k, k)).collect();
        assert_eq!(covered(&writes), expected);
        // 4 walked pixels + 2 endpoint rewrites
        assert_eq!(writes.len(), 6);
    }

    #[test]
    fn test_fractional_endpoints_floor() {
        let writes = line(vertex(0.5, 0.5, Color::BLACK), vertex(3.5, 0.5, Color::WHITE));

        let expected: BTreeSet<_> = (0..=3).map(|x| (x, 0)).collect();
        assert_eq!(covered(&writes), expected);
    }

    #[test]
    fn test_degenerate_line_single_pixel() {
        let red = Color::new(1.0, 0.0, 0.0);
        let green = Color::new(0.0, 1.0, 0.0);
        let writes = line(vertex(2.0, 2.0, red), vertex(2.0, 2.0, green));

        assert!(writes.iter().all(|w| (w.x, w.y) == (2, 2) && w.color.is_finite()));
        assert_eq!(writes.last().map(|w| w.color), Some(green));
    }

    #[test]
    fn test_non_finite_endpoint_writes_nothing() {
        let writes = line(vertex(f32::NAN, 0.0, Color::BLACK), vertex(3.0, 0.0, Color::WHITE));
        assert!(writes.is_empty());

        let writes = line(vertex(0.0, 0.0, Color::BLACK), vertex(0.0, f32::INFINITY, Color::WHITE));
        assert!(writes.is_empty());
    }

    #[test]
    fn test_interpolate_color_endpoints() {
        let a = vertex(1.0, 2.0, Color::new(0.2, 0.4, 0.6));
        let b = vertex(7.0, -3.0, Color::new(0.9, 0.1, 0.0));

        assert_eq!(interpolate_color(a, b, a.position), a.color);
        assert_eq!(interpolate_color(a, b, b.position), b.color);
    }

    #[test]
    fn test_interpolate_color_degenerate_uses_first() {
        let a = vertex(1.0, 1.0, Color::new(0.3, 0.3, 0.3));
        let b = vertex(1.0, 1.0, Color::new(0.7, 0.7, 0.7));

        let c = interpolate_color(a, b, Point::new(1.0, 1.0));
        assert_eq!(c, a.color);
    }

    #[test]
    fn test_interpolate_color_unclamped() {
        let a = vertex(0.0, 0.0, Color::new(-1.0, 0.0, 0.0));
        let b = vertex(2.0, 0.0, Color::new(3.0, 0.0, 0.0));

        let c = interpolate_color(a, b, Point::new(1.0, 0.0));
        assert_relative_eq!(c.r, 1.0, epsilon = 1e-6);
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================
