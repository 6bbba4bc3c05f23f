//! # Curve Flattening
//!
//! Converts traced curves into point loops in output units.
//!
//! ## Coordinate Transform
//!
//! ```text
//! output = (x * scale, -y * scale)
//! ```
//!
//! Traced coordinates are pixels with Y pointing down; output is millimeters
//! with Y pointing up.
//!
//! ## Point Indices
//!
//! Every emitted point receives the next index of a [`PointCounter`]. All
//! contours of one polygon share one counter, so their indices address a
//! single pooled point list.

use config::constants::{ConversionConfig, MAX_BEZIER_SEGMENTS};

use crate::trace::{CurveSegment, Point};

// =============================================================================
// POINT COUNTER
// =============================================================================

/// Running point index shared by the contours of one polygon.
///
/// A counter is created per polygon and never shared between polygons.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PointCounter {
    next: usize,
}

impl PointCounter {
    /// Creates a counter starting at index 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the next emitted point will receive.
    pub fn peek(&self) -> usize {
        self.next
    }

    fn advance(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        index
    }
}

// =============================================================================
// FLATTENED CURVE
// =============================================================================

/// Points of one flattened curve and the indices assigned to them.
///
/// `indices` holds one entry per point followed by the closing index, which
/// is the counter value from before flattening started. The closing index
/// refers back to the first point of the loop.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlattenedCurve {
    /// Emitted points in curve order.
    pub points: Vec<Point>,
    /// Index of every point, then the closing index.
    pub indices: Vec<usize>,
}

impl FlattenedCurve {
    fn push(&mut self, point: Point, counter: &mut PointCounter) {
        self.indices.push(counter.advance());
        self.points.push(point);
    }

    /// The index this loop closes back to.
    pub fn closing_index(&self) -> Option<usize> {
        self.indices.last().copied()
    }
}

// =============================================================================
// FLATTENER
// =============================================================================

/// Evaluates a cubic Bezier curve at parameter `t`.
///
/// Reproduces `p0` at `t = 0` and `p3` at `t = 1` exactly.
///
/// # Examples
/// ```
/// use puzzle_geometry::flatten::cubic_point;
/// use puzzle_geometry::Point;
///
/// let p0 = Point::new(0.0, 0.0);
/// let p3 = Point::new(3.0, 0.0);
/// let mid = cubic_point(p0, Point::new(1.0, 0.0), Point::new(2.0, 0.0), p3, 0.5);
/// assert!((mid.x - 1.5).abs() < 1e-12);
/// assert_eq!(cubic_point(p0, p0, p3, p3, 1.0), p3);
/// ```
pub fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;
    p0 * mt3 + p1 * (3.0 * mt2 * t) + p2 * (3.0 * mt * t2) + p3 * t3
}

fn flip_y(point: Point) -> Point {
    Point::new(point.x, -point.y)
}

/// Flattens traced curves at a fixed scale and Bezier sampling density.
///
/// ## Example
///
/// ```rust
/// use puzzle_geometry::flatten::{CurveFlattener, PointCounter};
/// use puzzle_geometry::{CurveSegment, Point};
///
/// let flattener = CurveFlattener::new(2.0, 5.0);
/// let curve = vec![
///     CurveSegment::corner(Point::new(0.0, 0.0), Point::new(1.0, 0.0)),
///     CurveSegment::corner(Point::new(1.0, 1.0), Point::new(0.0, 1.0)),
/// ];
/// let mut counter = PointCounter::new();
/// let flat = flattener.flatten(&curve, &mut counter);
///
/// assert_eq!(flat.points.len(), 4);
/// assert_eq!(flat.indices, vec![0, 1, 2, 3, 0]);
/// assert_eq!(flat.points[2], Point::new(2.0, -2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveFlattener {
    scale: f64,
    bezier_segments: f64,
}

impl CurveFlattener {
    /// Creates a flattener with the given pixel-to-millimeter `scale` and
    /// number of line segments per Bezier curve.
    ///
    /// The density is clamped to `1..=MAX_BEZIER_SEGMENTS`. Fewer than one
    /// segment samples a curve only at its start, exactly as one segment
    /// does. NaN counts as one segment.
    pub fn new(scale: f64, bezier_segments: f64) -> Self {
        Self {
            scale,
            bezier_segments: bezier_segments.max(1.0).min(MAX_BEZIER_SEGMENTS),
        }
    }

    /// Creates a flattener using the sampling density of `config`.
    pub fn from_config(config: &ConversionConfig, scale: f64) -> Self {
        Self::new(scale, config.bezier_segments)
    }

    /// Output units per source pixel.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Number of curve samples taken per Bezier segment, not counting the
    /// forced endpoint. Samples are taken at `t = k / segments` while `t < 1`.
    pub fn samples_per_bezier(&self) -> usize {
        self.bezier_segments.ceil() as usize
    }

    /// Flattens `curve`, drawing point indices from `counter`.
    ///
    /// Corners emit their two defining points. Bezier segments emit one
    /// point per sample plus their exact terminal point. The starting control
    /// point of a Bezier segment is the end of the previous segment, wrapping
    /// to the last segment for the first one.
    pub fn flatten(&self, curve: &[CurveSegment], counter: &mut PointCounter) -> FlattenedCurve {
        let first_index = counter.peek();
        let mut flat = FlattenedCurve::default();

        for (position, segment) in curve.iter().enumerate() {
            match *segment {
                CurveSegment::Corner { vertex, end } => {
                    flat.push(self.to_output(vertex), counter);
                    flat.push(self.to_output(end), counter);
                }
                CurveSegment::Bezier {
                    control1,
                    control2,
                    end,
                } => {
                    let previous = if position == 0 {
                        curve[curve.len() - 1]
                    } else {
                        curve[position - 1]
                    };
                    let p0 = flip_y(previous.end());
                    let p1 = flip_y(control1);
                    let p2 = flip_y(control2);
                    let p3 = flip_y(end);

                    for k in 0..self.samples_per_bezier() {
                        let t = k as f64 / self.bezier_segments;
                        flat.push(cubic_point(p0, p1, p2, p3, t) * self.scale, counter);
                    }
                    flat.push(self.to_output(end), counter);
                }
            }
        }

        flat.indices.push(first_index);
        flat
    }

    fn to_output(&self, point: Point) -> Point {
        flip_y(point) * self.scale
    }
}
