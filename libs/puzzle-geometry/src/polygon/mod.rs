//! # Polygon Building
//!
//! Turns a tree of signed outlines into polygons with hole contours.
//!
//! ## Nesting Rules
//!
//! ```text
//! solid            → new polygon, outer contour
//! ├── hole         → hole contour of that polygon
//! │   └── solid    → independent polygon (island inside the hole)
//! └── solid        → independent polygon
//! ```
//!
//! All contours of one polygon index into one pooled point list. Every
//! polygon starts its own index space at 0.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::flatten::{CurveFlattener, FlattenedCurve, PointCounter};
use crate::trace::{Point, SignedPath};

/// Closed loop of indices into a polygon's point list.
///
/// The last entry repeats the loop's first index.
pub type Contour = Vec<usize>;

/// A filled region: one outer contour followed by zero or more holes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    /// Points of every contour, pooled.
    pub points: Vec<Point>,
    /// Outer contour first, then holes.
    pub contours: Vec<Contour>,
}

impl Polygon {
    fn push_contour(&mut self, flat: FlattenedCurve) {
        self.points.extend(flat.points);
        self.contours.push(flat.indices);
    }

    /// The outer boundary.
    pub fn outer(&self) -> Option<&Contour> {
        self.contours.first()
    }

    /// Hole contours, in child order.
    pub fn holes(&self) -> &[Contour] {
        self.contours.get(1..).unwrap_or(&[])
    }
}

/// Builds every polygon described by `path` and its descendants.
///
/// Polygons contributed by descendants come before the polygon of `path`
/// itself. A hole at the top level contributes nothing.
///
/// # Examples
/// ```
/// use puzzle_geometry::flatten::CurveFlattener;
/// use puzzle_geometry::polygon::build_polygons;
/// use puzzle_geometry::{CurveSegment, Point, SignedPath};
///
/// let square = |size: f64| vec![
///     CurveSegment::corner(Point::new(0.0, 0.0), Point::new(size, 0.0)),
///     CurveSegment::corner(Point::new(size, size), Point::new(0.0, size)),
/// ];
/// let path = SignedPath::solid(square(10.0))
///     .with_child(SignedPath::hole(square(6.0)).with_child(SignedPath::solid(square(2.0))));
///
/// let polygons = build_polygons(&path, &CurveFlattener::new(1.0, 5.0));
/// assert_eq!(polygons.len(), 2);
/// assert_eq!(polygons[0].contours.len(), 1); // island
/// assert_eq!(polygons[1].contours.len(), 2); // outer + hole
/// ```
pub fn build_polygons(path: &SignedPath, flattener: &CurveFlattener) -> Vec<Polygon> {
    let mut polygons = Vec::new();
    build_into(path, flattener, &mut polygons);
    polygons
}

fn build_into(path: &SignedPath, flattener: &CurveFlattener, polygons: &mut Vec<Polygon>) {
    if path.sign.is_negative() {
        debug!("dropping hole outline outside of a solid ({} segments)", path.curve.len());
        return;
    }

    let mut counter = PointCounter::new();
    let mut polygon = Polygon::default();
    polygon.push_contour(flattener.flatten(&path.curve, &mut counter));

    for child in &path.children {
        if child.sign.is_negative() {
            polygon.push_contour(flattener.flatten(&child.curve, &mut counter));
            for island in &child.children {
                build_into(island, flattener, polygons);
            }
        } else {
            build_into(child, flattener, polygons);
        }
    }

    polygons.push(polygon);
}
