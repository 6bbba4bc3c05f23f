//! # Layer Assembly
//!
//! Collects the polygons of every traced outline of one filament color.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::flatten::CurveFlattener;
use crate::palette::PaletteColor;
use crate::polygon::{build_polygons, Polygon};
use crate::trace::SignedPath;

/// All polygons printed in one filament color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Polygons in outline order.
    pub polygons: Vec<Polygon>,
    /// Display color as `#rrggbb`.
    pub color: String,
    /// Stacking index of the layer group.
    pub z: usize,
}

impl Layer {
    /// Total number of points over all polygons.
    pub fn point_count(&self) -> usize {
        self.polygons.iter().map(|p| p.points.len()).sum()
    }
}

/// Builds the layer for one color from its traced outlines.
///
/// Outlines are processed in order and their polygons concatenated. No
/// validation or simplification takes place.
pub fn assemble_layer(paths: &[SignedPath], color: &PaletteColor, z: usize, flattener: &CurveFlattener) -> Layer {
    let polygons: Vec<Polygon> = paths
        .iter()
        .flat_map(|path| build_polygons(path, flattener))
        .collect();

    let layer = Layer {
        polygons,
        color: color.hex(),
        z,
    };
    debug!(
        "assembled layer {} at z={}: {} polygons, {} points",
        layer.color,
        z,
        layer.polygons.len(),
        layer.point_count()
    );
    layer
}
