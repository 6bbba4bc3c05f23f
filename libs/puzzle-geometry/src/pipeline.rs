//! # Conversion Pipeline
//!
//! Drives one conversion run: every palette entry is masked out of the
//! raster, traced, and assembled into a layer.
//!
//! Layers are independent of one another and are built in parallel. Each
//! layer owns its point counters, and the resulting document keeps palette
//! order regardless of completion order.

use config::constants::ConversionConfig;
use log::info;
use rayon::prelude::*;

use crate::document::Document;
use crate::error::{GeometryError, GeometryResult};
use crate::flatten::CurveFlattener;
use crate::layer::{assemble_layer, Layer};
use crate::palette::Palette;
use crate::raster::{layer_z, PalettedRaster, Scaling};
use crate::trace::{TraceParams, Tracer};

/// Converts a palette-indexed raster into a puzzle document.
///
/// Fails when the configuration is invalid, when the raster refers to colors
/// missing from the palette, or when the tracer fails on any layer.
pub fn convert<T: Tracer>(
    raster: &PalettedRaster,
    palette: &Palette,
    tracer: &T,
    params: &TraceParams,
    config: &ConversionConfig,
) -> GeometryResult<Document> {
    let config = ConversionConfig::new(
        config.image_size,
        config.nozzle_size,
        config.bezier_segments,
        config.layer_colors,
    )?;
    if let Some(index) = raster.max_index().filter(|index| *index >= palette.len()) {
        return Err(GeometryError::PaletteIndex {
            index,
            len: palette.len(),
        });
    }

    let scaling = Scaling::fit(raster.width(), raster.height(), config.image_size);
    let flattener = CurveFlattener::from_config(&config, scaling.scale);
    info!(
        "converting {}x{} raster into {} layers at {}mm per pixel",
        raster.width(),
        raster.height(),
        palette.len(),
        scaling.scale
    );

    let layers = palette
        .colors()
        .par_iter()
        .enumerate()
        .map(|(index, color)| {
            let mask = raster.layer_mask(index, config.layer_colors);
            let paths = tracer
                .trace(&mask, params)
                .map_err(|e| GeometryError::trace(index, e.to_string()))?;
            Ok(assemble_layer(
                &paths,
                color,
                layer_z(index, config.layer_colors),
                &flattener,
            ))
        })
        .collect::<GeometryResult<Vec<Layer>>>()?;

    let document = Document::new(
        config.layer_colors,
        [scaling.width_mm, scaling.height_mm],
        layers,
    );
    info!(
        "conversion produced {} polygons with {} points",
        document.polygon_count(),
        document.point_count()
    );
    Ok(document)
}
