//! # OpenSCAD Data Export
//!
//! Writes a [`Document`] as OpenSCAD variable assignments consumed by the
//! puzzle modeling script.
//!
//! ## Format
//!
//! ```text
//! puzzle_mmu_colors = 1;
//! puzzle_dim = [200, 150];
//! layers = [
//!   [  // layer #0
//!     [
//!       [
//!         [ [x, y], [x, y], ...],
//!         [ [ 0, 1, ..., 0], [ 8, 9, ..., 8]]
//!       ]
//!     ], "#ffffff", 0
//!   ]
//! ];
//! ```
//!
//! Each polygon is a `[points, paths]` pair as accepted by OpenSCAD's
//! `polygon()`. Coordinates are written at full precision and no list ends
//! with a trailing comma.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::document::Document;
use crate::error::GeometryResult;
use crate::polygon::Polygon;
use crate::trace::Point;

fn separator(index: usize, len: usize) -> &'static str {
    if index + 1 == len {
        ""
    } else {
        ","
    }
}

fn write_points<W: Write>(out: &mut W, points: &[Point]) -> GeometryResult<()> {
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            write!(out, ", ")?;
        }
        write!(out, "[{}, {}]", point.x, point.y)?;
    }
    Ok(())
}

fn write_contours<W: Write>(out: &mut W, contours: &[Vec<usize>]) -> GeometryResult<()> {
    for (i, contour) in contours.iter().enumerate() {
        if i > 0 {
            write!(out, ", ")?;
        }
        write!(out, "[ ")?;
        for (j, index) in contour.iter().enumerate() {
            if j > 0 {
                write!(out, ", ")?;
            }
            write!(out, "{index}")?;
        }
        write!(out, "]")?;
    }
    Ok(())
}

fn write_polygon<W: Write>(out: &mut W, polygon: &Polygon, trailer: &str) -> GeometryResult<()> {
    writeln!(out, "      [")?;
    write!(out, "        [ ")?;
    write_points(out, &polygon.points)?;
    writeln!(out, "],")?;
    write!(out, "        [ ")?;
    write_contours(out, &polygon.contours)?;
    writeln!(out, "]")?;
    writeln!(out, "      ]{trailer}")?;
    Ok(())
}

/// Writes `document` to `out`.
///
/// # Examples
/// ```
/// use puzzle_geometry::export::write_scad;
/// use puzzle_geometry::Document;
///
/// let mut out = Vec::new();
/// write_scad(&mut out, &Document::new(1, [200.0, 150.5], Vec::new())).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("puzzle_mmu_colors = 1;\npuzzle_dim = [200, 150.5];\n"));
/// ```
pub fn write_scad<W: Write>(out: &mut W, document: &Document) -> GeometryResult<()> {
    let [width, height] = document.dimensions;
    writeln!(out, "puzzle_mmu_colors = {};", document.mmu_colors)?;
    writeln!(out, "puzzle_dim = [{width}, {height}];")?;

    writeln!(out, "layers = [")?;
    for (i, layer) in document.layers.iter().enumerate() {
        writeln!(out, "  [  // layer #{i}")?;
        writeln!(out, "    [")?;
        for (j, polygon) in layer.polygons.iter().enumerate() {
            write_polygon(out, polygon, separator(j, layer.polygons.len()))?;
        }
        writeln!(out, "    ], \"{}\", {}", layer.color, layer.z)?;
        writeln!(out, "  ]{}", separator(i, document.layers.len()))?;
    }
    writeln!(out, "];")?;
    Ok(())
}

/// Renders `document` to a string.
pub fn to_scad_string(document: &Document) -> GeometryResult<String> {
    let mut out = Vec::new();
    write_scad(&mut out, document)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Writes `document` to a file at `path`, replacing any existing file.
pub fn write_scad_file(path: impl AsRef<Path>, document: &Document) -> GeometryResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_scad(&mut out, document)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests;
