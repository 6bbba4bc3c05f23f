//! # Puzzle Geometry
//!
//! Converts traced image outlines into layered polygon data for a
//! multi-material 3D printed puzzle.
//!
//! ## Architecture
//!
//! ```text
//! SignedPath forest (per color)
//!       ↓
//! flatten  (curves → point loops)
//!       ↓
//! polygon  (outer contour + holes, islands split off)
//!       ↓
//! layer    (polygons + color + z)
//!       ↓
//! export   (OpenSCAD data file)
//! ```
//!
//! Image decoding and bitmap tracing are left to collaborators: the crate
//! consumes a [`PalettedRaster`] and any [`Tracer`] implementation.
//!
//! ## Usage
//!
//! ```rust
//! use puzzle_geometry::flatten::CurveFlattener;
//! use puzzle_geometry::{assemble_layer, export, CurveSegment, Document, PaletteColor, Point, SignedPath};
//!
//! let square = vec![
//!     CurveSegment::corner(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
//!     CurveSegment::corner(Point::new(10.0, 10.0), Point::new(0.0, 10.0)),
//! ];
//! let flattener = CurveFlattener::new(0.5, 5.0);
//! let white = PaletteColor::rgb(255, 255, 255, "White");
//! let layer = assemble_layer(&[SignedPath::solid(square)], &white, 0, &flattener);
//!
//! let document = Document::new(1, [5.0, 5.0], vec![layer]);
//! let scad = export::to_scad_string(&document).unwrap();
//! assert!(scad.contains("\"#ffffff\", 0"));
//! ```

pub mod document;
pub mod error;
pub mod export;
pub mod flatten;
pub mod layer;
pub mod palette;
pub mod pipeline;
pub mod polygon;
pub mod raster;
pub mod trace;

pub use document::Document;
pub use error::{GeometryError, GeometryResult};
pub use layer::{assemble_layer, Layer};
pub use palette::{Palette, PaletteColor};
pub use pipeline::convert;
pub use polygon::{build_polygons, Contour, Polygon};
pub use raster::PalettedRaster;
pub use trace::{Bitmap, Curve, CurveSegment, Point, Sign, SignedPath, TraceParams, Tracer, TurnPolicy};
