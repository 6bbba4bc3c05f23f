//! # Error Types
//!
//! Errors raised around the geometry core. Flattening, polygon building and
//! layer assembly are infallible; failures come from the collaborators that
//! feed the core (palette files, rasters, tracers) and from the output sink.
//!
//! ## Error Policy
//!
//! - Malformed path trees are tolerated, not reported
//! - Collaborator failures abort the whole conversion
//! - Errors include enough context to locate the bad input

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while converting an image into puzzle geometry.
///
/// ## Example
///
/// ```rust
/// use puzzle_geometry::{Palette, GeometryError};
///
/// match Palette::parse("no colors here") {
///     Ok(palette) => println!("{} colors", palette.len()),
///     Err(GeometryError::EmptyPalette) => eprintln!("palette is empty"),
///     Err(e) => eprintln!("other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum GeometryError {
    /// Writing the output document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Conversion settings were rejected.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The palette source contained no usable colors.
    #[error("Palette contains no colors")]
    EmptyPalette,

    /// A raster's index buffer does not match its dimensions.
    #[error("Raster holds {actual} pixels, expected {expected}")]
    RasterSize {
        /// Pixel count implied by width and height.
        expected: usize,
        /// Length of the supplied index buffer.
        actual: usize,
    },

    /// Raster dimensions whose pixel count does not fit in memory.
    #[error("Raster dimensions {width}x{height} overflow")]
    RasterDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A raster pixel refers to a color the palette does not have.
    #[error("Palette index {index} out of range for {len} colors")]
    PaletteIndex {
        /// Offending palette index.
        index: usize,
        /// Number of colors in the palette.
        len: usize,
    },

    /// The tracer failed to vectorize one color layer.
    #[error("Tracing layer {layer} failed: {message}")]
    Trace {
        /// Palette index of the layer being traced.
        layer: usize,
        /// Error reported by the tracer.
        message: String,
    },
}

impl GeometryError {
    /// Creates a tracing error for the given layer.
    pub fn trace(layer: usize, message: impl Into<String>) -> Self {
        Self::Trace {
            layer,
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for conversion operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::PaletteIndex { index: 7, len: 5 };
        assert!(err.to_string().contains("index 7"));

        let err = GeometryError::trace(2, "bitmap too large");
        assert!(err.to_string().contains("layer 2"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: GeometryError = ConfigError::InvalidLayerColors(0).into();
        assert!(matches!(err, GeometryError::Config(_)));
    }

    /// Errors cross rayon worker threads.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeometryError>();
    }
}
