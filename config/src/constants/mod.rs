//! # Configuration Constants
//!
//! Centralized constants for the image-to-puzzle conversion pipeline. Physical
//! dimensions, curve sampling density and tracing parameters are defined here
//! so that downstream crates stay declarative and avoid scattering literals.
//!
//! ## Categories
//!
//! - **Physical**: Output dimensions and printer nozzle size
//! - **Sampling**: Bezier interpolation density
//! - **Multi-material**: Colors multiplexed per printed layer
//! - **Tracing**: Parameters handed to the bitmap tracer

use std::fmt;

// =============================================================================
// PHYSICAL CONSTANTS
// =============================================================================

/// Default physical size of the larger puzzle dimension, in millimeters.
///
/// The other dimension is derived from the image aspect ratio.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_IMAGE_SIZE;
/// assert_eq!(DEFAULT_IMAGE_SIZE, 200.0);
/// ```
pub const DEFAULT_IMAGE_SIZE: f64 = 200.0;

/// Default nozzle diameter in millimeters.
///
/// Source images with more pixels per millimeter than one per nozzle width
/// are downscaled, since finer features cannot be printed.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_IMAGE_SIZE, DEFAULT_NOZZLE_SIZE};
/// // A 1000px image at 200mm puts 5 pixels under one nozzle width.
/// let mm_per_pixel = DEFAULT_IMAGE_SIZE / 1000.0;
/// assert!(mm_per_pixel < DEFAULT_NOZZLE_SIZE);
/// ```
pub const DEFAULT_NOZZLE_SIZE: f64 = 0.4;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Default number of line segments used to interpolate one Bezier curve.
///
/// Five segments give a sampling step of 0.2. Larger values increase the
/// point count and the downstream rendering time.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_BEZIER_SEGMENTS;
/// let step = 1.0 / DEFAULT_BEZIER_SEGMENTS;
/// assert!((step - 0.2).abs() < 1e-12);
/// ```
pub const DEFAULT_BEZIER_SEGMENTS: f64 = 5.0;

/// Upper bound on line segments per Bezier curve.
pub const MAX_BEZIER_SEGMENTS: f64 = 1000.0;

// =============================================================================
// MULTI-MATERIAL CONSTANTS
// =============================================================================

/// Default number of colors the MMU can place within a single printed layer.
pub const DEFAULT_LAYER_COLORS: usize = 1;

/// Contrast multiplier applied to source pixels before palette quantization.
pub const DEFAULT_CONTRAST: f32 = 1.4;

// =============================================================================
// TRACING CONSTANTS
// =============================================================================

/// Speckles up to this many pixels are suppressed by the tracer.
pub const DEFAULT_TURD_SIZE: u32 = 10;

/// Corner threshold handed to the tracer (larger means smoother curves).
pub const DEFAULT_ALPHA_MAX: f64 = 1.0;

/// Tolerance of the tracer's curve optimisation pass.
pub const DEFAULT_OPT_TOLERANCE: f64 = 0.2;

// =============================================================================
// CONVERSION CONFIG
// =============================================================================

/// Immutable snapshot of the settings of one conversion run.
///
/// # Examples
/// ```
/// use config::constants::ConversionConfig;
/// let config = ConversionConfig::default();
/// assert_eq!(config.layer_colors, 1);
/// assert!((config.bezier_step() - 0.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionConfig {
    /// Physical size of the larger output dimension in millimeters.
    pub image_size: f64,
    /// Nozzle diameter in millimeters.
    pub nozzle_size: f64,
    /// Line segments per interpolated Bezier curve.
    pub bezier_segments: f64,
    /// Colors multiplexed per printed layer.
    pub layer_colors: usize,
}

impl ConversionConfig {
    /// Builds a configuration, rejecting values that cannot describe a
    /// printable puzzle.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ConversionConfig;
    /// let cfg = ConversionConfig::new(150.0, 0.4, 8.0, 2).expect("valid config");
    /// assert_eq!(cfg.layer_colors, 2);
    /// assert!(ConversionConfig::new(150.0, 0.4, 0.5, 2).is_err());
    /// ```
    pub fn new(
        image_size: f64,
        nozzle_size: f64,
        bezier_segments: f64,
        layer_colors: usize,
    ) -> Result<Self, ConfigError> {
        if !(image_size > 0.0) {
            return Err(ConfigError::InvalidImageSize(image_size));
        }
        if !(nozzle_size > 0.0) {
            return Err(ConfigError::InvalidNozzleSize(nozzle_size));
        }
        if !(1.0..=MAX_BEZIER_SEGMENTS).contains(&bezier_segments) {
            return Err(ConfigError::InvalidBezierSegments(bezier_segments));
        }
        if layer_colors == 0 {
            return Err(ConfigError::InvalidLayerColors(layer_colors));
        }
        Ok(Self {
            image_size,
            nozzle_size,
            bezier_segments,
            layer_colors,
        })
    }

    /// Curve parameter increment between two Bezier samples.
    pub fn bezier_step(&self) -> f64 {
        1.0 / self.bezier_segments
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            image_size: DEFAULT_IMAGE_SIZE,
            nozzle_size: DEFAULT_NOZZLE_SIZE,
            bezier_segments: DEFAULT_BEZIER_SEGMENTS,
            layer_colors: DEFAULT_LAYER_COLORS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the physical size is zero, negative or NaN.
    InvalidImageSize(f64),
    /// Raised when the nozzle diameter is zero, negative or NaN.
    InvalidNozzleSize(f64),
    /// Raised when the segments per curve fall outside `1..=MAX_BEZIER_SEGMENTS`.
    InvalidBezierSegments(f64),
    /// Raised when no colors per layer are requested.
    InvalidLayerColors(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidImageSize(value) => {
                write!(f, "image size must be positive: {value}")
            }
            ConfigError::InvalidNozzleSize(value) => {
                write!(f, "nozzle size must be positive: {value}")
            }
            ConfigError::InvalidBezierSegments(value) => {
                write!(f, "bezier segments must be within 1..={MAX_BEZIER_SEGMENTS}: {value}")
            }
            ConfigError::InvalidLayerColors(value) => {
                write!(f, "layer colors must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
