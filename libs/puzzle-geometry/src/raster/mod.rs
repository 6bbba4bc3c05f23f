//! # Palette-Indexed Raster
//!
//! The quantized source image and the per-layer pixel masks derived from it,
//! plus the pixel-to-millimeter scaling of a conversion run.
//!
//! ## Layer Masks
//!
//! With `k` colors per printed layer, palette entry `l` is traced from every
//! pixel whose palette index `i` satisfies:
//!
//! ```text
//! i % k == l % k  &&  i >= l
//! ```
//!
//! Later palette entries therefore sit on top of earlier ones, and each mask
//! also covers the area of the darker colors stacked above it.

use config::constants::{ConversionConfig, DEFAULT_CONTRAST};
use log::warn;

use crate::error::{GeometryError, GeometryResult};
use crate::palette::{contrast, premultiply, Palette};
use crate::trace::Bitmap;

// =============================================================================
// RASTER
// =============================================================================

/// Image whose pixels are indices into a palette. Row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalettedRaster {
    width: usize,
    height: usize,
    indices: Vec<usize>,
}

impl PalettedRaster {
    /// Wraps an index buffer, checking it matches the dimensions.
    pub fn new(width: usize, height: usize, indices: Vec<usize>) -> GeometryResult<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or(GeometryError::RasterDimensions { width, height })?;
        if indices.len() != expected {
            return Err(GeometryError::RasterSize {
                expected,
                actual: indices.len(),
            });
        }
        Ok(Self {
            width,
            height,
            indices,
        })
    }

    /// Maps straight (non-premultiplied) RGBA pixels to their nearest
    /// palette entry.
    ///
    /// Pixels are premultiplied by their alpha and then contrast-stretched by
    /// `contrast_factor`, so fully transparent areas land on the darkest
    /// palette entry.
    pub fn quantize(
        width: usize,
        height: usize,
        pixels: &[[u8; 4]],
        palette: &Palette,
        contrast_factor: f32,
    ) -> GeometryResult<Self> {
        let indices = pixels
            .iter()
            .map(|pixel| palette.nearest(contrast(premultiply(*pixel), contrast_factor)))
            .collect();
        Self::new(width, height, indices)
    }

    /// [`quantize`](Self::quantize) with the default contrast boost.
    pub fn from_rgba(width: usize, height: usize, pixels: &[[u8; 4]], palette: &Palette) -> GeometryResult<Self> {
        Self::quantize(width, height, pixels, palette, DEFAULT_CONTRAST)
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Palette index at `(x, y)`.
    pub fn index_at(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(self.indices[y * self.width + x])
        } else {
            None
        }
    }

    /// Largest palette index used, if any pixel exists.
    pub fn max_index(&self) -> Option<usize> {
        self.indices.iter().copied().max()
    }

    /// Pixel mask traced for palette entry `layer`.
    ///
    /// # Examples
    /// ```
    /// use puzzle_geometry::PalettedRaster;
    ///
    /// let raster = PalettedRaster::new(4, 1, vec![0, 1, 2, 3]).unwrap();
    /// let mask = raster.layer_mask(1, 2);
    /// let set: Vec<bool> = (0..4).map(|x| mask.get(x, 0)).collect();
    /// assert_eq!(set, vec![false, true, false, true]);
    /// ```
    pub fn layer_mask(&self, layer: usize, layer_colors: usize) -> Bitmap {
        let k = layer_colors.max(1);
        Bitmap::from_fn(self.width, self.height, |x, y| {
            let i = self.indices[y * self.width + x];
            i % k == layer % k && i >= layer
        })
    }
}

/// Z stacking index of palette entry `layer`.
pub fn layer_z(layer: usize, layer_colors: usize) -> usize {
    layer / layer_colors.max(1)
}

// =============================================================================
// SCALING
// =============================================================================

/// Size a source image should be reduced to so that one pixel is no
/// narrower than the nozzle. `None` when the image is coarse enough already.
///
/// # Examples
/// ```
/// use config::constants::{ConversionConfig, DEFAULT_CONTRAST};
/// use puzzle_geometry::raster::downscale_target;
///
/// let config = ConversionConfig::default(); // 200mm, 0.4mm nozzle
/// assert_eq!(downscale_target(400, 300, &config), None);
/// assert_eq!(downscale_target(1000, 500, &config), Some((500, 250)));
/// ```
pub fn downscale_target(width: usize, height: usize, config: &ConversionConfig) -> Option<(usize, usize)> {
    let longest = width.max(height) as f64;
    if longest == 0.0 || config.image_size / longest >= config.nozzle_size {
        return None;
    }
    let factor = longest * config.nozzle_size / config.image_size;
    let target = ((width as f64 / factor) as usize, (height as f64 / factor) as usize);
    warn!(
        "source image {}x{} is finer than the {}mm nozzle, reducing to {}x{}",
        width, height, config.nozzle_size, target.0, target.1
    );
    Some(target)
}

/// Pixel-to-millimeter mapping of one conversion run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    /// Millimeters per source pixel.
    pub scale: f64,
    /// Physical width in millimeters.
    pub width_mm: f64,
    /// Physical height in millimeters.
    pub height_mm: f64,
}

impl Scaling {
    /// Fits a `width` x `height` pixel image so its longer side measures
    /// `image_size` millimeters.
    ///
    /// # Examples
    /// ```
    /// use puzzle_geometry::raster::Scaling;
    /// let scaling = Scaling::fit(400, 200, 200.0);
    /// assert_eq!(scaling.scale, 0.5);
    /// assert_eq!((scaling.width_mm, scaling.height_mm), (200.0, 100.0));
    /// ```
    pub fn fit(width: usize, height: usize, image_size: f64) -> Self {
        let longest = width.max(height).max(1) as f64;
        let scale = image_size / longest;
        Self {
            scale,
            width_mm: scale * width as f64,
            height_mm: scale * height as f64,
        }
    }
}
