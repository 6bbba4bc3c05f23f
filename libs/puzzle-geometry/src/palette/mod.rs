//! # Filament Palette
//!
//! The palette lists the filament colors available to the printer. Each
//! palette entry becomes one layer of the puzzle, in palette order.
//!
//! ## File Format
//!
//! ```text
//! #ffffff PLA White
//! 00ffff Cyan
//! #f0f    short form keeps the given pairs only
//! ```
//!
//! One color per line: an optional `#`, 3 to 8 hex digits, then an optional
//! filament name. Hex digits are read in pairs as red, green, blue and alpha;
//! channels without a full pair stay at their default (0 for color, opaque
//! alpha). Digits beyond the eighth belong to the name. Lines that do not
//! start with a color are ignored.

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};

// =============================================================================
// COLORS
// =============================================================================

/// One filament color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    /// Red, green, blue and alpha channels.
    pub channels: [u8; 4],
    /// Filament description, possibly empty.
    pub name: String,
}

impl PaletteColor {
    /// Creates an opaque color.
    pub fn rgb(r: u8, g: u8, b: u8, name: impl Into<String>) -> Self {
        Self {
            channels: [r, g, b, 0xff],
            name: name.into(),
        }
    }

    /// `#rrggbb` form of the color. Alpha is not included.
    ///
    /// # Examples
    /// ```
    /// use puzzle_geometry::PaletteColor;
    /// let orange = PaletteColor { channels: [255, 128, 0, 255], name: String::new() };
    /// assert_eq!(orange.hex(), "#ff8000");
    /// ```
    pub fn hex(&self) -> String {
        let [r, g, b, _] = self.channels;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    fn distance_squared(&self, rgba: [u8; 4]) -> u32 {
        self.channels
            .iter()
            .zip(rgba.iter())
            .map(|(a, b)| {
                let d = i32::from(*a) - i32::from(*b);
                (d * d) as u32
            })
            .sum()
    }
}

// =============================================================================
// PALETTE
// =============================================================================

/// Ordered list of filament colors. Never empty.
///
/// Serializes as a plain list of colors; deserializing an empty list fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PaletteColor>", into = "Vec<PaletteColor>")]
pub struct Palette {
    colors: Vec<PaletteColor>,
}

impl Palette {
    /// Creates a palette, rejecting an empty color list.
    pub fn new(colors: Vec<PaletteColor>) -> GeometryResult<Self> {
        if colors.is_empty() {
            return Err(GeometryError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Parses palette text, one color per line.
    ///
    /// # Examples
    /// ```
    /// use puzzle_geometry::Palette;
    /// let palette = Palette::parse("#ffffff PLA White\n\n#000 Black\n").unwrap();
    /// assert_eq!(palette.len(), 2);
    /// assert_eq!(palette.get(0).unwrap().name, "PLA White");
    /// ```
    pub fn parse(source: &str) -> GeometryResult<Self> {
        Self::new(source.lines().filter_map(parse_line).collect())
    }

    /// Reads and parses a palette file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> GeometryResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::parse(&source)
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette holds at least one color.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`.
    pub fn get(&self, index: usize) -> Option<&PaletteColor> {
        self.colors.get(index)
    }

    /// Colors in palette order.
    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    /// Index of the color closest to `rgba`. Ties go to the earlier entry.
    pub fn nearest(&self, rgba: [u8; 4]) -> usize {
        let mut best = 0;
        let mut best_distance = u32::MAX;
        for (index, color) in self.colors.iter().enumerate() {
            let distance = color.distance_squared(rgba);
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }
        best
    }
}

impl TryFrom<Vec<PaletteColor>> for Palette {
    type Error = GeometryError;

    fn try_from(colors: Vec<PaletteColor>) -> GeometryResult<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<PaletteColor> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

impl Default for Palette {
    /// White plus the CMYK process colors.
    fn default() -> Self {
        Self {
            colors: vec![
                PaletteColor::rgb(255, 255, 255, "White"),
                PaletteColor::rgb(0, 255, 255, "Cyan"),
                PaletteColor::rgb(255, 0, 255, "Magenta"),
                PaletteColor::rgb(255, 255, 0, "Yellow"),
                PaletteColor::rgb(0, 0, 0, "Black"),
            ],
        }
    }
}

fn hex_value(digit: u8) -> u8 {
    (digit as char).to_digit(16).unwrap_or(0) as u8
}

fn parse_line(line: &str) -> Option<PaletteColor> {
    let body = line.strip_prefix('#').unwrap_or(line);
    let digits_len = body.bytes().take_while(u8::is_ascii_hexdigit).take(8).count();
    if digits_len < 3 {
        return None;
    }
    let (digits, rest) = body.split_at(digits_len);

    let mut channels = [0, 0, 0, 0xff];
    for (channel, pair) in channels.iter_mut().zip(digits.as_bytes().chunks_exact(2)) {
        *channel = (hex_value(pair[0]) << 4) | hex_value(pair[1]);
    }

    Some(PaletteColor {
        channels,
        name: rest.trim().to_string(),
    })
}

// =============================================================================
// CONTRAST
// =============================================================================

/// Scales the color channels by alpha, so that transparent pixels read as
/// black before contrast and palette matching.
///
/// # Examples
/// ```
/// use puzzle_geometry::palette::premultiply;
/// assert_eq!(premultiply([255, 255, 255, 0]), [0, 0, 0, 0]);
/// assert_eq!(premultiply([200, 100, 50, 255]), [200, 100, 50, 255]);
/// ```
pub fn premultiply(rgba: [u8; 4]) -> [u8; 4] {
    let [r, g, b, a] = rgba;
    let scale = |channel: u8| (u32::from(channel) * u32::from(a) / 0xff) as u8;
    [scale(r), scale(g), scale(b), a]
}

fn stretch_channel(value: u8, factor: f32) -> u8 {
    let wide = u32::from(value) * 0x101;
    let from_white = (0xffff - wide) as f32 * factor;
    if from_white > 0xffff as f32 {
        0
    } else if from_white < 0.0 {
        0xff
    } else {
        ((0xffff as f32 - from_white) / 256.0) as u8
    }
}

/// Stretches each color channel's distance from white by `factor`.
///
/// Applied to source pixels before they are matched against the palette, so
/// that pale tones do not all collapse onto the white filament. Alpha is kept.
///
/// # Examples
/// ```
/// use puzzle_geometry::palette::contrast;
/// assert_eq!(contrast([255, 255, 255, 255], 1.4), [255, 255, 255, 255]);
/// assert_eq!(contrast([0, 0, 0, 128], 1.4), [0, 0, 0, 128]);
/// ```
pub fn contrast(rgba: [u8; 4], factor: f32) -> [u8; 4] {
    let [r, g, b, a] = rgba;
    [
        stretch_channel(r, factor),
        stretch_channel(g, factor),
        stretch_channel(b, factor),
        a,
    ]
}

#[cfg(test)]
mod tests;
