//! # Tracing Interface
//!
//! Data handed to and returned by the bitmap tracer. The tracer itself is an
//! external collaborator: it receives a two-color [`Bitmap`] for one palette
//! layer and answers with a forest of [`SignedPath`] outlines.
//!
//! Coordinates returned by a tracer are in source pixel units with the Y axis
//! pointing down.

use config::constants::{DEFAULT_ALPHA_MAX, DEFAULT_OPT_TOLERANCE, DEFAULT_TURD_SIZE};
use serde::{Deserialize, Serialize};

pub use glam::DVec2 as Point;

// =============================================================================
// CURVES
// =============================================================================

/// One segment of a closed traced outline.
///
/// The start of every segment is the `end` of the segment before it; for the
/// first segment that is the `end` of the last one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CurveSegment {
    /// Two straight lines meeting at `vertex`, ending at `end`.
    Corner {
        /// The corner point.
        vertex: Point,
        /// Where the segment ends.
        end: Point,
    },
    /// Cubic Bezier curve from the previous segment's end.
    Bezier {
        /// First interior control point.
        control1: Point,
        /// Second interior control point.
        control2: Point,
        /// Terminal control point.
        end: Point,
    },
}

impl CurveSegment {
    /// Creates a corner segment.
    pub fn corner(vertex: Point, end: Point) -> Self {
        Self::Corner { vertex, end }
    }

    /// Creates a cubic Bezier segment.
    pub fn bezier(control1: Point, control2: Point, end: Point) -> Self {
        Self::Bezier {
            control1,
            control2,
            end,
        }
    }

    /// Trailing point of the segment, which starts the next one.
    pub fn end(&self) -> Point {
        match self {
            Self::Corner { end, .. } | Self::Bezier { end, .. } => *end,
        }
    }
}

/// Ordered, implicitly closed sequence of segments forming one contour.
pub type Curve = Vec<CurveSegment>;

// =============================================================================
// SIGNED PATHS
// =============================================================================

/// Polarity of a traced outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// Encloses filled area.
    Positive,
    /// Cuts a hole into the enclosing outline.
    Negative,
}

impl Sign {
    /// Returns true for hole outlines.
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
}

impl From<i32> for Sign {
    /// Maps the tracer's numeric polarity: `-1` (any negative) is a hole.
    fn from(value: i32) -> Self {
        if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

/// A traced outline with its nested outlines.
///
/// Children alternate polarity: the direct children of a solid outline are
/// holes, and the children of a hole are islands inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedPath {
    /// Solid or hole.
    pub sign: Sign,
    /// The outline itself.
    pub curve: Curve,
    /// Outlines nested directly inside this one.
    pub children: Vec<SignedPath>,
}

impl SignedPath {
    /// Creates a path without children.
    pub fn new(sign: Sign, curve: Curve) -> Self {
        Self {
            sign,
            curve,
            children: Vec::new(),
        }
    }

    /// Creates a solid outline.
    pub fn solid(curve: Curve) -> Self {
        Self::new(Sign::Positive, curve)
    }

    /// Creates a hole outline.
    pub fn hole(curve: Curve) -> Self {
        Self::new(Sign::Negative, curve)
    }

    /// Appends a nested outline, builder style.
    pub fn with_child(mut self, child: SignedPath) -> Self {
        self.children.push(child);
        self
    }
}

// =============================================================================
// TRACER INPUT
// =============================================================================

/// Two-color mask of the pixels belonging to one layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Bitmap {
    /// Builds a bitmap by evaluating `is_set` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut is_set: impl FnMut(usize, usize) -> bool) -> Self {
        let mut bits = Vec::with_capacity(width.checked_mul(height).unwrap_or(0));
        for y in 0..height {
            for x in 0..width {
                bits.push(is_set(x, y));
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the pixel at `(x, y)` is set. Out of range pixels are clear.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.bits[y * self.width + x]
    }

    /// Number of set pixels.
    pub fn count_set(&self) -> usize {
        self.bits.iter().filter(|bit| **bit).count()
    }
}

/// How the tracer resolves ambiguous pixel configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TurnPolicy {
    /// Prefer connecting set pixels.
    Black,
    /// Prefer connecting clear pixels.
    White,
    /// Always turn left.
    Left,
    /// Always turn right.
    Right,
    /// Prefer the color that is locally less common.
    #[default]
    Minority,
    /// Prefer the color that is locally more common.
    Majority,
}

/// Parameters forwarded verbatim to the tracer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceParams {
    /// Speckles of up to this many pixels are dropped.
    pub turd_size: u32,
    /// Ambiguity resolution policy.
    pub turn_policy: TurnPolicy,
    /// Corner threshold.
    pub alpha_max: f64,
    /// Whether consecutive Bezier segments may be joined.
    pub opti_curve: bool,
    /// Tolerance of the joining pass.
    pub opt_tolerance: f64,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            turd_size: DEFAULT_TURD_SIZE,
            turn_policy: TurnPolicy::default(),
            alpha_max: DEFAULT_ALPHA_MAX,
            opti_curve: true,
            opt_tolerance: DEFAULT_OPT_TOLERANCE,
        }
    }
}

/// Vectorizes a two-color bitmap into signed outlines.
///
/// Implementations must be shareable across threads since layers are traced
/// in parallel.
pub trait Tracer: Sync {
    /// Error reported when tracing fails.
    type Error: std::fmt::Display;

    /// Traces the set pixels of `bitmap`. Root paths must be solid.
    fn trace(&self, bitmap: &Bitmap, params: &TraceParams) -> Result<Vec<SignedPath>, Self::Error>;
}
