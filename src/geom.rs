//! Geometric primitives used by the plotting pipeline.
//!
//! [`Point`] lives in logical (mathematical) coordinates with y increasing
//! upward. [`ScreenPoint`] lives in pixel coordinates with the origin at the
//! top-left corner of the surface and y increasing downward.

/// A point in logical coordinates.
///
/// Use this when providing explicit X/Y values on the mathematical plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X value in logical coordinates.
    pub x: f64,
    /// Y value in logical coordinates.
    pub y: f64,
}

impl Point {
    /// Create a new logical point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f32,
    /// Y value in screen pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
