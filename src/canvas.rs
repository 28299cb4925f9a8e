//! The drawing-context seam and an in-memory recording implementation.
//!
//! The render pipeline never talks to a concrete pixel backend. It drives the
//! [`DrawingContext`] trait, a minimal immediate-mode 2D surface: path
//! construction, stroke/fill with settable colors, and text. Real backends
//! (a GPU frame builder, an HTML canvas shim, a raster encoder) implement the
//! trait; [`RecordingCanvas`] implements it by recording [`DrawOp`]s, which
//! doubles as a replay buffer for such backends and as the assertion surface
//! for tests.

use crate::geom::ScreenPoint;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Create a new color with explicit RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color (alpha = 255).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a `#RGB` or `#RRGGBB` hex string.
    ///
    /// Returns `None` for any other shape or for non-hex digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (channel, digit) in channels.iter_mut().zip(digits.chars()) {
                    let nibble = digit.to_digit(16)? as u8;
                    *channel = nibble << 4 | nibble;
                }
                Some(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 => {
                let mut channels = [0u8; 3];
                for (channel, pair) in channels.iter_mut().zip(digits.as_bytes().chunks(2)) {
                    let pair = std::str::from_utf8(pair).ok()?;
                    *channel = u8::from_str_radix(pair, 16).ok()?;
                }
                Some(Self::rgb(channels[0], channels[1], channels[2]))
            }
            _ => None,
        }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
}

/// Horizontal text anchoring relative to the text position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Anchor the start of the text at the position.
    Start,
    /// Center the text on the position.
    Center,
    /// Anchor the end of the text at the position.
    End,
}

/// Vertical text anchoring relative to the text position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    /// The top of the glyphs sits at the position.
    Top,
    /// The glyphs are centered on the position.
    Middle,
    /// The bottom of the glyphs sits at the position.
    Bottom,
}

/// A minimal immediate-mode 2D drawing surface.
///
/// Coordinates are screen-space pixels (origin top-left, y down). The current
/// path accumulates until the next [`begin_path`](Self::begin_path); stroking
/// or filling does not clear it. Implementations must expose the current
/// stroke color through [`stroke_color`](Self::stroke_color) so callers can
/// save and restore styling around their own drawing.
pub trait DrawingContext {
    /// Surface size in pixels as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Start a new path, discarding the current one.
    fn begin_path(&mut self);

    /// Move the pen without drawing.
    fn move_to(&mut self, point: ScreenPoint);

    /// Extend the current subpath with a straight segment.
    fn line_to(&mut self, point: ScreenPoint);

    /// Close the current subpath back to its starting point.
    fn close_path(&mut self);

    /// Stroke the current path with the current stroke color.
    fn stroke(&mut self);

    /// Fill the current path with the current fill color.
    fn fill(&mut self);

    /// The current stroke color.
    fn stroke_color(&self) -> Color;

    /// Set the stroke color for subsequent strokes.
    fn set_stroke_color(&mut self, color: Color);

    /// The current fill color.
    fn fill_color(&self) -> Color;

    /// Set the fill color for subsequent fills and text.
    fn set_fill_color(&mut self, color: Color);

    /// Draw text anchored at a position.
    fn fill_text(
        &mut self,
        text: &str,
        position: ScreenPoint,
        align: TextAlign,
        baseline: TextBaseline,
    );
}

/// Run `body` with a temporary stroke color, restoring the previous one.
///
/// The restore happens on every path out of `body`, so one curve's styling
/// never leaks into the next.
pub(crate) fn with_stroke_color<R>(
    ctx: &mut dyn DrawingContext,
    color: Color,
    body: impl FnOnce(&mut dyn DrawingContext) -> R,
) -> R {
    let previous = ctx.stroke_color();
    ctx.set_stroke_color(color);
    let result = body(ctx);
    ctx.set_stroke_color(previous);
    result
}

/// Run `body` with a temporary fill color, restoring the previous one.
pub(crate) fn with_fill_color<R>(
    ctx: &mut dyn DrawingContext,
    color: Color,
    body: impl FnOnce(&mut dyn DrawingContext) -> R,
) -> R {
    let previous = ctx.fill_color();
    ctx.set_fill_color(color);
    let result = body(ctx);
    ctx.set_fill_color(previous);
    result
}

/// A single path-construction step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    /// Pen move without drawing.
    MoveTo(ScreenPoint),
    /// Straight segment to a point.
    LineTo(ScreenPoint),
    /// Close the current subpath.
    Close,
}

/// A recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A stroked path with the color in effect at stroke time.
    Stroke {
        /// Stroke color.
        color: Color,
        /// The path as accumulated since the last `begin_path`.
        path: Vec<PathOp>,
    },
    /// A filled path with the color in effect at fill time.
    Fill {
        /// Fill color.
        color: Color,
        /// The path as accumulated since the last `begin_path`.
        path: Vec<PathOp>,
    },
    /// Drawn text.
    Text {
        /// Text content.
        text: String,
        /// Anchor position.
        position: ScreenPoint,
        /// Horizontal anchoring.
        align: TextAlign,
        /// Vertical anchoring.
        baseline: TextBaseline,
        /// Fill color in effect at draw time.
        color: Color,
    },
}

/// A drawing context that records operations instead of producing pixels.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    stroke_color: Color,
    fill_color: Color,
    path: Vec<PathOp>,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    /// Create an empty recording surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            stroke_color: Color::BLACK,
            fill_color: Color::BLACK,
            path: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// Resize the surface, discarding everything recorded so far.
    ///
    /// Mirrors raster-canvas semantics where resizing clears the bitmap.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.path.clear();
        self.ops.clear();
        self.stroke_color = Color::BLACK;
        self.fill_color = Color::BLACK;
    }

    /// All recorded operations in draw order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Recorded stroke operations in draw order.
    pub fn strokes(&self) -> impl Iterator<Item = (&Color, &[PathOp])> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Stroke { color, path } => Some((color, path.as_slice())),
            _ => None,
        })
    }
}

impl DrawingContext for RecordingCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, point: ScreenPoint) {
        self.path.push(PathOp::MoveTo(point));
    }

    fn line_to(&mut self, point: ScreenPoint) {
        self.path.push(PathOp::LineTo(point));
    }

    fn close_path(&mut self) {
        self.path.push(PathOp::Close);
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke {
            color: self.stroke_color,
            path: self.path.clone(),
        });
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill {
            color: self.fill_color,
            path: self.path.clone(),
        });
    }

    fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn fill_color(&self) -> Color {
        self.fill_color
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn fill_text(
        &mut self,
        text: &str,
        position: ScreenPoint,
        align: TextAlign,
        baseline: TextBaseline,
    ) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            position,
            align,
            baseline,
            color: self.fill_color,
        });
    }
}
