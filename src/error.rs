//! Error types for the render pipeline.
//!
//! Only unrecoverable conditions surface as [`PlotError`]: a degenerate plot
//! window, a degenerate surface size, or an unresolvable container. Failures
//! of individual curve samples are recovered locally during sampling and
//! never reach the caller (see [`crate::function::Sample`]).

use thiserror::Error;

/// Convenience alias for results produced by the render pipeline.
pub type PlotResult<T> = Result<T, PlotError>;

/// Errors that abort a render call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    /// The logical plot window has zero or negative extent on an axis.
    #[error("invalid {axis} window: min {min} must be less than max {max}")]
    InvalidWindow {
        /// Name of the degenerate axis (`"x"` or `"y"`).
        axis: &'static str,
        /// Lower bound as supplied.
        min: f64,
        /// Upper bound as supplied.
        max: f64,
    },
    /// A window bound is NaN or infinite.
    #[error("non-finite {axis} window: [{min}, {max}]")]
    NonFiniteWindow {
        /// Name of the offending axis (`"x"` or `"y"`).
        axis: &'static str,
        /// Lower bound as supplied.
        min: f64,
        /// Upper bound as supplied.
        max: f64,
    },
    /// The grid density exponent is outside the supported range.
    #[error("grid density {density} outside supported range [{min}, {max}]")]
    InvalidGridDensity {
        /// Density exponent as supplied.
        density: i32,
        /// Smallest supported exponent.
        min: i32,
        /// Largest supported exponent.
        max: i32,
    },
    /// The requested surface has a zero-pixel dimension.
    #[error("invalid canvas size: {width}x{height} (both dimensions must be positive)")]
    InvalidCanvasSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// The surface provider does not know the given container.
    #[error("container not found: {0:?}")]
    ContainerNotFound(String),
}
