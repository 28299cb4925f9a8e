//! funcplot renders real-valued functions onto 2D raster surfaces.
//!
//! The pipeline is one-shot and synchronous: resolve [`PlotSettings`] into a
//! [`PlotConfig`], acquire a surface from a [`SurfaceProvider`], derive the
//! logical-to-pixel [`Transform`], then draw the grid, the axes, and each
//! [`PlottableFunction`] in order through the [`DrawingContext`] trait.
//!
//! ```
//! use funcplot::{MemorySurfaceProvider, PlotSettings, PlottableFunction, render};
//!
//! let mut provider = MemorySurfaceProvider::new().with_container("plot-here");
//! let settings = PlotSettings::new()
//!     .x_window(-5.0, 5.0)
//!     .y_window(-5.0, 5.0)
//!     .canvas_size(250, 250);
//! let functions = [
//!     PlottableFunction::new("identity", |x| x),
//!     PlottableFunction::new("square", |x| x * x),
//! ];
//! render(&mut provider, "plot-here", &settings, &functions).unwrap();
//! ```

#![forbid(unsafe_code)]

mod axes;
pub mod canvas;
pub mod config;
mod curve;
pub mod error;
pub mod function;
pub mod geom;
mod grid;
pub mod plot;
pub mod style;
pub mod surface;
pub mod transform;

pub use canvas::{Color, DrawOp, DrawingContext, PathOp, RecordingCanvas, TextAlign, TextBaseline};
pub use config::{PlotConfig, PlotSettings};
pub use error::{PlotError, PlotResult};
pub use function::{PlottableFunction, Sample};
pub use geom::{Point, ScreenPoint};
pub use plot::render;
pub use style::Theme;
pub use surface::{MemorySurfaceProvider, SurfaceProvider};
pub use transform::Transform;
