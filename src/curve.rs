//! Function sampling and curve stroking.

use tracing::warn;

use crate::canvas::{DrawingContext, with_stroke_color};
use crate::config::PlotConfig;
use crate::function::{PlottableFunction, Sample};
use crate::geom::{Point, ScreenPoint};
use crate::transform::Transform;

/// Sample a function across the surface and stroke the resulting polylines.
///
/// One sample per integer pixel column, `canvas_width + 1` in total. Undefined
/// and failed samples break the polyline instead of connecting across the
/// gap; failed samples additionally emit a diagnostic and never abort the
/// pass. Finite values outside the window clamp to one logical unit past the
/// boundary, which keeps runaway curves off-screen but numerically bounded.
///
/// A single valid sample isolated between two breaks has no visible extent
/// at one sample per pixel column and is not stroked.
pub(crate) fn draw_curve(
    ctx: &mut dyn DrawingContext,
    config: &PlotConfig,
    transform: &Transform,
    function: &PlottableFunction,
) {
    let samples = sample_function(config, transform, function);
    let segments = split_segments(&samples);
    let color = function.color().unwrap_or(config.theme().curve);

    with_stroke_color(ctx, color, |ctx| {
        for segment in &segments {
            if segment.len() < 2 {
                continue;
            }
            ctx.begin_path();
            ctx.move_to(segment[0]);
            for point in &segment[1..] {
                ctx.line_to(*point);
            }
            ctx.stroke();
        }
    });
}

/// Evaluate one sample per pixel column; `None` marks a polyline break.
fn sample_function(
    config: &PlotConfig,
    transform: &Transform,
    function: &PlottableFunction,
) -> Vec<Option<ScreenPoint>> {
    let mut samples = Vec::with_capacity(config.canvas_width() as usize + 1);
    for pixel_x in 0..=config.canvas_width() {
        let x = transform.x_to_logical(f64::from(pixel_x));
        let sample = match function.evaluate(x) {
            Sample::Value(y) if y.is_nan() => None,
            Sample::Value(y) => {
                let y = if y < config.y_min() {
                    config.y_min() - 1.0
                } else if y > config.y_max() {
                    config.y_max() + 1.0
                } else {
                    y
                };
                Some(transform.to_screen(Point::new(x, y)))
            }
            Sample::Undefined => None,
            Sample::Failed(reason) => {
                warn!(function = function.name(), x, reason = %reason, "skipping failed sample");
                None
            }
        };
        samples.push(sample);
    }
    samples
}

/// Split samples at breaks into continuous polyline segments.
fn split_segments(samples: &[Option<ScreenPoint>]) -> Vec<Vec<ScreenPoint>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for sample in samples {
        match sample {
            Some(point) => current.push(*point),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}
