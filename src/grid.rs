//! Background grid rendering.

use crate::canvas::{DrawingContext, with_stroke_color};
use crate::config::PlotConfig;
use crate::geom::Point;
use crate::transform::Transform;

/// Draw the background grid, or nothing when the grid is hidden.
///
/// Lines fall on absolute multiples of `5^grid_density` logical units. The
/// first line per axis is snapped to the nearest multiple at or below the
/// window minimum, so panning the window never makes the grid drift relative
/// to the axes. The Euclidean remainder keeps the snap correct for negative
/// window minima.
pub(crate) fn draw_grid(ctx: &mut dyn DrawingContext, config: &PlotConfig, transform: &Transform) {
    if !config.grid_visible() {
        return;
    }
    let step = 5f64.powi(config.grid_density());

    with_stroke_color(ctx, config.theme().grid, |ctx| {
        ctx.begin_path();
        let mut x = config.x_min() - config.x_min().rem_euclid(step);
        while x < config.x_max() {
            ctx.move_to(transform.to_screen(Point::new(x, config.y_min())));
            ctx.line_to(transform.to_screen(Point::new(x, config.y_max())));
            x += step;
        }
        ctx.stroke();

        ctx.begin_path();
        let mut y = config.y_min() - config.y_min().rem_euclid(step);
        while y < config.y_max() {
            ctx.move_to(transform.to_screen(Point::new(config.x_min(), y)));
            ctx.line_to(transform.to_screen(Point::new(config.x_max(), y)));
            y += step;
        }
        ctx.stroke();
    });
}
