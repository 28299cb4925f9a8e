//! The one-shot render driver.

use tracing::debug;

use crate::axes;
use crate::config::PlotSettings;
use crate::curve;
use crate::error::PlotResult;
use crate::function::PlottableFunction;
use crate::grid;
use crate::surface::SurfaceProvider;
use crate::transform::Transform;

/// Render functions into the surface bound to `container_id`.
///
/// Runs the whole pipeline synchronously: resolve the settings, acquire and
/// size the surface, then draw grid, axes, and each function in the order
/// supplied (later curves paint over earlier ones). Configuration and
/// container errors abort the call; per-sample evaluation failures are
/// recovered inside the curve renderer and only logged.
pub fn render(
    provider: &mut dyn SurfaceProvider,
    container_id: &str,
    settings: &PlotSettings,
    functions: &[PlottableFunction],
) -> PlotResult<()> {
    let config = settings.resolve()?;
    debug!(
        container = container_id,
        width = config.canvas_width(),
        height = config.canvas_height(),
        functions = functions.len(),
        "starting render pass"
    );
    let ctx = provider.acquire(container_id, config.canvas_width(), config.canvas_height())?;
    let transform = Transform::new(&config);

    grid::draw_grid(ctx, &config, &transform);
    axes::draw_axes(ctx, &config, &transform);
    for function in functions {
        curve::draw_curve(ctx, &config, &transform, function);
    }
    Ok(())
}
