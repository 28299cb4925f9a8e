//! Axis lines, arrowheads, and labels.

use crate::canvas::{DrawingContext, TextAlign, TextBaseline, with_fill_color, with_stroke_color};
use crate::config::PlotConfig;
use crate::geom::{Point, ScreenPoint};
use crate::transform::Transform;

/// Arrowhead length along the axis, in pixels.
const ARROW_LENGTH: f32 = 10.0;
/// Arrowhead half-width across the axis, in pixels.
const ARROW_HALF_WIDTH: f32 = 6.0;
/// Pixel offset between an axis tip and its label anchor.
const LABEL_OFFSET: f32 = 13.0;
/// Pixel gap between the label and the axis line.
const LABEL_GAP: f32 = 2.0;

/// Draw both axes with arrowheads and labels.
///
/// The x axis runs along logical y = 0 and the y axis along logical x = 0.
/// When 0 lies outside the window the axis simply falls outside the surface;
/// nothing is repositioned. Labels are drawn in screen space, so they stay
/// upright no matter where the logical origin ends up.
pub(crate) fn draw_axes(ctx: &mut dyn DrawingContext, config: &PlotConfig, transform: &Transform) {
    let x_tip = transform.to_screen(Point::new(config.x_max(), 0.0));
    let y_tip = transform.to_screen(Point::new(0.0, config.y_max()));

    with_stroke_color(ctx, config.theme().axis, |ctx| {
        ctx.begin_path();
        ctx.move_to(transform.to_screen(Point::new(config.x_min(), 0.0)));
        ctx.line_to(x_tip);
        ctx.move_to(transform.to_screen(Point::new(0.0, config.y_min())));
        ctx.line_to(y_tip);
        ctx.stroke();
    });

    with_fill_color(ctx, config.theme().label, |ctx| {
        ctx.begin_path();
        // x arrowhead points right.
        ctx.move_to(x_tip);
        ctx.line_to(ScreenPoint::new(x_tip.x - ARROW_LENGTH, x_tip.y - ARROW_HALF_WIDTH));
        ctx.line_to(ScreenPoint::new(x_tip.x - ARROW_LENGTH, x_tip.y + ARROW_HALF_WIDTH));
        ctx.close_path();
        // y arrowhead points up (screen y decreases upward).
        ctx.move_to(y_tip);
        ctx.line_to(ScreenPoint::new(y_tip.x - ARROW_HALF_WIDTH, y_tip.y + ARROW_LENGTH));
        ctx.line_to(ScreenPoint::new(y_tip.x + ARROW_HALF_WIDTH, y_tip.y + ARROW_LENGTH));
        ctx.close_path();
        ctx.fill();

        ctx.fill_text(
            config.x_label(),
            ScreenPoint::new(x_tip.x - LABEL_OFFSET, x_tip.y - LABEL_GAP),
            TextAlign::End,
            TextBaseline::Bottom,
        );
        ctx.fill_text(
            config.y_label(),
            ScreenPoint::new(y_tip.x + LABEL_GAP, y_tip.y + LABEL_OFFSET),
            TextAlign::Start,
            TextBaseline::Top,
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawOp, PathOp, RecordingCanvas};
    use crate::config::PlotSettings;

    fn axes_canvas(settings: PlotSettings) -> RecordingCanvas {
        let config = settings.resolve().expect("valid settings");
        let transform = Transform::new(&config);
        let mut canvas = RecordingCanvas::new(config.canvas_width(), config.canvas_height());
        draw_axes(&mut canvas, &config, &transform);
        canvas
    }

    #[test]
    fn axes_cross_at_logical_origin() {
        let canvas = axes_canvas(
            PlotSettings::new()
                .x_window(-5.0, 5.0)
                .y_window(-5.0, 5.0)
                .canvas_size(250, 250),
        );
        let (_, path) = canvas.strokes().next().expect("axis stroke");
        // x axis lies on screen y = 125, y axis on screen x = 125.
        let [PathOp::MoveTo(x_start), PathOp::LineTo(x_end), PathOp::MoveTo(y_start), PathOp::LineTo(y_end)] =
            path
        else {
            panic!("unexpected axis path: {path:?}");
        };
        assert!((x_start.y - 125.0).abs() < 1e-4);
        assert!((x_end.y - 125.0).abs() < 1e-4);
        assert!((y_start.x - 125.0).abs() < 1e-4);
        assert!((y_end.x - 125.0).abs() < 1e-4);
    }

    #[test]
    fn axis_spans_full_window() {
        let canvas = axes_canvas(
            PlotSettings::new()
                .x_window(0.0, 10.0)
                .y_window(0.0, 3.0)
                .canvas_size(500, 300),
        );
        let (_, path) = canvas.strokes().next().expect("axis stroke");
        let PathOp::MoveTo(x_start) = path[0] else {
            panic!("expected move");
        };
        let PathOp::LineTo(x_end) = path[1] else {
            panic!("expected line");
        };
        assert!((x_start.x - 0.0).abs() < 1e-4);
        assert!((x_end.x - 500.0).abs() < 1e-4);
    }

    #[test]
    fn labels_are_drawn_near_the_tips() {
        let canvas = axes_canvas(PlotSettings::new().x_label("time").y_label("speed"));
        let labels: Vec<&str> = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, ["time", "speed"]);
    }

    #[test]
    fn arrowheads_are_filled_triangles() {
        let canvas = axes_canvas(PlotSettings::new());
        let fills: Vec<_> = canvas
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::Fill { .. }))
            .collect();
        assert_eq!(fills.len(), 1);
        let DrawOp::Fill { path, .. } = fills[0] else {
            unreachable!();
        };
        let closes = path.iter().filter(|op| matches!(op, PathOp::Close)).count();
        assert_eq!(closes, 2);
    }

    #[test]
    fn axes_outside_window_are_still_drawn_offscreen() {
        // Window entirely above y = 0: the x axis lands below the surface.
        let canvas = axes_canvas(
            PlotSettings::new()
                .x_window(1.0, 11.0)
                .y_window(2.0, 5.0)
                .canvas_size(100, 100),
        );
        let (_, path) = canvas.strokes().next().expect("axis stroke");
        let PathOp::MoveTo(x_start) = path[0] else {
            panic!("expected move");
        };
        assert!(x_start.y > 100.0);
    }
}
