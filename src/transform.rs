//! Coordinate transform between logical and screen space.

use crate::config::PlotConfig;
use crate::geom::{Point, ScreenPoint};

/// Affine mapping between the logical plot window and the pixel surface.
///
/// Logical y increases upward; screen y increases downward. The transform is
/// applied per point rather than installed into the drawing context, which
/// keeps text upright without any counter-flip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    x_min: f64,
    y_min: f64,
    x_scale: f64,
    y_scale: f64,
    canvas_height: f64,
}

impl Transform {
    /// Build the transform for a resolved configuration.
    pub fn new(config: &PlotConfig) -> Self {
        Self {
            x_min: config.x_min(),
            y_min: config.y_min(),
            x_scale: config.x_scale(),
            y_scale: config.y_scale(),
            canvas_height: f64::from(config.canvas_height()),
        }
    }

    /// Map a logical point into screen space.
    pub fn to_screen(&self, point: Point) -> ScreenPoint {
        let sx = (point.x - self.x_min) * self.x_scale;
        let sy = self.canvas_height - (point.y - self.y_min) * self.y_scale;
        ScreenPoint::new(sx as f32, sy as f32)
    }

    /// Map a screen point back into logical space.
    pub fn to_logical(&self, point: ScreenPoint) -> Point {
        let x = self.x_min + f64::from(point.x) / self.x_scale;
        let y = self.y_min + (self.canvas_height - f64::from(point.y)) / self.y_scale;
        Point::new(x, y)
    }

    /// Map a screen x coordinate back into a logical x value.
    pub fn x_to_logical(&self, screen_x: f64) -> f64 {
        self.x_min + screen_x / self.x_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotSettings;

    fn transform(settings: PlotSettings) -> Transform {
        Transform::new(&settings.resolve().expect("valid settings"))
    }

    #[test]
    fn window_corners_map_to_surface_corners() {
        let transform = transform(
            PlotSettings::new()
                .x_window(-5.0, 5.0)
                .y_window(-2.0, 8.0)
                .canvas_size(400, 300),
        );
        let bottom_left = transform.to_screen(Point::new(-5.0, -2.0));
        assert!((bottom_left.x - 0.0).abs() < 1e-6);
        assert!((bottom_left.y - 300.0).abs() < 1e-6);
        let top_right = transform.to_screen(Point::new(5.0, 8.0));
        assert!((top_right.x - 400.0).abs() < 1e-6);
        assert!((top_right.y - 0.0).abs() < 1e-6);
    }

    #[test]
    fn roundtrip() {
        let transform = transform(
            PlotSettings::new()
                .x_window(0.0, 10.0)
                .y_window(0.0, 3.0)
                .canvas_size(500, 500),
        );
        let point = Point::new(3.7, 1.2);
        let back = transform.to_logical(transform.to_screen(point));
        assert!((back.x - point.x).abs() < 1e-6);
        assert!((back.y - point.y).abs() < 1e-6);
    }

    #[test]
    fn screen_y_grows_downward() {
        let transform = transform(PlotSettings::new());
        let low = transform.to_screen(Point::new(0.0, 0.0));
        let high = transform.to_screen(Point::new(0.0, 3.0));
        assert!(high.y < low.y);
    }
}
