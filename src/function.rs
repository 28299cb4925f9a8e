//! Caller-supplied functions and the per-sample result type.

use std::sync::Arc;

use crate::canvas::Color;
use crate::geom::Point;

/// Outcome of evaluating a function at one x value.
///
/// The curve renderer consumes these directly: `Value` extends the current
/// polyline, `Undefined` breaks it, and `Failed` breaks it and emits a
/// diagnostic. Failures never abort the render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    /// The function is defined here and produced a value.
    Value(f64),
    /// The function has no value here (outside its domain).
    Undefined,
    /// Evaluation failed with a reason.
    Failed(String),
}

/// A plottable ℝ→ℝ function with an optional stroke color.
///
/// The evaluator is owned by the caller and is only invoked during the single
/// render pass; nothing is cached between passes.
#[derive(Clone)]
pub struct PlottableFunction {
    name: String,
    color: Option<Color>,
    eval: Arc<dyn Fn(f64) -> Sample + Send + Sync>,
}

impl PlottableFunction {
    /// Wrap a total function.
    ///
    /// A NaN result is treated as [`Sample::Undefined`]; infinities pass
    /// through and are clamped by the curve renderer.
    pub fn new(name: impl Into<String>, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::sampled(name, move |x| {
            let y = f(x);
            if y.is_nan() { Sample::Undefined } else { Sample::Value(y) }
        })
    }

    /// Wrap a partial function; `None` breaks the polyline.
    pub fn partial(
        name: impl Into<String>,
        f: impl Fn(f64) -> Option<f64> + Send + Sync + 'static,
    ) -> Self {
        Self::sampled(name, move |x| match f(x) {
            Some(y) if !y.is_nan() => Sample::Value(y),
            _ => Sample::Undefined,
        })
    }

    /// Wrap a fallible function; errors are skipped per sample with a
    /// diagnostic, never aborting the render.
    pub fn fallible<E: std::fmt::Display>(
        name: impl Into<String>,
        f: impl Fn(f64) -> Result<f64, E> + Send + Sync + 'static,
    ) -> Self {
        Self::sampled(name, move |x| match f(x) {
            Ok(y) if !y.is_nan() => Sample::Value(y),
            Ok(_) => Sample::Undefined,
            Err(err) => Sample::Failed(err.to_string()),
        })
    }

    /// Wrap a raw sampling callback.
    pub fn sampled(
        name: impl Into<String>,
        f: impl Fn(f64) -> Sample + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            color: None,
            eval: Arc::new(f),
        }
    }

    /// Build a piecewise-linear function from a point dataset.
    ///
    /// Points are sorted by x; between consecutive points the function
    /// interpolates linearly, outside the dataset's x range it is undefined.
    pub fn from_points(name: impl Into<String>, points: impl IntoIterator<Item = Point>) -> Self {
        let mut points: Vec<Point> = points
            .into_iter()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .collect();
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self::sampled(name, move |x| {
            let last = match points.last() {
                Some(last) => last,
                None => return Sample::Undefined,
            };
            if x < points[0].x || x > last.x {
                return Sample::Undefined;
            }
            let upper = points.partition_point(|p| p.x < x);
            if upper == 0 {
                return Sample::Value(points[0].y);
            }
            let (a, b) = (points[upper - 1], points[upper.min(points.len() - 1)]);
            if b.x == a.x {
                return Sample::Value(b.y);
            }
            let t = (x - a.x) / (b.x - a.x);
            Sample::Value(a.y + t * (b.y - a.y))
        })
    }

    /// Set the stroke color used for this function's curve.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Display name, used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explicit stroke color, if any.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Evaluate the function at a logical x.
    pub fn evaluate(&self, x: f64) -> Sample {
        (self.eval)(x)
    }
}

impl std::fmt::Debug for PlottableFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlottableFunction")
            .field("name", &self.name)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_function_maps_nan_to_undefined() {
        let f = PlottableFunction::new("sqrt", |x: f64| x.sqrt());
        assert_eq!(f.evaluate(4.0), Sample::Value(2.0));
        assert_eq!(f.evaluate(-1.0), Sample::Undefined);
    }

    #[test]
    fn fallible_function_reports_failures() {
        let f = PlottableFunction::fallible("recip", |x: f64| {
            if x == 0.0 {
                Err("division by zero")
            } else {
                Ok(1.0 / x)
            }
        });
        assert_eq!(f.evaluate(2.0), Sample::Value(0.5));
        assert!(matches!(f.evaluate(0.0), Sample::Failed(_)));
    }

    #[test]
    fn dataset_interpolates_linearly() {
        let f = PlottableFunction::from_points(
            "data",
            [Point::new(0.0, 0.0), Point::new(2.0, 4.0), Point::new(4.0, 0.0)],
        );
        assert_eq!(f.evaluate(0.0), Sample::Value(0.0));
        assert_eq!(f.evaluate(1.0), Sample::Value(2.0));
        assert_eq!(f.evaluate(2.0), Sample::Value(4.0));
        assert_eq!(f.evaluate(3.0), Sample::Value(2.0));
    }

    #[test]
    fn dataset_is_undefined_outside_range() {
        let f = PlottableFunction::from_points("data", [Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
        assert_eq!(f.evaluate(0.5), Sample::Undefined);
        assert_eq!(f.evaluate(2.5), Sample::Undefined);
    }

    #[test]
    fn empty_dataset_is_everywhere_undefined() {
        let f = PlottableFunction::from_points("empty", []);
        assert_eq!(f.evaluate(0.0), Sample::Undefined);
    }
}
