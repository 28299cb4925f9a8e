//! Plot settings and their resolution into a complete configuration.
//!
//! Callers describe a plot with [`PlotSettings`], where every field is
//! optional. [`PlotSettings::resolve`] overlays the supplied fields onto the
//! fixed default table, validates the window and surface dimensions, and
//! computes the derived extents and scale factors once. The resulting
//! [`PlotConfig`] is read-only for the rest of the render pass.

use crate::error::{PlotError, PlotResult};
use crate::style::Theme;

/// Fixed default values for every unspecified setting.
#[derive(Debug, Clone, Copy)]
struct Defaults {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    x_label: &'static str,
    y_label: &'static str,
    canvas_width: u32,
    canvas_height: u32,
    grid_density: i32,
    grid_visible: bool,
}

/// Supported range of the grid density exponent.
///
/// The grid draws `extent / 5^density` lines per axis, so an unbounded
/// exponent lets a small negative value explode the line count and a large
/// negative one underflow the step to zero. Within this range the step stays
/// well away from both failure modes.
const GRID_DENSITY_RANGE: std::ops::RangeInclusive<i32> = -4..=4;

const DEFAULTS: Defaults = Defaults {
    x_min: 0.0,
    x_max: 10.0,
    y_min: 0.0,
    y_max: 3.0,
    x_label: "x",
    y_label: "y",
    canvas_width: 500,
    canvas_height: 500,
    grid_density: 0,
    grid_visible: true,
};

/// Partial plot configuration supplied by the caller.
///
/// Unset fields fall back to the defaults documented on each builder method.
#[derive(Debug, Clone, Default)]
pub struct PlotSettings {
    x_min: Option<f64>,
    x_max: Option<f64>,
    y_min: Option<f64>,
    y_max: Option<f64>,
    x_label: Option<String>,
    y_label: Option<String>,
    canvas_width: Option<u32>,
    canvas_height: Option<u32>,
    grid_density: Option<i32>,
    grid_visible: Option<bool>,
    theme: Option<Theme>,
}

impl PlotSettings {
    /// Start from all-default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logical x window. Defaults to `[0, 10]`.
    pub fn x_window(mut self, min: f64, max: f64) -> Self {
        self.x_min = Some(min);
        self.x_max = Some(max);
        self
    }

    /// Set the logical y window. Defaults to `[0, 3]`.
    pub fn y_window(mut self, min: f64, max: f64) -> Self {
        self.y_min = Some(min);
        self.y_max = Some(max);
        self
    }

    /// Set the x axis label. Defaults to `"x"`.
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Set the y axis label. Defaults to `"y"`.
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Set the surface size in pixels. Defaults to 500x500.
    pub fn canvas_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = Some(width);
        self.canvas_height = Some(height);
        self
    }

    /// Set the grid density exponent. Defaults to 0.
    ///
    /// Grid lines fall on multiples of `5^density` logical units: 0 draws
    /// every unit, 1 every 5 units, -1 every 0.2 units. Resolution rejects
    /// exponents outside `[-4, 4]`.
    pub fn grid_density(mut self, density: i32) -> Self {
        self.grid_density = Some(density);
        self
    }

    /// Toggle the background grid. Defaults to visible.
    pub fn grid_visible(mut self, visible: bool) -> Self {
        self.grid_visible = Some(visible);
        self
    }

    /// Override the color theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Fill unset fields from the defaults, validate, and derive geometry.
    pub fn resolve(&self) -> PlotResult<PlotConfig> {
        let x_min = self.x_min.unwrap_or(DEFAULTS.x_min);
        let x_max = self.x_max.unwrap_or(DEFAULTS.x_max);
        let y_min = self.y_min.unwrap_or(DEFAULTS.y_min);
        let y_max = self.y_max.unwrap_or(DEFAULTS.y_max);
        let canvas_width = self.canvas_width.unwrap_or(DEFAULTS.canvas_width);
        let canvas_height = self.canvas_height.unwrap_or(DEFAULTS.canvas_height);

        validate_window("x", x_min, x_max)?;
        validate_window("y", y_min, y_max)?;
        let grid_density = self.grid_density.unwrap_or(DEFAULTS.grid_density);
        if !GRID_DENSITY_RANGE.contains(&grid_density) {
            return Err(PlotError::InvalidGridDensity {
                density: grid_density,
                min: *GRID_DENSITY_RANGE.start(),
                max: *GRID_DENSITY_RANGE.end(),
            });
        }
        if canvas_width == 0 || canvas_height == 0 {
            return Err(PlotError::InvalidCanvasSize {
                width: canvas_width,
                height: canvas_height,
            });
        }

        let x_extent = x_max - x_min;
        let y_extent = y_max - y_min;
        Ok(PlotConfig {
            x_min,
            x_max,
            y_min,
            y_max,
            x_label: self
                .x_label
                .clone()
                .unwrap_or_else(|| DEFAULTS.x_label.to_string()),
            y_label: self
                .y_label
                .clone()
                .unwrap_or_else(|| DEFAULTS.y_label.to_string()),
            canvas_width,
            canvas_height,
            grid_density,
            grid_visible: self.grid_visible.unwrap_or(DEFAULTS.grid_visible),
            theme: self.theme.unwrap_or_default(),
            x_extent,
            y_extent,
            x_scale: f64::from(canvas_width) / x_extent,
            y_scale: f64::from(canvas_height) / y_extent,
        })
    }
}

fn validate_window(axis: &'static str, min: f64, max: f64) -> PlotResult<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(PlotError::NonFiniteWindow { axis, min, max });
    }
    if max <= min {
        return Err(PlotError::InvalidWindow { axis, min, max });
    }
    Ok(())
}

/// Fully resolved plot configuration with derived geometry.
///
/// Constructed once per render pass by [`PlotSettings::resolve`] and
/// read-only thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    x_label: String,
    y_label: String,
    canvas_width: u32,
    canvas_height: u32,
    grid_density: i32,
    grid_visible: bool,
    theme: Theme,
    x_extent: f64,
    y_extent: f64,
    x_scale: f64,
    y_scale: f64,
}

impl PlotConfig {
    /// Lower bound of the logical x window.
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Upper bound of the logical x window.
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Lower bound of the logical y window.
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Upper bound of the logical y window.
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// X axis label text.
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    /// Y axis label text.
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// Surface width in pixels.
    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    /// Surface height in pixels.
    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Grid density exponent.
    pub fn grid_density(&self) -> i32 {
        self.grid_density
    }

    /// Whether the background grid is drawn.
    pub fn grid_visible(&self) -> bool {
        self.grid_visible
    }

    /// Color theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Logical width of the window (`x_max - x_min`).
    pub fn x_extent(&self) -> f64 {
        self.x_extent
    }

    /// Logical height of the window (`y_max - y_min`).
    pub fn y_extent(&self) -> f64 {
        self.y_extent
    }

    /// Pixels per logical unit along x.
    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    /// Pixels per logical unit along y.
    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_fills_defaults() {
        let config = PlotSettings::new().resolve().expect("defaults are valid");
        assert_eq!(config.x_min(), 0.0);
        assert_eq!(config.x_max(), 10.0);
        assert_eq!(config.y_min(), 0.0);
        assert_eq!(config.y_max(), 3.0);
        assert_eq!(config.x_label(), "x");
        assert_eq!(config.y_label(), "y");
        assert_eq!(config.canvas_width(), 500);
        assert_eq!(config.canvas_height(), 500);
        assert_eq!(config.grid_density(), 0);
        assert!(config.grid_visible());
    }

    #[test]
    fn resolve_computes_derived_geometry() {
        let config = PlotSettings::new()
            .x_window(-5.0, 5.0)
            .y_window(-2.0, 2.0)
            .canvas_size(200, 100)
            .resolve()
            .expect("valid settings");
        assert_eq!(config.x_extent(), 10.0);
        assert_eq!(config.y_extent(), 4.0);
        assert!((config.x_scale() - 20.0).abs() < 1e-12);
        assert!((config.y_scale() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn resolve_rejects_degenerate_window() {
        let err = PlotSettings::new()
            .x_window(3.0, 3.0)
            .resolve()
            .expect_err("zero x extent");
        assert!(matches!(err, PlotError::InvalidWindow { axis: "x", .. }));

        let err = PlotSettings::new()
            .y_window(2.0, -2.0)
            .resolve()
            .expect_err("inverted y window");
        assert!(matches!(err, PlotError::InvalidWindow { axis: "y", .. }));
    }

    #[test]
    fn resolve_rejects_non_finite_window() {
        let err = PlotSettings::new()
            .x_window(0.0, f64::INFINITY)
            .resolve()
            .expect_err("infinite bound");
        assert!(matches!(err, PlotError::NonFiniteWindow { axis: "x", .. }));
    }

    #[test]
    fn resolve_rejects_out_of_range_grid_density() {
        // A moderately negative exponent would already draw millions of
        // lines; a very negative one underflows the step to zero entirely.
        for density in [-15, -1000, 5, 1000] {
            let err = PlotSettings::new()
                .grid_density(density)
                .resolve()
                .expect_err("out of range");
            assert!(matches!(err, PlotError::InvalidGridDensity { .. }));
        }
        for density in [-4, 0, 4] {
            PlotSettings::new()
                .grid_density(density)
                .resolve()
                .expect("in range");
        }
    }

    #[test]
    fn resolve_rejects_zero_canvas() {
        let err = PlotSettings::new()
            .canvas_size(0, 100)
            .resolve()
            .expect_err("zero width");
        assert!(matches!(err, PlotError::InvalidCanvasSize { .. }));
    }
}
