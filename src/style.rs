//! Visual theming for the grid, axes, and curves.

use crate::canvas::Color;

/// Colors used by the render pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Grid line color.
    pub grid: Color,
    /// Axis line color.
    pub axis: Color,
    /// Axis arrowhead and label color.
    pub label: Color,
    /// Stroke color for curves without an explicit color.
    pub curve: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            grid: Color::rgb(0xcc, 0xcc, 0xff),
            axis: Color::rgb(0x88, 0x88, 0x88),
            label: Color::BLACK,
            curve: Color::BLACK,
        }
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::default()
    }
}
