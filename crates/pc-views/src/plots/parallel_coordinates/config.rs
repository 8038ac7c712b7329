use serde::{Deserialize, Serialize};

use crate::plots::utils::ColorSet;

/// Parallel coordinates configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    // Visual options
    /// Point diameter as a fraction of the plot height
    pub point_size: f32,
    /// Polyline stroke width in screen pixels
    pub line_width: f32,
    pub point_colors: ColorSet,
    pub line_colors: ColorSet,
    /// Draw order given to highlighted polylines
    pub highlight_draw_order: i32,
    /// Depth given to highlighted points so they win overlaps
    pub highlight_depth: f32,

    // Scaling options
    /// Stretch every axis so that zero is inside its range
    pub scale_to_zero: bool,

    // Interaction, in plot units
    pub click_radius: f32,
    pub brush_radius: f32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            point_size: 0.01,
            line_width: 1.0,
            point_colors: ColorSet::points(),
            line_colors: ColorSet::lines(),
            highlight_draw_order: 1,
            highlight_depth: 1.0,
            scale_to_zero: false,
            click_radius: 8.0,
            brush_radius: 12.0,
        }
    }
}
