//! Color utilities for plots

use egui::Color32;
use serde::{Deserialize, Serialize};

/// Colors for the three record styles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorSet {
    pub default: Color32,
    pub highlighted: Color32,
    pub masked: Color32,
}

impl ColorSet {
    /// Same set with every alpha replaced
    pub fn with_alpha(self, alpha: u8) -> Self {
        let set = |c: Color32| Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), alpha);
        Self {
            default: set(self.default),
            highlighted: set(self.highlighted),
            masked: set(self.masked),
        }
    }

    /// Point colors
    pub fn points() -> Self {
        Self {
            default: Color32::from_rgb(100, 150, 250),
            highlighted: Color32::from_rgb(255, 200, 0),
            masked: Color32::from_gray(70),
        }
    }

    /// Line colors, translucent so dense plots stay readable
    pub fn lines() -> Self {
        Self::points().with_alpha(128)
    }
}
