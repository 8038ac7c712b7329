//! Value to plot-space placement

use egui::{pos2, vec2, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::plots::utils::AxisBounds;
use crate::PlotError;

/// Plot-space extent of the view. The y axis points up; axes run from
/// `padding` to `height - padding`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotFrame {
    pub size: Vec2,
    pub padding: f32,
}

impl Default for PlotFrame {
    fn default() -> Self {
        Self::new(800.0, 400.0, 40.0)
    }
}

impl PlotFrame {
    pub fn new(width: f32, height: f32, padding: f32) -> Self {
        Self {
            size: vec2(width, height),
            padding,
        }
    }

    pub fn validate(&self) -> Result<(), PlotError> {
        let valid = self.padding.is_finite()
            && self.padding >= 0.0
            && self.inner_width().is_finite()
            && self.inner_width() >= 0.0
            && self.inner_height().is_finite()
            && self.inner_height() > 0.0;
        if valid {
            Ok(())
        } else {
            Err(PlotError::InvalidFrame {
                width: self.size.x,
                height: self.size.y,
                padding: self.padding,
            })
        }
    }

    pub fn inner_width(&self) -> f32 {
        self.size.x - 2.0 * self.padding
    }

    pub fn inner_height(&self) -> f32 {
        self.size.y - 2.0 * self.padding
    }

    /// Whole plot area
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size)
    }

    /// Horizontal position of axis `axis` out of `width` axes
    pub fn axis_x(&self, axis: usize, width: usize) -> f32 {
        if width <= 1 {
            self.padding + self.inner_width() * 0.5
        } else {
            self.padding + axis as f32 * self.inner_width() / (width - 1) as f32
        }
    }

    /// Bottom end of every axis
    pub fn bottom(&self, axis: usize, width: usize) -> Pos2 {
        pos2(self.axis_x(axis, width), self.padding)
    }

    /// Top end of every axis
    pub fn top(&self, axis: usize, width: usize) -> Pos2 {
        pos2(self.axis_x(axis, width), self.padding + self.inner_height())
    }

    /// Crossing position of a value on an axis
    pub fn crossing(&self, axis: usize, width: usize, value: f64, bounds: AxisBounds, inverted: bool) -> Pos2 {
        let offset = map_value(value, bounds, self.inner_height(), inverted);
        pos2(self.axis_x(axis, width), self.padding + offset)
    }
}

/// Offset of `value` above the bottom anchor of an axis.
///
/// `bounds.min` lands on the bottom anchor and `bounds.max` on the top one;
/// `inverted` swaps the two ends.
///
/// # Panics
///
/// Panics on a degenerate range (`min == max`).
pub fn map_value(value: f64, bounds: AxisBounds, inner_height: f32, inverted: bool) -> f32 {
    assert!(
        bounds.max != bounds.min,
        "degenerate axis range {}..{}",
        bounds.min,
        bounds.max
    );
    let t = (value - bounds.min) / (bounds.max - bounds.min);
    let t = if inverted { 1.0 - t } else { t };
    t as f32 * inner_height
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: AxisBounds = AxisBounds { min: -3.0, max: 7.0 };

    #[test]
    fn test_anchors_are_exact() {
        assert_eq!(map_value(-3.0, BOUNDS, 320.0, false), 0.0);
        assert_eq!(map_value(7.0, BOUNDS, 320.0, false), 320.0);
        assert_eq!(map_value(-3.0, BOUNDS, 320.0, true), 320.0);
        assert_eq!(map_value(7.0, BOUNDS, 320.0, true), 0.0);
    }

    #[test]
    fn test_monotonic_and_reversed_by_inversion() {
        let values = [-3.0, -1.5, 0.0, 0.1, 2.0, 6.9, 7.0];
        for pair in values.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            assert!(map_value(lo, BOUNDS, 100.0, false) < map_value(hi, BOUNDS, 100.0, false));
            assert!(map_value(lo, BOUNDS, 100.0, true) > map_value(hi, BOUNDS, 100.0, true));
        }
    }

    #[test]
    #[should_panic(expected = "degenerate axis range")]
    fn test_degenerate_range() {
        map_value(1.0, AxisBounds::new(2.0, 2.0), 100.0, false);
    }

    #[test]
    fn test_frame_geometry() {
        let frame = PlotFrame::new(120.0, 100.0, 10.0);
        assert_eq!(frame.axis_x(0, 3), 10.0);
        assert_eq!(frame.axis_x(1, 3), 60.0);
        assert_eq!(frame.axis_x(2, 3), 110.0);
        assert_eq!(frame.axis_x(0, 1), 60.0);
        assert_eq!(frame.bottom(2, 3), pos2(110.0, 10.0));
        assert_eq!(frame.top(0, 3), pos2(10.0, 90.0));
        assert_eq!(frame.crossing(1, 3, 7.0, BOUNDS, false), pos2(60.0, 90.0));
        assert_eq!(frame.crossing(1, 3, 7.0, BOUNDS, true), pos2(60.0, 10.0));
    }

    #[test]
    fn test_invalid_frames() {
        assert!(PlotFrame::new(100.0, 100.0, 10.0).validate().is_ok());
        assert!(PlotFrame::new(100.0, 20.0, 10.0).validate().is_err());
        assert!(PlotFrame::new(10.0, 100.0, 10.0).validate().is_err());
        assert!(PlotFrame::new(f32::NAN, 100.0, 10.0).validate().is_err());
    }
}
