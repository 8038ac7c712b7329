//! Rendering abstraction layer
//!
//! Plots hand batched geometry to a [`Renderer`]. Positions are in plot
//! space with the y axis pointing up; mapping to the screen is the
//! backend's concern.

mod scene;

pub use scene::SceneBuffer;

use egui::{Color32, Pos2};

/// One axis-crossing marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSprite {
    pub position: Pos2,
    /// Diameter in plot units, 0 hides the point
    pub size: f32,
    pub color: Color32,
    /// Larger values are drawn closer to the viewer
    pub depth: f32,
}

/// One record's stretch of polyline within a segment group
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Ordered vertices, empty when nothing is drawn
    pub points: Vec<Pos2>,
    pub width: f32,
    pub color: Color32,
    /// Lines with a higher order are drawn on top
    pub draw_order: i32,
}

impl Polyline {
    pub fn is_visible(&self) -> bool {
        self.points.len() >= 2
    }
}

/// Geometry of one axis line and its labels
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGeometry {
    pub name: String,
    /// End of the axis where the minimum value sits
    pub min_anchor: Pos2,
    /// End of the axis where the maximum value sits
    pub max_anchor: Pos2,
    pub min_value: f64,
    pub max_value: f64,
    pub inverted: bool,
}

/// Backend receiving plot geometry.
///
/// Batches are indexed by axis (points) or segment group (polylines) and
/// then by the plot-local record index.
pub trait Renderer {
    /// Replace the geometry of one axis
    fn submit_axis(&mut self, axis: usize, geometry: AxisGeometry);

    /// Replace the point batch of one axis
    fn submit_points(&mut self, axis: usize, points: Vec<PointSprite>);

    /// Replace the polyline batch of one segment group
    fn submit_polylines(&mut self, group: usize, lines: Vec<Polyline>);

    /// Patch a single record's point on one axis
    fn update_point(&mut self, axis: usize, record: usize, point: PointSprite);

    /// Patch a single record's polyline in one segment group
    fn update_polyline(&mut self, group: usize, record: usize, line: Polyline);

    /// Drop batches beyond the given counts after a layout change
    fn truncate(&mut self, axes: usize, groups: usize);
}
