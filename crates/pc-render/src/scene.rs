//! Retained scene buffers painted with egui

use egui::emath::RectTransform;
use egui::{Align2, Color32, FontId, Painter, Shape, Stroke};
use tracing::warn;

use crate::{AxisGeometry, PointSprite, Polyline, Renderer};

const AXIS_COLOR: Color32 = Color32::from_gray(200);
const LABEL_COLOR: Color32 = Color32::from_gray(150);

/// Renderer that keeps the last submitted batches, the way GPU buffers
/// would, and paints them on demand.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SceneBuffer {
    axes: Vec<Option<AxisGeometry>>,
    points: Vec<Vec<PointSprite>>,
    lines: Vec<Vec<Polyline>>,
}

impl SceneBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn axis(&self, axis: usize) -> Option<&AxisGeometry> {
        self.axes.get(axis).and_then(|a| a.as_ref())
    }

    /// Point batch of one axis
    pub fn points(&self, axis: usize) -> &[PointSprite] {
        self.points.get(axis).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Polyline batch of one segment group
    pub fn polylines(&self, group: usize) -> &[Polyline] {
        self.lines.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    pub fn group_count(&self) -> usize {
        self.lines.len()
    }

    /// Visible polylines in paint order, lowest draw order first
    pub fn ordered_polylines(&self) -> Vec<&Polyline> {
        let mut lines: Vec<&Polyline> = self
            .lines
            .iter()
            .flatten()
            .filter(|l| l.is_visible())
            .collect();
        lines.sort_by_key(|l| l.draw_order);
        lines
    }

    /// Visible points in paint order, farthest first
    pub fn ordered_points(&self) -> Vec<&PointSprite> {
        let mut points: Vec<&PointSprite> = self
            .points
            .iter()
            .flatten()
            .filter(|p| p.size > 0.0)
            .collect();
        points.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        points
    }

    /// Paint everything. `to_screen` maps plot space to screen space;
    /// point sizes scale with it, line widths are in screen pixels.
    pub fn paint(&self, painter: &Painter, to_screen: RectTransform) {
        let scale = to_screen.scale().x.abs();

        for axis in self.axes.iter().flatten() {
            let min = to_screen.transform_pos(axis.min_anchor);
            let max = to_screen.transform_pos(axis.max_anchor);
            painter.line_segment([min, max], Stroke::new(1.0, AXIS_COLOR));

            let (top, bottom) = if min.y < max.y { (min, max) } else { (max, min) };
            let (top_value, bottom_value) = if axis.inverted {
                (axis.min_value, axis.max_value)
            } else {
                (axis.max_value, axis.min_value)
            };
            painter.text(top - egui::vec2(0.0, 18.0), Align2::CENTER_BOTTOM, &axis.name, FontId::proportional(12.0), AXIS_COLOR);
            painter.text(top - egui::vec2(0.0, 4.0), Align2::CENTER_BOTTOM, format_value(top_value), FontId::proportional(9.0), LABEL_COLOR);
            painter.text(bottom + egui::vec2(0.0, 4.0), Align2::CENTER_TOP, format_value(bottom_value), FontId::proportional(9.0), LABEL_COLOR);
        }

        for line in self.ordered_polylines() {
            let points = line.points.iter().map(|p| to_screen.transform_pos(*p)).collect();
            painter.add(Shape::line(points, Stroke::new(line.width, line.color)));
        }

        for point in self.ordered_points() {
            painter.circle_filled(to_screen.transform_pos(point.position), point.size * scale * 0.5, point.color);
        }
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e9 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn slot<T: Default>(items: &mut Vec<T>, index: usize) -> &mut T {
    if items.len() <= index {
        items.resize_with(index + 1, T::default);
    }
    &mut items[index]
}

impl Renderer for SceneBuffer {
    fn submit_axis(&mut self, axis: usize, geometry: AxisGeometry) {
        *slot(&mut self.axes, axis) = Some(geometry);
    }

    fn submit_points(&mut self, axis: usize, points: Vec<PointSprite>) {
        *slot(&mut self.points, axis) = points;
    }

    fn submit_polylines(&mut self, group: usize, lines: Vec<Polyline>) {
        *slot(&mut self.lines, group) = lines;
    }

    fn update_point(&mut self, axis: usize, record: usize, point: PointSprite) {
        match self.points.get_mut(axis).and_then(|batch| batch.get_mut(record)) {
            Some(slot) => *slot = point,
            None => warn!("Point update for unsubmitted axis {} record {}", axis, record),
        }
    }

    fn update_polyline(&mut self, group: usize, record: usize, line: Polyline) {
        match self.lines.get_mut(group).and_then(|batch| batch.get_mut(record)) {
            Some(slot) => *slot = line,
            None => warn!("Polyline update for unsubmitted group {} record {}", group, record),
        }
    }

    fn truncate(&mut self, axes: usize, groups: usize) {
        self.axes.truncate(axes);
        self.points.truncate(axes);
        self.lines.truncate(groups);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn sprite(depth: f32, size: f32) -> PointSprite {
        PointSprite {
            position: pos2(0.0, 0.0),
            size,
            color: Color32::WHITE,
            depth,
        }
    }

    fn line(order: i32, points: usize) -> Polyline {
        Polyline {
            points: vec![pos2(0.0, 0.0); points],
            width: 1.0,
            color: Color32::WHITE,
            draw_order: order,
        }
    }

    #[test]
    fn test_batches_replace_and_patch() {
        let mut scene = SceneBuffer::new();
        scene.submit_points(1, vec![sprite(0.0, 1.0), sprite(0.0, 1.0)]);
        assert_eq!(scene.axis_count(), 0);
        assert_eq!(scene.points(0).len(), 0);
        assert_eq!(scene.points(1).len(), 2);

        scene.update_point(1, 1, sprite(2.0, 3.0));
        assert_eq!(scene.points(1)[1].size, 3.0);

        // Unsubmitted targets are ignored
        scene.update_point(4, 0, sprite(0.0, 1.0));
        scene.update_polyline(0, 0, line(0, 2));
        assert_eq!(scene.polylines(0).len(), 0);
    }

    #[test]
    fn test_paint_order() {
        let mut scene = SceneBuffer::new();
        scene.submit_polylines(0, vec![line(1, 2), line(0, 3), line(5, 0)]);
        scene.submit_points(0, vec![sprite(1.0, 1.0), sprite(0.0, 1.0), sprite(3.0, 0.0)]);

        let lines = scene.ordered_polylines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].draw_order, 0);
        assert_eq!(lines[1].draw_order, 1);

        let points = scene.ordered_points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].depth, 0.0);
        assert_eq!(points[1].depth, 1.0);
    }

    #[test]
    fn test_truncate() {
        let mut scene = SceneBuffer::new();
        scene.submit_polylines(2, vec![line(0, 2)]);
        scene.submit_points(3, vec![sprite(0.0, 1.0)]);
        scene.truncate(2, 1);
        assert_eq!(scene.group_count(), 1);
        assert!(scene.points(3).is_empty());
    }
}
