//! Pushes cached geometry and record styling to a renderer

use egui::Color32;
use pc_core::{LinkedSelection, RecordFlags};
use pc_render::{PointSprite, Polyline, Renderer};

use super::config::PlotConfig;
use super::flip::FlipPatch;
use super::layout::PlotLayout;
use super::subset::VisibleSubset;
use super::value_mapper::PlotFrame;
use crate::plots::utils::ColorSet;

/// How a record is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStyle {
    Default,
    Highlighted,
    Masked,
}

impl RecordStyle {
    /// Masked wins over highlighted
    pub fn of(flags: RecordFlags) -> Self {
        if flags.masked {
            RecordStyle::Masked
        } else if flags.highlighted {
            RecordStyle::Highlighted
        } else {
            RecordStyle::Default
        }
    }

    pub fn color(self, colors: &ColorSet) -> Color32 {
        match self {
            RecordStyle::Default => colors.default,
            RecordStyle::Highlighted => colors.highlighted,
            RecordStyle::Masked => colors.masked,
        }
    }
}

/// Read-only view over everything the renderer needs
pub struct RenderSync<'a> {
    pub layout: &'a PlotLayout,
    pub subset: &'a VisibleSubset,
    pub linked: &'a LinkedSelection,
    pub frame: &'a PlotFrame,
    pub config: &'a PlotConfig,
}

impl RenderSync<'_> {
    fn style(&self, local: usize) -> RecordStyle {
        RecordStyle::of(self.linked.flags(self.subset.global(local)))
    }

    fn point(&self, axis: usize, local: usize, style: RecordStyle) -> PointSprite {
        PointSprite {
            position: self.layout.position(axis, local),
            size: self.layout.point_size(axis, local),
            color: style.color(&self.config.point_colors),
            depth: if style == RecordStyle::Highlighted { self.config.highlight_depth } else { 0.0 },
        }
    }

    fn polyline(&self, group: usize, local: usize, style: RecordStyle) -> Polyline {
        let segment = self.layout.segment(group, local);
        Polyline {
            points: segment.positions(),
            width: segment.width,
            color: style.color(&self.config.line_colors),
            draw_order: if style == RecordStyle::Highlighted { self.config.highlight_draw_order } else { 0 },
        }
    }

    fn point_batch(&self, axis: usize) -> Vec<PointSprite> {
        (0..self.layout.record_count())
            .map(|local| self.point(axis, local, self.style(local)))
            .collect()
    }

    fn polyline_batch(&self, group: usize) -> Vec<Polyline> {
        (0..self.layout.record_count())
            .map(|local| self.polyline(group, local, self.style(local)))
            .collect()
    }

    /// Submit every axis, point batch and polyline batch
    pub fn push_all(&self, renderer: &mut dyn Renderer) {
        for axis in 0..self.layout.width() {
            renderer.submit_axis(axis, self.layout.axis_geometry(axis, self.frame));
            renderer.submit_points(axis, self.point_batch(axis));
        }
        for group in 0..self.layout.group_count() {
            renderer.submit_polylines(group, self.polyline_batch(group));
        }
        renderer.truncate(self.layout.width(), self.layout.group_count());
    }

    /// Submit what a flip changed: the axis, its points and touched groups
    pub fn push_flip(&self, patch: &FlipPatch, renderer: &mut dyn Renderer) {
        renderer.submit_axis(patch.axis, self.layout.axis_geometry(patch.axis, self.frame));
        renderer.submit_points(patch.axis, self.point_batch(patch.axis));
        for &group in &patch.groups {
            renderer.submit_polylines(group, self.polyline_batch(group));
        }
    }

    /// Patch one record's points and polylines
    pub fn push_record(&self, local: usize, renderer: &mut dyn Renderer) {
        let style = self.style(local);
        for axis in 0..self.layout.width() {
            renderer.update_point(axis, local, self.point(axis, local, style));
        }
        for group in 0..self.layout.group_count() {
            renderer.update_polyline(group, local, self.polyline(group, local, style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pc_render::SceneBuffer;

    use super::super::testing::{table, NAN};
    use crate::plots::utils::ExactScale;

    struct Fixture {
        layout: PlotLayout,
        subset: VisibleSubset,
        linked: LinkedSelection,
        frame: PlotFrame,
        config: PlotConfig,
    }

    impl Fixture {
        fn new() -> Self {
            let table = table(&[&[1.0, 2.0, 3.0], &[3.0, NAN, 1.0], &[2.0, 2.0, 2.5]]);
            let subset = VisibleSubset::new(vec![2, 0, 1], 3).unwrap();
            let frame = PlotFrame::new(120.0, 120.0, 10.0);
            let config = PlotConfig::default();
            let mut layout = PlotLayout::default();
            layout.rebuild(&table, &subset, &ExactScale, &frame, &config);
            Self {
                layout,
                subset,
                linked: LinkedSelection::new(3),
                frame,
                config,
            }
        }

        fn sync(&self) -> RenderSync<'_> {
            RenderSync {
                layout: &self.layout,
                subset: &self.subset,
                linked: &self.linked,
                frame: &self.frame,
                config: &self.config,
            }
        }
    }

    #[test]
    fn test_style_precedence() {
        let flags = |masked, highlighted| RecordFlags { masked, highlighted };
        assert_eq!(RecordStyle::of(flags(false, false)), RecordStyle::Default);
        assert_eq!(RecordStyle::of(flags(false, true)), RecordStyle::Highlighted);
        assert_eq!(RecordStyle::of(flags(true, false)), RecordStyle::Masked);
        assert_eq!(RecordStyle::of(flags(true, true)), RecordStyle::Masked);
    }

    #[test]
    fn test_push_all() {
        let fixture = Fixture::new();
        let mut scene = SceneBuffer::new();
        fixture.sync().push_all(&mut scene);

        assert_eq!(scene.axis_count(), 3);
        assert_eq!(scene.group_count(), 1);
        assert_eq!(scene.axis(1).map(|a| a.name.as_str()), Some("c1"));

        // Local 2 is global record 1, missing on axis 1
        let points = scene.points(1);
        assert_eq!(points.len(), 3);
        assert_eq!(points[2].size, 0.0);
        assert_eq!(points[0].position, fixture.layout.position(1, 0));

        let lines = scene.polylines(0);
        assert_eq!(lines[0].points.len(), 3);
        assert!(!lines[2].is_visible());
        assert_eq!(lines[0].color, fixture.config.line_colors.default);
    }

    #[test]
    fn test_push_record_restyles_one_record() {
        let fixture = Fixture::new();
        let mut scene = SceneBuffer::new();
        fixture.sync().push_all(&mut scene);

        fixture.linked.set_highlighted(0, true);
        fixture.linked.set_highlighted(2, true);
        fixture.linked.set_masked(2, true);

        // Global 0 is local 1
        fixture.sync().push_record(1, &mut scene);

        let config = &fixture.config;
        let point = scene.points(0)[1];
        assert_eq!(point.color, config.point_colors.highlighted);
        assert_eq!(point.depth, config.highlight_depth);
        let line = &scene.polylines(0)[1];
        assert_eq!(line.color, config.line_colors.highlighted);
        assert_eq!(line.draw_order, config.highlight_draw_order);

        // Global 2 has not been pushed yet
        assert_eq!(scene.points(0)[0].color, config.point_colors.default);

        fixture.sync().push_record(0, &mut scene);
        assert_eq!(scene.points(0)[0].color, config.point_colors.masked);
        assert_eq!(scene.points(0)[0].depth, 0.0);
        assert_eq!(scene.polylines(0)[0].draw_order, 0);
    }

    #[test]
    fn test_push_flip_updates_axis() {
        let mut fixture = Fixture::new();
        let mut scene = SceneBuffer::new();
        fixture.sync().push_all(&mut scene);

        let table = table(&[&[1.0, 2.0, 3.0], &[3.0, NAN, 1.0], &[2.0, 2.0, 2.5]]);
        let patch = fixture.layout.flip_axis(2, &table, &fixture.subset, &fixture.frame);
        fixture.sync().push_flip(&patch, &mut scene);

        assert!(scene.axis(2).map(|a| a.inverted).unwrap_or(false));
        assert_eq!(scene.points(2)[0].position, fixture.layout.position(2, 0));
        assert_eq!(scene.polylines(0)[0].points[2], fixture.layout.position(2, 0));
    }
}
