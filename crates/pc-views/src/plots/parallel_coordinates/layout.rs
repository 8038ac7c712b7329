//! Full layout of axes, crossings and segment groups

use egui::Pos2;
use pc_core::{is_missing, DataTable};
use pc_render::AxisGeometry;
use tracing::info;

use super::config::PlotConfig;
use super::segment_policy::{self, closing_window};
use super::subset::VisibleSubset;
use super::value_mapper::PlotFrame;
use crate::plots::utils::{AxisBounds, AxisScale};

/// Axis information
#[derive(Clone, Debug, PartialEq)]
pub struct AxisState {
    pub name: String,
    pub inverted: bool,
    pub bounds: AxisBounds,
}

/// One vertex of a segment, tagged with the axis it lies on
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentVertex {
    pub axis: usize,
    pub position: Pos2,
}

/// One record's polyline stretch within a segment group
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Segment {
    pub vertices: Vec<SegmentVertex>,
    pub width: f32,
}

impl Segment {
    /// Number of drawn vertices, 0 when the group is not connectable
    pub fn point_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn positions(&self) -> Vec<Pos2> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    pub fn axes(&self) -> Vec<usize> {
        self.vertices.iter().map(|v| v.axis).collect()
    }
}

/// Position cache shared by flipping, selection and rendering.
///
/// Matrices are indexed `[axis][record]` and segments `[group][record]`,
/// with plot-local record indices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotLayout {
    pub(crate) axes: Vec<AxisState>,
    pub(crate) positions: Vec<Vec<Pos2>>,
    pub(crate) missing: Vec<Vec<bool>>,
    pub(crate) point_sizes: Vec<Vec<f32>>,
    pub(crate) segments: Vec<Vec<Segment>>,
}

impl PlotLayout {
    /// Recompute everything from the table.
    ///
    /// Inversion flags of existing axes are kept.
    pub fn rebuild(
        &mut self,
        table: &dyn DataTable,
        subset: &VisibleSubset,
        scale: &dyn AxisScale,
        frame: &PlotFrame,
        config: &PlotConfig,
    ) {
        let width = table.width();
        let count = subset.len();
        let point_size = config.point_size * frame.size.y;

        let inverted: Vec<bool> = (0..width)
            .map(|j| self.axes.get(j).map(|a| a.inverted).unwrap_or(false))
            .collect();

        self.axes.clear();
        self.positions = vec![vec![Pos2::ZERO; count]; width];
        self.missing = vec![vec![false; count]; width];
        self.point_sizes = vec![vec![0.0; count]; width];
        self.segments = vec![vec![Segment::default(); count]; segment_policy::group_count(width)];

        for j in 0..width {
            let (min, max) = raw_extent(table, subset, j, config.scale_to_zero).unwrap_or((0.0, 1.0));
            let bounds = scale.nice_bounds(min, max);
            self.axes.push(AxisState {
                name: table.column_name(j).to_string(),
                inverted: inverted[j],
                bounds,
            });

            for (i, &record) in subset.records().iter().enumerate() {
                let value = table.value(record, j);
                if is_missing(value) {
                    self.missing[j][i] = true;
                    continue;
                }
                self.positions[j][i] = frame.crossing(j, width, value, bounds, inverted[j]);
                self.point_sizes[j][i] = point_size;
            }

            if let Some(window) = closing_window(j, width) {
                for i in 0..count {
                    self.segments[window.group][i] = self.connect(window.first_axis, window.len, i, config.line_width);
                }
            }
        }

        info!("Laid out {} axes x {} records in {} segment groups", width, count, self.segments.len());
    }

    /// Build one record's segment for the window starting at `first_axis`
    fn connect(&self, first_axis: usize, len: usize, record: usize, line_width: f32) -> Segment {
        let last_axis = first_axis + len - 1;
        let validity: Vec<bool> = (first_axis..=last_axis)
            .map(|axis| !self.missing[axis][record])
            .collect();

        let vertices = segment_policy::decide(&validity)
            .map(|offsets| {
                offsets
                    .iter()
                    .map(|&offset| {
                        let axis = (last_axis as isize + offset) as usize;
                        SegmentVertex {
                            axis,
                            position: self.positions[axis][record],
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Segment {
            vertices,
            width: line_width,
        }
    }

    /// Number of axes
    pub fn width(&self) -> usize {
        self.axes.len()
    }

    /// Number of records laid out
    pub fn record_count(&self) -> usize {
        self.positions.first().map(Vec::len).unwrap_or(0)
    }

    pub fn group_count(&self) -> usize {
        self.segments.len()
    }

    pub fn axes(&self) -> &[AxisState] {
        &self.axes
    }

    pub fn axis(&self, axis: usize) -> &AxisState {
        &self.axes[axis]
    }

    pub fn position(&self, axis: usize, record: usize) -> Pos2 {
        self.positions[axis][record]
    }

    pub fn is_missing(&self, axis: usize, record: usize) -> bool {
        self.missing[axis][record]
    }

    pub fn point_size(&self, axis: usize, record: usize) -> f32 {
        self.point_sizes[axis][record]
    }

    pub fn segment(&self, group: usize, record: usize) -> &Segment {
        &self.segments[group][record]
    }

    /// Non-missing crossings of one record, in axis order
    pub fn crossings(&self, record: usize) -> impl Iterator<Item = (usize, Pos2)> + '_ {
        (0..self.width())
            .filter(move |&axis| !self.missing[axis][record])
            .map(move |axis| (axis, self.positions[axis][record]))
    }

    /// Axis line and label geometry for the renderer
    pub fn axis_geometry(&self, axis: usize, frame: &PlotFrame) -> AxisGeometry {
        let state = &self.axes[axis];
        let width = self.width();
        let (bottom, top) = (frame.bottom(axis, width), frame.top(axis, width));
        let (min_anchor, max_anchor) = if state.inverted { (top, bottom) } else { (bottom, top) };

        AxisGeometry {
            name: state.name.clone(),
            min_anchor,
            max_anchor,
            min_value: state.bounds.min,
            max_value: state.bounds.max,
            inverted: state.inverted,
        }
    }
}

/// Raw (min, max) of one column over the subset, `None` when every value
/// is missing and scale-to-zero is off
fn raw_extent(table: &dyn DataTable, subset: &VisibleSubset, column: usize, scale_to_zero: bool) -> Option<(f64, f64)> {
    let extent = subset
        .records()
        .iter()
        .map(|&record| table.value(record, column))
        .filter(|v| !is_missing(*v))
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((min, max)) => Some((min.min(v), max.max(v))),
            None => Some((v, v)),
        });

    if scale_to_zero {
        let (min, max) = extent.unwrap_or((0.0, 0.0));
        Some((min.min(0.0), max.max(0.0)))
    } else {
        extent
    }
}
