//! Single-axis inversion without a full layout pass

use pc_core::DataTable;
use tracing::debug;

use super::layout::PlotLayout;
use super::segment_policy::groups_touching;
use super::subset::VisibleSubset;
use super::value_mapper::PlotFrame;

/// What a flip changed, for render synchronisation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipPatch {
    pub axis: usize,
    pub inverted: bool,
    /// Segment groups whose polylines were patched
    pub groups: Vec<usize>,
}

impl PlotLayout {
    /// Toggle the inversion of `axis` and reposition its crossings.
    ///
    /// Bounds are kept as they are. Only vertices lying on `axis` are
    /// patched in the one or two segment groups containing it.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is out of range.
    pub fn flip_axis(&mut self, axis: usize, table: &dyn DataTable, subset: &VisibleSubset, frame: &PlotFrame) -> FlipPatch {
        let width = self.width();
        assert!(axis < width, "axis {} out of range ({} axes)", axis, width);

        let state = &mut self.axes[axis];
        state.inverted = !state.inverted;
        let (bounds, inverted) = (state.bounds, state.inverted);

        for (i, &record) in subset.records().iter().enumerate() {
            if self.missing[axis][i] {
                continue;
            }
            let value = table.value(record, axis);
            self.positions[axis][i] = frame.crossing(axis, width, value, bounds, inverted);
        }

        let groups: Vec<usize> = groups_touching(axis, width).collect();
        for &group in &groups {
            for (i, segment) in self.segments[group].iter_mut().enumerate() {
                for vertex in segment.vertices.iter_mut().filter(|v| v.axis == axis) {
                    vertex.position = self.positions[axis][i];
                }
            }
        }

        debug!("Flipped axis {} (inverted: {}), patched groups {:?}", axis, inverted, groups);
        FlipPatch {
            axis,
            inverted,
            groups,
        }
    }
}
