//! Parallel coordinates plot
//!
//! Every record is drawn as a polyline through one crossing per axis.
//! Polylines are split into segment groups of up to three axes so that a
//! missing value only breaks the groups around it.

mod config;
mod flip;
mod layout;
mod render_sync;
mod segment_policy;
mod selection;
mod subset;
mod value_mapper;

pub use config::PlotConfig;
pub use flip::FlipPatch;
pub use layout::{AxisState, PlotLayout, Segment, SegmentVertex};
pub use render_sync::{RecordStyle, RenderSync};
pub use segment_policy::{decide, SpanOffsets};
pub use selection::{Crossing, GestureState, SelectionContext, SelectionEngine};
pub use subset::VisibleSubset;
pub use value_mapper::{map_value, PlotFrame};

use std::sync::Arc;

use egui::{Pos2, Rect, Vec2};
use pc_core::{DataTable, LinkedSelection};
use pc_render::Renderer;
use tracing::{debug, info};

use crate::plots::utils::AxisScale;
use crate::PlotError;

/// Parallel coordinates view over a shared table.
///
/// The plot owns its layout cache and renderer. Highlight and mask flags
/// live in a [`LinkedSelection`] shared with other views.
pub struct ParallelCoordinatesPlot<R: Renderer> {
    table: Arc<dyn DataTable>,
    subset: VisibleSubset,
    linked: LinkedSelection,
    scale: Box<dyn AxisScale>,
    renderer: R,
    frame: PlotFrame,
    config: PlotConfig,
    layout: PlotLayout,
    selection: SelectionEngine,
    selection_enabled: bool,
    rendered_revision: u64,
}

impl<R: Renderer> ParallelCoordinatesPlot<R> {
    /// Build the plot and run an initial layout
    pub fn new(
        table: Arc<dyn DataTable>,
        subset: VisibleSubset,
        linked: LinkedSelection,
        scale: Box<dyn AxisScale>,
        renderer: R,
        frame: PlotFrame,
        config: PlotConfig,
    ) -> Result<Self, PlotError> {
        frame.validate()?;

        let rows = table.row_count();
        if linked.len() < rows {
            return Err(PlotError::LinkedStateTooSmall {
                linked: linked.len(),
                rows,
            });
        }
        if let Some(&record) = subset.records().iter().find(|&&r| r >= rows) {
            return Err(PlotError::RecordOutOfRange { record, rows });
        }

        info!(
            "Creating parallel coordinates plot: {} axes, {} of {} records",
            table.width(),
            subset.len(),
            rows
        );

        let mut plot = Self {
            table,
            subset,
            linked,
            scale,
            renderer,
            frame,
            config,
            layout: PlotLayout::default(),
            selection: SelectionEngine::new(),
            selection_enabled: true,
            rendered_revision: 0,
        };
        plot.relayout();
        Ok(plot)
    }

    /// Recompute bounds, crossings and segments, then re-render everything
    pub fn relayout(&mut self) {
        self.layout.rebuild(
            self.table.as_ref(),
            &self.subset,
            self.scale.as_ref(),
            &self.frame,
            &self.config,
        );
        self.render(|sync, renderer| sync.push_all(renderer));
        self.rendered_revision = self.linked.revision();
    }

    /// Invert one axis, returning its new inversion flag.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is out of range.
    pub fn flip_axis(&mut self, axis: usize) -> bool {
        let patch = self
            .layout
            .flip_axis(axis, self.table.as_ref(), &self.subset, &self.frame);
        self.render(|sync, renderer| sync.push_flip(&patch, renderer));
        patch.inverted
    }

    /// Point selection at `pointer`. Returns the local indices restyled.
    pub fn on_pointer_gesture(&mut self, pointer: Pos2, state: GestureState) -> Vec<usize> {
        let radius = self.config.click_radius;
        self.select(|engine, ctx| engine.click(ctx, pointer, radius, state))
    }

    /// Rectangle selection. Corners may be given in any order. Returns the
    /// local indices restyled.
    pub fn on_rect_gesture(&mut self, rect: Rect) -> Vec<usize> {
        let rect = Rect::from_two_pos(rect.min, rect.max);
        self.select(|engine, ctx| engine.rect(ctx, rect))
    }

    /// Brush selection from `previous` moving by `delta`. Returns the
    /// local indices restyled.
    pub fn on_brush_gesture(&mut self, previous: Pos2, delta: Vec2, state: GestureState) -> Vec<usize> {
        let radius = self.config.brush_radius;
        self.select(|engine, ctx| engine.brush(ctx, previous, delta, radius, state))
    }

    /// Re-render one record after its flags changed elsewhere.
    ///
    /// # Panics
    ///
    /// Panics if `record` is not tracked by the linked selection.
    pub fn update_record(&mut self, record: usize) {
        assert!(
            record < self.linked.len(),
            "record {} out of range ({} records)",
            record,
            self.linked.len()
        );
        match self.subset.local(record) {
            Some(local) => self.render(|sync, renderer| sync.push_record(local, renderer)),
            None => debug!("Record {} is not shown by this plot, nothing to update", record),
        }
    }

    pub fn set_selection_enabled(&mut self, enabled: bool) {
        self.selection_enabled = enabled;
    }

    pub fn selection_enabled(&self) -> bool {
        self.selection_enabled
    }

    /// Resize the plot area and lay out again
    pub fn set_frame(&mut self, frame: PlotFrame) -> Result<(), PlotError> {
        frame.validate()?;
        if frame != self.frame {
            self.frame = frame;
            self.relayout();
        }
        Ok(())
    }

    /// Replace the configuration and lay out again
    pub fn set_config(&mut self, config: PlotConfig) {
        self.config = config;
        self.relayout();
    }

    /// Whether the linked selection changed since this plot last rendered it
    pub fn is_stale(&self) -> bool {
        self.linked.revision() != self.rendered_revision
    }

    /// Restyle every record from the linked selection
    pub fn sync_linked_state(&mut self) {
        self.render(|sync, renderer| sync.push_all(renderer));
        self.rendered_revision = self.linked.revision();
    }

    pub fn layout(&self) -> &PlotLayout {
        &self.layout
    }

    pub fn axes(&self) -> &[AxisState] {
        self.layout.axes()
    }

    pub fn subset(&self) -> &VisibleSubset {
        &self.subset
    }

    pub fn linked(&self) -> &LinkedSelection {
        &self.linked
    }

    pub fn frame(&self) -> &PlotFrame {
        &self.frame
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Crossing tracked by the current point gesture
    pub fn clicked(&self) -> Option<Crossing> {
        self.selection.clicked()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn render(&mut self, push: impl FnOnce(&RenderSync<'_>, &mut dyn Renderer)) {
        let sync = RenderSync {
            layout: &self.layout,
            subset: &self.subset,
            linked: &self.linked,
            frame: &self.frame,
            config: &self.config,
        };
        push(&sync, &mut self.renderer);
    }

    /// Run one selection pass and patch the records it restyled.
    ///
    /// The rendered revision only advances when no other view wrote since
    /// the last full sync, so foreign changes are still picked up.
    fn select(&mut self, pass: impl FnOnce(&mut SelectionEngine, &SelectionContext<'_>) -> Vec<usize>) -> Vec<usize> {
        if !self.selection_enabled {
            return Vec::new();
        }

        let stale = self.is_stale();
        let ctx = SelectionContext {
            layout: &self.layout,
            subset: &self.subset,
            linked: &self.linked,
        };
        let changed = pass(&mut self.selection, &ctx);

        self.render(|sync, renderer| {
            for &local in &changed {
                sync.push_record(local, renderer);
            }
        });
        if !stale {
            self.rendered_revision = self.linked.revision();
        }
        changed
    }
}
