//! Geometric selection over the cached crossing positions

use egui::{Pos2, Rect, Vec2};
use pc_core::LinkedSelection;
use tracing::debug;

use super::layout::PlotLayout;
use super::subset::VisibleSubset;

/// Phase of a pointer, rectangle or brush gesture.
///
/// Any phase may follow any other; `Start` always resets gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Start,
    Update,
    End,
}

/// A record's crossing on one axis, both plot-local
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossing {
    pub record: usize,
    pub axis: usize,
}

/// Inputs every selection pass reads and writes
pub struct SelectionContext<'a> {
    pub layout: &'a PlotLayout,
    pub subset: &'a VisibleSubset,
    pub linked: &'a LinkedSelection,
}

impl SelectionContext<'_> {
    /// Walk every record of the linked store. `decide` returns whether a
    /// visible record is hit, or `None` to leave it untouched. Records
    /// outside the subset are unhighlighted and masked ones never
    /// highlighted. Returns the local indices whose flag changed.
    fn apply(&self, mut decide: impl FnMut(usize) -> Option<bool>) -> Vec<usize> {
        let mut changed = Vec::new();
        for global in 0..self.linked.len() {
            match self.subset.local(global) {
                None => {
                    self.linked.set_highlighted(global, false);
                }
                Some(local) => {
                    if let Some(hit) = decide(local) {
                        if self.set(local, hit) {
                            changed.push(local);
                        }
                    }
                }
            }
        }
        changed
    }

    fn set(&self, local: usize, hit: bool) -> bool {
        let global = self.subset.global(local);
        let highlighted = hit && !self.linked.is_masked(global);
        self.linked.set_highlighted(global, highlighted)
    }
}

/// Selection state machine for the three gesture kinds
#[derive(Debug, Default)]
pub struct SelectionEngine {
    clicked: Option<Crossing>,
}

impl SelectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crossing tracked by the current click gesture
    pub fn clicked(&self) -> Option<Crossing> {
        self.clicked
    }

    /// Point selection.
    ///
    /// `Start` picks the single nearest crossing within `radius` over the
    /// whole plot; the first one found wins ties. Later phases only
    /// re-check that crossing and drop it once the pointer leaves.
    pub fn click(&mut self, ctx: &SelectionContext<'_>, pointer: Pos2, radius: f32, state: GestureState) -> Vec<usize> {
        let radius_sq = radius * radius;

        if state == GestureState::Start {
            self.clicked = None;
            let mut best = f32::INFINITY;
            for record in 0..ctx.layout.record_count() {
                for (axis, position) in ctx.layout.crossings(record) {
                    let dist_sq = position.distance_sq(pointer);
                    if dist_sq <= radius_sq && dist_sq < best {
                        best = dist_sq;
                        self.clicked = Some(Crossing { record, axis });
                    }
                }
            }
            debug!("Click selection picked {:?}", self.clicked);

            let winner = self.clicked.map(|c| c.record);
            return ctx.apply(|record| Some(winner == Some(record)));
        }

        let Some(crossing) = self.clicked else {
            // Nothing tracked; still clear records this plot does not show
            return ctx.apply(|_| None);
        };

        let inside = !ctx.layout.is_missing(crossing.axis, crossing.record)
            && ctx.layout.position(crossing.axis, crossing.record).distance_sq(pointer) <= radius_sq;
        if !inside {
            self.clicked = None;
        }

        ctx.apply(|record| (record == crossing.record).then_some(inside))
    }

    /// Rectangle selection: a record is hit when any of its crossings lies
    /// inside `rect`, bounds included.
    pub fn rect(&mut self, ctx: &SelectionContext<'_>, rect: Rect) -> Vec<usize> {
        let changed = ctx.apply(|record| Some(ctx.layout.crossings(record).any(|(_, p)| rect.contains(p))));
        debug!("Rect selection {:?} changed {} records", rect, changed.len());
        changed
    }

    /// Brush selection with a circle of `radius`.
    ///
    /// `Start` tests the brush at `previous`. Later phases sweep it along
    /// `previous..previous + delta` and only add records; nothing is
    /// unhighlighted until the next `Start`.
    pub fn brush(&mut self, ctx: &SelectionContext<'_>, previous: Pos2, delta: Vec2, radius: f32, state: GestureState) -> Vec<usize> {
        let radius_sq = radius * radius;

        let changed = if state == GestureState::Start {
            ctx.apply(|record| {
                Some(ctx.layout.crossings(record).any(|(_, p)| p.distance_sq(previous) <= radius_sq))
            })
        } else {
            let end = previous + delta;
            ctx.apply(|record| {
                ctx.layout
                    .crossings(record)
                    .any(|(_, p)| distance_sq_to_segment(p, previous, end) <= radius_sq)
                    .then_some(true)
            })
        };

        debug!("Brush selection ({:?}) changed {} records", state, changed.len());
        changed
    }
}

/// Squared distance from a point to the segment `a..b`
fn distance_sq_to_segment(point: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let ap = point - a;
    let ab_squared = ab.length_sq();

    if ab_squared == 0.0 {
        return ap.length_sq();
    }

    let t = (ap.dot(ab) / ab_squared).clamp(0.0, 1.0);
    let projection = a + ab * t;
    point.distance_sq(projection)
}
