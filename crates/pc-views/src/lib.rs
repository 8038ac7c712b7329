//! Parallel coordinates plot engine
//!
//! Layout, axis flipping, selection and render synchronisation for a
//! parallel coordinates view over a shared [`pc_core::DataTable`].

pub mod plots;

use thiserror::Error;

pub use plots::parallel_coordinates::{
    AxisState, Crossing, FlipPatch, GestureState, ParallelCoordinatesPlot, PlotConfig, PlotFrame,
    PlotLayout, RecordStyle, Segment, SegmentVertex, VisibleSubset,
};
pub use plots::utils::{AxisBounds, AxisScale, ColorSet, ExactScale, NiceScale};

/// Errors raised while building a plot
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    #[error("Record {record} is out of range (table has {rows} rows)")]
    RecordOutOfRange { record: usize, rows: usize },

    #[error("Record {0} appears more than once in the visible subset")]
    DuplicateRecord(usize),

    #[error("Plot frame {width}x{height} with padding {padding} leaves no drawable area")]
    InvalidFrame { width: f32, height: f32, padding: f32 },

    #[error("Linked selection tracks {linked} records but the table has {rows}")]
    LinkedStateTooSmall { linked: usize, rows: usize },
}
