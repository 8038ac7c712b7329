//! Plot view implementations

pub mod parallel_coordinates;

// Utilities
pub mod utils;

// Re-exports
pub use parallel_coordinates::{ParallelCoordinatesPlot, PlotConfig};
