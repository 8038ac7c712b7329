//! Utilities for plot views

pub mod colors;
pub mod scale;

// Re-export commonly used items
pub use colors::ColorSet;
pub use scale::{AxisBounds, AxisScale, ExactScale, NiceScale};
