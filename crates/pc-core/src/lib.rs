//! Core functionality for the parallel coordinates plot engine
//!
//! This crate provides the shared abstractions the plot consumes: the
//! read-only data table and the linked per-record selection state that
//! several plot instances can share.

pub mod data;
pub mod sync;

// Re-export commonly used types
pub use data::{DataTable, is_missing};
pub use sync::{LinkedSelection, RecordFlags};
