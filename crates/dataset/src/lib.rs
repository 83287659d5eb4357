//! File I/O and series preparation for the allocation pipeline.
//!
//! This crate owns the boundary with the harvester's per-asset price files
//! (loading and calendar alignment) and with the visualizer's input tables
//! (the persisted allocation and metrics CSVs).

pub mod aligner;
pub mod error;
pub mod loader;
pub mod writer;

pub use aligner::align;
pub use error::DatasetError;
pub use loader::load_price_history;
pub use writer::{write_allocations, write_metrics};
