//! Deterministic enumeration of the discrete allocation space.

pub mod error;
pub mod generator;

pub use error::AllocatorError;
pub use generator::generate_allocations;
