//! Stateless return and volatility calculations over aligned price series.

pub mod engine;
pub mod error;

pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
