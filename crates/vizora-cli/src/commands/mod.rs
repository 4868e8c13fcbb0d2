//! CLI command implementations.

pub mod analyze;
pub mod ask;
pub mod chart;
