//! Text adapters over analysis results.
//!
//! Nothing here computes statistics; everything reads an
//! [`AnalysisResult`](crate::AnalysisResult) produced by the engine.

mod responder;
mod summary;

pub use responder::{Intent, Responder};
pub use summary::Report;
