//! In-memory tabular data handed to the insight engine.

mod table;
mod value;

pub use table::{Dataset, Record};
pub use value::Value;
