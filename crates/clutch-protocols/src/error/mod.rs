//! Error types for the Clutch protocol layer.

mod classified;
mod kind;

pub use classified::*;
pub use kind::*;
