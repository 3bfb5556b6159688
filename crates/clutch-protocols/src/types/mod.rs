//! Core types for the Clutch analyzer.

mod credential;
mod request;
mod result;

pub use credential::*;
pub use request::*;
pub use result::*;
