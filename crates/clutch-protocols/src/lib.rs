//! # Clutch Protocols
//!
//! Shared definitions for the Clutch analyzer.
//! Contains only data types and the analyzer seam - no network code.
//!
//! ## Contents
//!
//! - [`AnalysisRequest`] / [`AnalysisResult`] - what goes in, what comes out
//! - [`ClassifiedError`] / [`ErrorKind`] - the closed failure taxonomy
//! - [`ContentAnalyzer`] - trait implemented by inference backends

pub mod analyzer;
pub mod error;
pub mod types;

pub use analyzer::ContentAnalyzer;
pub use error::{ClassifiedError, ErrorKind};
pub use types::*;
