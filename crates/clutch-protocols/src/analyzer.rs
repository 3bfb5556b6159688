//! Analyzer trait definition.

use async_trait::async_trait;

use crate::error::ClassifiedError;
use crate::types::{AnalysisRequest, AnalysisResult};

/// Core trait for content analyzers.
///
/// Callers hold a `dyn ContentAnalyzer` and call it directly; each call is
/// independent and carries no state into the next one.
#[async_trait]
pub trait ContentAnalyzer: Send + Sync {
    /// Returns the analyzer ID.
    fn id(&self) -> &str;

    /// Analyze one page and return a structured suggestion.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ClassifiedError>;

    /// Check a credential against the backend.
    ///
    /// `Ok(false)` means the key was not accepted. Errors are reserved for
    /// failures that say nothing about the key itself, such as a timeout.
    async fn validate_credential(&self, credential: &str) -> Result<bool, ClassifiedError>;
}
