//! Analysis result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ClassifiedError;

pub const FIELD_CONTENT_ANGLE: &str = "content_angle";
pub const FIELD_HOOK: &str = "hook";
pub const FIELD_WHY_IT_WORKS: &str = "why_it_works";

/// A structured content suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Concrete content idea: format, subject, what makes it unique.
    pub content_angle: String,
    /// Ready-to-use opening line.
    pub hook: String,
    /// Why the audience would care.
    pub why_it_works: String,
}

impl AnalysisResult {
    pub fn new(
        content_angle: impl Into<String>,
        hook: impl Into<String>,
        why_it_works: impl Into<String>,
    ) -> Self {
        Self {
            content_angle: content_angle.into(),
            hook: hook.into(),
            why_it_works: why_it_works.into(),
        }
    }

    /// Build a result from a decoded object.
    ///
    /// All three fields must be present and non-blank; anything else is a
    /// decode failure rather than a partial result. Extra keys are ignored.
    pub fn from_fields(mut fields: BTreeMap<String, String>) -> Result<Self, ClassifiedError> {
        let mut take = |name: &str| -> Result<String, ClassifiedError> {
            match fields.remove(name) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                Some(_) => Err(ClassifiedError::decode(format!("field `{}` is empty", name))),
                None => Err(ClassifiedError::decode(format!("field `{}` is missing", name))),
            }
        };

        Ok(Self {
            content_angle: take(FIELD_CONTENT_ANGLE)?,
            hook: take(FIELD_HOOK)?,
            why_it_works: take(FIELD_WHY_IT_WORKS)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_fields_complete() {
        let result = AnalysisResult::from_fields(fields(&[
            ("content_angle", "a"),
            ("hook", "b"),
            ("why_it_works", "c"),
        ]))
        .unwrap();
        assert_eq!(result, AnalysisResult::new("a", "b", "c"));
    }

    #[test]
    fn test_from_fields_ignores_extra_keys() {
        let result = AnalysisResult::from_fields(fields(&[
            ("content_angle", "a"),
            ("hook", "b"),
            ("why_it_works", "c"),
            ("confidence", "high"),
        ]))
        .unwrap();
        assert_eq!(result.hook, "b");
    }

    #[test]
    fn test_from_fields_missing() {
        let err = AnalysisResult::from_fields(fields(&[("content_angle", "a")])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DecodeFailure);
        assert!(err.message.contains("hook"));
    }

    #[test]
    fn test_from_fields_blank() {
        let err = AnalysisResult::from_fields(fields(&[
            ("content_angle", "a"),
            ("hook", "   "),
            ("why_it_works", "c"),
        ]))
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DecodeFailure);
        assert!(err.message.contains("empty"));
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(AnalysisResult::new("a", "b", "c")).unwrap();
        assert_eq!(json["content_angle"], "a");
        assert_eq!(json["hook"], "b");
        assert_eq!(json["why_it_works"], "c");
    }
}
