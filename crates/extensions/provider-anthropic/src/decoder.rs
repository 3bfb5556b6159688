//! Tolerant decoding of model replies.
//!
//! Models are asked for bare JSON but often wrap it in a fenced code block
//! or surround it with prose. Decoding runs in three steps:
//!
//! 1. strip a leading and trailing fence marker,
//! 2. parse the cleaned text as the exact three-field object,
//! 3. otherwise scan for the first balanced `{...}` that parses as a
//!    JSON object.
//!
//! Every function here is pure.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use clutch_protocols::{
    AnalysisResult, ClassifiedError, FIELD_CONTENT_ANGLE, FIELD_HOOK, FIELD_WHY_IT_WORKS,
};

const FENCE: &str = "```";

/// Decoded object, values kept as raw JSON.
pub type Fields = Map<String, Value>;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ExactFields {
    content_angle: String,
    hook: String,
    why_it_works: String,
}

impl From<ExactFields> for Fields {
    fn from(exact: ExactFields) -> Self {
        Fields::from_iter([
            (FIELD_CONTENT_ANGLE.to_string(), Value::String(exact.content_angle)),
            (FIELD_HOOK.to_string(), Value::String(exact.hook)),
            (FIELD_WHY_IT_WORKS.to_string(), Value::String(exact.why_it_works)),
        ])
    }
}

/// Remove a leading fence (with optional language tag) and a trailing fence.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        let tag_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(rest.len());
        text = &rest[tag_len..];
    }
    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }

    text.trim()
}

/// Decode a model reply into a JSON object.
///
/// Field presence is not checked here beyond the exact-shape fast path;
/// the first balanced object found by the scan is returned whatever keys it
/// holds.
pub fn decode_fields(raw: &str) -> Result<Fields, ClassifiedError> {
    let cleaned = strip_code_fence(raw);

    if let Ok(exact) = serde_json::from_str::<ExactFields>(cleaned) {
        return Ok(exact.into());
    }

    scan_balanced_object(cleaned).ok_or_else(|| {
        ClassifiedError::decode(format!(
            "no JSON object found in model reply ({} chars)",
            raw.len()
        ))
    })
}

/// Decode a model reply and require the three result fields.
pub fn decode_result(raw: &str) -> Result<AnalysisResult, ClassifiedError> {
    AnalysisResult::from_fields(result_fields(decode_fields(raw)?)?)
}

/// Pick the result fields out of a decoded object.
///
/// Other keys may hold any JSON value. A result field that is present but
/// not a string is a decode failure; missing ones are left for
/// [`AnalysisResult::from_fields`] to report.
fn result_fields(mut object: Fields) -> Result<BTreeMap<String, String>, ClassifiedError> {
    let mut fields = BTreeMap::new();
    for name in [FIELD_CONTENT_ANGLE, FIELD_HOOK, FIELD_WHY_IT_WORKS] {
        match object.remove(name) {
            Some(Value::String(value)) => {
                fields.insert(name.to_string(), value);
            }
            Some(other) => {
                return Err(ClassifiedError::decode(format!(
                    "field `{}` is not a string (got {})",
                    name, other
                )));
            }
            None => {}
        }
    }
    Ok(fields)
}

/// First substring between a 0->1 and a 1->0 brace-depth transition that
/// parses as a JSON object.
fn scan_balanced_object(text: &str) -> Option<Fields> {
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, c) in text.char_indices() {
        match c {
            '{' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            // Stray closers outside any object are ignored.
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    if let Ok(fields) = serde_json::from_str::<Fields>(&text[start..=i]) {
                        return Some(fields);
                    }
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
#[path = "decoder_tests.rs"]
mod tests;
