//! Credential helpers.

/// Prefix carried by every Anthropic API key.
pub const CREDENTIAL_PREFIX: &str = "sk-ant-";

/// Cheap format check run before a key is stored or used.
///
/// This does not contact the API; use
/// [`ContentAnalyzer::validate_credential`](crate::ContentAnalyzer::validate_credential)
/// for that.
pub fn looks_like_credential(key: &str) -> bool {
    let key = key.trim();
    key.len() > CREDENTIAL_PREFIX.len() && key.starts_with(CREDENTIAL_PREFIX)
}

/// Render a key for logs and config dumps without exposing it.
pub fn redact_credential(key: &str) -> String {
    let key = key.trim();
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 12 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
