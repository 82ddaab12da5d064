//! Environment variable helpers.

/// Read an environment variable, treating unset, empty, and
/// whitespace-only values as absent.
///
/// Returns the trimmed value.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}
