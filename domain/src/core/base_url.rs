//! Bridge base URL value helpers

use super::error::DomainError;

/// Address the editor extension listens on by default
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Remove every trailing `/` so endpoint paths can be appended verbatim.
pub fn strip_trailing_slashes(url: &str) -> &str {
    url.trim_end_matches('/')
}

/// Validate a user-supplied base URL and return it in canonical form.
///
/// Surrounding whitespace and trailing slashes are removed. Only `http` and
/// `https` schemes are accepted.
pub fn normalize_base_url(raw: &str) -> Result<String, DomainError> {
    let trimmed = strip_trailing_slashes(raw.trim());

    let rest = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| DomainError::InvalidBaseUrl(raw.to_string()))?;

    if rest.is_empty() {
        return Err(DomainError::InvalidBaseUrl(raw.to_string()));
    }

    Ok(trimmed.to_string())
}
