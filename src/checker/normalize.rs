//! URL normalization and validation.

use url::Url;

use crate::error::ValidationError;

/// Database column limit on `urls.name`.
const MAX_URL_LENGTH: usize = 255;

/// Parse a user-supplied string and reduce it to `scheme://host[:port]`.
///
/// Path, query and fragment are discarded; the `url` crate already
/// lowercases scheme and host during parsing, and a scheme-default port
/// parses as absent, so the result is stable: normalizing an
/// already-normalized value yields the same value.
pub fn normalize_url(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if trimmed.len() > MAX_URL_LENGTH {
        return Err(ValidationError::TooLong {
            max: MAX_URL_LENGTH,
        });
    }

    let parsed = Url::parse(trimmed).map_err(|_| ValidationError::Malformed)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ValidationError::UnsupportedScheme);
    }
    let host = parsed.host_str().ok_or(ValidationError::Malformed)?;
    if host.is_empty() {
        return Err(ValidationError::Malformed);
    }

    Ok(match parsed.port() {
        Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
        None => format!("{}://{}", parsed.scheme(), host),
    })
}
