//! Scheme-level helpers.

use once_cell::sync::Lazy;
use regex::Regex;

static SCHEME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z][a-z0-9+.-]*://").unwrap());

static HTTP_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^https?://").unwrap());

/// Strips a leading `scheme://` (any scheme, case-insensitive) if present;
/// otherwise returns the input unchanged.
pub fn remove_protocol(url: &str) -> &str {
    match SCHEME_PREFIX.find(url) {
        Some(m) => &url[m.end()..],
        None => url,
    }
}

/// Whether the URL is scheme-qualified or protocol-relative (`//host`).
pub fn is_absolute_url(url: &str) -> bool {
    SCHEME_PREFIX.is_match(url) || url.starts_with("//")
}

/// Whether the URL uses the http or https scheme.
pub fn is_http_url(url: &str) -> bool {
    HTTP_PREFIX.is_match(url)
}
