//! Moodle-site heuristics: domain guessing, address validation, and
//! origin/path comparison.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parse::{is_well_known, parse};
use crate::text::remove_ending_slash;

/// Page-path suffixes that identify a Moodle site, in priority order. The
/// prefix before the first matching suffix is the guessed domain.
const KNOWN_PATH_SUFFIXES: [&str; 6] = [
    "/my/",
    "/index.php",
    "/course/view.php",
    "/login/index.php",
    "/mod/page/view.php",
    "?redirect=0",
];

static SUFFIX_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    KNOWN_PATH_SUFFIXES
        .iter()
        .map(|suffix| Regex::new(&format!("^https?://(.+?){}", regex::escape(suffix))).unwrap())
        .collect()
});

/// RFC 3986 shape with raw spaces forbidden in scheme, authority and path.
/// Query and fragment may still carry them.
static STRICT_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[^:/?#\s]+:)?(?://[^/?#\s]*)?[^?#\s]*(?:\?[^#]*)?(?:#.*)?$").unwrap()
});

/// Guesses the domain (plus any path prefix) of a Moodle site from one of
/// its page URLs.
///
/// The scheme defaults to https when missing. Known page-path suffixes are
/// tried first, in priority order; the prefix before the first matching
/// suffix wins. When no suffix matches, falls back to the parsed domain.
pub fn guess_moodle_domain(url: &str) -> Option<String> {
    let url = ensure_https(url.trim());

    for pattern in SUFFIX_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(&url) {
            return Some(caps[1].to_string());
        }
    }

    tracing::debug!("no known moodle path in {}, falling back to parsed domain", url);
    parse(&url).and_then(|parts| parts.domain)
}

/// Checks that an address has the shape of a Moodle site URL.
///
/// The scheme is optional. Raw spaces anywhere in the scheme, authority or
/// path make the address invalid; empty input is invalid. Pinned well-known
/// sites are always valid.
pub fn is_valid_moodle_url(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }
    if is_well_known(url) {
        return true;
    }
    STRICT_URL.is_match(url)
}

/// Compares two URLs by domain and path only.
///
/// Scheme, port, credentials, query, fragment and character case are all
/// ignored, as is one trailing slash on the path. Pinned well-known sites
/// compare by strict string equality instead.
pub fn same_domain_and_path(url_a: &str, url_b: &str) -> bool {
    let url_a = url_a.trim();
    let url_b = url_b.trim();

    if is_well_known(url_a) || is_well_known(url_b) {
        return url_a == url_b;
    }

    let parts_a = parse(&ensure_https(url_a)).unwrap_or_default();
    let parts_b = parse(&ensure_https(url_b)).unwrap_or_default();

    lowered(parts_a.domain) == lowered(parts_b.domain)
        && normalized_path(parts_a.path) == normalized_path(parts_b.path)
}

/// Prepends `https://` when the scheme delimiter is missing.
fn ensure_https(url: &str) -> String {
    if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

fn lowered(field: Option<String>) -> Option<String> {
    field.map(|s| s.to_lowercase())
}

/// Absent path compares equal to an empty or bare-slash path.
fn normalized_path(path: Option<String>) -> String {
    remove_ending_slash(path.as_deref().unwrap_or("")).to_lowercase()
}
