//! Absolute/relative URL conversion.

use crate::parse::parse;
use crate::protocol::remove_protocol;
use crate::text::{concatenate_paths, remove_starting_slash};

/// Makes `url` absolute against `parent_url`.
///
/// - Already-absolute input is returned unchanged.
/// - Protocol-relative input (`//host/...`) gets the parent's scheme,
///   defaulting to https.
/// - Anything else is joined against the parent's origin
///   (scheme/credentials/domain/port); a relative path (no leading slash) is
///   joined against the directory of the parent path.
pub fn to_absolute_url(parent_url: &str, url: &str) -> String {
    if parse(url).and_then(|parts| parts.protocol).is_some() {
        return url.to_string();
    }

    let parent = parse(parent_url).unwrap_or_default();
    let protocol = parent.protocol.as_deref().unwrap_or("https");

    if url.starts_with("//") {
        return format!("{protocol}:{url}");
    }

    let mut base = format!("{protocol}://");
    if let Some(credentials) = &parent.credentials {
        base.push_str(credentials);
        base.push('@');
    }
    if let Some(domain) = &parent.domain {
        base.push_str(domain);
    }
    if let Some(port) = &parent.port {
        base.push(':');
        base.push_str(port);
    }

    if !url.starts_with('/') {
        // Relative path: resolve against the directory of the parent path.
        let parent_path = parent.path.as_deref().unwrap_or("");
        if let Some(last_slash) = parent_path.rfind('/') {
            base.push_str(&parent_path[..last_slash]);
        }
    }

    concatenate_paths(&base, url)
}

/// Makes `url` relative to `parent_url`.
///
/// Textual, not structural: the protocol-stripped parent is removed from the
/// protocol-stripped URL as a plain substring (first occurrence), so a parent
/// address that also appears later in the URL, e.g. inside a query parameter,
/// is matched there too. Callers rely on this exact behavior. A URL that does
/// not contain the parent is returned unchanged.
pub fn to_relative_url(parent_url: &str, url: &str) -> String {
    let parent = remove_protocol(parent_url);
    let stripped = remove_protocol(url);

    if !stripped.contains(parent) {
        return url.to_string();
    }

    remove_starting_slash(&stripped.replacen(parent, "", 1)).to_string()
}
