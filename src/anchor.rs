//! Anchor (fragment) helpers.

/// Returns everything from the first `#` onward, or `None` without one.
/// Multiple anchors come back verbatim as a single string.
pub fn get_url_anchor(url: &str) -> Option<&str> {
    url.find('#').map(|pos| &url[pos..])
}

/// Returns the part of the URL before the first `#`.
pub fn remove_url_anchor(url: &str) -> &str {
    url.find('#').map_or(url, |pos| &url[..pos])
}
