//! Query-string helpers.

use std::collections::HashMap;

use crate::parse::parse;

/// Decomposes the query string of a URL into name/value pairs.
///
/// Pairs are `&`-separated; a bare name without `=` maps to an empty value.
/// The anchor, if any, is not part of the result. Values are returned as
/// they appear, with no decoding applied.
pub fn extract_url_params(url: &str) -> HashMap<String, String> {
    let query = match parse(url).and_then(|parts| parts.query) {
        Some(query) => query,
        None => return HashMap::new(),
    };

    let mut params = HashMap::new();
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        match pair.split_once('=') {
            Some((name, value)) => params.insert(name.to_string(), value.to_string()),
            None => params.insert(pair.to_string(), String::new()),
        };
    }
    params
}

/// Appends parameters to a URL, keeping any anchor after them.
///
/// Uses `?` for the first parameter when the URL has no query yet, `&`
/// otherwise. Values are appended as given, with no encoding applied.
pub fn add_params_to_url(url: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }

    let (base, anchor) = match url.find('#') {
        Some(pos) => (&url[..pos], &url[pos..]),
        None => (url, ""),
    };

    let mut out = base.to_string();
    let mut separator = if base.contains('?') { '&' } else { '?' };
    for (name, value) in params {
        out.push(separator);
        out.push_str(name);
        out.push('=');
        out.push_str(value);
        separator = '&';
    }
    out.push_str(anchor);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_pairs() {
        let params = extract_url_params("https://site.com/p?a=1&b=two");
        assert_eq!(params.get("a").map(String::as_str), Some("1"));
        assert_eq!(params.get("b").map(String::as_str), Some("two"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn extract_bare_name_and_empty_value() {
        let params = extract_url_params("https://site.com/p?flag&x=");
        assert_eq!(params.get("flag").map(String::as_str), Some(""));
        assert_eq!(params.get("x").map(String::as_str), Some(""));
    }

    #[test]
    fn extract_ignores_anchor() {
        let params = extract_url_params("https://site.com/p?a=1#b=2");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn extract_without_query_is_empty() {
        assert!(extract_url_params("https://site.com/p").is_empty());
        assert!(extract_url_params("https://site.com/p?").is_empty());
    }

    #[test]
    fn add_starts_query_with_question_mark() {
        assert_eq!(
            add_params_to_url("https://site.com/p", &[("a", "1"), ("b", "2")]),
            "https://site.com/p?a=1&b=2"
        );
    }

    #[test]
    fn add_extends_existing_query() {
        assert_eq!(
            add_params_to_url("https://site.com/p?a=1", &[("b", "2")]),
            "https://site.com/p?a=1&b=2"
        );
    }

    #[test]
    fn add_keeps_anchor_last() {
        assert_eq!(
            add_params_to_url("https://site.com/p#frag", &[("a", "1")]),
            "https://site.com/p?a=1#frag"
        );
    }

    #[test]
    fn add_nothing_passes_through() {
        assert_eq!(add_params_to_url("https://site.com/p", &[]), "https://site.com/p");
    }
}
