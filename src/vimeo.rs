//! Vimeo embed detection and rewriting through a site's media proxy.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::concatenate_paths;

/// Connected platform instance, as seen by the URL toolkit.
///
/// Only the two accessors the rewrite needs; the toolkit does not know the
/// concrete site type.
pub trait Site {
    /// Base address of the site, e.g. "https://campus.example.edu".
    fn site_url(&self) -> &str;
    /// Token authenticating the current session against the site.
    fn token(&self) -> &str;
}

static VIMEO_PLAYER_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://player\.vimeo\.com/video/[0-9]+").unwrap());

/// Video id plus the new-format privacy hash carried right after it
/// (`?h=...` or `&h=...`).
static VIMEO_ID_AND_HASH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://player\.vimeo\.com/video/([0-9]+)(?:[?&]+h=([0-9a-zA-Z]*))?").unwrap()
});

/// Legacy form carrying the privacy hash as an extra path segment.
static VIMEO_LEGACY_HASH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://player\.vimeo\.com/video/[0-9]+/([0-9a-zA-Z]+)").unwrap()
});

/// Whether the URL points at the Vimeo embed player (`player.vimeo.com`),
/// as opposed to a regular `vimeo.com` page.
pub fn is_vimeo_video_url(url: &str) -> bool {
    VIMEO_PLAYER_URL.is_match(url)
}

/// Rewrites a Vimeo embed URL to play through the site's own media proxy.
///
/// Returns `None` for anything that is not a Vimeo player URL. The rewritten
/// URL carries the video id and the session token; a privacy hash found in
/// either the new query form or the legacy path form is appended as `&h=`.
pub fn get_vimeo_player_url(url: &str, site: &impl Site) -> Option<String> {
    if !is_vimeo_video_url(url) {
        return None;
    }
    let caps = VIMEO_ID_AND_HASH.captures(url)?;
    let video_id = caps.get(1)?.as_str();

    let mut player_url = concatenate_paths(
        site.site_url(),
        &format!(
            "/media/player/vimeo/wsplayer.php?video={}&token={}",
            video_id,
            site.token()
        ),
    );

    let privacy_hash = caps
        .get(2)
        .map(|m| m.as_str())
        .filter(|hash| !hash.is_empty())
        .map(str::to_string)
        .or_else(|| {
            VIMEO_LEGACY_HASH
                .captures(url)
                .map(|caps| caps[1].to_string())
        });

    if let Some(hash) = privacy_hash {
        player_url.push_str("&h=");
        player_url.push_str(&hash);
    }

    tracing::debug!("rewriting vimeo embed {} through site media proxy", url);

    Some(player_url)
}
