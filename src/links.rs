//! Shared-drive link normalization.
//!
//! Help articles reference media as shared-drive URLs in whatever shape the
//! author pasted into the sheet. These helpers extract the file id and build
//! a canonical link from it. Both functions are total: anything that does not
//! look like a shared-drive link comes back verbatim.

use regex::Regex;
use std::sync::OnceLock;

const DRIVE_BASE: &str = "https://drive.google.com";

static FILE_ID_RE: OnceLock<Regex> = OnceLock::new();
static QUERY_ID_RE: OnceLock<Regex> = OnceLock::new();

/// Matches `/file/d/<id>/`. The trailing slash is required.
fn file_id_re() -> &'static Regex {
    FILE_ID_RE.get_or_init(|| Regex::new(r"/file/d/([^/]+)/").unwrap())
}

/// Matches `id=<id>` anywhere in the URL, stopping at the next `&`.
fn query_id_re() -> &'static Regex {
    QUERY_ID_RE.get_or_init(|| Regex::new(r"id=([^&]+)").unwrap())
}

fn capture_id<'a>(re: &Regex, url: &'a str) -> Option<&'a str> {
    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Convert a shared-drive file URL into its embeddable preview URL.
///
/// Only the `/file/d/<id>/` shape is recognized; every other input is
/// returned unchanged.
///
/// ```
/// use helpdesk::links::to_preview_link;
///
/// assert_eq!(
///     to_preview_link("https://drive.google.com/file/d/ABC123/view?usp=sharing"),
///     "https://drive.google.com/file/d/ABC123/preview"
/// );
/// assert_eq!(to_preview_link("https://example.com/a.png"), "https://example.com/a.png");
/// ```
pub fn to_preview_link(url: &str) -> String {
    match capture_id(file_id_re(), url) {
        Some(id) => format!("{DRIVE_BASE}/file/d/{id}/preview"),
        None => url.to_string(),
    }
}

/// Convert a shared-drive file URL into a direct-view URL.
///
/// Recognizes `/file/d/<id>/` first and falls back to an `id=<id>` query
/// parameter (the `open?id=` and `uc?id=` shapes). Unrecognized input is
/// returned unchanged.
pub fn to_direct_link(url: &str) -> String {
    let id = capture_id(file_id_re(), url).or_else(|| capture_id(query_id_re(), url));
    match id {
        Some(id) => format!("{DRIVE_BASE}/uc?export=view&id={id}"),
        None => url.to_string(),
    }
}
