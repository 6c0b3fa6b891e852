//! Pull memo links out of the listing page HTML.
//!
//! Every `<a href>` is read into an [`Anchor`], kept if its href looks like a
//! memo link and its text is long enough, then made absolute against the
//! site origin. The match is a loose substring test on purpose: anything
//! whose href mentions `memo` or `gc-` is taken, in any case.
//!
//! The `scraper` document is `!Send`, so everything here is synchronous and
//! the parsed tree never outlives a call.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::report::MemoRecord;

/// Substrings that mark an href as a memo link. Compared against the
/// lowercased href.
pub const HREF_PATTERNS: [&str; 2] = ["memo", "gc-"];

/// Titles must be strictly longer than this many characters.
pub const MIN_TITLE_CHARS: usize = 5;

/// An anchor element as far as the filter cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
    pub text: String,
}

/// Every anchor carrying an `href`, in document order.
pub fn anchors(html: &str) -> Vec<Anchor> {
    let document = Html::parse_document(html);
    let Ok(sel) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&sel)
        .filter_map(|element| {
            let href = element.value().attr("href")?;
            Some(Anchor {
                href: href.to_string(),
                text: stripped_text(&element),
            })
        })
        .collect()
}

/// Whether an anchor points at a memo and has a usable title.
pub fn is_memo_link(anchor: &Anchor) -> bool {
    let href = anchor.href.to_lowercase();
    let href_matches = HREF_PATTERNS.iter().any(|p| href.contains(p));
    href_matches && !anchor.text.is_empty() && anchor.text.chars().count() > MIN_TITLE_CHARS
}

/// Prefix site-relative hrefs with `origin`; leave everything else alone.
pub fn normalize_href(href: &str, origin: &str) -> String {
    if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        href.to_string()
    }
}

/// Anchors that pass [`is_memo_link`], as records with absolute URLs.
pub fn memo_records(anchors: Vec<Anchor>, origin: &str) -> impl Iterator<Item = MemoRecord> + '_ {
    anchors
        .into_iter()
        .filter(is_memo_link)
        .map(move |a| MemoRecord::new(a.text, normalize_href(&a.href, origin)))
}

/// Parse `html` and return its memo records in document order.
pub fn extract_memos(html: &str, origin: &str) -> Vec<MemoRecord> {
    let all = anchors(html);
    let total = all.len();
    let memos: Vec<MemoRecord> = memo_records(all, origin).collect();
    debug!(anchors = total, memos = memos.len(), "filtered anchors");
    memos
}

/// Text of every descendant text node, each trimmed, empties dropped,
/// joined with nothing in between.
fn stripped_text(el: &ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}
