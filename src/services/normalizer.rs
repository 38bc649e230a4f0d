use chrono::{DateTime, FixedOffset, Utc};
use scraper::Html;

use crate::domain::{NormalizedItem, RawEntry};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Converts one raw entry into a canonical item, or rejects it.
/// Rejection only happens when the cleaned title is empty; everything
/// else degrades (empty link, fallback timestamp) rather than drops.
pub struct EntryNormalizer;

impl EntryNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, entry: &RawEntry, tag: Option<&str>) -> Option<NormalizedItem> {
        let title = clean_text(entry.title.as_deref().unwrap_or(""));
        if title.is_empty() {
            return None;
        }

        let link = resolve_link(entry);
        let summary = entry
            .summary
            .as_deref()
            .map(strip_tags)
            .filter(|s| !s.is_empty());

        let item = NormalizedItem::new(format_timestamp(entry.published), title, link)
            .with_summary(summary)
            .with_tag(tag.map(|t| t.to_string()));

        Some(item)
    }
}

impl Default for EntryNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse whitespace runs, trim, then decode HTML entities.
/// Applied to titles only, never to URLs.
fn clean_text(s: &str) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    html_escape::decode_html_entities(&collapsed).trim().to_string()
}

/// First http(s) candidate wins: direct link, then the entry id, then
/// each record of the link list. Summary/body text is never inspected.
fn resolve_link(entry: &RawEntry) -> String {
    entry
        .link
        .iter()
        .chain(entry.id.iter())
        .chain(entry.links.iter())
        .map(|c| c.trim())
        .find(|c| c.starts_with("http://") || c.starts_with("https://"))
        .map(|c| c.to_string())
        .unwrap_or_default()
}

/// Drop markup from summary HTML, keeping the text content.
fn strip_tags(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: Vec<&str> = fragment.root_element().text().collect();
    text.join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the publish time in KST (fixed UTC+9, no DST) at minute
/// precision. An absent timestamp falls back to the current time in
/// that zone; a bad timestamp must never fail the whole item.
fn format_timestamp(published: Option<DateTime<Utc>>) -> String {
    let kst = FixedOffset::east_opt(9 * 3600).unwrap();
    let local = published
        .unwrap_or_else(Utc::now)
        .with_timezone(&kst);
    local.format(TIMESTAMP_FORMAT).to_string()
}
