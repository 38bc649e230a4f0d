use std::collections::HashSet;

use crate::domain::schema::decode_link;
use crate::domain::{NormalizedItem, SinkSchema};
use crate::sink::traits::Worksheet;

/// In-memory duplicate check, seeded once per run from the sheet's
/// recent history and extended as items are admitted.
///
/// A title match alone rejects, regardless of link: two different links
/// sharing one cleaned title count as the same story. (Observed,
/// intentional behavior — see DESIGN.md for the trade-off.)
pub struct DedupIndex {
    titles: HashSet<String>,
    links: HashSet<String>,
    seen_links: HashSet<String>,
}

impl DedupIndex {
    /// Seed from the last `window` non-empty title and link values of
    /// the sheet. The window is a suffix of what is persisted, not a
    /// time-bounded query; a column read failure seeds an empty set so
    /// that a fresh or unreadable sheet still lets the run proceed.
    pub fn load<W: Worksheet>(worksheet: &W, schema: &SinkSchema, window: usize) -> Self {
        let titles = worksheet
            .column_body(schema.title_column())
            .unwrap_or_default();
        let links = worksheet
            .column_body(schema.link_column())
            .unwrap_or_default();

        Self {
            titles: windowed(titles.iter().map(|t| t.trim().to_string()), window),
            links: windowed(links.iter().map(|l| decode_link(l)), window),
            seen_links: HashSet::new(),
        }
    }

    pub fn empty() -> Self {
        Self {
            titles: HashSet::new(),
            links: HashSet::new(),
            seen_links: HashSet::new(),
        }
    }

    /// True when the item is new. Link checks are skipped for items
    /// without a resolved link.
    pub fn admit(&self, item: &NormalizedItem) -> bool {
        if self.titles.contains(&item.title) {
            return false;
        }
        if !item.link.is_empty()
            && (self.links.contains(&item.link) || self.seen_links.contains(&item.link))
        {
            return false;
        }
        true
    }

    /// Remember an admitted item so no later entry in the same run can
    /// duplicate it, even before anything is written back.
    pub fn record(&mut self, item: &NormalizedItem) {
        self.titles.insert(item.title.clone());
        if !item.link.is_empty() {
            self.links.insert(item.link.clone());
            self.seen_links.insert(item.link.clone());
        }
    }
}

/// Keep only the last `window` non-empty values.
fn windowed(values: impl Iterator<Item = String>, window: usize) -> HashSet<String> {
    let kept: Vec<String> = values.filter(|v| !v.is_empty()).collect();
    let start = kept.len().saturating_sub(window);
    kept[start..].iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LinkStyle, SheetLayout};
    use crate::sink::memory::InMemoryWorksheet;

    fn schema() -> SinkSchema {
        SinkSchema::new(SheetLayout::Basic, LinkStyle::Plain)
    }

    fn item(title: &str, link: &str) -> NormalizedItem {
        NormalizedItem::new("2024-01-01 09:00", title, link)
    }

    fn history(rows: &[(&str, &str)]) -> InMemoryWorksheet {
        let mut grid = vec![vec![
            "일시".to_string(),
            "뉴스제목".to_string(),
            "출처".to_string(),
        ]];
        for (title, link) in rows {
            grid.push(vec![
                "2024-01-01 08:00".to_string(),
                title.to_string(),
                link.to_string(),
            ]);
        }
        InMemoryWorksheet::with_rows(grid)
    }

    #[test]
    fn test_known_title_rejected_fresh_title_admitted() {
        let ws = history(&[("A", "http://h.example/a"), ("B", "http://h.example/b")]);
        let index = DedupIndex::load(&ws, &schema(), 2);

        assert!(!index.admit(&item("A", "http://new.example/1")));
        assert!(index.admit(&item("C", "http://new.example/2")));
    }

    #[test]
    fn test_window_is_a_suffix() {
        // Window of 2 over three history rows: "A" has been evicted.
        let ws = history(&[
            ("A", "http://h.example/a"),
            ("B", "http://h.example/b"),
            ("C", "http://h.example/c"),
        ]);
        let index = DedupIndex::load(&ws, &schema(), 2);

        assert!(index.admit(&item("A", "http://new.example/1")));
        assert!(!index.admit(&item("B", "http://new.example/2")));
        assert!(!index.admit(&item("C", "http://new.example/3")));
    }

    #[test]
    fn test_title_match_alone_rejects_despite_new_link() {
        let ws = history(&[("압구정 재건축 추진", "http://a.example/1")]);
        let index = DedupIndex::load(&ws, &schema(), 2000);

        assert!(!index.admit(&item("압구정 재건축 추진", "http://b.example/2")));
    }

    #[test]
    fn test_known_link_rejects_despite_new_title() {
        let ws = history(&[("A", "http://h.example/a")]);
        let index = DedupIndex::load(&ws, &schema(), 2000);

        assert!(!index.admit(&item("다른 제목", "http://h.example/a")));
    }

    #[test]
    fn test_record_suppresses_within_run_duplicates() {
        let mut index = DedupIndex::empty();
        let first = item("압구정 재건축 추진", "http://a.example/1");
        assert!(index.admit(&first));
        index.record(&first);

        // Same link, different title
        assert!(!index.admit(&item("다른 제목", "http://a.example/1")));
        // Same title, different link
        assert!(!index.admit(&item("압구정 재건축 추진", "http://b.example/2")));
    }

    #[test]
    fn test_empty_link_items_dedup_by_title_only() {
        let mut index = DedupIndex::empty();
        let first = item("링크 없는 기사", "");
        assert!(index.admit(&first));
        index.record(&first);

        assert!(!index.admit(&item("링크 없는 기사", "")));
        assert!(index.admit(&item("또 다른 링크 없는 기사", "")));
    }

    #[test]
    fn test_blank_history_cells_ignored() {
        let ws = history(&[("", ""), ("A", "   ")]);
        let index = DedupIndex::load(&ws, &schema(), 2000);

        assert!(!index.admit(&item("A", "http://new.example/1")));
        assert!(index.admit(&item("B", "http://new.example/2")));
    }

    #[test]
    fn test_hyperlink_history_decoded_before_matching() {
        let ws = history(&[(
            "A",
            "=HYPERLINK(\"http://h.example/a\", \"h.example\")",
        )]);
        let index = DedupIndex::load(&ws, &schema(), 2000);

        assert!(!index.admit(&item("새 제목", "http://h.example/a")));
    }
}
