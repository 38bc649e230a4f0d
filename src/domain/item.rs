use serde::{Deserialize, Serialize};

/// Canonical news item produced by the normalizer. Immutable once built;
/// either rejected by the dedup index or appended to the sheet.
///
/// `title` is never empty — entries whose title cleans to nothing are
/// dropped before an item is constructed. `link` may be empty when no
/// candidate resolved to an http(s) URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedItem {
    /// "YYYY-MM-DD HH:MM" in KST.
    pub timestamp: String,
    pub title: String,
    pub link: String,
    pub summary: Option<String>,
    pub tag: Option<String>,
}

impl NormalizedItem {
    pub fn new(
        timestamp: impl Into<String>,
        title: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            title: title.into(),
            link: link.into(),
            summary: None,
            tag: None,
        }
    }

    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}
