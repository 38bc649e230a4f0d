use chrono::{DateTime, Utc};

/// Raw feed entry as the underlying syndication format exposes it.
/// Lives only for the duration of one feed's processing.
#[derive(Debug, Clone, Default)]
pub struct RawEntry {
    pub title: Option<String>,
    pub id: Option<String>,
    /// The entry's direct link, when the feed provides one.
    pub link: Option<String>,
    /// Every link record the entry carries, in feed order.
    pub links: Vec<String>,
    pub summary: Option<String>,
    pub published: Option<DateTime<Utc>>,
}

impl RawEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_links(mut self, links: Vec<String>) -> Self {
        self.links = links;
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_published(mut self, published: DateTime<Utc>) -> Self {
        self.published = Some(published);
        self
    }
}
