/// One feed endpoint to poll during a run. Built once by the registry,
/// never mutated or persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSource {
    pub tag: Option<String>,
    pub endpoint: String,
}

impl FeedSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            tag: None,
            endpoint: endpoint.into(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}
