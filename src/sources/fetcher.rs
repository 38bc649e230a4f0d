use feed_rs::parser;
use reqwest::blocking::Client;

use crate::domain::{FeedSource, RawEntry};
use crate::errors::{CollectorError, CollectorResult};

/// Retrieves one feed endpoint and parses it into raw entries.
///
/// A failing source yields an empty sequence: malformed feed content or
/// a transport error must never abort the run, only cost us that source.
pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    pub fn fetch(&self, source: &FeedSource) -> Vec<RawEntry> {
        match self.try_fetch(&source.endpoint) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("Error fetching {}: {}", source.endpoint, e);
                Vec::new()
            }
        }
    }

    fn try_fetch(&self, endpoint: &str) -> CollectorResult<Vec<RawEntry>> {
        let response = self.client.get(endpoint).send()?;
        let bytes = response.bytes()?;
        Self::entries_from_bytes(&bytes)
    }

    fn entries_from_bytes(bytes: &[u8]) -> CollectorResult<Vec<RawEntry>> {
        let parsed =
            parser::parse(bytes).map_err(|e| CollectorError::FeedParse(e.to_string()))?;

        let entries = parsed
            .entries
            .into_iter()
            .map(|entry| {
                let links: Vec<String> = entry.links.into_iter().map(|l| l.href).collect();

                RawEntry {
                    title: entry.title.map(|t| t.content),
                    id: Some(entry.id).filter(|id| !id.is_empty()),
                    link: links.first().cloned(),
                    links,
                    summary: entry.summary.map(|t| t.content),
                    published: entry.published.or(entry.updated),
                }
            })
            .collect();

        Ok(entries)
    }
}

impl Default for FeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Google News</title>
    <link>https://news.google.com/</link>
    <description>Search results</description>
    <item>
      <title>&#50517;&#44396;&#51221; &#51116;&#44148;&#52629; &#52628;&#51652;</title>
      <link>http://a.example/1</link>
      <description><![CDATA[<p>재건축 관련 <b>기사</b> 요약</p>]]></description>
      <pubDate>Thu, 28 Dec 2023 03:00:00 +0000</pubDate>
      <guid>http://a.example/1</guid>
    </item>
    <item>
      <title>Untimed story</title>
      <link>http://a.example/2</link>
      <guid>http://a.example/2</guid>
    </item>
  </channel>
</rss>"#;

    const BROKEN_FEED: &[u8] = b"this is not xml at all";

    #[test]
    fn test_entries_parsed_with_links_and_published() {
        let entries = FeedFetcher::entries_from_bytes(SAMPLE_RSS.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert!(first.title.is_some());
        assert_eq!(first.link.as_deref(), Some("http://a.example/1"));
        assert!(!first.links.is_empty());
        assert!(first.published.is_some());
        assert!(first.summary.is_some());
    }

    #[test]
    fn test_entry_without_pubdate_has_no_published() {
        let entries = FeedFetcher::entries_from_bytes(SAMPLE_RSS.as_bytes()).unwrap();
        assert!(entries[1].published.is_none());
    }

    #[test]
    fn test_broken_feed_is_a_parse_error() {
        let err = FeedFetcher::entries_from_bytes(BROKEN_FEED).unwrap_err();
        assert!(matches!(err, CollectorError::FeedParse(_)));
    }

    #[test]
    fn test_fetch_swallows_transport_failure() {
        // Nothing listens on this port; the run must continue regardless.
        let fetcher = FeedFetcher::new();
        let source = crate::domain::FeedSource::new("http://127.0.0.1:9/feed");
        assert!(fetcher.fetch(&source).is_empty());
    }
}
