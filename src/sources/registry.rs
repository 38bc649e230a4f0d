use crate::domain::FeedSource;

/// Keywords polled one-by-one through the Google News search feed.
const KEYWORDS: &[&str] = &[
    "압구정",
    "부동산",
    "재건축",
    "부동산 세금",
    "보유세",
    "부동산정책",
    "부동산규제",
    "대출규제",
    "대출정책",
    "가계부채",
    "기준금리",
    "전세대출",
    "주담대",
    "규제지역",
];

/// Site-restricted searches against the big portals, tagged by portal.
const SITE_QUERIES: &[(&str, &str)] = &[
    (
        "네이버뉴스",
        "site:news.naver.com (압구정 OR 재건축 OR 부동산 OR 규제 OR 주담대)",
    ),
    (
        "다음뉴스",
        "site:news.daum.net (압구정 OR 재건축 OR 부동산 OR 규제 OR 주담대)",
    ),
];

/// Direct publisher RSS feeds (real-estate sections).
const PUBLISHER_FEEDS: &[(&str, &str)] = &[
    ("매일경제", "https://www.mk.co.kr/rss/50300009/"),
    ("한국경제", "https://www.hankyung.com/feed/realestate"),
];

/// Produces the static list of feed endpoints for one run. Purely
/// deterministic; no I/O. Iteration order decides which duplicate
/// across sources wins, so it is part of the contract.
pub struct SourceRegistry;

impl SourceRegistry {
    pub fn new() -> Self {
        Self
    }

    pub fn sources(&self) -> Vec<FeedSource> {
        let mut sources: Vec<FeedSource> = KEYWORDS
            .iter()
            .map(|keyword| FeedSource::new(search_url(keyword)).with_tag(*keyword))
            .collect();

        for (tag, query) in SITE_QUERIES {
            sources.push(FeedSource::new(search_url(query)).with_tag(*tag));
        }

        for (tag, endpoint) in PUBLISHER_FEEDS {
            sources.push(FeedSource::new(*endpoint).with_tag(*tag));
        }

        sources
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn search_url(query: &str) -> String {
    // application/x-www-form-urlencoded: spaces become '+'
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!(
        "https://news.google.com/rss/search?q={}&hl=ko&gl=KR&ceid=KR:ko",
        encoded
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_count() {
        let sources = SourceRegistry::new().sources();
        assert_eq!(
            sources.len(),
            KEYWORDS.len() + SITE_QUERIES.len() + PUBLISHER_FEEDS.len()
        );
    }

    #[test]
    fn test_keyword_sources_come_first_in_order() {
        let sources = SourceRegistry::new().sources();
        assert_eq!(sources[0].tag.as_deref(), Some("압구정"));
        assert!(sources[0]
            .endpoint
            .starts_with("https://news.google.com/rss/search?q="));
    }

    #[test]
    fn test_search_url_is_form_encoded() {
        let url = search_url("부동산 세금");
        assert!(!url.contains(' '), "spaces must be encoded: {}", url);
        assert!(url.contains('+'), "spaces encode as '+': {}", url);
        assert!(url.ends_with("&hl=ko&gl=KR&ceid=KR:ko"));
    }

    #[test]
    fn test_site_queries_keep_or_filter() {
        let sources = SourceRegistry::new().sources();
        let naver = sources
            .iter()
            .find(|s| s.tag.as_deref() == Some("네이버뉴스"))
            .unwrap();
        assert!(naver.endpoint.contains("site%3Anews.naver.com"));
        assert!(naver.endpoint.contains("OR"));
    }

    #[test]
    fn test_publisher_feeds_are_last() {
        let sources = SourceRegistry::new().sources();
        let last = sources.last().unwrap();
        assert_eq!(last.endpoint, "https://www.hankyung.com/feed/realestate");
        assert_eq!(last.tag.as_deref(), Some("한국경제"));
    }

    #[test]
    fn test_sources_are_deterministic() {
        let registry = SourceRegistry::new();
        assert_eq!(registry.sources(), registry.sources());
    }
}
