pub mod fetcher;
pub mod registry;

pub use fetcher::FeedFetcher;
pub use registry::SourceRegistry;
