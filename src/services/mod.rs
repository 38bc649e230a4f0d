pub mod collect_service;
pub mod normalizer;

pub use collect_service::CollectService;
pub use normalizer::EntryNormalizer;
