pub mod dedup;
pub mod google;
pub mod memory;
pub mod synchronizer;
pub mod traits;

pub use dedup::DedupIndex;
pub use google::GoogleWorksheet;
pub use memory::InMemoryWorksheet;
pub use synchronizer::SinkSynchronizer;
pub use traits::{ValueInput, Worksheet};
