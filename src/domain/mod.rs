pub mod entry;
pub mod item;
pub mod schema;
pub mod source;

pub use entry::RawEntry;
pub use item::NormalizedItem;
pub use schema::{LinkStyle, SheetLayout, SinkSchema};
pub use source::FeedSource;
