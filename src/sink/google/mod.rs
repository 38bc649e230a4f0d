pub mod auth;
pub mod worksheet;

pub use worksheet::GoogleWorksheet;
