use crate::errors::CollectorResult;

/// How appended cell values are interpreted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueInput {
    /// Stored verbatim, no parsing or autoformatting.
    Raw,
    /// Parsed as if typed in, so formulas evaluate.
    UserEntered,
}

/// Low-level operations on one worksheet tab. The synchronizer and the
/// dedup index are generic over this, so tests run against the
/// in-memory implementation while production talks to Google Sheets.
///
/// Rows and columns are 0-based; the header row is row 0.
#[cfg_attr(test, mockall::automock)]
pub trait Worksheet: Send + Sync {
    /// The current header row; empty when the sheet is blank.
    fn header_row(&self) -> CollectorResult<Vec<String>>;

    fn write_header(&self, headers: &[String]) -> CollectorResult<()>;

    /// All body values of one column, header excluded, top to bottom.
    /// Formula cells come back as their stored formula text.
    fn column_body(&self, column: usize) -> CollectorResult<Vec<String>>;

    fn append_rows(&self, rows: &[Vec<String>], input: ValueInput) -> CollectorResult<()>;

    /// Drop any columns at index `keep` and beyond.
    fn trim_columns(&self, keep: usize) -> CollectorResult<()>;

    fn freeze_header(&self) -> CollectorResult<()>;

    /// Sort the body (rows below the header) by one column, ascending.
    fn sort_body_by_column(&self, column: usize) -> CollectorResult<()>;

    /// Reset the background of the first `columns` columns to white.
    fn clear_background(&self, columns: usize) -> CollectorResult<()>;
}
