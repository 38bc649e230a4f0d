use crate::domain::{LinkStyle, NormalizedItem, SinkSchema};
use crate::errors::CollectorResult;
use crate::sink::dedup::DedupIndex;
use crate::sink::traits::{ValueInput, Worksheet};

/// Owns the sheet side of a run: schema enforcement, bulk append,
/// post-append ordering and cosmetic restyling.
///
/// Append failures are fatal; ordering and styling are best-effort and
/// get reapplied on the next run anyway.
pub struct SinkSynchronizer<W: Worksheet> {
    worksheet: W,
    schema: SinkSchema,
}

impl<W: Worksheet> SinkSynchronizer<W> {
    pub fn new(worksheet: W, schema: SinkSchema) -> Self {
        Self { worksheet, schema }
    }

    pub fn schema(&self) -> &SinkSchema {
        &self.schema
    }

    /// Force the sheet into the configured shape: header row, column
    /// count, frozen header, white background. Safe to rerun.
    pub fn ensure_schema(&self) -> CollectorResult<()> {
        let headers = self.schema.headers();
        if self.worksheet.header_row()? != headers {
            self.worksheet.write_header(&headers)?;
        }
        self.worksheet.trim_columns(self.schema.column_count())?;

        if let Err(e) = self.worksheet.freeze_header() {
            eprintln!("Warning: could not freeze header row: {}", e);
        }
        if let Err(e) = self.worksheet.clear_background(self.schema.column_count()) {
            eprintln!("Warning: could not clear background: {}", e);
        }
        Ok(())
    }

    pub fn load_dedup_index(&self, window: usize) -> DedupIndex {
        DedupIndex::load(&self.worksheet, &self.schema, window)
    }

    /// Write the whole batch in one append, in admitted order. Plain
    /// links go in RAW so nothing gets autoformatted; formula links go
    /// in USER_ENTERED so they evaluate.
    pub fn append_items(&self, items: &[NormalizedItem]) -> CollectorResult<()> {
        let rows: Vec<Vec<String>> = items.iter().map(|i| self.schema.row_for(i)).collect();
        let input = match self.schema.link_style() {
            LinkStyle::Plain => ValueInput::Raw,
            LinkStyle::Hyperlink => ValueInput::UserEntered,
        };
        self.worksheet.append_rows(&rows, input)
    }

    /// Global re-sort of the body by timestamp, ascending. Best-effort.
    pub fn reorder(&self) {
        if let Err(e) = self
            .worksheet
            .sort_body_by_column(self.schema.timestamp_column())
        {
            eprintln!("Warning: could not sort sheet: {}", e);
        }
    }

    /// Reapply the white background to counter conditional formatting
    /// residue. Purely cosmetic, idempotent.
    pub fn restyle(&self) {
        if let Err(e) = self.worksheet.clear_background(self.schema.column_count()) {
            eprintln!("Warning: could not restyle sheet: {}", e);
        }
    }
}
