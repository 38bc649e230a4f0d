use crate::domain::{FeedSource, NormalizedItem, RawEntry};
use crate::errors::CollectorResult;
use crate::services::normalizer::EntryNormalizer;
use crate::sink::dedup::DedupIndex;
use crate::sink::synchronizer::SinkSynchronizer;
use crate::sink::traits::Worksheet;
use crate::sources::{FeedFetcher, SourceRegistry};

/// Single-pass orchestrator: enforce the schema, load the dedup window,
/// walk the sources in registry order, append whatever survived.
///
/// A failing source never stops the remaining ones; a failing bulk
/// append is fatal for the run.
pub struct CollectService<W: Worksheet> {
    synchronizer: SinkSynchronizer<W>,
    registry: SourceRegistry,
    fetcher: FeedFetcher,
    normalizer: EntryNormalizer,
    dedup_window: usize,
}

impl<W: Worksheet> CollectService<W> {
    pub fn new(
        synchronizer: SinkSynchronizer<W>,
        registry: SourceRegistry,
        fetcher: FeedFetcher,
        dedup_window: usize,
    ) -> Self {
        Self {
            synchronizer,
            registry,
            fetcher,
            normalizer: EntryNormalizer::new(),
            dedup_window,
        }
    }

    /// One full fetch-dedupe-append cycle. Returns the inserted count.
    pub fn collect(&self) -> CollectorResult<usize> {
        self.synchronizer.ensure_schema()?;

        let batch = self.gather();
        if !batch.is_empty() {
            self.synchronizer.append_items(&batch)?;
            self.synchronizer.reorder();
            self.synchronizer.restyle();
        }

        Ok(batch.len())
    }

    /// Dry run: gather the batch that a real run would append, without
    /// writing anything.
    pub fn preview(&self) -> Vec<NormalizedItem> {
        self.gather()
    }

    fn gather(&self) -> Vec<NormalizedItem> {
        let mut index = self.synchronizer.load_dedup_index(self.dedup_window);
        let mut batch = Vec::new();

        for source in self.registry.sources() {
            let entries = self.fetcher.fetch(&source);
            self.ingest(&mut index, &source, &entries, &mut batch);
        }

        batch
    }

    fn ingest(
        &self,
        index: &mut DedupIndex,
        source: &FeedSource,
        entries: &[RawEntry],
        batch: &mut Vec<NormalizedItem>,
    ) {
        for entry in entries {
            let Some(item) = self.normalizer.normalize(entry, source.tag.as_deref()) else {
                continue;
            };
            if !index.admit(&item) {
                continue;
            }
            index.record(&item);
            batch.push(item);
        }
    }
}
